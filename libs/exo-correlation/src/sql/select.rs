// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::{
    column::Column, expression_builder::ExpressionBuilder, limit::Limit, offset::Offset,
    order::OrderBy, predicate::ConcretePredicate, sql_builder::SQLBuilder, table::Table,
};

/// A select statement
#[derive(Debug, PartialEq)]
pub struct Select {
    /// The table to select from
    pub table: Table,
    /// The columns to select
    pub columns: Vec<Column>,
    /// The predicate to filter the rows
    pub predicate: ConcretePredicate,
    /// The order by clause
    pub order_by: Option<OrderBy>,
    /// The limit clause
    pub limit: Option<Limit>,
    /// The offset clause
    pub offset: Option<Offset>,
}

impl ExpressionBuilder for Select {
    fn build(&self, builder: &mut SQLBuilder) {
        builder.push_str("SELECT ");
        builder.push_elems(&self.columns, ", ");

        builder.push_str(" FROM ");
        self.table.build(builder);

        // Avoid correct, but inelegant "WHERE TRUE" clause
        if self.predicate != ConcretePredicate::True {
            builder.push_str(" WHERE ");
            self.predicate.build(builder);
        }
        if let Some(order_by) = &self.order_by {
            builder.push_space();
            order_by.build(builder);
        }
        if let Some(limit) = &self.limit {
            builder.push_space();
            limit.build(builder);
        }
        if let Some(offset) = &self.offset {
            builder.push_space();
            offset.build(builder);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::sql::order::{OrderByElement, Ordering};

    use super::*;

    #[test]
    fn predicated_select() {
        let select = Select {
            table: Table::Entity {
                table: "concerts".to_string(),
                alias: "c".to_string(),
            },
            columns: vec![Column::physical("c", "id")],
            predicate: ConcretePredicate::Eq(
                Column::physical("c", "venue_id"),
                Column::physical("v", "id"),
            ),
            order_by: None,
            limit: None,
            offset: None,
        };

        assert_binding!(
            select.to_sql(),
            r#"SELECT "c"."id" FROM "concerts" AS "c" WHERE "c"."venue_id" = "v"."id""#
        );
    }

    #[test]
    fn clause_ordering() {
        let select = Select {
            table: Table::Entity {
                table: "concerts".to_string(),
                alias: "c".to_string(),
            },
            columns: vec![Column::Star(Some("c".to_string()))],
            predicate: ConcretePredicate::True,
            order_by: Some(OrderBy(vec![OrderByElement::new(
                Column::physical("c", "start_time"),
                Ordering::Desc,
            )])),
            limit: Some(Limit(3)),
            offset: Some(Offset(6)),
        };

        assert_binding!(
            select.to_sql(),
            r#"SELECT "c".* FROM "concerts" AS "c" ORDER BY "c"."start_time" DESC LIMIT $1 OFFSET $2"#,
            3i64,
            6i64
        );
    }
}
