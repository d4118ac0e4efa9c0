// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::{
    column::Column, expression_builder::ExpressionBuilder, select::Select,
    sql_builder::SQLBuilder,
};

/// A predicate over concrete columns, ready to be rendered into a `ON` or `WHERE`
/// clause.
#[derive(Debug, PartialEq)]
pub enum ConcretePredicate {
    True,
    Eq(Column, Column),
    /// A membership predicate such as `"c_outer"."id" IN (SELECT ...)`
    In(Column, Box<Select>),
    And(Box<ConcretePredicate>, Box<ConcretePredicate>),
}

impl ConcretePredicate {
    /// Logical and of two predicates, collapsing the trivial `True` cases.
    pub fn and(lhs: ConcretePredicate, rhs: ConcretePredicate) -> ConcretePredicate {
        match (lhs, rhs) {
            (ConcretePredicate::True, rhs) => rhs,
            (lhs, ConcretePredicate::True) => lhs,
            (lhs, rhs) => ConcretePredicate::And(Box::new(lhs), Box::new(rhs)),
        }
    }
}

impl ExpressionBuilder for ConcretePredicate {
    fn build(&self, builder: &mut SQLBuilder) {
        match self {
            ConcretePredicate::True => builder.push_str("TRUE"),
            ConcretePredicate::Eq(lhs, rhs) => {
                lhs.build(builder);
                builder.push_str(" = ");
                rhs.build(builder);
            }
            ConcretePredicate::In(column, select) => {
                column.build(builder);
                builder.push_str(" IN (");
                select.build(builder);
                builder.push(')');
            }
            ConcretePredicate::And(lhs, rhs) => {
                lhs.build(builder);
                builder.push_str(" AND ");
                rhs.build(builder);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_predicate() {
        let predicate = ConcretePredicate::Eq(
            Column::physical("c", "venue_id"),
            Column::physical("v", "id"),
        );

        assert_binding!(predicate.to_sql(), r#""c"."venue_id" = "v"."id""#);
    }

    #[test]
    fn and_collapses_true() {
        let lhs = ConcretePredicate::True;
        let rhs = ConcretePredicate::Eq(
            Column::physical("c", "venue_id"),
            Column::physical("v", "id"),
        );

        let combined = ConcretePredicate::and(lhs, rhs);
        assert_binding!(combined.to_sql(), r#""c"."venue_id" = "v"."id""#);
    }
}
