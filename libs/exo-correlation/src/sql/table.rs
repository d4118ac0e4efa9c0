// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::{
    expression_builder::ExpressionBuilder, join::LeftJoin, select::Select,
    sql_builder::SQLBuilder,
};

/// A table-like concept that can be used in place of `SELECT FROM <table-query> ...`.
#[derive(Debug, PartialEq)]
pub enum Table {
    /// An entity's physical table bound under an alias, such as `"concerts" AS "c"`.
    Entity { table: String, alias: String },
    /// A join between two tables such as
    /// `concerts LEFT JOIN venues ON concerts.venue_id = venues.id`.
    Join(Box<LeftJoin>),
    /// A sub-select such as `(SELECT * FROM concerts) AS "c_outer"`.
    SubSelect { select: Box<Select>, alias: String },
}

impl ExpressionBuilder for Table {
    fn build(&self, builder: &mut SQLBuilder) {
        match self {
            Table::Entity { table, alias } => {
                builder.push_identifier(table);
                // Skip the unnecessary aliasing like `SELECT * FROM concerts AS concerts`
                if table != alias {
                    builder.push_str(" AS ");
                    builder.push_identifier(alias);
                }
            }
            Table::Join(join) => join.build(builder),
            Table::SubSelect { select, alias } => {
                builder.push('(');
                select.build(builder);
                builder.push(')');
                builder.push_str(" AS ");
                builder.push_identifier(alias);
            }
        }
    }
}
