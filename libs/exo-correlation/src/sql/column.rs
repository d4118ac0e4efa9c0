// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::{expression_builder::ExpressionBuilder, sql_builder::SQLBuilder};

/// A column in a query, referring to its table (or subselect) through an alias. Aliases
/// are used instead of physical table references because a correlated construct may
/// bind the same entity under two names: once in the outer query and once inside the
/// nested subquery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    /// A column such as `"concerts"."venue_id"` expressed as `<table_alias>.<column>`
    Physical { table_alias: String, column: String },
    /// A `*` or `<table_alias>.*` projection
    Star(Option<String>),
}

impl Column {
    pub fn physical(table_alias: impl Into<String>, column: impl Into<String>) -> Self {
        Column::Physical {
            table_alias: table_alias.into(),
            column: column.into(),
        }
    }
}

impl ExpressionBuilder for Column {
    fn build(&self, builder: &mut SQLBuilder) {
        match self {
            Column::Physical {
                table_alias,
                column,
            } => builder.push_column(table_alias, column),
            Column::Star(table_alias) => {
                if let Some(table_alias) = table_alias {
                    builder.push_identifier(table_alias);
                    builder.push('.');
                }
                builder.push('*');
            }
        }
    }
}
