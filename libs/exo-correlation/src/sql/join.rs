// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::{
    expression_builder::ExpressionBuilder, predicate::ConcretePredicate,
    sql_builder::SQLBuilder, table::Table,
};

/// Represents a join between two tables. Currently, supports only left join, plain or
/// lateral.
#[derive(Debug, PartialEq)]
pub struct LeftJoin {
    /// The left table in the join such as `concerts`.
    left: Box<Table>,
    /// The right table in the join such as `venues`. For a lateral join, a subselect
    /// that may refer to columns of the left side.
    right: Box<Table>,
    /// The join predicate such as `concerts.venue_id = venues.id`.
    predicate: ConcretePredicate,
    /// Whether the right side is joined with the `LATERAL` keyword.
    lateral: bool,
}

impl LeftJoin {
    pub fn new(left: Table, right: Table, predicate: ConcretePredicate) -> Self {
        LeftJoin {
            left: Box::new(left),
            right: Box::new(right),
            predicate,
            lateral: false,
        }
    }

    pub fn lateral(left: Table, right: Table, predicate: ConcretePredicate) -> Self {
        LeftJoin {
            lateral: true,
            ..LeftJoin::new(left, right, predicate)
        }
    }

    pub fn left(&self) -> &Table {
        &self.left
    }
}

impl ExpressionBuilder for LeftJoin {
    /// Build expression of the form `<left> LEFT JOIN [LATERAL ]<right> ON <predicate>`.
    fn build(&self, builder: &mut SQLBuilder) {
        self.left.build(builder);
        builder.push_str(" LEFT JOIN ");
        if self.lateral {
            builder.push_str("LATERAL ");
        }
        self.right.build(builder);
        builder.push_str(" ON ");
        self.predicate.build(builder);
    }
}
