// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{
    asql::limiter::NestedQueryBuilder,
    sql::{
        column::Column,
        limit::Limit,
        offset::Offset,
        order::{OrderBy, OrderByElement},
        select::Select,
    },
};

/// An inner subquery opened behind a membership (`IN`) predicate on a join condition.
/// Held open while the limiting policy shapes it; when closed, the owning
/// [EntityQueryBuilder](super::EntityQueryBuilder) installs
/// `<membership_column> IN (<select>)` onto the join.
pub struct SubqueryBuilder {
    /// The join whose condition receives the membership predicate
    pub(super) join_index: usize,
    /// The outer-side column of the membership predicate (the entity id under the
    /// external alias)
    pub(super) membership_column: Column,
    pub(super) select: Select,
    /// Set when the membership-predicate scope is closed; the subquery scope must not
    /// close before it
    pub(super) predicate_closed: bool,
}

impl NestedQueryBuilder for SubqueryBuilder {
    fn set_limit(&mut self, limit: Limit) {
        self.select.limit = Some(limit);
    }

    fn set_offset(&mut self, offset: Offset) {
        self.select.offset = Some(offset);
    }

    fn order_by(&mut self, element: OrderByElement) {
        match &mut self.select.order_by {
            Some(order_by) => order_by.0.push(element),
            None => self.select.order_by = Some(OrderBy(vec![element])),
        }
    }
}
