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
        limit::Limit,
        offset::Offset,
        order::{OrderBy, OrderByElement},
        select::Select,
    },
};

/// A lateral entity subquery under construction. Held open while the limiting policy
/// shapes it; when closed, the owning [EntityQueryBuilder](super::EntityQueryBuilder)
/// installs the subquery as the right-hand side of its lateral join, bound under the
/// external alias.
pub struct LateralBuilder {
    pub(super) join_index: usize,
    /// The name the subquery is bound to in the outer query
    pub(super) external_alias: String,
    pub(super) select: Select,
}

impl NestedQueryBuilder for LateralBuilder {
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
