// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{
    correlation_error::CorrelationError,
    sql::{
        column::Column,
        limit::Limit,
        offset::Offset,
        order::{OrderByElement, Ordering},
    },
};

use super::parameter_context::{CorrelationOptions, ParameterContext};

/// The part of a nested query that a row-limiting policy is allowed to shape: the
/// limit, the offset, and the ordering that makes the limit deterministic. Both kinds
/// of nested builders a correlation strategy may open (an inner `IN` subquery and a
/// lateral subquery) expose this surface.
pub trait NestedQueryBuilder {
    fn set_limit(&mut self, limit: Limit);
    fn set_offset(&mut self, offset: Offset);
    fn order_by(&mut self, element: OrderByElement);
}

/// A caller-supplied policy that bounds a correlated fetch, typically "top-N per outer
/// row". The policy receives whichever nested builder the chosen strategy opened, along
/// with the parameter context and option bag of the correlation site (passed through
/// verbatim; a policy that binds named parameters reads and writes them here).
///
/// Errors raised by a policy propagate to the `correlate` caller unchanged.
pub trait Limiter {
    fn apply(
        &self,
        parameters: &mut ParameterContext,
        options: &CorrelationOptions,
        builder: &mut dyn NestedQueryBuilder,
    ) -> Result<(), CorrelationError>;
}

/// The standard row-limiting policy: a fixed limit, an optional offset, and order-by
/// elements applied in the given sequence.
#[derive(Debug, Clone)]
pub struct RowLimiter {
    limit: i64,
    offset: Option<i64>,
    order_by: Vec<OrderByElement>,
}

impl RowLimiter {
    pub fn new(limit: i64) -> Self {
        Self {
            limit,
            offset: None,
            order_by: Vec::new(),
        }
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_order_by(mut self, column: Column, ordering: Ordering) -> Self {
        self.order_by.push(OrderByElement::new(column, ordering));
        self
    }
}

impl Limiter for RowLimiter {
    fn apply(
        &self,
        _parameters: &mut ParameterContext,
        _options: &CorrelationOptions,
        builder: &mut dyn NestedQueryBuilder,
    ) -> Result<(), CorrelationError> {
        for element in &self.order_by {
            builder.order_by(element.clone());
        }
        builder.set_limit(Limit(self.limit));
        if let Some(offset) = self.offset {
            builder.set_offset(Offset(offset));
        }
        Ok(())
    }
}
