// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::correlation_error::CorrelationError;

use super::{
    context::CorrelationContext, nested_builder::NestedBuilder,
    outer_query_builder::OuterQueryBuilder,
};

/// The result of emitting a correlated join: the join-condition target handed back to
/// the caller, and whatever nested builder the strategy left open.
pub(crate) struct CorrelatedJoin<B: OuterQueryBuilder> {
    pub join_target: B::JoinTarget,
    pub nested: NestedBuilder<B>,
}

/// A strategy for emitting a correlated join through an [OuterQueryBuilder].
pub(crate) trait CorrelationStrategy<B: OuterQueryBuilder> {
    /// A unique identifier for this strategy (for debugging purposes)
    fn id(&self) -> &'static str;

    /// Returns true if this strategy can emit a construct that is valid for the given
    /// correlation context on the builder's dialect.
    ///
    /// The strategies are checked in a fixed order (cheapest construct first), so
    /// `suitable` only encodes validity, not preference.
    fn suitable(&self, context: &CorrelationContext<'_, B>) -> bool;

    /// Emit the correlated join for the given context.
    fn correlate(
        &self,
        context: CorrelationContext<'_, B>,
    ) -> Result<CorrelatedJoin<B>, CorrelationError>;
}
