// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use tracing::debug;

use crate::correlation_error::CorrelationError;

use super::{
    context::CorrelationContext,
    correlation_strategy::{CorrelatedJoin, CorrelationStrategy},
    lateral_join_strategy::LateralJoinStrategy,
    outer_query_builder::OuterQueryBuilder,
    plain_join_strategy::PlainJoinStrategy,
    subquery_with_in_predicate_strategy::SubqueryWithInPredicateStrategy,
};

/// Chain of correlation strategies, checked in order with the cheapest construct first.
pub(crate) struct CorrelationStrategyChain<'s, B: OuterQueryBuilder> {
    strategies: Vec<&'s dyn CorrelationStrategy<B>>,
}

impl<'s, B: OuterQueryBuilder> CorrelationStrategyChain<'s, B> {
    pub fn new(strategies: Vec<&'s dyn CorrelationStrategy<B>>) -> Self {
        Self { strategies }
    }

    /// Find the first strategy suitable for the given correlation context and emit the
    /// correlated join through it.
    ///
    /// No strategy being suitable means a limiter was requested but the dialect can
    /// express neither of the limited constructs; that is an
    /// [CorrelationError::UnsupportedLimitedCorrelation] naming the attribute path.
    pub fn correlate(
        &self,
        context: CorrelationContext<'_, B>,
    ) -> Result<CorrelatedJoin<B>, CorrelationError> {
        let strategy = self
            .strategies
            .iter()
            .find(|strategy| strategy.suitable(&context))
            .ok_or_else(|| CorrelationError::UnsupportedLimitedCorrelation {
                attribute_path: context.attribute_path.to_owned(),
            })?;

        debug!("Using correlation strategy: {}", strategy.id());

        strategy.correlate(context)
    }
}

impl<B: OuterQueryBuilder> Default for CorrelationStrategyChain<'_, B> {
    fn default() -> Self {
        Self::new(vec![
            &PlainJoinStrategy {},
            &LateralJoinStrategy {},
            &SubqueryWithInPredicateStrategy {},
        ])
    }
}
