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
    context::CorrelationContext,
    correlation_strategy::{CorrelatedJoin, CorrelationStrategy},
    nested_builder::NestedBuilder,
    outer_query_builder::OuterQueryBuilder,
};

/// Strategy that uses a plain left outer join.
///
/// Suitable for: correlations without a row-limiting policy, on any dialect.
///
/// Pre-conditions:
/// - No limiter
///
/// The correlated entity is bound directly under the correlation alias, so a query
/// fetching venues with their concerts produces a statement like:
///
/// ```sql
/// SELECT ... FROM "venues" AS "v" LEFT JOIN "concerts" AS "c" ON "c"."venue_id" = "v"."id"
/// ```
///
/// No nested builder is opened; finishing the correlation is a no-op.
pub(crate) struct PlainJoinStrategy {}

impl<B: OuterQueryBuilder> CorrelationStrategy<B> for PlainJoinStrategy {
    fn id(&self) -> &'static str {
        "PlainJoinStrategy"
    }

    fn suitable(&self, context: &CorrelationContext<'_, B>) -> bool {
        context.limiter.is_none()
    }

    fn correlate(
        &self,
        context: CorrelationContext<'_, B>,
    ) -> Result<CorrelatedJoin<B>, CorrelationError> {
        let CorrelationContext {
            entity,
            query_builder,
            anchor,
            correlation_alias,
            ..
        } = context;

        let join_target = query_builder.left_join(anchor, entity, correlation_alias)?;

        Ok(CorrelatedJoin {
            join_target,
            nested: NestedBuilder::None,
        })
    }
}
