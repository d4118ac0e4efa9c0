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

/// Strategy that uses a lateral left outer join for a row-limited correlation.
///
/// Suitable for: correlations with a row-limiting policy, on dialects with a lateral
/// join construct. A lateral subquery may refer to columns of the outer row, so the
/// database evaluates "top-N per outer row" natively and correctly.
///
/// Pre-conditions:
/// - A limiter is present
/// - The dialect supports lateral joins
///
/// The entity subquery is bound in the outer query under the external alias, while the
/// entity inside it is bound under the correlation alias. For venues with their three
/// most recent concerts, this produces a statement like:
///
/// ```sql
/// SELECT ... FROM "venues" AS "v" LEFT JOIN LATERAL (
///     SELECT "c".* FROM "concerts" AS "c"
///     WHERE "c"."venue_id" = "v"."id"
///     ORDER BY "c"."start_time" DESC LIMIT $1
/// ) AS "c_outer" ON TRUE
/// ```
///
/// The limiter shapes the subquery (the `ORDER BY`/`LIMIT` part) before `correlate`
/// returns; the subquery stays open until the correlation is finished.
pub(crate) struct LateralJoinStrategy {}

impl<B: OuterQueryBuilder> CorrelationStrategy<B> for LateralJoinStrategy {
    fn id(&self) -> &'static str {
        "LateralJoinStrategy"
    }

    fn suitable(&self, context: &CorrelationContext<'_, B>) -> bool {
        context.limiter.is_some() && context.dialect().supports_lateral_join()
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
            correlation_external_alias,
            limiter,
            parameters,
            options,
            ..
        } = context;

        let (join_target, mut lateral) = query_builder.left_join_lateral_entity_subquery(
            anchor,
            entity,
            correlation_external_alias,
            correlation_alias,
        )?;

        if let Some(limiter) = limiter {
            limiter.apply(parameters, options, &mut lateral)?;
        }

        Ok(CorrelatedJoin {
            join_target,
            nested: NestedBuilder::LateralCte(lateral),
        })
    }
}
