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

/// Strategy that emulates a row-limited correlation with a membership subquery, for
/// dialects without a lateral join construct.
///
/// The entity is joined under the *external* alias, and an inner subquery selecting the
/// same entity under the *correlation* alias filters the joined rows through an `IN`
/// predicate carrying the limit. For venues with their three most recent concerts,
/// this produces a statement like:
///
/// ```sql
/// SELECT ... FROM "venues" AS "v" LEFT JOIN "concerts" AS "c_outer"
///     ON "c_outer"."venue_id" = "v"."id" AND "c_outer"."id" IN (
///         SELECT "c"."id" FROM "concerts" AS "c"
///         ORDER BY "c"."start_time" DESC LIMIT $1
///     )
/// ```
///
/// This emulation is only correct if the dialect allows `LIMIT`-like constructs inside
/// quantified predicate subqueries; some dialects (MySQL among them) reject it, so that
/// capability is a hard pre-condition rather than something to discover at execution
/// time.
///
/// Pre-conditions:
/// - A limiter is present
/// - The dialect supports no lateral joins
/// - The dialect supports `LIMIT` inside quantified predicate subqueries
///
/// The inner subquery opens two scopes (the membership predicate and the subquery
/// itself); both stay open until the correlation is finished and are closed in that
/// order.
pub(crate) struct SubqueryWithInPredicateStrategy {}

impl<B: OuterQueryBuilder> CorrelationStrategy<B> for SubqueryWithInPredicateStrategy {
    fn id(&self) -> &'static str {
        "SubqueryWithInPredicateStrategy"
    }

    fn suitable(&self, context: &CorrelationContext<'_, B>) -> bool {
        context.limiter.is_some()
            && !context.dialect().supports_lateral_join()
            && context
                .dialect()
                .supports_limit_in_quantified_predicate_subquery()
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

        let mut join_target =
            query_builder.left_join(anchor, entity, correlation_external_alias)?;

        let mut subquery = query_builder.correlated_in_subquery(
            &mut join_target,
            correlation_external_alias,
            entity,
            correlation_alias,
        )?;

        if let Some(limiter) = limiter {
            limiter.apply(parameters, options, &mut subquery)?;
        }

        Ok(CorrelatedJoin {
            join_target,
            nested: NestedBuilder::InnerSubquery(subquery),
        })
    }
}
