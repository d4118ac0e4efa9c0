// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{
    asql::{entity::EntityRef, limiter::NestedQueryBuilder},
    correlation_error::CorrelationError,
    sql::dialect::Dialect,
};

/// The contract a query builder must offer so that a
/// [CorrelatedJoinBuilder](super::correlated_join_builder::CorrelatedJoinBuilder) can
/// drive it. The correlated-join machinery consumes this contract; it does not care how
/// the builder represents joins internally, only that it can emit the three constructs
/// below and later close the nested scopes it opened.
///
/// The crate ships [EntityQueryBuilder](crate::EntityQueryBuilder) as a reference
/// implementation.
pub trait OuterQueryBuilder {
    /// A handle to the join condition of an emitted join, through which the caller
    /// attaches further conditions.
    type JoinTarget;
    /// An inner subquery opened behind a membership (`IN`) predicate.
    type Subquery: NestedQueryBuilder;
    /// A lateral entity subquery.
    type Lateral: NestedQueryBuilder;

    /// The capability flags of the backend this builder targets.
    fn dialect(&self) -> &Dialect;

    /// Emit a left outer join from `join_base` to the entity, bound under `alias`.
    fn left_join(
        &mut self,
        join_base: &str,
        entity: &EntityRef,
        alias: &str,
    ) -> Result<Self::JoinTarget, CorrelationError>;

    /// Open an inner subquery selecting from the entity under `correlation_alias`,
    /// correlated back to `external_alias` through an `IN` predicate on the join
    /// condition of `target`. The predicate is installed when the subquery is closed.
    fn correlated_in_subquery(
        &mut self,
        target: &mut Self::JoinTarget,
        external_alias: &str,
        entity: &EntityRef,
        correlation_alias: &str,
    ) -> Result<Self::Subquery, CorrelationError>;

    /// Emit a lateral left outer join against an entity subquery. The subquery is
    /// outer-visible under `external_alias` and its entity is inner-visible under
    /// `correlation_alias`.
    fn left_join_lateral_entity_subquery(
        &mut self,
        join_base: &str,
        entity: &EntityRef,
        external_alias: &str,
        correlation_alias: &str,
    ) -> Result<(Self::JoinTarget, Self::Lateral), CorrelationError>;

    /// Close the membership-predicate scope of an inner subquery. Must precede
    /// [end_subquery](Self::end_subquery) for the same subquery.
    fn end_in_predicate(&mut self, subquery: &mut Self::Subquery);

    /// Close an inner subquery scope.
    fn end_subquery(&mut self, subquery: Self::Subquery);

    /// Close a lateral subquery scope.
    fn end_lateral(&mut self, lateral: Self::Lateral);
}
