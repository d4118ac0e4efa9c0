// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

/// The core idea in this library is that of [CorrelatedJoinBuilder], which turns the
/// intention "for each row of the outer query, also fetch a related set of rows" into
/// a concrete SQL construct. The caller states *what* it wants (an entity to correlate,
/// aliases to bind it under, and optionally a row-limiting policy); the library decides
/// *how* to express it against the target database: a plain left join, a left join
/// combined with a row-limited `IN` subquery, or a lateral join. The decision depends
/// on whether a [Limiter] is present and on what the [Dialect] reports it can do.
///
/// The correlated join is emitted through an [OuterQueryBuilder], the contract this
/// library consumes rather than owns. Any query builder that can emit left joins,
/// correlated `IN` subqueries, and lateral entity subqueries can be driven by a
/// [CorrelatedJoinBuilder]; the crate ships [EntityQueryBuilder] as a reference
/// implementation that assembles the lower-level SQL primitives also found here.
///
/// A [CorrelatedJoinBuilder] is created per correlation site and lives exactly as long
/// as the construction of that site: `correlate` may be called once (a second call is
/// a programmer error), and `finish` must be called once the outer construction is
/// complete so that any nested subquery scope the chosen strategy opened is closed.
#[macro_use]
mod sql;
mod asql;
mod builder;
mod transform;

pub mod correlation_error;

pub use asql::{
    entity::{EntityRef, EntityType},
    limiter::{Limiter, NestedQueryBuilder, RowLimiter},
    parameter_context::{CorrelationOptions, ParameterContext},
};
pub use builder::{EntityQueryBuilder, JoinTarget, LateralBuilder, SubqueryBuilder};
pub use correlation_error::CorrelationError;
pub use sql::{
    SQLParam,
    column::Column,
    dialect::{Dialect, LateralStyle},
    expression_builder::ExpressionBuilder,
    join::LeftJoin,
    limit::Limit,
    offset::Offset,
    order::{OrderBy, OrderByElement, Ordering},
    predicate::ConcretePredicate,
    select::Select,
    sql_builder::SQLBuilder,
    table::Table,
};
pub use transform::correlation::{
    correlated_join_builder::CorrelatedJoinBuilder, outer_query_builder::OuterQueryBuilder,
};
