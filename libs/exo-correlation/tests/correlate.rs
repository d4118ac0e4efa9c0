// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! End-to-end scenarios driving a [CorrelatedJoinBuilder] against the reference
//! [EntityQueryBuilder] and asserting the rendered SQL.

use std::sync::Arc;

use exo_correlation::{
    Column, ConcretePredicate, CorrelatedJoinBuilder, CorrelationError, CorrelationOptions,
    Dialect, EntityQueryBuilder, EntityType, ExpressionBuilder, Ordering, ParameterContext,
    RowLimiter, SQLParam,
};

fn venue() -> EntityType {
    EntityType::new("Venue", "venues")
}

fn concert() -> EntityType {
    EntityType::new("Concert", "concerts")
}

fn query_builder(dialect: Dialect) -> EntityQueryBuilder {
    let mut builder = EntityQueryBuilder::new(dialect, venue(), "v");
    builder.register_entity(concert());
    builder
}

fn assert_i64_params(params: &[Arc<dyn SQLParam>], expected: &[i64]) {
    assert_eq!(params.len(), expected.len(), "Parameter count mismatch");
    for (param, expected) in params.iter().zip(expected) {
        assert!(
            SQLParam::eq(param.as_ref(), expected),
            "Parameter mismatch: {:?} vs {:?}",
            param,
            expected
        );
    }
}

#[test]
fn unlimited_correlation_uses_plain_join() {
    let mut parameters = ParameterContext::new();
    let options = CorrelationOptions::new();
    let mut builder = query_builder(Dialect::postgres());

    let mut correlation = CorrelatedJoinBuilder::new(
        &mut parameters,
        &options,
        &mut builder,
        "v",
        "c",
        "c_outer",
        "Venue.concerts",
        None,
    );

    let target = correlation.correlate("Concert").unwrap();
    correlation.query_builder_mut().add_join_condition(
        &target,
        ConcretePredicate::Eq(
            Column::physical("c", "venue_id"),
            Column::physical("v", "id"),
        ),
    );
    correlation.finish();

    let (sql, params) = builder.into_select(vec![Column::Star(None)]).to_sql();
    assert_eq!(
        sql,
        r#"SELECT * FROM "venues" AS "v" LEFT JOIN "concerts" AS "c" ON "c"."venue_id" = "v"."id""#
    );
    assert!(params.is_empty());
}

#[test]
fn limited_correlation_on_lateral_dialect() {
    let mut parameters = ParameterContext::new();
    let options = CorrelationOptions::new();
    let mut builder = query_builder(Dialect::postgres());
    let limiter =
        RowLimiter::new(3).with_order_by(Column::physical("c", "start_time"), Ordering::Desc);

    let mut correlation = CorrelatedJoinBuilder::new(
        &mut parameters,
        &options,
        &mut builder,
        "v",
        "c",
        "c_outer",
        "Venue.concerts",
        Some(&limiter),
    );

    let target = correlation.correlate("Concert").unwrap();
    correlation.query_builder_mut().add_join_condition(
        &target,
        ConcretePredicate::Eq(
            Column::physical("c", "venue_id"),
            Column::physical("v", "id"),
        ),
    );
    correlation.finish();

    let (sql, params) = builder.into_select(vec![Column::Star(None)]).to_sql();
    assert_eq!(
        sql,
        r#"SELECT * FROM "venues" AS "v" LEFT JOIN LATERAL (SELECT "c".* FROM "concerts" AS "c" WHERE "c"."venue_id" = "v"."id" ORDER BY "c"."start_time" DESC LIMIT $1) AS "c_outer" ON TRUE"#
    );
    assert_i64_params(&params, &[3]);
}

#[test]
fn limited_correlation_with_offset() {
    let mut parameters = ParameterContext::new();
    let options = CorrelationOptions::new();
    let mut builder = query_builder(Dialect::postgres());
    let limiter = RowLimiter::new(3)
        .with_offset(6)
        .with_order_by(Column::physical("c", "start_time"), Ordering::Desc);

    let mut correlation = CorrelatedJoinBuilder::new(
        &mut parameters,
        &options,
        &mut builder,
        "v",
        "c",
        "c_outer",
        "Venue.concerts",
        Some(&limiter),
    );

    correlation.correlate("Concert").unwrap();
    correlation.finish();

    let (sql, params) = builder.into_select(vec![Column::Star(None)]).to_sql();
    assert_eq!(
        sql,
        r#"SELECT * FROM "venues" AS "v" LEFT JOIN LATERAL (SELECT "c".* FROM "concerts" AS "c" ORDER BY "c"."start_time" DESC LIMIT $1 OFFSET $2) AS "c_outer" ON TRUE"#
    );
    assert_i64_params(&params, &[3, 6]);
}

#[test]
fn limited_correlation_without_lateral_uses_membership_subquery() {
    let mut parameters = ParameterContext::new();
    let options = CorrelationOptions::new();
    let mut builder = query_builder(Dialect::sqlite());
    let limiter =
        RowLimiter::new(3).with_order_by(Column::physical("c", "start_time"), Ordering::Desc);

    let mut correlation = CorrelatedJoinBuilder::new(
        &mut parameters,
        &options,
        &mut builder,
        "v",
        "c",
        "c_outer",
        "Venue.concerts",
        Some(&limiter),
    );

    let target = correlation.correlate("Concert").unwrap();
    // On this path the wrapping join carries the external alias, so the correlation
    // condition refers to it
    correlation.query_builder_mut().add_join_condition(
        &target,
        ConcretePredicate::Eq(
            Column::physical("c_outer", "venue_id"),
            Column::physical("v", "id"),
        ),
    );
    correlation.finish();

    let (sql, params) = builder.into_select(vec![Column::Star(None)]).to_sql();
    assert_eq!(
        sql,
        r#"SELECT * FROM "venues" AS "v" LEFT JOIN "concerts" AS "c_outer" ON "c_outer"."venue_id" = "v"."id" AND "c_outer"."id" IN (SELECT "c"."id" FROM "concerts" AS "c" ORDER BY "c"."start_time" DESC LIMIT $1)"#
    );
    assert_i64_params(&params, &[3]);
}

#[test]
fn limited_correlation_on_mysql_prefers_lateral() {
    let mut parameters = ParameterContext::new();
    let options = CorrelationOptions::new();
    let mut builder = query_builder(Dialect::mysql());
    let limiter = RowLimiter::new(1);

    let mut correlation = CorrelatedJoinBuilder::new(
        &mut parameters,
        &options,
        &mut builder,
        "v",
        "c",
        "c_outer",
        "Venue.concerts",
        Some(&limiter),
    );

    correlation.correlate("Concert").unwrap();
    correlation.finish();

    let (sql, _params) = builder.into_select(vec![Column::Star(None)]).to_sql();
    assert!(sql.contains("LEFT JOIN LATERAL"));
}

#[test]
fn limited_correlation_on_incapable_dialect_fails() {
    let mut parameters = ParameterContext::new();
    let options = CorrelationOptions::new();
    let mut builder = query_builder(Dialect::h2());
    let limiter = RowLimiter::new(3);

    let mut correlation = CorrelatedJoinBuilder::new(
        &mut parameters,
        &options,
        &mut builder,
        "v",
        "c",
        "c_outer",
        "Venue.concerts",
        Some(&limiter),
    );

    let err = correlation.correlate("Concert").unwrap_err();
    assert!(matches!(
        err,
        CorrelationError::UnsupportedLimitedCorrelation { .. }
    ));
    assert!(err.to_string().contains("Venue.concerts"));
    correlation.finish();

    // Nothing was emitted into the outer query
    let (sql, params) = builder.into_select(vec![Column::Star(None)]).to_sql();
    assert_eq!(sql, r#"SELECT * FROM "venues" AS "v""#);
    assert!(params.is_empty());
}

#[test]
fn correlate_accepts_resolved_entity_metadata() {
    let mut parameters = ParameterContext::new();
    let options = CorrelationOptions::new();
    // No registration: the resolved metadata carries everything the builder needs
    let mut builder = EntityQueryBuilder::new(Dialect::postgres(), venue(), "v");

    let mut correlation = CorrelatedJoinBuilder::new(
        &mut parameters,
        &options,
        &mut builder,
        "v",
        "c",
        "c_outer",
        "Venue.concerts",
        None,
    );

    correlation.correlate(concert()).unwrap();
    correlation.finish();

    let (sql, _params) = builder.into_select(vec![Column::Star(None)]).to_sql();
    assert_eq!(sql, r#"SELECT * FROM "venues" AS "v" LEFT JOIN "concerts" AS "c" ON TRUE"#);
}
