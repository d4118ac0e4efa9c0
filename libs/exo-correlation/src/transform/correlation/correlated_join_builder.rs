// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{
    asql::{
        entity::EntityRef,
        limiter::Limiter,
        parameter_context::{CorrelationOptions, ParameterContext},
    },
    correlation_error::CorrelationError,
    sql::dialect::Dialect,
};

use super::{
    context::CorrelationContext,
    correlation_strategy::CorrelatedJoin,
    correlation_strategy_chain::CorrelationStrategyChain,
    nested_builder::NestedBuilder,
    outer_query_builder::OuterQueryBuilder,
};

/// Builds the correlated join for one correlation site of an entity-view query.
///
/// The owning compiler creates one instance per correlation site and drives it through
/// a fixed lifecycle: exactly one [correlate](Self::correlate) call binds the
/// correlation target and emits the join construct (the construct chosen depends on the
/// limiter and the dialect, see the strategies in this module); once every use of the
/// correlation's result is in place, [finish](Self::finish) closes whatever nested
/// subquery scope the chosen strategy left open.
///
/// The outer query builder is exclusively borrowed for the life of this value; the
/// compiler reaches it through [query_builder_mut](Self::query_builder_mut) to attach
/// join conditions to the returned target. Skipping `finish` leaves the outer builder's
/// nesting open, which the borrow alone cannot prevent; calling it is part of the
/// caller contract.
pub struct CorrelatedJoinBuilder<'c, B: OuterQueryBuilder> {
    parameters: &'c mut ParameterContext,
    options: &'c CorrelationOptions,
    query_builder: &'c mut B,
    anchor: String,
    correlation_alias: String,
    correlation_external_alias: String,
    attribute_path: String,
    limiter: Option<&'c dyn Limiter>,
    correlated: bool,
    nested: NestedBuilder<B>,
}

impl<'c, B: OuterQueryBuilder> CorrelatedJoinBuilder<'c, B> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        parameters: &'c mut ParameterContext,
        options: &'c CorrelationOptions,
        query_builder: &'c mut B,
        anchor: impl Into<String>,
        correlation_alias: impl Into<String>,
        correlation_external_alias: impl Into<String>,
        attribute_path: impl Into<String>,
        limiter: Option<&'c dyn Limiter>,
    ) -> Self {
        Self {
            parameters,
            options,
            query_builder,
            anchor: anchor.into(),
            correlation_alias: correlation_alias.into(),
            correlation_external_alias: correlation_external_alias.into(),
            attribute_path: attribute_path.into(),
            limiter,
            correlated: false,
            nested: NestedBuilder::None,
        }
    }

    /// Bind the correlation target and emit the join construct for it, returning the
    /// join-condition target through which the caller attaches the correlation
    /// conditions.
    ///
    /// Callable at most once per instance; a second call fails with
    /// [CorrelationError::AlreadyCorrelated]. A failed emission also consumes the
    /// single bind: the instance is not retried, the compilation is abandoned.
    pub fn correlate(
        &mut self,
        entity: impl Into<EntityRef>,
    ) -> Result<B::JoinTarget, CorrelationError> {
        if self.correlated {
            return Err(CorrelationError::AlreadyCorrelated);
        }
        self.correlated = true;

        let entity = entity.into();
        let chain = CorrelationStrategyChain::default();

        let CorrelatedJoin {
            join_target,
            nested,
        } = chain.correlate(CorrelationContext {
            entity: &entity,
            query_builder: &mut *self.query_builder,
            anchor: &self.anchor,
            correlation_alias: &self.correlation_alias,
            correlation_external_alias: &self.correlation_external_alias,
            attribute_path: &self.attribute_path,
            limiter: self.limiter,
            parameters: &mut *self.parameters,
            options: self.options,
        })?;

        self.nested = nested;
        Ok(join_target)
    }

    /// The name the correlated entity is bound to inside the correlated subtree.
    pub fn correlation_alias(&self) -> &str {
        &self.correlation_alias
    }

    pub fn query_builder(&self) -> &B {
        self.query_builder
    }

    /// The outer query builder, reborrowed through this value's exclusive borrow. Used
    /// by the owning compiler to attach conditions to the join target returned from
    /// [correlate](Self::correlate).
    pub fn query_builder_mut(&mut self) -> &mut B {
        self.query_builder
    }

    pub fn dialect(&self) -> &Dialect {
        self.query_builder.dialect()
    }

    /// Close whatever nested subquery scope the chosen strategy left open. Consumes the
    /// builder, releasing the borrow on the outer query builder.
    pub fn finish(self) {
        let Self {
            query_builder,
            nested,
            ..
        } = self;

        match nested {
            NestedBuilder::None => {}
            NestedBuilder::InnerSubquery(mut subquery) => {
                // Two scopes are open; the membership predicate closes before the
                // subquery itself.
                query_builder.end_in_predicate(&mut subquery);
                query_builder.end_subquery(subquery);
            }
            NestedBuilder::LateralCte(lateral) => {
                query_builder.end_lateral(lateral);
            }
        }
    }
}
