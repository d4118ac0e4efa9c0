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
    sql::dialect::Dialect,
};

use super::outer_query_builder::OuterQueryBuilder;

/// A context for one correlation, carrying everything a strategy needs so the
/// strategies share a single signature.
pub(crate) struct CorrelationContext<'a, B: OuterQueryBuilder> {
    pub entity: &'a EntityRef,
    pub query_builder: &'a mut B,
    /// The join base in the outer query to which the correlation attaches
    pub anchor: &'a str,
    /// The name the correlated entity is bound to inside the correlated subtree
    pub correlation_alias: &'a str,
    /// The name the correlated entity is bound to in the outer query when a wrapping
    /// join is needed
    pub correlation_external_alias: &'a str,
    /// The attribute being fetched through this correlation (diagnostics only)
    pub attribute_path: &'a str,
    pub limiter: Option<&'a dyn Limiter>,
    pub parameters: &'a mut ParameterContext,
    pub options: &'a CorrelationOptions,
}

impl<B: OuterQueryBuilder> CorrelationContext<'_, B> {
    pub fn dialect(&self) -> &Dialect {
        self.query_builder.dialect()
    }
}
