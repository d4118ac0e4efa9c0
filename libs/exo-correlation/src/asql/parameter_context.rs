// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{any::Any, collections::HashMap, sync::Arc};

use crate::sql::SQLParam;

/// Named parameter values collected while building a query. The correlated-join
/// machinery never interprets this state; it hands it to the [Limiter](super::limiter::Limiter)
/// verbatim so a policy can bind the parameters its clauses refer to.
#[derive(Debug, Default)]
pub struct ParameterContext {
    params: HashMap<String, Arc<dyn SQLParam>>,
}

impl ParameterContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_parameter(&mut self, name: impl Into<String>, value: Arc<dyn SQLParam>) {
        self.params.insert(name.into(), value);
    }

    pub fn parameter(&self, name: &str) -> Option<&dyn SQLParam> {
        self.params.get(name).map(|param| param.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// An auxiliary key-value bag accompanying a correlation site. Like
/// [ParameterContext], it is opaque to the correlated-join machinery and is passed
/// through to the limiting policy untouched.
#[derive(Default)]
pub struct CorrelationOptions {
    values: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl CorrelationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Arc<dyn Any + Send + Sync>) {
        self.values.insert(name.into(), value);
    }

    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.values.get(name).and_then(|value| value.downcast_ref())
    }
}
