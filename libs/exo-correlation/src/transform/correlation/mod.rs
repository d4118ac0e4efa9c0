// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

pub(crate) mod correlated_join_builder;
pub(crate) mod outer_query_builder;

mod context;
mod correlation_strategy;
mod correlation_strategy_chain;
mod lateral_join_strategy;
mod nested_builder;
mod plain_join_strategy;
mod subquery_with_in_predicate_strategy;
