// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorrelationError {
    /// A correlation target was already bound on this builder. Indicates a bug in the
    /// calling compiler, not a recoverable condition.
    #[error("Cannot correlate with multiple entity classes")]
    AlreadyCorrelated,

    /// A row-limiting policy was requested, but the dialect can express neither a
    /// lateral join nor a `LIMIT` inside a quantified predicate subquery.
    #[error(
        "Cannot limit the amount of elements fetched for the attribute path '{attribute_path}': \
         the database supports neither lateral joins nor LIMIT in quantified predicate \
         subqueries. Use a select strategy with batch size 1 instead"
    )]
    UnsupportedLimitedCorrelation { attribute_path: String },

    #[error("Unknown entity '{0}'")]
    UnknownEntity(String),

    #[error("{0}")]
    Delegate(#[from] Box<dyn std::error::Error + Send + Sync + 'static>),
}
