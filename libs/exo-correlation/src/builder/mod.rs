// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The reference implementation of the
//! [OuterQueryBuilder](crate::OuterQueryBuilder) contract: a query builder that
//! assembles the SQL primitives of this crate into a join tree.

mod entity_query_builder;
mod lateral;
mod subquery;

pub use entity_query_builder::{EntityQueryBuilder, JoinTarget};
pub use lateral::LateralBuilder;
pub use subquery::SubqueryBuilder;
