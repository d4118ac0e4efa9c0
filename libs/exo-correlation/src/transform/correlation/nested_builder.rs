// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::outer_query_builder::OuterQueryBuilder;

/// The nested query construct a correlation strategy may leave open, to be closed when
/// the outer construction finishes. At most one of these exists per correlation site.
pub(crate) enum NestedBuilder<B: OuterQueryBuilder> {
    /// The plain-join strategy opens nothing.
    None,
    /// An inner subquery behind a membership predicate; closing it involves two scopes
    /// (the predicate, then the subquery itself).
    InnerSubquery(B::Subquery),
    /// A lateral subquery; a single scope.
    LateralCte(B::Lateral),
}
