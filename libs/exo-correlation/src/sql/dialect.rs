// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

/// How the dialect expresses a join whose right-hand subquery may refer to columns of
/// the left-hand table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LateralStyle {
    /// No per-row subquery join construct
    None,
    /// The standard `LATERAL` keyword
    Lateral,
}

/// The capabilities of a database backend that drive the choice of the correlated-join
/// construct. Capability *detection* happens elsewhere; this type only reports flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    lateral_style: LateralStyle,
    supports_limit_in_quantified_predicate_subquery: bool,
}

impl Dialect {
    pub fn new(
        lateral_style: LateralStyle,
        supports_limit_in_quantified_predicate_subquery: bool,
    ) -> Self {
        Self {
            lateral_style,
            supports_limit_in_quantified_predicate_subquery,
        }
    }

    pub fn postgres() -> Self {
        Self::new(LateralStyle::Lateral, true)
    }

    /// MySQL 8 has `LATERAL`, but still rejects `LIMIT` inside `IN`/`ANY` subqueries.
    pub fn mysql() -> Self {
        Self::new(LateralStyle::Lateral, false)
    }

    pub fn sqlite() -> Self {
        Self::new(LateralStyle::None, true)
    }

    pub fn h2() -> Self {
        Self::new(LateralStyle::None, false)
    }

    pub fn lateral_style(&self) -> LateralStyle {
        self.lateral_style
    }

    pub fn supports_lateral_join(&self) -> bool {
        self.lateral_style != LateralStyle::None
    }

    pub fn supports_limit_in_quantified_predicate_subquery(&self) -> bool {
        self.supports_limit_in_quantified_predicate_subquery
    }
}
