// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::any::Any;
use std::fmt::Debug;

#[macro_use]
#[cfg(test)]
mod test_util;

pub(crate) mod column;
pub(crate) mod dialect;
pub(crate) mod expression_builder;
pub(crate) mod join;
pub(crate) mod limit;
pub(crate) mod offset;
pub(crate) mod order;
pub(crate) mod predicate;
pub(crate) mod select;
pub(crate) mod sql_builder;
pub(crate) mod table;

/// A value that can be supplied as a query parameter. This crate never executes the
/// queries it builds, so no database-driver bound is imposed here; a parameter only
/// needs to be comparable (for tests) and printable (for diagnostics).
pub trait SQLParam: Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn eq(&self, other: &dyn SQLParam) -> bool;
}

impl<T: Debug + Send + Sync + Any + PartialEq> SQLParam for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq(&self, other: &dyn SQLParam) -> bool {
        if let Some(other) = other.as_any().downcast_ref::<T>() {
            self == other
        } else {
            false
        }
    }
}

impl PartialEq for dyn SQLParam {
    fn eq(&self, other: &Self) -> bool {
        SQLParam::eq(self, other)
    }
}
