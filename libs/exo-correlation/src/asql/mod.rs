// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Abstract inputs to a correlated-join construction: what to correlate against
//! ([entity::EntityRef]), how to bound the correlated rows ([limiter::Limiter]), and
//! the opaque parameter state threaded through to the limiting policy.

pub(crate) mod entity;
pub(crate) mod limiter;
pub(crate) mod parameter_context;
