//! Strata log receiver library: exposes the drain and receiver for testing.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod drain;
pub mod receiver;
