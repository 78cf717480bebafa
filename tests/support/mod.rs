// tests/support/mod.rs
#![allow(dead_code)] // each test binary uses its own subset of the helpers

pub mod builders;
pub mod helpers;
pub mod mocks;
