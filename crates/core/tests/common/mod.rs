//! Common test utilities shared by the pipeline tests.

pub mod fixtures;

pub use fixtures::*;
