//! RADIX Test - Shared fixtures for property suites and benchmarks

pub mod cases;

pub use cases::*;
