//! Shared test utilities used across waymark crates.
//!
//! [`tracing`] captures spans and events so suites can assert
//! instrumentation, and [`proptest_profile`] reads the environment overrides
//! that tune property-test runs.

pub mod proptest_profile;
pub mod tracing;
