//! Shared utilities for monitor test suites

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
