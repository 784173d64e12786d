//! Tests for monitor services
//!
//! These tests run the HTTP order provider against a local mock server and
//! verify both the wire behavior and the log records each call produces.
