//! Integration tests for opsdesk
//!
//! These tests exercise the public API end to end without mocking.

pub mod access_scenarios_tests;
pub mod catalog_tests;
pub mod config_loading_tests;
