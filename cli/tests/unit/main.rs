//! Unit tests for css-doctor
//!
//! These tests use mocked ports and temporary directories; they never run
//! `lessc` or the storefront status command.

mod helpers;
mod property_tests;
