//! Shared test helpers for `gotosync-core` integration tests.
//!
//! Lightweight in-memory mocks for the sync ports so driver tests can focus
//! on behaviour instead of boilerplate.

pub mod sync;
