// Shared helpers for integration tests. Each test file pulls this in with
// `#[path = "../common/mod.rs"] mod common;`.
#![allow(dead_code)]

pub mod fixtures;

pub use libport100::test_support::*;

/// Route `log` output through env_logger when RUST_LOG is set. Safe to call
/// from every test.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
