//! Executor Integration Tests
//!
//! Tests for command dispatch and the `local_cache` tool surface.

#[path = "../common/mod.rs"]
mod common;

mod command_dispatch;
