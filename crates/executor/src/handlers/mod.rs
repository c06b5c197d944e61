//! Command handlers.

pub mod kv;
