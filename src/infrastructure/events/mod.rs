//! Event Sink Implementations
//!
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The human-readable console sink lives in `ui`.

mod json;

pub use json::JsonEventSink;
