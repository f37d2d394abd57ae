//! Domain Services
//!
//! Pure logic over domain entities. No I/O.

pub mod manifest_builder;
mod resolver;

pub use manifest_builder::{ManifestBuilder, DEFAULT_ENV_DIR, PIPELINE_STAGES};
pub use resolver::{resolve, PathResolver};
