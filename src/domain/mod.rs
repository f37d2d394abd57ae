//! Domain Layer
//!
//! Pure scaffolding logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - PathEntry, Manifest, ApplyResult
//! - `value_objects/` - ProjectName, SafePath, Phase, RunState
//! - `services/` - PathResolver, ManifestBuilder
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
