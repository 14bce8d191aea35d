//! # MediaCanvas Core
//!
//! Core types, errors, and configuration shared by the MediaCanvas crates.
//! Provides the error taxonomy for canvas operations, the engine-wide
//! constants, and the `CanvasConfig` consumed by a canvas session.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::CanvasConfig;
pub use error::{CanvasError, CanvasResult};
pub use types::{shared_session, ObjectId, SharedSession, NULL_OBJECT_ID};
