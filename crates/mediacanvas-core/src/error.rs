//! Error handling for MediaCanvas
//!
//! Provides the error types for every layer of the engine:
//! - Canvas errors (unknown ids, invalid geometry, batch protocol misuse)
//! - Configuration errors (rejected settings values)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::types::ObjectId;

/// Canvas error type
///
/// Returned by the native session API. The sentinel host API maps every
/// variant to its zero/false default instead of surfacing it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CanvasError {
    /// No object with this id exists in the session
    #[error("Unknown object id {0}")]
    UnknownObject(ObjectId),

    /// Width and height must both be finite and strictly positive
    #[error("Invalid object size {width}x{height}")]
    InvalidSize {
        /// The rejected width.
        width: f32,
        /// The rejected height.
        height: f32,
    },

    /// A coordinate was NaN or infinite
    #[error("Non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate {
        /// The rejected x value.
        x: f32,
        /// The rejected y value.
        y: f32,
    },

    /// Grid cells must be finite and strictly positive
    #[error("Invalid grid size {0}")]
    InvalidGridSize(f32),

    /// `add_to_batch_*` or `end_batch_*` without a matching `begin_batch_*`
    #[error("No {kind} batch in progress")]
    NoBatchInProgress {
        /// Which batch slot was empty ("move" or "resize").
        kind: &'static str,
    },

    /// Every object id has been handed out
    #[error("Object ids exhausted")]
    IdsExhausted,

    /// A configuration value is out of its valid range
    #[error("Invalid configuration '{key}': {reason}")]
    InvalidConfig {
        /// The configuration key.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Result type for canvas operations
pub type CanvasResult<T> = std::result::Result<T, CanvasError>;
