//! Type aliases shared across the MediaCanvas crates.
//!
//! ## Usage
//!
//! ```rust
//! use mediacanvas_core::types::*;
//!
//! let counter: SharedSession<u32> = shared_session(0);
//! *counter.lock() += 1;
//! assert_eq!(*counter.lock(), 1);
//! ```

use parking_lot::Mutex;
use std::sync::Arc;

/// Stable identifier of a canvas object.
///
/// Ids are assigned by the session, start at 1, increase monotonically and
/// are never reused within a session.
pub type ObjectId = u32;

/// The "not found" id used by sentinel-returning APIs.
pub const NULL_OBJECT_ID: ObjectId = 0;

/// A thread-safe, mutex-protected session.
///
/// A canvas session has no internal locking. Hosts that call into one
/// session from several threads wrap it in this alias so that a whole
/// gesture (for example `begin_batch_move` .. `end_batch_move`) can be run
/// under a single guard.
pub type SharedSession<T> = Arc<Mutex<T>>;

/// Create a new `SharedSession<T>` from a value.
pub fn shared_session<T>(value: T) -> SharedSession<T> {
    Arc::new(Mutex::new(value))
}
