//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: the object id type and the thread-safe session wrapper.

pub mod aliases;

pub use aliases::*;
