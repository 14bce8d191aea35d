//! # MediaCanvas Engine
//!
//! Spatial engine for an infinite 2D canvas holding thousands of
//! rectangular media items.
//!
//! ## Components
//!
//! - [`ObjectStore`]: id-keyed objects plus creation order
//! - [`SpatialIndex`]: quadtree used for viewport culling and hit-testing
//! - [`GridSystem`]: snapping of positions and sizes
//! - [`CommandHistory`]: bounded undo/redo of [`CanvasCommand`]s
//! - [`Viewport`]: camera, coordinate conversion, sorted visible list
//! - [`CanvasSession`]: façade composing the above
//! - [`CanvasHost`]: sentinel-returning wrapper for embedding hosts
//!
//! ```
//! use mediacanvas_engine::CanvasSession;
//!
//! let mut canvas = CanvasSession::new(800.0, 600.0, 20.0)?;
//! let id = canvas.add_object(0.0, 0.0, 100.0, 100.0, 1, 1)?;
//! canvas.move_object(id, 205.0, 203.0)?;
//! assert_eq!(canvas.object(id).map(|o| (o.x, o.y)), Some((200.0, 200.0)));
//!
//! canvas.undo();
//! assert_eq!(canvas.object(id).map(|o| (o.x, o.y)), Some((0.0, 0.0)));
//! # Ok::<(), mediacanvas_core::CanvasError>(())
//! ```

pub mod canvas;
pub mod commands;
pub mod geometry;
pub mod grid;
pub mod history;
pub mod host_api;
pub mod object_store;
pub mod spatial_index;
pub mod viewport;

pub use canvas::CanvasSession;
pub use commands::{BatchMoveBuilder, BatchResizeBuilder, CanvasCommand};
pub use geometry::Aabb;
pub use grid::GridSystem;
pub use history::CommandHistory;
pub use host_api::CanvasHost;
pub use object_store::{CanvasObject, NewObject, ObjectStore};
pub use spatial_index::{SpatialIndex, SpatialIndexStats};
pub use viewport::{Camera, ObjectTransform, Viewport};

pub use mediacanvas_core::{CanvasConfig, CanvasError, CanvasResult, ObjectId, NULL_OBJECT_ID};
