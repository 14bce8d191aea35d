//! # MediaCanvas
//!
//! Spatial engine for an infinite 2D canvas hosting thousands of media
//! items: quadtree-backed viewport culling, camera pan/zoom, grid snapping,
//! and command-based undo/redo with atomic batch edits.
//!
//! ## Architecture
//!
//! 1. **mediacanvas-core** - ids, errors, constants, session configuration
//! 2. **mediacanvas-engine** - object store, quadtree, grid, history, viewport, session façade
//! 3. **mediacanvas-settings** - config files and persistence
//! 4. **mediacanvas** - this crate: logging setup and the demo binary

pub mod scenario;

pub use mediacanvas_core::{
    shared_session, CanvasConfig, CanvasError, CanvasResult, ObjectId, SharedSession,
    NULL_OBJECT_ID,
};
pub use mediacanvas_engine::{
    Aabb, Camera, CanvasCommand, CanvasHost, CanvasObject, CanvasSession, CommandHistory,
    GridSystem, NewObject, ObjectTransform, SpatialIndex, SpatialIndexStats, Viewport,
};
pub use mediacanvas_settings::{Config, LoggingSettings, SettingsPersistence};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging from the `[logging]` settings.
///
/// `RUST_LOG` overrides the configured level when set. With `json` enabled
/// each event is written as one JSON object per line.
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))?;

    let registry = tracing_subscriber::registry().with(env_filter);
    if settings.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_thread_names(true)
                    .with_line_number(true),
            )
            .try_init()?;
    }

    Ok(())
}
