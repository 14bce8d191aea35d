//! Scripted editing session used by the demo binary.
//!
//! An editor thread lays out a wall of items, drags a selection, resizes,
//! deletes and walks the history back and forth. A viewer thread culls the
//! same session while the edits run. Each gesture holds the session lock
//! from begin to end, so the viewer never observes half a batch.

use std::fmt;
use std::sync::Arc;
use std::thread;

use anyhow::anyhow;
use mediacanvas_core::constants::VIEW_PADDING;
use mediacanvas_core::{shared_session, CanvasConfig, ObjectId, SharedSession};
use mediacanvas_engine::{CanvasSession, SpatialIndexStats};

/// Items laid out per row.
const COLUMNS: u32 = 50;
/// Total items created.
const ITEM_COUNT: u32 = 2_000;
/// Culling passes the viewer thread makes.
const VIEWER_PASSES: usize = 8;

/// What the run ended with.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSummary {
    pub objects: usize,
    pub visible: usize,
    pub undo_depth: usize,
    pub redo_depth: usize,
    pub state_version: u32,
    pub index: SpatialIndexStats,
}

impl fmt::Display for ScenarioSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "objects: {} | visible: {} | undo: {} | redo: {} | version: {} | nodes: {} (depth {})",
            self.objects,
            self.visible,
            self.undo_depth,
            self.redo_depth,
            self.state_version,
            self.index.total_nodes,
            self.index.max_depth
        )
    }
}

/// Runs the scripted session against a canvas built from `config`.
pub fn run(config: &CanvasConfig) -> anyhow::Result<ScenarioSummary> {
    let session = shared_session(CanvasSession::with_config(config)?);
    let cell = config.grid_size * 6.0;

    let editor = {
        let session = Arc::clone(&session);
        thread::Builder::new()
            .name("editor".into())
            .spawn(move || edit(&session, cell))?
    };
    let viewer = {
        let session = Arc::clone(&session);
        thread::Builder::new()
            .name("viewer".into())
            .spawn(move || watch(&session))?
    };

    editor
        .join()
        .map_err(|_| anyhow!("editor thread panicked"))??;
    let passes = viewer
        .join()
        .map_err(|_| anyhow!("viewer thread panicked"))?;
    tracing::debug!(passes, "viewer finished");

    let mut canvas = session.lock();
    let mut visible = canvas.update_viewport();
    tracing::info!(visible, camera = ?canvas.camera(), "initial view");

    canvas.pan(-400.0, -300.0);
    canvas.zoom(0.0, 0.0, -0.5);
    visible = canvas.update_viewport();
    tracing::info!(visible, camera = ?canvas.camera(), "zoomed out");

    if canvas.fit_to_content(VIEW_PADDING) {
        visible = canvas.update_viewport();
        tracing::info!(visible, camera = ?canvas.camera(), "fit to content");
    }

    let summary = ScenarioSummary {
        objects: canvas.object_count(),
        visible,
        undo_depth: canvas.history().undo_depth(),
        redo_depth: canvas.history().redo_depth(),
        state_version: canvas.state_version(),
        index: canvas.index_stats(),
    };
    tracing::info!(%summary, "scenario finished");
    Ok(summary)
}

fn edit(session: &SharedSession<CanvasSession>, cell: f32) -> anyhow::Result<()> {
    let mut ids: Vec<ObjectId> = Vec::with_capacity(ITEM_COUNT as usize);
    for row in 0..ITEM_COUNT / COLUMNS {
        let mut canvas = session.lock();
        for column in 0..COLUMNS {
            let i = row * COLUMNS + column;
            let (x, y) = (column as f32 * cell, row as f32 * cell);
            ids.push(canvas.add_object(x, y, cell * 0.8, cell * 0.8, i + 1, (i % 3) as u8)?);
        }
    }
    tracing::info!(objects = ids.len(), "layout created");

    {
        let mut canvas = session.lock();
        canvas.begin_batch_move();
        for id in ids.iter().take(25) {
            if let Some(object) = canvas.object(*id).copied() {
                canvas.add_to_batch_move(*id, object.x + cell * 2.0, object.y + cell)?;
            }
        }
        canvas.end_batch_move()?;
    }

    {
        let mut canvas = session.lock();
        canvas.begin_batch_resize();
        for id in ids.iter().skip(25).take(10) {
            if let Some(object) = canvas.object(*id).copied() {
                canvas.add_to_batch_resize(*id, object.x, object.y, object.width * 1.5, object.height)?;
            }
        }
        canvas.end_batch_resize()?;
    }

    let removed = session.lock().delete_objects(&ids[100..140]);
    tracing::debug!(removed, "selection deleted");

    let mut canvas = session.lock();
    canvas.undo();
    canvas.undo();
    canvas.redo();
    Ok(())
}

/// Culls the shared session a few times while edits are in flight.
fn watch(session: &SharedSession<CanvasSession>) -> usize {
    for pass in 0..VIEWER_PASSES {
        let (visible, version) = {
            let mut canvas = session.lock();
            (canvas.update_viewport(), canvas.state_version())
        };
        tracing::trace!(pass, visible, version, "viewer pass");
        thread::yield_now();
    }
    VIEWER_PASSES
}
