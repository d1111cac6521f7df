use std::time::Instant;

use eframe::egui::{Pos2, Vec2};

use super::deferred::{DRAG_RELEASE_DEBOUNCE, Deferred};
use crate::schema::registry::NodeId;

/// Pointer-down to pointer-up bookkeeping for node repositioning.
///
/// `moved` outlives the drag by [`DRAG_RELEASE_DEBOUNCE`] so the click that
/// follows a release can tell a drag from a plain click.
#[derive(Debug, Default)]
pub struct DragController {
    dragging: Option<NodeId>,
    // Pointer minus node origin at drag start, in screen units
    offset: Vec2,
    moved: Option<NodeId>,
    moved_reset: Option<Deferred<()>>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragging(&self) -> Option<&str> {
        self.dragging.as_deref()
    }

    pub fn is_dragging(&self, id: &str) -> bool {
        self.dragging.as_deref() == Some(id)
    }

    pub fn has_moved(&self, id: &str) -> bool {
        self.moved.as_deref() == Some(id)
    }

    /// Starts a drag unless the node is the focused one. `node_origin` is the
    /// top-left of the node's on-screen box.
    pub fn begin(&mut self, id: &str, pointer: Pos2, node_origin: Pos2, focused: Option<&str>) -> bool {
        if focused == Some(id) {
            return false;
        }
        self.dragging = Some(id.to_string());
        self.offset = pointer - node_origin;
        true
    }

    /// New layout position for the dragged node, if any:
    /// `(pointer - offset - container_origin) / scale`.
    pub fn update(&mut self, pointer: Pos2, container_origin: Pos2, scale: f32) -> Option<(NodeId, Pos2)> {
        let id = self.dragging.clone()?;
        let scale = if scale > 0.0 { scale } else { 1.0 };
        let local = (pointer - self.offset - container_origin) / scale;
        self.moved = Some(id.clone());
        self.moved_reset = None;
        Some((id, local.to_pos2()))
    }

    pub fn end(&mut self, now: Instant) {
        if self.dragging.take().is_some() {
            self.moved_reset = Some(Deferred::new(now, DRAG_RELEASE_DEBOUNCE, ()));
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(timer) = self.moved_reset.as_mut() {
            if timer.poll(now).is_some() {
                self.moved = None;
                self.moved_reset = None;
            }
        }
    }

    /// True when the click should go through as a selection toggle.
    pub fn click(&mut self, id: &str, now: Instant) -> bool {
        self.tick(now);
        !self.has_moved(id)
    }

    pub fn pending_reset(&self, now: Instant) -> Option<std::time::Duration> {
        self.moved_reset.as_ref().and_then(|t| t.remaining(now))
    }
}
