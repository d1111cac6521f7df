use eframe::egui::Vec2;

use super::registry::SchemaRegistry;

/// Containers wider than this get the desktop canvas and column spreading.
pub const DESKTOP_MIN_WIDTH: f32 = 1024.0;
/// Below this width the sidebar collapses into a menu button. Independent of
/// [`DESKTOP_MIN_WIDTH`].
pub const SIDEBAR_COLLAPSE_WIDTH: f32 = 768.0;

pub const DESKTOP_BASE: Vec2 = Vec2::new(1100.0, 720.0);
pub const COMPACT_BASE: Vec2 = Vec2::new(900.0, 840.0);

/// Static x of the three layout columns.
pub const COLUMN_BASE_X: [f32; 3] = [80.0, 320.0, 560.0];
const SPREAD_START_WIDTH: f32 = 1280.0;
const SPREAD_STEP_WIDTH: f32 = 200.0;
const SPREAD_PER_STEP: f32 = 40.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutMetrics {
    pub scale: f32,
    pub desktop: bool,
    pub column_x: [f32; 3],
}

impl LayoutMetrics {
    pub fn compute(width: f32, height: f32) -> Self {
        let desktop = width > DESKTOP_MIN_WIDTH;
        let base = Self::base_size(desktop);
        let scale = (width / base.x).min(height / base.y).min(1.0);

        let mut column_x = COLUMN_BASE_X;
        if desktop {
            let extra = (width - SPREAD_START_WIDTH).max(0.0);
            let unit = extra / SPREAD_STEP_WIDTH * SPREAD_PER_STEP;
            column_x[1] += unit;
            column_x[2] += unit * 2.0;
        }
        LayoutMetrics { scale, desktop, column_x }
    }

    pub fn base_size(desktop: bool) -> Vec2 {
        if desktop { DESKTOP_BASE } else { COMPACT_BASE }
    }

    pub fn canvas_size(&self) -> Vec2 {
        Self::base_size(self.desktop)
    }

    // Maps a static column x to its spread position; other x values are not columns.
    pub fn column_for(&self, home_x: f32) -> Option<f32> {
        COLUMN_BASE_X
            .iter()
            .position(|&c| c == home_x)
            .map(|i| self.column_x[i])
    }

    /// Writes this layout into the registry. Compact mode discards every manual
    /// drag; desktop mode re-derives x from the node's static column and keeps y.
    pub fn apply(&self, registry: &mut SchemaRegistry) {
        if !self.desktop {
            registry.reset_positions();
            return;
        }
        for node in &mut registry.nodes {
            if let Some(x) = self.column_for(node.home.x) {
                node.pos.x = x;
            }
        }
    }
}

/// Recomputes the layout only when the container size actually changes, the
/// frame-loop equivalent of a resize listener.
#[derive(Debug, Default)]
pub struct ResponsiveLayout {
    last_size: Option<Vec2>,
    metrics: Option<LayoutMetrics>,
}

impl ResponsiveLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the size changed and the registry was re-laid out.
    pub fn on_resize(&mut self, size: Vec2, registry: &mut SchemaRegistry) -> bool {
        if self.last_size == Some(size) {
            return false;
        }
        let metrics = LayoutMetrics::compute(size.x, size.y);
        if self.metrics.map(|m| m.desktop) != Some(metrics.desktop) {
            log::debug!(
                "layout mode -> {} ({}x{})",
                if metrics.desktop { "desktop" } else { "compact" },
                size.x,
                size.y
            );
        }
        metrics.apply(registry);
        self.last_size = Some(size);
        self.metrics = Some(metrics);
        true
    }

    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics.unwrap_or_else(|| LayoutMetrics::compute(DESKTOP_BASE.x, DESKTOP_BASE.y))
    }

    // Forces the next on_resize to recompute, e.g. after returning from the login gate
    pub fn invalidate(&mut self) {
        self.last_size = None;
    }
}
