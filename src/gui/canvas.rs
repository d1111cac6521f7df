use std::time::Instant;

use eframe::egui::{self, Align2, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Shape, Stroke, StrokeKind, pos2, vec2};

use crate::controller::pulse::wants_pulse;
use crate::schema::connectors::{build_connectors, node_width};
use crate::schema::registry::{Node, NodeId};

use super::frontend::PortfolioApp;
use super::theme::{Palette, fade, node_color};

const HEADER_HEIGHT: f32 = 40.0;
const ROW_HEIGHT: f32 = 22.0;
const MAX_FIELD_ROWS: usize = 8;
const GRID_STEP: f32 = 24.0;
const TOP_PADDING: f32 = 24.0;
const FOCUS_SCALE: f32 = 1.015;
const PULSE_PERIOD: f64 = 1.5;
const PULSE_AMPLITUDE: f32 = 0.02;

pub fn node_height(node: &Node) -> f32 {
    HEADER_HEIGHT + node.fields.len().min(MAX_FIELD_ROWS) as f32 * ROW_HEIGHT
}

/// Canvas units to screen pixels: top-centred, uniformly scaled.
#[derive(Copy, Clone, Debug)]
struct CanvasTransform {
    origin: Pos2,
    scale: f32,
}

impl CanvasTransform {
    fn to_screen(self, p: Pos2) -> Pos2 {
        self.origin + p.to_vec2() * self.scale
    }

    fn node_rect(self, node: &Node) -> Rect {
        Rect::from_min_size(self.to_screen(node.pos), vec2(node_width(node), node_height(node)) * self.scale)
    }
}

impl PortfolioApp {
    pub(crate) fn diagram_ui(&mut self, ctx: &egui::Context, now: Instant) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let avail = ui.max_rect();
            self.resize_canvas(avail.size());
            let metrics = self.layout.metrics();
            let canvas_size = metrics.canvas_size() * metrics.scale;
            let origin = pos2(avail.center().x - canvas_size.x / 2.0, avail.top() + TOP_PADDING * metrics.scale);
            let xf = CanvasTransform { origin, scale: metrics.scale };
            let palette = Palette::for_theme(self.settings.theme);
            let any_selected = self.selection.selected().is_some();

            self.interact_nodes(ui, xf, now);
            self.update_pulses(now);

            let painter = ui.painter_at(avail);
            if self.settings.show_grid {
                paint_grid(&painter, Rect::from_min_size(origin, canvas_size), metrics.scale, palette, any_selected);
            }
            self.paint_connectors(&painter, xf, palette, any_selected);
            self.paint_nodes(ui, &painter, xf, palette);
        });
    }

    // Dragged and focused nodes stack on top, then the hovered one
    fn paint_order(&self) -> Vec<NodeId> {
        let mut ids: Vec<(u8, NodeId)> = self
            .registry
            .nodes
            .iter()
            .map(|n| {
                let z = if self.drag.is_dragging(&n.id) || self.selection.is_selected(&n.id) {
                    2
                } else if self.hovered.as_deref() == Some(n.id.as_str()) {
                    1
                } else {
                    0
                };
                (z, n.id.clone())
            })
            .collect();
        ids.sort_by_key(|(z, _)| *z);
        ids.into_iter().map(|(_, id)| id).collect()
    }

    fn interact_nodes(&mut self, ui: &mut egui::Ui, xf: CanvasTransform, now: Instant) {
        for id in self.paint_order() {
            let Some(node) = self.registry.node(&id) else { continue };
            let rect = xf.node_rect(node);
            let resp = ui.interact(rect, ui.id().with(("schema_node", &id)), Sense::click_and_drag());

            if resp.hovered() {
                self.hovered = Some(id.clone());
            }
            if resp.drag_started() {
                let pointer = ui.input(|i| i.pointer.press_origin()).or(resp.interact_pointer_pos());
                if let Some(p) = pointer {
                    self.drag.begin(&id, p, rect.min, self.selection.selected());
                }
            }
            if self.drag.is_dragging(&id) && resp.dragged() {
                if let Some(p) = resp.interact_pointer_pos() {
                    if let Some((moved, pos)) = self.drag.update(p, xf.origin, xf.scale) {
                        self.registry_mut().set_position(&moved, pos);
                    }
                }
            }
            if resp.drag_stopped() {
                self.drag.end(now);
            }
            if resp.clicked() && self.drag.click(&id, now) {
                self.selection.select(&id);
            }
        }
        // Release outside every node still ends the drag
        if self.drag.dragging().is_some() && !ui.input(|i| i.pointer.any_down()) {
            self.drag.end(now);
        }
    }

    fn update_pulses(&mut self, now: Instant) {
        let any_selected = self.selection.selected().is_some();
        for node in &self.registry.nodes {
            let hovered = self.hovered.as_deref() == Some(node.id.as_str());
            let pulsing = wants_pulse(hovered, self.selection.is_selected(&node.id), any_selected);
            self.pulses.entry(node.id.clone()).or_default().update(pulsing, now);
        }
    }

    fn paint_connectors(&self, painter: &Painter, xf: CanvasTransform, palette: Palette, any_selected: bool) {
        let to_screen = |pts: &[Pos2]| pts.iter().map(|p| xf.to_screen(*p)).collect::<Vec<_>>();
        for geom in build_connectors(&self.registry, any_selected) {
            let line = fade(palette.grid_line, geom.opacity);
            painter.add(Shape::line(to_screen(&geom.path), Stroke::new(1.0, line)));
            painter.add(Shape::convex_polygon(to_screen(&geom.arrow), line, Stroke::NONE));
            for diamond in [geom.source_diamond, geom.target_diamond] {
                painter.add(Shape::convex_polygon(
                    to_screen(&diamond),
                    palette.ink_muted,
                    Stroke::new(1.0, palette.ink_muted),
                ));
            }
        }
    }

    fn paint_nodes(&self, ui: &egui::Ui, painter: &Painter, xf: CanvasTransform, palette: Palette) {
        let any_selected = self.selection.selected().is_some();
        let s = xf.scale;
        let time = ui.input(|i| i.time);

        for id in self.paint_order() {
            let Some(node) = self.registry.node(&id) else { continue };
            let focused = self.selection.is_selected(&id);
            let other_focused = any_selected && !focused;
            let animating = self.pulses.get(&id).is_some_and(|p| p.is_animating());
            let accent = node_color(&node.color);
            let body_alpha = if other_focused { 0.65 } else { 1.0 };
            let text_alpha = if other_focused { 0.5 } else { 1.0 };

            let mut r = xf.node_rect(node);
            if focused {
                r = Rect::from_center_size(r.center(), r.size() * FOCUS_SCALE);
            }
            if animating {
                let phase = (time % PULSE_PERIOD) / PULSE_PERIOD;
                let breath = 1.0 + PULSE_AMPLITUDE * (0.5 - 0.5 * (phase * std::f64::consts::TAU).cos()) as f32;
                r = Rect::from_center_size(r.center(), r.size() * breath);
                ui.ctx().request_repaint();
            }
            let radius = 12.0 * s;

            painter.rect_filled(r.translate(vec2(0.0, 6.0 * s)), radius, palette.shadow);
            if focused {
                painter.rect_filled(r.expand(6.0 * s), radius + 6.0 * s, fade(accent, 0.25));
            }
            if animating {
                painter.rect_stroke(r.expand(4.0 * s), radius, Stroke::new(2.5, fade(accent, 0.75)), StrokeKind::Outside);
            }
            painter.rect_filled(r, radius, fade(palette.surface_1, body_alpha));

            let header = Rect::from_min_size(r.min, vec2(r.width(), HEADER_HEIGHT * r.height() / node_height(node)));
            let cr = radius.round().clamp(0.0, 255.0) as u8;
            painter.rect_filled(header, CornerRadius { nw: cr, ne: cr, sw: 0, se: 0 }, fade(palette.surface_2, body_alpha));
            painter.line_segment([header.left_bottom(), header.right_bottom()], Stroke::new(1.0, palette.border_1));
            painter.text(
                header.left_center() + vec2(14.0 * s, 0.0),
                Align2::LEFT_CENTER,
                node.title.to_uppercase(),
                FontId::proportional(13.0 * s),
                fade(palette.ink_1, text_alpha),
            );
            let dot = header.right_center() - vec2(20.0 * s, 0.0);
            let dot_alpha = if animating { 0.8 + 0.2 * ((time * 4.0).sin() as f32) } else { 1.0 };
            painter.circle_filled(dot, 6.0 * s, fade(accent, dot_alpha));
            painter.circle_stroke(dot, 6.0 * s, Stroke::new(1.0, palette.border_1));

            let row_h = (r.height() - header.height()) / node.fields.len().clamp(1, MAX_FIELD_ROWS) as f32;
            for (i, field) in node.fields.iter().take(MAX_FIELD_ROWS).enumerate() {
                let top = header.bottom() + i as f32 * row_h;
                let row = Rect::from_min_size(pos2(r.left(), top), vec2(r.width(), row_h));
                painter.text(
                    row.left_center() + vec2(14.0 * s, 0.0),
                    Align2::LEFT_CENTER,
                    field,
                    FontId::monospace(12.0 * s),
                    fade(palette.ink_2, text_alpha),
                );
                if i + 1 < node.fields.len().min(MAX_FIELD_ROWS) {
                    painter.line_segment([row.left_bottom(), row.right_bottom()], Stroke::new(1.0, palette.border_2));
                }
            }
            painter.rect_stroke(r, radius, Stroke::new(1.0, fade(palette.border_1, body_alpha)), StrokeKind::Inside);

            if focused {
                self.paint_neighbours(painter, node, r, s, palette);
            }
        }
    }

    // Inputs and outputs of the focused node, listed under its box
    fn paint_neighbours(&self, painter: &Painter, node: &Node, r: Rect, s: f32, palette: Palette) {
        let lines = self
            .registry
            .inputs(&node.id)
            .into_iter()
            .map(|n| format!("<- {}", n.title))
            .chain(self.registry.outputs(&node.id).into_iter().map(|n| format!("-> {}", n.title)));
        for (i, line) in lines.enumerate() {
            painter.text(
                r.left_bottom() + vec2(4.0 * s, 10.0 * s + i as f32 * 14.0 * s),
                Align2::LEFT_TOP,
                line,
                FontId::monospace(10.0 * s),
                palette.ink_muted,
            );
        }
    }
}

fn paint_grid(painter: &Painter, rect: Rect, scale: f32, palette: Palette, dimmed: bool) {
    let step = GRID_STEP * scale;
    if step < 2.0 {
        return;
    }
    let color = fade(palette.grid_line, if dimmed { 0.12 } else { 0.25 });
    let stroke = Stroke::new(1.0, color);
    let mut x = rect.left();
    while x <= rect.right() {
        painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], stroke);
        x += step;
    }
    let mut y = rect.top();
    while y <= rect.bottom() {
        painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], stroke);
        y += step;
    }
}
