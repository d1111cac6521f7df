use std::time::Instant;

use eframe::egui::{
    self, Align, Align2, Button, Color32, CornerRadius, Id, Key, Layout, Margin, Order, Rect, RichText, Sense, Stroke,
    TextEdit, pos2, vec2,
};

use crate::inspector::overlay::sheet_should_dismiss;
use crate::inspector::resolver::{InspectorView, ItemView, ValueKind, resolve};
use crate::persistence::settings::Theme;
use crate::schema::layout::SIDEBAR_COLLAPSE_WIDTH;
use crate::schema::registry::NodeId;

use super::frontend::PortfolioApp;
use super::theme::{Palette, fade, node_color};

const SIDEBAR_WIDTH: f32 = 220.0;
const MENU_BAR_HEIGHT: f32 = 40.0;
const INSPECTOR_WIDTH: f32 = 420.0;
const SHEET_HEIGHT_FRACTION: f32 = 0.6;
const LOGIN_CARD_WIDTH: f32 = 340.0;
const THUMBNAIL_HEIGHT: f32 = 96.0;

enum InspectorAction {
    Close,
    Enlarge(&'static str),
    OpenProject(&'static str),
}

#[derive(Default)]
struct SidebarOutcome {
    chosen: Option<NodeId>,
    logout: bool,
}

fn card_frame(palette: Palette) -> egui::Frame {
    egui::Frame::NONE
        .fill(palette.surface_1)
        .stroke(Stroke::new(1.0, palette.border_1))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(16))
}

fn screen_rect(ctx: &egui::Context) -> Rect {
    ctx.input(|i| i.screen_rect())
}

impl PortfolioApp {
    pub(crate) fn sidebar_ui(&mut self, ctx: &egui::Context) {
        let palette = Palette::for_theme(self.settings.theme);
        let mut outcome = SidebarOutcome::default();

        if screen_rect(ctx).width() >= SIDEBAR_COLLAPSE_WIDTH {
            self.menu_open = false;
            egui::SidePanel::left("atlas_sidebar")
                .resizable(false)
                .exact_width(SIDEBAR_WIDTH)
                .show(ctx, |ui| {
                    sidebar_heading(ui, palette);
                    egui::ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
                        outcome.chosen = self.sidebar_entries(ui);
                    });
                    ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
                        outcome.logout = sidebar_footer(ui, palette);
                    });
                });
        } else {
            // Fixed-height bar so toggling the menu never resizes the canvas
            egui::TopBottomPanel::top("atlas_menu_bar")
                .exact_height(MENU_BAR_HEIGHT)
                .show(ctx, |ui| {
                    ui.horizontal_centered(|ui| {
                        let icon = if self.menu_open { "✕" } else { "≡ MENU" };
                        if ui.button(icon).clicked() {
                            self.menu_open = !self.menu_open;
                            if self.menu_open {
                                self.selection.close();
                            }
                        }
                        ui.label(RichText::new("System Atlas").strong().color(palette.ink_1));
                    });
                });
            if self.menu_open {
                egui::Area::new(Id::new("atlas_menu"))
                    .order(Order::Foreground)
                    .anchor(Align2::LEFT_TOP, vec2(8.0, MENU_BAR_HEIGHT + 4.0))
                    .show(ctx, |ui| {
                        card_frame(palette).show(ui, |ui| {
                            ui.set_width(SIDEBAR_WIDTH);
                            outcome.chosen = self.sidebar_entries(ui);
                            ui.separator();
                            outcome.logout = sidebar_footer(ui, palette);
                        });
                    });
            }
        }

        if let Some(id) = outcome.chosen {
            self.selection.select(&id);
            self.menu_open = false;
        }
        if outcome.logout {
            log::debug!("logout from sidebar");
            self.logout();
        }
    }

    fn sidebar_entries(&mut self, ui: &mut egui::Ui) -> Option<NodeId> {
        let entries: Vec<(NodeId, String, String)> = self
            .selection
            .sorted_nodes(&self.registry)
            .into_iter()
            .map(|n| (n.id.clone(), n.title.clone(), n.color.clone()))
            .collect();
        let mut chosen = None;
        for (id, title, color) in entries {
            let selected = self.selection.is_selected(&id);
            let resp = ui
                .horizontal(|ui| {
                    let (dot, _) = ui.allocate_exact_size(vec2(10.0, 10.0), Sense::hover());
                    ui.painter().circle_filled(dot.center(), 4.0, node_color(&color));
                    ui.selectable_label(selected, RichText::new(&title).monospace())
                })
                .inner;
            if resp.hovered() {
                self.hovered = Some(id.clone());
            }
            if resp.clicked() {
                chosen = Some(id);
            }
        }
        chosen
    }

    pub(crate) fn inspector_ui(&mut self, ctx: &egui::Context) {
        let Some(node) = self.selection.selected().and_then(|id| self.registry.node(id)) else {
            self.sheet_drag = 0.0;
            return;
        };
        let view = resolve(node);
        let palette = Palette::for_theme(self.settings.theme);
        let screen = screen_rect(ctx);
        let mut action = None;

        if screen.width() < SIDEBAR_COLLAPSE_WIDTH {
            let height = screen.height() * SHEET_HEIGHT_FRACTION;
            let top = screen.bottom() - height + self.sheet_drag.max(0.0);
            egui::Area::new(Id::new("inspector_sheet"))
                .order(Order::Middle)
                .fixed_pos(pos2(screen.left(), top))
                .show(ctx, |ui| {
                    card_frame(palette).show(ui, |ui| {
                        ui.set_width(screen.width() - 32.0);
                        ui.set_height(height - 32.0);
                        let handle = ui.allocate_response(vec2(ui.available_width(), 18.0), Sense::drag());
                        ui.painter().rect_filled(
                            Rect::from_center_size(handle.rect.center(), vec2(48.0, 5.0)),
                            3.0,
                            palette.border_1,
                        );
                        if handle.dragged() {
                            self.sheet_drag += handle.drag_delta().y;
                        }
                        if handle.drag_stopped() {
                            if sheet_should_dismiss(true, self.sheet_drag) {
                                action = Some(InspectorAction::Close);
                            }
                            self.sheet_drag = 0.0;
                        }
                        if let Some(a) = inspector_body(ui, &view, palette) {
                            action = Some(a);
                        }
                    });
                });
        } else {
            egui::Area::new(Id::new("inspector_panel"))
                .order(Order::Middle)
                .anchor(Align2::RIGHT_TOP, vec2(-16.0, 16.0))
                .show(ctx, |ui| {
                    card_frame(palette).show(ui, |ui| {
                        ui.set_width(INSPECTOR_WIDTH);
                        ui.set_max_height(screen.height() - 64.0);
                        action = inspector_body(ui, &view, palette);
                    });
                });
        }

        match action {
            Some(InspectorAction::Close) => {
                self.selection.close();
                self.sheet_drag = 0.0;
            }
            Some(InspectorAction::Enlarge(uri)) => self.overlay.open(uri),
            Some(InspectorAction::OpenProject(url)) => ctx.open_url(egui::OpenUrl::new_tab(url)),
            None => {}
        }
    }

    pub(crate) fn overlay_ui(&mut self, ctx: &egui::Context) {
        let Some(uri) = self.overlay.current().map(str::to_string) else {
            return;
        };
        let screen = screen_rect(ctx);
        let mut clicked = None;
        egui::Area::new(Id::new("snapshot_overlay"))
            .order(Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let backdrop = ui.allocate_rect(screen, Sense::click());
                ui.painter().rect_filled(screen, 0.0, Color32::from_black_alpha(200));
                let frame = Rect::from_center_size(screen.center(), screen.size() * 0.85);
                let image = egui::Image::new(uri.as_str())
                    .max_size(frame.size())
                    .corner_radius(CornerRadius::same(8))
                    .sense(Sense::click());
                let resp = ui.put(frame, image);
                if resp.clicked() {
                    clicked = Some(true);
                } else if backdrop.clicked() {
                    clicked = Some(false);
                }
            });
        if let Some(on_image) = clicked {
            self.overlay.click(on_image);
        }
    }

    pub(crate) fn login_ui(&mut self, ctx: &egui::Context, now: Instant) {
        let palette = Palette::for_theme(self.settings.theme);
        let mut submit = false;
        let mut toggle = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space((ui.available_height() * 0.2).max(24.0));
                card_frame(palette).inner_margin(Margin::same(24)).show(ui, |ui| {
                    ui.set_width(LOGIN_CARD_WIDTH);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("SYSTEM ACCESS PORTAL").small().monospace().color(palette.ink_muted));
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            let icon = match self.settings.theme {
                                Theme::Light => "🌙",
                                Theme::Dark => "☀",
                            };
                            toggle = ui.button(icon).on_hover_text("Toggle theme").clicked();
                        });
                    });
                    ui.add_space(8.0);
                    ui.label(RichText::new("Deborah's Workspace v1.0").heading().strong().color(palette.ink_1));
                    ui.add_space(16.0);

                    ui.with_layout(Layout::top_down(Align::Min), |ui| {
                        ui.label(RichText::new("USERNAME").small().monospace().color(palette.ink_2));
                        ui.add(TextEdit::singleline(&mut self.username).desired_width(f32::INFINITY));
                        ui.add_space(6.0);
                        ui.label(RichText::new("PASSWORD").small().monospace().color(palette.ink_2));
                        ui.add(
                            TextEdit::singleline(&mut self.password)
                                .password(true)
                                .desired_width(f32::INFINITY),
                        );
                        ui.add_space(12.0);
                        let enter = Button::new(RichText::new("ENTER").strong().color(Color32::WHITE))
                            .fill(fade(palette.ink_1, 0.9))
                            .min_size(vec2(ui.available_width(), 32.0));
                        submit = ui.add(enter).clicked() || ui.input(|i| i.key_pressed(Key::Enter));
                    });
                });
            });
        });

        if toggle {
            self.toggle_theme();
        }
        if submit {
            log::debug!("login as '{}'", self.username);
            self.gate.submit(now);
        }
    }
}

fn sidebar_heading(ui: &mut egui::Ui, palette: Palette) {
    ui.add_space(8.0);
    ui.label(RichText::new("System Atlas").heading().strong().color(palette.ink_1));
    ui.label(RichText::new("SCHEMA NAVIGATOR").small().monospace().color(palette.ink_muted));
    ui.separator();
}

// Returns true when EXIT was pressed
fn sidebar_footer(ui: &mut egui::Ui, palette: Palette) -> bool {
    ui.label(RichText::new("© E. Deborah Imafidon").small().color(palette.ink_muted));
    ui.button(RichText::new("EXIT").monospace().strong()).clicked()
}

fn inspector_body(ui: &mut egui::Ui, view: &InspectorView, palette: Palette) -> Option<InspectorAction> {
    let mut action = None;
    let accent = node_color(&view.color);

    let (bar, _) = ui.allocate_exact_size(vec2(ui.available_width(), 4.0), Sense::hover());
    ui.painter().rect_filled(bar, 2.0, accent);
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new(view.title.to_uppercase()).monospace().strong().size(18.0).color(palette.ink_1));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("✕").on_hover_text("Close").clicked() {
                action = Some(InspectorAction::Close);
            }
        });
    });
    if let Some(subtitle) = view.subtitle {
        ui.label(RichText::new(subtitle).italics().color(palette.ink_2));
    }
    ui.separator();

    egui::ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
        for section in &view.sections {
            if let Some(title) = section.title {
                ui.add_space(6.0);
                ui.label(RichText::new(title.to_uppercase()).small().strong().color(palette.ink_muted));
            }
            for item in &section.items {
                item_row(ui, item, palette);
            }
            if !section.snapshots.is_empty() {
                ui.horizontal_wrapped(|ui| {
                    for &uri in &section.snapshots {
                        let thumb = egui::Image::new(uri)
                            .max_height(THUMBNAIL_HEIGHT)
                            .corner_radius(CornerRadius::same(6))
                            .sense(Sense::click());
                        if ui.add(thumb).clicked() {
                            action = Some(InspectorAction::Enlarge(uri));
                        }
                    }
                });
                ui.label(RichText::new("click to enlarge").small().italics().color(palette.ink_muted));
            }
            if section.divider_after {
                ui.add_space(4.0);
                ui.separator();
            }
            ui.add_space(8.0);
        }

        if let Some(url) = view.project_url {
            ui.add_space(8.0);
            let button = Button::new(RichText::new("VIEW PROJECT").strong().color(Color32::WHITE))
                .fill(accent)
                .min_size(vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                action = Some(InspectorAction::OpenProject(url));
            }
        }
    });
    action
}

fn item_row(ui: &mut egui::Ui, item: &ItemView, palette: Palette) {
    ui.horizontal_wrapped(|ui| {
        if !item.label.is_empty() {
            ui.label(RichText::new(format!("{}:", item.label)).monospace().color(palette.ink_muted));
        }
        match &item.kind {
            ValueKind::Email { href } | ValueKind::Link { href } => {
                ui.hyperlink_to(item.value, href);
            }
            ValueKind::Social(links) => {
                for link in links.iter() {
                    ui.hyperlink_to(link.name, link.url);
                }
            }
            ValueKind::Text => {
                ui.label(RichText::new(item.value).color(palette.ink_1));
            }
        }
    });
}
