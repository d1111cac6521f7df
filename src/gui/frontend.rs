use std::collections::HashMap;
use std::time::Instant;

use eframe::egui::{self, Key};

use crate::controller::deferred::next_wakeup;
use crate::controller::drag::DragController;
use crate::controller::gate::Gate;
use crate::controller::pulse::PulseState;
use crate::controller::selection::{NavDirection, NavGuard, SelectionController};
use crate::inspector::overlay::ImageOverlay;
use crate::persistence::session::SessionStore;
use crate::persistence::settings::{AppSettings, Theme};
use crate::schema::layout::ResponsiveLayout;
use crate::schema::registry::{NodeId, SchemaRegistry};

use super::theme;

const NAV_KEYS: [Key; 4] = [Key::ArrowUp, Key::ArrowDown, Key::ArrowLeft, Key::ArrowRight];

pub struct PortfolioApp {
    pub(crate) registry: SchemaRegistry,
    pub(crate) layout: ResponsiveLayout,
    pub(crate) selection: SelectionController,
    pub(crate) drag: DragController,
    pub(crate) pulses: HashMap<NodeId, PulseState>,
    // Hover from the canvas or the sidebar; both channels write the same datum
    pub(crate) hovered: Option<NodeId>,
    pub(crate) overlay: ImageOverlay,
    pub(crate) gate: Gate,
    pub(crate) session: SessionStore,
    pub(crate) settings: AppSettings,
    applied_theme: Option<Theme>,
    // Login form buffers; the password is never read
    pub(crate) username: String,
    pub(crate) password: String,
    // Compact viewport: sidebar collapsed behind a menu button
    pub(crate) menu_open: bool,
    pub(crate) sheet_drag: f32,
}

impl PortfolioApp {
    pub fn new(settings: AppSettings) -> Self {
        let registry = SchemaRegistry::portfolio();
        for finding in registry.audit() {
            log::warn!("schema registry: {}", finding);
        }
        let session = SessionStore::begin(&settings.session_dir());
        Self {
            registry,
            layout: ResponsiveLayout::new(),
            selection: SelectionController::default(),
            drag: DragController::new(),
            pulses: HashMap::new(),
            hovered: None,
            overlay: ImageOverlay::default(),
            gate: Gate::default(),
            session,
            settings,
            applied_theme: None,
            username: String::from("visitor"),
            password: String::new(),
            menu_open: false,
            sheet_drag: 0.0,
        }
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggled();
        if let Err(e) = self.settings.save() {
            log::warn!("could not save settings: {}", e);
        }
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut SchemaRegistry {
        &mut self.registry
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// Re-lays out the diagram for a new canvas size; same size is a no-op.
    pub fn resize_canvas(&mut self, size: egui::Vec2) -> bool {
        self.layout.on_resize(size, &mut self.registry)
    }

    pub fn enter_main_view(&mut self, now: Instant) {
        log::debug!("entering schema view");
        self.layout.invalidate();
        self.selection.enter_main_view(&self.session, now);
    }

    /// Back to the login gate. The diagram starts over on the next login:
    /// no selection, no pending auto-open, every node at its home position.
    pub fn logout(&mut self) {
        self.selection.leave_main_view();
        self.registry.reset_positions();
        self.gate.logout();
        self.drag = DragController::new();
        self.overlay.close();
        self.hovered = None;
        self.menu_open = false;
    }

    /// Ends this run's session so the next launch sees a first visit again.
    pub fn end_session(&mut self) {
        if let Err(e) = self.session.clear() {
            log::warn!("could not clear session flags: {}", e);
        }
    }

    fn handle_navigation_keys(&mut self, ctx: &egui::Context) {
        let guard = NavGuard {
            text_input_focused: ctx.wants_keyboard_input(),
            transitioning: self.gate.is_transitioning(),
        };
        for key in NAV_KEYS {
            if !ctx.input(|i| i.key_pressed(key)) {
                continue;
            }
            if let Some(dir) = NavDirection::from_key(key) {
                self.selection.navigate(dir, &self.registry, guard);
            }
        }
        if self.overlay.is_open() && ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.overlay.close();
        }
    }

    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        let timers = [
            self.gate.remaining(now),
            self.selection.pending_auto_open(now),
            self.drag.pending_reset(now),
        ];
        let fades = self.pulses.values().map(|p| p.remaining(now));
        if let Some(delay) = next_wakeup(timers.into_iter().chain(fades)) {
            ctx.request_repaint_after(delay);
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        if self.applied_theme != Some(self.settings.theme) {
            theme::apply(ctx, self.settings.theme);
            self.applied_theme = Some(self.settings.theme);
        }

        if self.gate.tick(now) {
            self.enter_main_view(now);
        }

        if self.gate.is_main() {
            self.drag.tick(now);
            self.selection.tick(now, &self.registry, &mut self.session);
            self.handle_navigation_keys(ctx);
            self.hovered = None;
            self.sidebar_ui(ctx);
            self.diagram_ui(ctx, now);
            self.inspector_ui(ctx);
            self.overlay_ui(ctx);
        } else if self.gate.is_transitioning() {
            egui::CentralPanel::default()
                .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
                .show(ctx, |_ui| {});
        } else {
            self.login_ui(ctx, now);
        }

        self.schedule_repaint(ctx, now);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.end_session();
    }
}
