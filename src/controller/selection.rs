use std::time::{Duration, Instant};

use eframe::egui::Key;

use super::deferred::{AUTO_OPEN_DELAY, Deferred};
use crate::persistence::session::SessionStore;
use crate::schema::registry::{Node, NodeId, SchemaRegistry};

/// Keyboard and sidebar traversal order, by node title.
pub const NAV_ORDER: [&str; 11] = [
    "system_guide",
    "about",
    "education",
    "research_analysis",
    "toolkit",
    "personal_projects",
    "work_experience",
    "advocacy",
    "volunteering",
    "certification",
    "contact",
];

/// Node opened automatically on the first visit of a session.
pub const INTRO_TITLE: &str = "system_guide";
pub const VISITED_KEY: &str = "hasVisitedDiagram";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavDirection {
    Next,
    Previous,
}

impl NavDirection {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::ArrowDown | Key::ArrowRight => Some(NavDirection::Next),
            Key::ArrowUp | Key::ArrowLeft => Some(NavDirection::Previous),
            _ => None,
        }
    }
}

/// Conditions under which arrow keys must not move the selection.
#[derive(Copy, Clone, Debug, Default)]
pub struct NavGuard {
    pub text_input_focused: bool,
    pub transitioning: bool,
}

impl NavGuard {
    fn blocks(&self) -> bool {
        self.text_input_focused || self.transitioning
    }
}

/// Owns "which node is open". At most one node is selected; clicks toggle.
#[derive(Debug)]
pub struct SelectionController {
    selected: Option<NodeId>,
    order: Vec<String>,
    auto_open: Option<Deferred<()>>,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(NAV_ORDER.iter().map(|t| t.to_string()).collect())
    }
}

impl SelectionController {
    pub fn new(order: Vec<String>) -> Self {
        SelectionController { selected: None, order, auto_open: None }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Selecting the open node closes it; anything else replaces the selection.
    pub fn select(&mut self, id: &str) {
        if self.is_selected(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
        log::debug!("selection -> {:?}", self.selected);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Sidebar listing: nodes in traversal order, unknown titles at the end in
    /// registry order.
    pub fn sorted_nodes<'a>(&self, registry: &'a SchemaRegistry) -> Vec<&'a Node> {
        let mut nodes: Vec<&Node> = registry.nodes.iter().collect();
        nodes.sort_by_key(|n| self.order.iter().position(|t| *t == n.title).unwrap_or(usize::MAX));
        nodes
    }

    fn ordered_ids(&self, registry: &SchemaRegistry) -> Vec<NodeId> {
        self.order
            .iter()
            .filter_map(|title| registry.node_by_title(title))
            .map(|n| n.id.clone())
            .collect()
    }

    /// Moves the selection one step along the traversal order, wrapping at both
    /// ends. Returns true if the selection changed.
    pub fn navigate(&mut self, dir: NavDirection, registry: &SchemaRegistry, guard: NavGuard) -> bool {
        if guard.blocks() {
            return false;
        }
        let ordered = self.ordered_ids(registry);
        let Some(first) = ordered.first().cloned() else {
            return false;
        };
        let current = self
            .selected
            .as_ref()
            .and_then(|sel| ordered.iter().position(|id| id == sel));
        let next = match current {
            None => first,
            Some(idx) => {
                let len = ordered.len();
                let step = match dir {
                    NavDirection::Next => (idx + 1) % len,
                    NavDirection::Previous => (idx + len - 1) % len,
                };
                ordered[step].clone()
            }
        };
        let changed = self.selected.as_deref() != Some(next.as_str());
        self.selected = Some(next);
        changed
    }

    /// Arms the first-visit auto-open unless this session already saw it.
    pub fn enter_main_view(&mut self, session: &SessionStore, now: Instant) {
        if session.get(VISITED_KEY).is_some() {
            return;
        }
        self.auto_open = Some(Deferred::new(now, AUTO_OPEN_DELAY, ()));
    }

    /// Tears down the main view: pending auto-open is cancelled, selection cleared.
    pub fn leave_main_view(&mut self) {
        if let Some(timer) = self.auto_open.as_mut() {
            timer.cancel();
        }
        self.auto_open = None;
        self.selected = None;
    }

    pub fn tick(&mut self, now: Instant, registry: &SchemaRegistry, session: &mut SessionStore) {
        let Some(timer) = self.auto_open.as_mut() else {
            return;
        };
        if timer.poll(now).is_none() {
            return;
        }
        self.auto_open = None;
        match registry.node_by_title(INTRO_TITLE) {
            Some(node) => self.selected = Some(node.id.clone()),
            None => log::warn!("intro node '{}' not found; skipping auto-open", INTRO_TITLE),
        }
        if let Err(e) = session.set(VISITED_KEY, "true") {
            log::warn!("could not persist session flag: {}", e);
        }
    }

    pub fn pending_auto_open(&self, now: Instant) -> Option<Duration> {
        self.auto_open.as_ref().and_then(|t| t.remaining(now))
    }
}
