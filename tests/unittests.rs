use std::collections::HashSet;
use std::time::{Duration, Instant};

use eframe::egui::{Key, pos2, vec2};

use schema_atlas::controller::deferred::{
    AUTO_OPEN_DELAY, DRAG_RELEASE_DEBOUNCE, Deferred, LOGIN_TRANSITION, PULSE_FADE_OUT, next_wakeup,
};
use schema_atlas::controller::drag::DragController;
use schema_atlas::controller::gate::Gate;
use schema_atlas::controller::pulse::{PulseState, wants_pulse};
use schema_atlas::controller::selection::{NAV_ORDER, NavDirection, NavGuard, SelectionController, VISITED_KEY};
use schema_atlas::gui::frontend::PortfolioApp;
use schema_atlas::inspector::content::{self, ContentRecord, Item, Section};
use schema_atlas::inspector::overlay::{ImageOverlay, sheet_should_dismiss};
use schema_atlas::inspector::resolver::{SOCIAL_LINKS, ValueKind, classify, resolve, resolve_with};
use schema_atlas::persistence::session::SessionStore;
use schema_atlas::persistence::settings::{AppSettings, Theme};
use schema_atlas::schema::connectors::{
    ARROW_SIZE, DIAMOND_RADIUS, OPACITY_DIMMED, OPACITY_IDLE, anchor, build_connectors, connector, node_width, orthogonal_path,
};
use schema_atlas::schema::layout::{LayoutMetrics, ResponsiveLayout};
use schema_atlas::schema::registry::{AuditFinding, Category, Connection, Node, SchemaRegistry, Side};

fn portfolio() -> SchemaRegistry {
    SchemaRegistry::portfolio()
}

fn id_of(reg: &SchemaRegistry, title: &str) -> String {
    reg.node_by_title(title).expect("title present").id.clone()
}

fn open_guard() -> NavGuard {
    NavGuard::default()
}

// ---------- registry ----------

#[test]
fn portfolio_ids_and_titles_are_unique() {
    let reg = portfolio();
    assert_eq!(reg.nodes.len(), 11);
    let ids: HashSet<_> = reg.nodes.iter().map(|n| n.id.as_str()).collect();
    let titles: HashSet<_> = reg.nodes.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(ids.len(), reg.nodes.len());
    assert_eq!(titles.len(), reg.nodes.len());
    assert!(reg.audit().is_empty(), "portfolio audit: {:?}", reg.audit());
}

#[test]
fn every_nav_title_exists_in_portfolio() {
    let reg = portfolio();
    for title in NAV_ORDER {
        assert!(reg.node_by_title(title).is_some(), "missing {}", title);
    }
}

#[test]
fn audit_reports_duplicates_and_dangling_endpoints() {
    let nodes = vec![
        Node::new("a", "alpha", Category::Table, &["x"], 80.0, 0.0, "#000000"),
        Node::new("a", "beta", Category::Table, &["x"], 320.0, 0.0, "#000000"),
        Node::new("c", "alpha", Category::Query, &["x"], 560.0, 0.0, "#000000"),
    ];
    let connections = vec![Connection::new("a", "ghost", Side::Right, Side::Left)];
    let findings = SchemaRegistry::new(nodes, connections).audit();
    assert!(findings.contains(&AuditFinding::DuplicateId("a".into())));
    assert!(findings.contains(&AuditFinding::DuplicateTitle("alpha".into())));
    assert!(findings.contains(&AuditFinding::DanglingEndpoint { connection: 0, id: "ghost".into() }));
}

#[test]
fn neighbour_sets_follow_connections() {
    let reg = portfolio();
    let connected = reg.connected_ids("customers");
    let expected: HashSet<String> = ["result_b1", "vaal", "rs1"].iter().map(|s| s.to_string()).collect();
    assert_eq!(connected, expected);

    let inputs: Vec<&str> = reg.inputs("insert_select1").iter().map(|n| n.id.as_str()).collect();
    assert_eq!(inputs, vec!["special_orders", "orders", "large_orders"]);
    let outputs: Vec<&str> = reg.outputs("customers").iter().map(|n| n.id.as_str()).collect();
    assert_eq!(outputs, vec!["vaal"]);
    assert!(reg.connected_ids("nope").is_empty());
}

#[test]
fn set_position_ignores_unknown_ids() {
    let mut reg = portfolio();
    assert!(!reg.set_position("nope", pos2(1.0, 1.0)));
    assert!(reg.set_position("orders", pos2(5.0, 6.0)));
    assert_eq!(reg.node("orders").unwrap().pos, pos2(5.0, 6.0));
    reg.reset_positions();
    assert_eq!(reg.node("orders").unwrap().pos, pos2(320.0, 380.0));
}

// ---------- selection and navigation ----------

#[test]
fn select_toggles_and_replaces() {
    let mut sel = SelectionController::default();
    sel.select("orders");
    assert_eq!(sel.selected(), Some("orders"));
    sel.select("vaal");
    assert_eq!(sel.selected(), Some("vaal"));
    sel.select("vaal");
    assert_eq!(sel.selected(), None);
    sel.select("orders");
    sel.close();
    assert_eq!(sel.selected(), None);
}

#[test]
fn navigate_from_nothing_selects_first_in_order() {
    let reg = portfolio();
    let mut sel = SelectionController::default();
    assert!(sel.navigate(NavDirection::Next, &reg, open_guard()));
    assert_eq!(sel.selected(), Some(id_of(&reg, "system_guide").as_str()));

    let mut sel = SelectionController::default();
    sel.navigate(NavDirection::Previous, &reg, open_guard());
    assert_eq!(sel.selected(), Some(id_of(&reg, "system_guide").as_str()));
}

#[test]
fn navigate_wraps_in_both_directions() {
    let reg = portfolio();
    let mut sel = SelectionController::default();
    sel.select(&id_of(&reg, "contact"));
    sel.navigate(NavDirection::Next, &reg, open_guard());
    assert_eq!(sel.selected(), Some(id_of(&reg, "system_guide").as_str()));
    sel.navigate(NavDirection::Previous, &reg, open_guard());
    assert_eq!(sel.selected(), Some(id_of(&reg, "contact").as_str()));
}

#[test]
fn navigate_full_cycle_returns_to_start() {
    let reg = portfolio();
    let mut sel = SelectionController::default();
    let start = id_of(&reg, "toolkit");
    sel.select(&start);
    for _ in 0..NAV_ORDER.len() {
        sel.navigate(NavDirection::Next, &reg, open_guard());
    }
    assert_eq!(sel.selected(), Some(start.as_str()));

    sel.navigate(NavDirection::Next, &reg, open_guard());
    sel.navigate(NavDirection::Previous, &reg, open_guard());
    assert_eq!(sel.selected(), Some(start.as_str()));
}

#[test]
fn navigate_from_unlisted_selection_goes_to_first() {
    let reg = portfolio();
    let mut sel = SelectionController::new(vec!["about".into(), "contact".into()]);
    sel.select(&id_of(&reg, "toolkit"));
    sel.navigate(NavDirection::Next, &reg, open_guard());
    assert_eq!(sel.selected(), Some(id_of(&reg, "about").as_str()));
}

#[test]
fn navigate_is_blocked_by_guard() {
    let reg = portfolio();
    let mut sel = SelectionController::default();
    let typing = NavGuard { text_input_focused: true, transitioning: false };
    assert!(!sel.navigate(NavDirection::Next, &reg, typing));
    let fading = NavGuard { text_input_focused: false, transitioning: true };
    assert!(!sel.navigate(NavDirection::Next, &reg, fading));
    assert_eq!(sel.selected(), None);
}

#[test]
fn navigate_with_empty_order_is_noop() {
    let reg = portfolio();
    let mut sel = SelectionController::new(vec!["nothing_here".into()]);
    assert!(!sel.navigate(NavDirection::Next, &reg, open_guard()));
    assert_eq!(sel.selected(), None);
}

#[test]
fn arrow_keys_map_to_directions() {
    assert_eq!(NavDirection::from_key(Key::ArrowDown), Some(NavDirection::Next));
    assert_eq!(NavDirection::from_key(Key::ArrowRight), Some(NavDirection::Next));
    assert_eq!(NavDirection::from_key(Key::ArrowUp), Some(NavDirection::Previous));
    assert_eq!(NavDirection::from_key(Key::ArrowLeft), Some(NavDirection::Previous));
    assert_eq!(NavDirection::from_key(Key::Enter), None);
}

#[test]
fn sidebar_lists_nodes_in_nav_order_with_unknown_last() {
    let mut reg = portfolio();
    reg.nodes.insert(0, Node::new("extra", "zz_extra", Category::Table, &["x"], 80.0, 700.0, "#000000"));
    let sel = SelectionController::default();
    let titles: Vec<&str> = sel.sorted_nodes(&reg).iter().map(|n| n.title.as_str()).collect();
    let mut expected: Vec<&str> = NAV_ORDER.to_vec();
    expected.push("zz_extra");
    assert_eq!(titles, expected);
}

// ---------- first-visit auto-open ----------

#[test]
fn first_visit_auto_opens_intro_once() {
    let reg = portfolio();
    let mut session = SessionStore::in_memory();
    let mut sel = SelectionController::default();
    let t0 = Instant::now();

    sel.enter_main_view(&session, t0);
    sel.tick(t0 + AUTO_OPEN_DELAY - Duration::from_millis(1), &reg, &mut session);
    assert_eq!(sel.selected(), None);
    sel.tick(t0 + AUTO_OPEN_DELAY, &reg, &mut session);
    assert_eq!(sel.selected(), Some("rs1"));
    assert_eq!(session.get(VISITED_KEY), Some("true"));

    // Second entry in the same session does not re-open
    sel.leave_main_view();
    let t1 = t0 + Duration::from_secs(5);
    sel.enter_main_view(&session, t1);
    sel.tick(t1 + AUTO_OPEN_DELAY, &reg, &mut session);
    assert_eq!(sel.selected(), None);
}

#[test]
fn leaving_main_view_cancels_auto_open() {
    let reg = portfolio();
    let mut session = SessionStore::in_memory();
    let mut sel = SelectionController::default();
    let t0 = Instant::now();
    sel.enter_main_view(&session, t0);
    assert!(sel.pending_auto_open(t0).is_some());
    sel.leave_main_view();
    sel.tick(t0 + AUTO_OPEN_DELAY * 2, &reg, &mut session);
    assert_eq!(sel.selected(), None);
    assert_eq!(session.get(VISITED_KEY), None);
}

#[test]
fn auto_open_without_intro_node_still_marks_visited() {
    let reg = SchemaRegistry::new(
        vec![Node::new("a", "about", Category::Table, &["x"], 80.0, 0.0, "#000000")],
        Vec::new(),
    );
    let mut session = SessionStore::in_memory();
    let mut sel = SelectionController::default();
    let t0 = Instant::now();
    sel.enter_main_view(&session, t0);
    sel.tick(t0 + AUTO_OPEN_DELAY, &reg, &mut session);
    assert_eq!(sel.selected(), None);
    assert_eq!(session.get(VISITED_KEY), Some("true"));
}

#[test]
fn new_run_starts_unvisited() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = SessionStore::begin(dir.path());
        assert_eq!(store.get(VISITED_KEY), None);
        store.set(VISITED_KEY, "true").unwrap();
        assert_eq!(store.get(VISITED_KEY), Some("true"));
        assert!(store.path().unwrap().ends_with("session.json"));
        assert!(dir.path().join("session.json").exists());
    }
    let store = SessionStore::begin(dir.path());
    assert_eq!(store.get(VISITED_KEY), None);
    assert!(!dir.path().join("session.json").exists());

    let mut sel = SelectionController::default();
    let t0 = Instant::now();
    sel.enter_main_view(&store, t0);
    assert_eq!(sel.pending_auto_open(t0), Some(AUTO_OPEN_DELAY));
}

#[test]
fn stale_corrupt_session_file_is_discarded() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("session.json"), b"{ not json").unwrap();
    let mut store = SessionStore::begin(dir.path());
    assert_eq!(store.get(VISITED_KEY), None);
    assert!(!dir.path().join("session.json").exists());
    store.set(VISITED_KEY, "true").unwrap();
    assert_eq!(store.get(VISITED_KEY), Some("true"));
}

#[test]
fn clear_ends_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SessionStore::begin(dir.path());
    store.set(VISITED_KEY, "true").unwrap();
    store.clear().unwrap();
    assert_eq!(store.get(VISITED_KEY), None);
    assert!(!dir.path().join("session.json").exists());
    // Clearing an already empty session is fine
    store.clear().unwrap();

    let mut memory = SessionStore::in_memory();
    memory.set(VISITED_KEY, "true").unwrap();
    memory.clear().unwrap();
    assert_eq!(memory.get(VISITED_KEY), None);
}

fn app_in(dir: &std::path::Path) -> PortfolioApp {
    let settings = AppSettings { session_dir_override: Some(dir.to_path_buf()), ..AppSettings::default() };
    PortfolioApp::new(settings)
}

#[test]
fn relaunch_shows_intro_again() {
    let dir = tempfile::tempdir().unwrap();
    // Flag left behind by a run that never reached its exit hook
    {
        let mut previous = SessionStore::begin(dir.path());
        previous.set(VISITED_KEY, "true").unwrap();
    }
    let mut app = app_in(dir.path());
    let t0 = Instant::now();
    app.enter_main_view(t0);
    assert_eq!(app.selection().pending_auto_open(t0), Some(AUTO_OPEN_DELAY));
}

#[test]
fn end_session_removes_flag_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    {
        let mut same_dir = SessionStore::begin(dir.path());
        same_dir.set(VISITED_KEY, "true").unwrap();
    }
    assert!(dir.path().join("session.json").exists());
    app.end_session();
    assert!(!dir.path().join("session.json").exists());

    let mut next = app_in(dir.path());
    let t0 = Instant::now();
    next.enter_main_view(t0);
    assert!(next.selection().pending_auto_open(t0).is_some());
}

#[test]
fn logout_restores_home_positions() {
    let dir = tempfile::tempdir().unwrap();
    let size = vec2(1400.0, 900.0);

    let mut fresh = app_in(dir.path());
    fresh.enter_main_view(Instant::now());
    fresh.resize_canvas(size);
    let home = fresh.registry().node("orders").unwrap().pos;

    let mut app = app_in(dir.path());
    app.enter_main_view(Instant::now());
    app.resize_canvas(size);
    app.registry_mut().set_position("orders", pos2(700.0, 123.0));
    assert_eq!(app.registry().node("orders").unwrap().pos, pos2(700.0, 123.0));

    app.logout();
    assert!(app.selection().selected().is_none());
    app.enter_main_view(Instant::now());
    app.resize_canvas(size);
    assert_eq!(app.registry().node("orders").unwrap().pos, home);
    assert_ne!(home.y, 123.0);
}

// ---------- layout ----------

#[test]
fn scale_is_one_at_base_and_never_above() {
    let m = LayoutMetrics::compute(1100.0, 720.0);
    assert!(m.desktop);
    assert_eq!(m.scale, 1.0);
    let big = LayoutMetrics::compute(3000.0, 2000.0);
    assert_eq!(big.scale, 1.0);
    let small = LayoutMetrics::compute(450.0, 2000.0);
    assert!(!small.desktop);
    assert!((small.scale - 0.5).abs() < 1e-6);
    assert!(small.scale > 0.0 && small.scale <= 1.0);
}

#[test]
fn desktop_threshold_is_exclusive() {
    assert!(!LayoutMetrics::compute(1024.0, 800.0).desktop);
    assert!(LayoutMetrics::compute(1025.0, 800.0).desktop);
}

#[test]
fn wide_containers_spread_columns() {
    let m = LayoutMetrics::compute(1400.0, 900.0);
    assert_eq!(m.column_x[0], 80.0);
    assert!((m.column_x[1] - 344.0).abs() < 1e-4);
    assert!((m.column_x[2] - 608.0).abs() < 1e-4);

    let narrow = LayoutMetrics::compute(1200.0, 900.0);
    assert_eq!(narrow.column_x, [80.0, 320.0, 560.0]);
}

#[test]
fn desktop_remap_keeps_dragged_y() {
    let mut reg = portfolio();
    reg.set_position("orders", pos2(400.0, 123.0));
    let mut layout = ResponsiveLayout::new();
    assert!(layout.on_resize(vec2(1400.0, 900.0), &mut reg));
    let orders = reg.node("orders").unwrap();
    assert!((orders.pos.x - 344.0).abs() < 1e-4);
    assert_eq!(orders.pos.y, 123.0);
    // Same size again is a no-op
    assert!(!layout.on_resize(vec2(1400.0, 900.0), &mut reg));
}

#[test]
fn compact_layout_discards_drags() {
    let mut reg = portfolio();
    reg.set_position("vaal", pos2(10.0, 10.0));
    let mut layout = ResponsiveLayout::new();
    layout.on_resize(vec2(800.0, 900.0), &mut reg);
    assert!(!layout.metrics().desktop);
    assert_eq!(reg.node("vaal").unwrap().pos, pos2(560.0, 40.0));
}

#[test]
fn invalidate_forces_recompute() {
    let mut reg = portfolio();
    let mut layout = ResponsiveLayout::new();
    layout.on_resize(vec2(1100.0, 720.0), &mut reg);
    layout.invalidate();
    assert!(layout.on_resize(vec2(1100.0, 720.0), &mut reg));
}

// ---------- drag ----------

#[test]
fn drag_converts_pointer_into_layout_space() {
    let mut drag = DragController::new();
    let origin = pos2(100.0, 50.0);
    let scale = 0.5;
    // Node at layout (80, 40) sits at screen (140, 70)
    assert!(drag.begin("orders", pos2(150.0, 80.0), pos2(140.0, 70.0), None));
    let (id, pos) = drag.update(pos2(250.0, 180.0), origin, scale).unwrap();
    assert_eq!(id, "orders");
    assert_eq!(pos, pos2(280.0, 240.0));
}

#[test]
fn focused_node_cannot_be_dragged() {
    let mut drag = DragController::new();
    assert!(!drag.begin("orders", pos2(0.0, 0.0), pos2(0.0, 0.0), Some("orders")));
    assert!(drag.dragging().is_none());
    assert!(drag.update(pos2(5.0, 5.0), pos2(0.0, 0.0), 1.0).is_none());
}

#[test]
fn click_after_drag_is_suppressed_until_debounce() {
    let mut drag = DragController::new();
    let t0 = Instant::now();
    drag.begin("vaal", pos2(0.0, 0.0), pos2(0.0, 0.0), None);
    drag.update(pos2(30.0, 0.0), pos2(0.0, 0.0), 1.0);
    drag.end(t0);
    assert!(drag.dragging().is_none());
    assert!(!drag.click("vaal", t0 + Duration::from_millis(10)));
    // Other nodes are unaffected
    assert!(drag.click("orders", t0 + Duration::from_millis(10)));
    assert!(drag.click("vaal", t0 + DRAG_RELEASE_DEBOUNCE));
}

#[test]
fn press_without_motion_still_selects() {
    let mut drag = DragController::new();
    let t0 = Instant::now();
    drag.begin("vaal", pos2(0.0, 0.0), pos2(0.0, 0.0), None);
    drag.end(t0);
    assert!(drag.click("vaal", t0));
}

// ---------- connectors ----------

#[test]
fn same_side_connector_is_straight() {
    let reg = portfolio();
    let conn = &reg.connections[0];
    let geom = connector(&reg, conn, false);
    assert_eq!(geom.start, pos2(220.0, 80.0));
    assert_eq!(geom.end, pos2(220.0, 410.0));
    assert_eq!(geom.path, vec![geom.start, geom.end]);
    assert_eq!(geom.opacity, OPACITY_IDLE);
}

#[test]
fn opposite_side_connector_routes_through_midpoint() {
    let path = orthogonal_path(pos2(0.0, 0.0), pos2(100.0, 50.0), Side::Right, Side::Left);
    assert_eq!(path, vec![pos2(0.0, 0.0), pos2(50.0, 0.0), pos2(50.0, 50.0), pos2(100.0, 50.0)]);
}

#[test]
fn anchors_honor_custom_width() {
    let reg = portfolio();
    let orders = reg.node("orders");
    assert_eq!(anchor(orders, Side::Right), pos2(320.0 + 185.0, 420.0));
    assert_eq!(anchor(orders, Side::Left), pos2(320.0, 420.0));
}

#[test]
fn missing_endpoint_anchors_at_origin() {
    let reg = SchemaRegistry::new(
        vec![Node::new("a", "alpha", Category::Table, &["x"], 80.0, 0.0, "#000000")],
        vec![Connection::new("a", "ghost", Side::Right, Side::Left)],
    );
    let geoms = build_connectors(&reg, true);
    assert_eq!(geoms.len(), 1);
    assert_eq!(geoms[0].end, pos2(0.0, 0.0));
    assert_eq!(geoms[0].opacity, OPACITY_DIMMED);
}

#[test]
fn arrowhead_and_diamonds_sit_on_anchors() {
    let reg = portfolio();
    let conn = Connection::new("customers", "vaal", Side::Right, Side::Left);
    let geom = connector(&reg, &conn, false);
    assert_eq!(geom.arrow[0], geom.end);
    assert_eq!(geom.arrow[1].x, geom.end.x + ARROW_SIZE);
    assert_eq!(geom.source_diamond[0], pos2(geom.start.x, geom.start.y - DIAMOND_RADIUS));
    assert_eq!(geom.target_diamond[1], pos2(geom.end.x + DIAMOND_RADIUS, geom.end.y));
}

#[test]
fn arrowhead_base_lies_inside_target() {
    let reg = portfolio();
    for side in [Side::Left, Side::Right] {
        let conn = Connection::new("customers", "vaal", Side::Right, side);
        let geom = connector(&reg, &conn, false);
        let target = reg.node("vaal").unwrap();
        let (left, right) = (target.pos.x, target.pos.x + node_width(target));
        for base in &geom.arrow[1..] {
            assert!(base.x >= left && base.x <= right, "{side:?}: base {base:?} outside [{left}, {right}]");
            assert_eq!((base.x - geom.end.x).abs(), ARROW_SIZE);
        }
    }
}

// ---------- pulse ----------

#[test]
fn pulse_rule_respects_focus() {
    assert!(wants_pulse(true, false, false));
    assert!(wants_pulse(true, true, true));
    assert!(!wants_pulse(true, false, true));
    assert!(!wants_pulse(false, false, false));
    assert!(!wants_pulse(false, true, true));
}

#[test]
fn pulse_switches_off_after_fade() {
    let mut pulse = PulseState::default();
    let t0 = Instant::now();
    pulse.update(true, t0);
    assert!(pulse.is_animating());
    pulse.update(false, t0);
    assert!(pulse.is_animating());
    assert_eq!(pulse.remaining(t0), Some(PULSE_FADE_OUT));
    pulse.update(false, t0 + Duration::from_millis(1499));
    assert!(pulse.is_animating());
    pulse.update(false, t0 + PULSE_FADE_OUT);
    assert!(!pulse.is_animating());
}

#[test]
fn re_hover_cancels_fade() {
    let mut pulse = PulseState::default();
    let t0 = Instant::now();
    pulse.update(true, t0);
    pulse.update(false, t0);
    pulse.update(true, t0 + Duration::from_millis(500));
    pulse.update(false, t0 + PULSE_FADE_OUT);
    assert!(pulse.is_animating());
}

// ---------- deferred and gate ----------

#[test]
fn deferred_fires_once_and_can_be_cancelled() {
    let t0 = Instant::now();
    let mut timer = Deferred::new(t0, Duration::from_millis(100), 7);
    assert_eq!(timer.poll(t0), None);
    assert_eq!(timer.poll(t0 + Duration::from_millis(100)), Some(7));
    assert_eq!(timer.poll(t0 + Duration::from_millis(200)), None);
    assert!(!timer.is_pending());

    let mut cancelled = Deferred::new(t0, Duration::from_millis(100), ());
    cancelled.cancel();
    assert_eq!(cancelled.poll(t0 + Duration::from_secs(1)), None);
    assert_eq!(cancelled.remaining(t0), None);
}

#[test]
fn next_wakeup_picks_earliest() {
    let got = next_wakeup([None, Some(Duration::from_millis(300)), Some(Duration::from_millis(20))]);
    assert_eq!(got, Some(Duration::from_millis(20)));
    assert_eq!(next_wakeup([None, None]), None);
}

#[test]
fn gate_runs_login_transition_main() {
    let mut gate = Gate::default();
    let t0 = Instant::now();
    assert!(!gate.is_main());
    gate.submit(t0);
    assert!(gate.is_transitioning());
    assert!(!gate.tick(t0 + LOGIN_TRANSITION - Duration::from_millis(1)));
    assert!(gate.tick(t0 + LOGIN_TRANSITION));
    assert!(gate.is_main());
    assert!(!gate.tick(t0 + LOGIN_TRANSITION * 2));
    gate.logout();
    assert!(!gate.is_main() && !gate.is_transitioning());
}

// ---------- settings ----------

#[test]
fn settings_roundtrip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    let mut settings = AppSettings::default();
    assert_eq!(settings.theme, Theme::Light);
    settings.theme = settings.theme.toggled();
    settings.show_grid = false;
    settings.session_dir_override = Some(dir.path().join("session"));
    settings.save_to(&path).unwrap();

    let loaded = AppSettings::load_from(&path).unwrap();
    assert_eq!(loaded.theme, Theme::Dark);
    assert!(!loaded.show_grid);
    assert_eq!(loaded.session_dir(), dir.path().join("session"));
}

#[test]
fn settings_fill_missing_fields_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, br#"{ "theme": "dark" }"#).unwrap();
    let loaded = AppSettings::load_from(&path).unwrap();
    assert_eq!(loaded.theme, Theme::Dark);
    assert!(loaded.show_grid);
    assert_eq!(loaded.session_dir(), AppSettings::session_default_dir());

    let absent = AppSettings::load_from(&dir.path().join("missing.json")).unwrap();
    assert_eq!(absent.theme, Theme::Light);
}

// ---------- inspector ----------

#[test]
fn classify_prefers_email_over_url() {
    assert_eq!(
        classify("email", "name@gmail.com"),
        ValueKind::Email { href: "mailto:name@gmail.com".into() }
    );
    assert_eq!(
        classify("portfolio", "tech.deborahi.com"),
        ValueKind::Link { href: "https://tech.deborahi.com".into() }
    );
    assert_eq!(
        classify("github", "https://github.com/edebbyi"),
        ValueKind::Link { href: "https://github.com/edebbyi".into() }
    );
    assert_eq!(classify("location", "Miami, FL"), ValueKind::Text);
}

#[test]
fn social_sentinel_expands_to_links() {
    assert_eq!(classify("social", "icons"), ValueKind::Social(&SOCIAL_LINKS));
    assert_eq!(classify("Social", "icons"), ValueKind::Social(&SOCIAL_LINKS));
    assert_eq!(classify("social", "linkedin"), ValueKind::Text);
}

#[test]
fn resolve_without_record_is_title_only() {
    let node = Node::new("x", "unknown_thing", Category::Table, &["a"], 80.0, 0.0, "#123456");
    let view = resolve(&node);
    assert_eq!(view.title, "unknown_thing");
    assert_eq!(view.color, "#123456");
    assert!(view.subtitle.is_none());
    assert!(view.sections.is_empty());
    assert!(view.project_url.is_none());
}

#[test]
fn multi_entry_records_hide_titles_and_add_dividers() {
    let reg = portfolio();
    let work = resolve(reg.node("special_orders").unwrap());
    assert_eq!(work.sections.len(), 4);
    assert!(work.sections.iter().all(|s| s.title.is_none()));
    let dividers: Vec<bool> = work.sections.iter().map(|s| s.divider_after).collect();
    assert_eq!(dividers, vec![true, true, true, false]);

    let toolkit = resolve(reg.node("insert_select1").unwrap());
    assert_eq!(toolkit.sections[0].title, Some("Core Skills"));
    assert!(!toolkit.sections[0].divider_after);
}

#[test]
fn research_record_carries_project_url() {
    let reg = portfolio();
    let view = resolve(reg.node("orders").unwrap());
    assert!(view.project_url.is_some_and(|u| u.starts_with("https://github.com/")));
    assert!(!view.sections[0].snapshots.is_empty());
}

#[test]
fn contact_record_resolves_link_kinds() {
    let record = content::lookup("contact").unwrap();
    let node = Node::new("vaal", "contact", Category::Table, &["email"], 560.0, 40.0, "#FFB199");
    let view = resolve_with(&node, Some(record));
    let kinds: Vec<&ValueKind> = view.sections[0].items.iter().map(|i| &i.kind).collect();
    assert!(matches!(kinds[0], ValueKind::Email { .. }));
    assert_eq!(kinds[1], &ValueKind::Text);
    assert!(matches!(kinds[2], ValueKind::Link { .. }));
    assert!(matches!(kinds[3], ValueKind::Social(_)));
}

#[test]
fn resolve_with_custom_record() {
    let record = ContentRecord {
        subtitle: Some("Sub"),
        sections: vec![
            Section { title: Some("One"), items: vec![Item { label: "site", value: "example.org" }], snapshots: vec![] },
            Section { title: Some("Two"), items: vec![], snapshots: vec!["file://a.png"] },
        ],
        project_url: None,
        show_section_titles: true,
        section_dividers: false,
    };
    let node = Node::new("n", "custom", Category::Query, &["a"], 80.0, 0.0, "#000000");
    let view = resolve_with(&node, Some(&record));
    assert_eq!(view.subtitle, Some("Sub"));
    assert_eq!(view.sections[0].title, Some("One"));
    assert_eq!(view.sections[0].items[0].kind, ValueKind::Link { href: "https://example.org".into() });
    assert_eq!(view.sections[1].snapshots, vec!["file://a.png"]);
}

#[test]
fn overlay_closes_on_backdrop_only() {
    let mut overlay = ImageOverlay::default();
    overlay.open("file://a.png");
    overlay.click(true);
    assert_eq!(overlay.current(), Some("file://a.png"));
    overlay.click(false);
    assert!(!overlay.is_open());
}

#[test]
fn sheet_dismisses_past_threshold_in_compact_only() {
    assert!(sheet_should_dismiss(true, 151.0));
    assert!(!sheet_should_dismiss(true, 150.0));
    assert!(!sheet_should_dismiss(false, 400.0));
}
