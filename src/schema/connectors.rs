use eframe::egui::{Pos2, pos2};

use super::registry::{Connection, Node, SchemaRegistry, Side};

pub const NODE_WIDTH: f32 = 140.0;
pub const NODE_HEIGHT: f32 = 80.0;
pub const ARROW_SIZE: f32 = 6.0;
pub const DIAMOND_RADIUS: f32 = 4.5;

pub const OPACITY_IDLE: f32 = 0.75;
pub const OPACITY_DIMMED: f32 = 0.55;

/// Everything needed to paint one connection, in canvas units.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorGeometry {
    pub start: Pos2,
    pub end: Pos2,
    // Polyline from start to end
    pub path: Vec<Pos2>,
    pub arrow: [Pos2; 3],
    pub source_diamond: [Pos2; 4],
    pub target_diamond: [Pos2; 4],
    pub opacity: f32,
}

pub fn node_width(node: &Node) -> f32 {
    node.width.unwrap_or(NODE_WIDTH)
}

/// Edge midpoint of a node. Unknown ids resolve to the origin.
pub fn anchor(node: Option<&Node>, side: Side) -> Pos2 {
    let Some(node) = node else {
        return Pos2::ZERO;
    };
    let y = node.pos.y + NODE_HEIGHT / 2.0;
    match side {
        Side::Left => pos2(node.pos.x, y),
        Side::Right => pos2(node.pos.x + node_width(node), y),
    }
}

/// Manhattan route through the horizontal midpoint for opposite sides,
/// a straight segment for same-side connections.
pub fn orthogonal_path(start: Pos2, end: Pos2, from_side: Side, to_side: Side) -> Vec<Pos2> {
    if from_side == to_side {
        return vec![start, end];
    }
    let mid_x = (start.x + end.x) / 2.0;
    vec![start, pos2(mid_x, start.y), pos2(mid_x, end.y), end]
}

pub fn arrowhead(end: Pos2, to_side: Side) -> [Pos2; 3] {
    let half = ARROW_SIZE / 2.0;
    // Tip on the anchor, base ARROW_SIZE inside the target box
    let back = match to_side {
        Side::Left => end.x + ARROW_SIZE,
        Side::Right => end.x - ARROW_SIZE,
    };
    [end, pos2(back, end.y - half), pos2(back, end.y + half)]
}

pub fn diamond(center: Pos2) -> [Pos2; 4] {
    let r = DIAMOND_RADIUS;
    [
        pos2(center.x, center.y - r),
        pos2(center.x + r, center.y),
        pos2(center.x, center.y + r),
        pos2(center.x - r, center.y),
    ]
}

pub fn connector(registry: &SchemaRegistry, conn: &Connection, any_selected: bool) -> ConnectorGeometry {
    let start = anchor(registry.node(&conn.from), conn.from_side);
    let end = anchor(registry.node(&conn.to), conn.to_side);
    ConnectorGeometry {
        start,
        end,
        path: orthogonal_path(start, end, conn.from_side, conn.to_side),
        arrow: arrowhead(end, conn.to_side),
        source_diamond: diamond(start),
        target_diamond: diamond(end),
        opacity: if any_selected { OPACITY_DIMMED } else { OPACITY_IDLE },
    }
}

pub fn build_connectors(registry: &SchemaRegistry, any_selected: bool) -> Vec<ConnectorGeometry> {
    registry
        .connections
        .iter()
        .map(|conn| connector(registry, conn, any_selected))
        .collect()
}
