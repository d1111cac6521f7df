use std::collections::HashSet;

use eframe::egui::{Pos2, pos2};

// Basic type aliases for clarity
pub type NodeId = String;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Category {
    Table,
    Query,
    Result,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug)]
pub struct Node {
    pub id: NodeId,
    pub title: String,
    pub category: Category,
    pub fields: Vec<String>,
    // Current layout position (top-left), mutated by drags and responsive layout
    pub pos: Pos2,
    // Position from the static table; the compact layout resets to this
    pub home: Pos2,
    pub color: String,
    pub width: Option<f32>,
}

impl Node {
    pub fn new(id: &str, title: &str, category: Category, fields: &[&str], x: f32, y: f32, color: &str) -> Self {
        Node {
            id: id.to_string(),
            title: title.to_string(),
            category,
            fields: fields.iter().map(|f| f.to_string()).collect(),
            pos: pos2(x, y),
            home: pos2(x, y),
            color: color.to_string(),
            width: None,
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connection {
    pub from: NodeId,
    pub to: NodeId,
    pub from_side: Side,
    pub to_side: Side,
}

impl Connection {
    pub fn new(from: &str, to: &str, from_side: Side, to_side: Side) -> Self {
        Connection { from: from.to_string(), to: to.to_string(), from_side, to_side }
    }
}

/// Problems in the authored node table. None of these are fatal; they only
/// make lookups ambiguous or edges degenerate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuditFinding {
    DuplicateId(NodeId),
    DuplicateTitle(String),
    DanglingEndpoint { connection: usize, id: NodeId },
}

impl std::fmt::Display for AuditFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditFinding::DuplicateId(id) => write!(f, "duplicate node id '{}'", id),
            AuditFinding::DuplicateTitle(t) => write!(f, "duplicate node title '{}'", t),
            AuditFinding::DanglingEndpoint { connection, id } => {
                write!(f, "connection #{} references unknown node '{}'", connection, id)
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct SchemaRegistry {
    pub nodes: Vec<Node>,
    pub connections: Vec<Connection>,
}

impl SchemaRegistry {
    pub fn new(nodes: Vec<Node>, connections: Vec<Connection>) -> Self {
        SchemaRegistry { nodes, connections }
    }

    /// The portfolio diagram: three staggered columns at x = 80, 320, 560.
    pub fn portfolio() -> Self {
        use Category::*;
        let nodes = vec![
            // column 1
            Node::new(
                "result_b1", "education", Result,
                &["university", "degree", "major", "minor", "cognate", "honors", "graduation_date", "snapshots"],
                80.0, 40.0, "#63D18A",
            ),
            Node::new(
                "special_orders", "work_experience", Table,
                &["company", "role", "responsibilities", "timeframe", "snapshots"],
                80.0, 200.0, "#A58BFF",
            ),
            Node::new(
                "customers", "about", Table,
                &["identity", "focus", "mission", "philosophy", "domains", "style", "snapshots"],
                80.0, 370.0, "#6FA8FF",
            ),
            Node::new(
                "rs1", "system_guide", Result,
                &["interaction", "system_navigation", "click_rules", "keyboard_shortcuts", "line_meaning", "node_meaning", "image_guide"],
                80.0, 540.0, "#F76868",
            ),
            // column 2
            Node::new(
                "result_a1", "volunteering", Result,
                &["organization", "role", "population_served", "year", "summary"],
                320.0, 50.0, "#E9C856",
            ),
            Node::new(
                "insert_select1", "toolkit", Query,
                &["stats_ability", "tools", "visualization", "modeling_style", "communication_skill", "languages"],
                320.0, 210.0, "#C976D9",
            ),
            Node::new(
                "orders", "research_analysis", Table,
                &["project", "dataset", "variables", "analysis_method", "findings", "github", "snapshots"],
                320.0, 380.0, "#4BC7CF",
            )
            .with_width(185.0),
            Node::new(
                "large_orders", "certification", Table,
                &["certification_name", "granting_org", "year", "credential_id", "notes"],
                320.0, 550.0, "#F781AD",
            ),
            // column 3
            Node::new(
                "vaal", "contact", Table,
                &["email", "location", "portfolio", "social"],
                560.0, 40.0, "#FFB199",
            ),
            Node::new(
                "medium_orders", "personal_projects", Table,
                &["project_name", "problem", "approach", "what_it_does", "tech_summary", "outcomes", "link", "snapshots"],
                560.0, 185.0, "#54D0BB",
            ),
            Node::new(
                "small_orders", "advocacy", Table,
                &["organization", "role", "program", "population_served", "impact_summary", "year"],
                560.0, 360.0, "#F7A45A",
            ),
        ];

        use Side::{Left, Right};
        let connections = vec![
            Connection::new("result_b1", "customers", Right, Right),
            Connection::new("customers", "vaal", Right, Left),
            Connection::new("orders", "insert_select1", Left, Left),
            Connection::new("medium_orders", "orders", Left, Right),
            Connection::new("large_orders", "insert_select1", Left, Right),
            Connection::new("special_orders", "insert_select1", Right, Left),
            Connection::new("small_orders", "special_orders", Left, Right),
            Connection::new("result_a1", "small_orders", Right, Left),
            Connection::new("rs1", "customers", Right, Right),
        ];

        SchemaRegistry::new(nodes, connections)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    // First match wins when titles collide
    pub fn node_by_title(&self, title: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.title == title)
    }

    pub fn set_position(&mut self, id: &str, pos: Pos2) -> bool {
        if let Some(node) = self.node_mut(id) {
            node.pos = pos;
            true
        } else {
            false
        }
    }

    pub fn reset_positions(&mut self) {
        for node in &mut self.nodes {
            node.pos = node.home;
        }
    }

    /// Ids on the other end of every connection touching `id`.
    pub fn connected_ids(&self, id: &str) -> HashSet<NodeId> {
        let mut out = HashSet::new();
        for conn in &self.connections {
            if conn.from == id {
                out.insert(conn.to.clone());
            }
            if conn.to == id {
                out.insert(conn.from.clone());
            }
        }
        out
    }

    /// Nodes with a connection pointing into `id`, in registry order.
    pub fn inputs(&self, id: &str) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|n| self.connections.iter().any(|c| c.from == n.id && c.to == id))
            .collect()
    }

    /// Nodes that `id` points at, in registry order.
    pub fn outputs(&self, id: &str) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|n| self.connections.iter().any(|c| c.from == id && c.to == n.id))
            .collect()
    }

    pub fn audit(&self) -> Vec<AuditFinding> {
        let mut findings = Vec::new();
        let mut ids: HashSet<&str> = HashSet::new();
        let mut titles: HashSet<&str> = HashSet::new();
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                findings.push(AuditFinding::DuplicateId(node.id.clone()));
            }
            if !titles.insert(node.title.as_str()) {
                findings.push(AuditFinding::DuplicateTitle(node.title.clone()));
            }
        }
        for (idx, conn) in self.connections.iter().enumerate() {
            for end in [&conn.from, &conn.to] {
                if !ids.contains(end.as_str()) {
                    findings.push(AuditFinding::DanglingEndpoint { connection: idx, id: end.clone() });
                }
            }
        }
        findings
    }
}
