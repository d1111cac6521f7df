use super::content::{self, ContentRecord};
use crate::schema::registry::Node;

/// Label of the contact field that renders as icon links.
pub const SOCIAL_LABEL: &str = "social";
/// Value marking the social field as icon links rather than text.
pub const SOCIAL_SENTINEL: &str = "icons";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink { name: "LinkedIn", url: "https://linkedin.com/in/e-deborah-imafidon-34000b272/" },
    SocialLink { name: "GitHub", url: "https://github.com/edebbyi" },
];

const DOMAIN_HINTS: [&str; 6] = ["linkedin.com", "github.com", ".com", ".co", ".org", ".net"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Email { href: String },
    Link { href: String },
    Social(&'static [SocialLink]),
    Text,
}

pub fn is_email(value: &str) -> bool {
    value.contains('@') && !value.starts_with("http") && !value.starts_with("mailto:")
}

pub fn is_url(value: &str) -> bool {
    has_scheme(value) || DOMAIN_HINTS.iter().any(|hint| value.contains(hint))
}

fn has_scheme(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Classifies a field value: email first, then URL, then plain text. The
/// social sentinel short-circuits everything.
pub fn classify(label: &str, value: &str) -> ValueKind {
    if label.eq_ignore_ascii_case(SOCIAL_LABEL) && value == SOCIAL_SENTINEL {
        return ValueKind::Social(&SOCIAL_LINKS);
    }
    if is_email(value) {
        return ValueKind::Email { href: format!("mailto:{}", value) };
    }
    if is_url(value) {
        let href = if has_scheme(value) { value.to_string() } else { format!("https://{}", value) };
        return ValueKind::Link { href };
    }
    ValueKind::Text
}

#[derive(Clone, Debug)]
pub struct ItemView {
    pub label: &'static str,
    pub value: &'static str,
    pub kind: ValueKind,
}

#[derive(Clone, Debug)]
pub struct SectionView {
    pub title: Option<&'static str>,
    pub items: Vec<ItemView>,
    pub snapshots: Vec<&'static str>,
    pub divider_after: bool,
}

/// What the inspector panel shows for one node.
#[derive(Clone, Debug)]
pub struct InspectorView {
    pub title: String,
    pub color: String,
    pub subtitle: Option<&'static str>,
    pub sections: Vec<SectionView>,
    pub project_url: Option<&'static str>,
}

pub fn resolve(node: &Node) -> InspectorView {
    resolve_with(node, content::lookup(&node.title))
}

/// Builds the view from an explicit record; `None` yields a title-only view.
pub fn resolve_with(node: &Node, record: Option<&ContentRecord>) -> InspectorView {
    let mut view = InspectorView {
        title: node.title.clone(),
        color: node.color.clone(),
        subtitle: None,
        sections: Vec::new(),
        project_url: None,
    };
    let Some(record) = record else {
        return view;
    };
    view.subtitle = record.subtitle;
    view.project_url = record.project_url;
    let last = record.sections.len().saturating_sub(1);
    view.sections = record
        .sections
        .iter()
        .enumerate()
        .map(|(idx, section)| SectionView {
            title: section.title.filter(|_| record.show_section_titles),
            items: section
                .items
                .iter()
                .map(|item| ItemView { label: item.label, value: item.value, kind: classify(item.label, item.value) })
                .collect(),
            snapshots: section.snapshots.clone(),
            divider_after: record.section_dividers && idx < last,
        })
        .collect();
    view
}
