//! Directive resolution
//!
//! This module implements the core of the engine: walking a cloned
//! fragment and applying each recognized directive by reading expressions
//! out of marker attributes and resolving them against the state.
//!
//! Directive kinds are a closed enumeration, with no registration
//! mechanism. Each kind gets its own selector pass over the fragment, in
//! document order; no directive's effect depends on another element's
//! directive, so the pass order across kinds does not affect correctness.

use dom_query::{Document, Node};

use crate::error::Result;
use crate::expr::{parse_attr_pairs, parse_show_expr, strip_ctx_prefix};
use crate::node_ext::NodeExt;
use crate::state::State;
use crate::types::TemplateConfig;

/// Marker attribute identifying a template for lookup by name; not
/// resolved at render time.
pub const TEMPLATE_ATTR: &str = "data-tmpl";
/// Marker attribute toggling element visibility.
pub const SHOW_ATTR: &str = "data-show";
/// Marker attribute setting element text content.
pub const TEXT_ATTR: &str = "data-text";
/// Marker attribute setting named attributes from a `name=key` pair list.
pub const ATTR_ATTR: &str = "data-attr";
/// Alternate pair-list marker; ignored when `data-attr` is also present.
pub const ATTRS_ATTR: &str = "data-attrs";
/// Marker attribute identifying the child-content insertion point.
pub const SLOT_ATTR: &str = "data-slot";

/// The closed set of render-time directive kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Show,
    Text,
    Attr,
}

impl DirectiveKind {
    pub(crate) const ALL: [DirectiveKind; 3] =
        [DirectiveKind::Show, DirectiveKind::Text, DirectiveKind::Attr];

    fn apply(self, doc: &Document, state: &State, config: &TemplateConfig) -> Result<()> {
        match self {
            DirectiveKind::Show => apply_show(doc, state),
            DirectiveKind::Text => apply_text(doc, state, config),
            DirectiveKind::Attr => apply_attr(doc, state, config),
        }
    }
}

/// Resolve every directive in the fragment against the state, in place.
pub fn resolve_directives(doc: &Document, state: &State, config: &TemplateConfig) -> Result<()> {
    for kind in DirectiveKind::ALL {
        kind.apply(doc, state, config)?;
    }
    Ok(())
}

fn apply_show(doc: &Document, state: &State) -> Result<()> {
    let selection = doc.select(&format!("[{}]", SHOW_ATTR));
    for node in selection.nodes() {
        if inside_template(node) {
            continue;
        }
        if let Some(expr) = node.attr(SHOW_ATTR) {
            let (negated, key) = parse_show_expr(&expr);
            let visible = state.truthy(key) != negated;
            if visible {
                // always reset explicitly, never assume a prior value
                node.reset_display();
            } else {
                node.set_display_none();
            }
        }
    }
    Ok(())
}

fn apply_text(doc: &Document, state: &State, config: &TemplateConfig) -> Result<()> {
    let selection = doc.select(&format!("[{}]", TEXT_ATTR));
    for node in selection.nodes() {
        if inside_template(node) {
            continue;
        }
        if let Some(expr) = node.attr(TEXT_ATTR) {
            let key = strip_ctx_prefix(&expr);
            node.set_text_content(resolved_value(state, key, config));
        }
    }
    Ok(())
}

fn apply_attr(doc: &Document, state: &State, config: &TemplateConfig) -> Result<()> {
    for marker in [ATTR_ATTR, ATTRS_ATTR] {
        let selection = doc.select(&format!("[{}]", marker));
        for node in selection.nodes() {
            if inside_template(node) {
                continue;
            }
            // data-attr wins when both markers are present
            if marker == ATTRS_ATTR && node.has_attr(ATTR_ATTR) {
                continue;
            }
            if let Some(list) = node.attr(marker) {
                for (attr_name, expr) in parse_attr_pairs(&list) {
                    let key = strip_ctx_prefix(expr);
                    node.set_attr(attr_name, resolved_value(state, key, config));
                }
            }
        }
    }
    Ok(())
}

fn resolved_value<'s>(state: &'s State, key: &str, config: &TemplateConfig) -> &'s str {
    state.get(key).unwrap_or(config.missing_key.fallback())
}

/// Whether a node sits inside a nested template subtree
///
/// Nested templates are inert: their directives and slots belong to their
/// own instantiation calls, never to the enclosing fragment's resolution.
pub(crate) fn inside_template(node: &Node) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.has_attr(TEMPLATE_ATTR) {
            return true;
        }
        if parent
            .node_name()
            .map(|name| name.to_lowercase() == "template")
            .unwrap_or(false)
        {
            return true;
        }
        current = parent.parent();
    }
    false
}
