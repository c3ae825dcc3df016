//! Core template types and configuration
//!
//! This module contains the main types used throughout the library:
//!
//! - [`Template`] - a named, inert markup subtree used as a stamp
//! - [`Fragment`] - the detached, resolved output of one instantiation
//! - [`ChildContent`] - polymorphic child-provider output
//! - [`TemplateConfig`] / [`MissingKeyMode`] - per-template behavior
//!
//! # Usage
//!
//! ```rust,ignore
//! use html_stamp::{State, Template};
//!
//! let template = Template::from_str(
//!     r#"<template data-tmpl="card"><h1 data-text="title"></h1></template>"#,
//! )?;
//! let fragment = template.instantiate(&State::from_pairs([("title", "Hello")]))?;
//! assert!(fragment.html().contains("Hello"));
//! ```

use std::fmt;
use std::sync::Arc;

use dom_query::{Document, Node, Selection};

use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::directives::{SLOT_ATTR, TEMPLATE_ATTR};
use crate::error::{Error, Result};
use crate::renderer::Instantiator;
use crate::state::State;

/// Resolution of a directive expression naming a key the state does not hold
///
/// Missing keys are never an error; the mode decides what text lands in the
/// output. The default preserves the reference behavior of surfacing a
/// visible sentinel so omissions are noticed rather than silently blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingKeyMode {
    /// Missing keys resolve to the literal text `undefined`
    #[default]
    Sentinel,
    /// Missing keys resolve to the empty string
    Empty,
}

impl MissingKeyMode {
    pub(crate) fn fallback(self) -> &'static str {
        match self {
            MissingKeyMode::Sentinel => "undefined",
            MissingKeyMode::Empty => "",
        }
    }
}

/// Per-template configuration
///
/// Carries the missing-key resolution mode and the diagnostics sink for
/// non-fatal warnings. Configs are cheap to clone and propagate from a
/// template to the fragments and nested templates it produces.
#[derive(Clone)]
pub struct TemplateConfig {
    pub(crate) missing_key: MissingKeyMode,
    pub(crate) diagnostics: Arc<dyn Diagnostics>,
}

impl TemplateConfig {
    /// Create a configuration with default behavior
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the missing-key resolution mode
    pub fn with_missing_key_mode(mut self, mode: MissingKeyMode) -> Self {
        self.missing_key = mode;
        self
    }

    /// Set the diagnostics sink receiving non-fatal warnings
    pub fn with_diagnostics(mut self, sink: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = sink;
        self
    }

    pub fn missing_key_mode(&self) -> MissingKeyMode {
        self.missing_key
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            missing_key: MissingKeyMode::Sentinel,
            diagnostics: Arc::new(LogDiagnostics),
        }
    }
}

impl fmt::Debug for TemplateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateConfig")
            .field("missing_key", &self.missing_key)
            .finish()
    }
}

/// A static, named, inert markup subtree used as a stamp for rendering
///
/// Templates are read-only: instantiation clones the content and mutates
/// only the clone. The content is stored as serialized HTML and re-parsed
/// into a fresh document per render call, so instantiations share no
/// mutable structure with the template or with each other.
#[derive(Debug, Clone)]
pub struct Template {
    pub(crate) name: Option<String>,
    pub(crate) content_html: String,
    pub(crate) config: TemplateConfig,
}

impl Template {
    /// Create a template from an HTML string
    ///
    /// When the input carries a top-level `<template>` element, the first
    /// one is used: its `data-tmpl` attribute becomes the name and its
    /// content becomes the stamp. Otherwise the whole input is taken
    /// verbatim as unnamed template content, including any nested
    /// `<template>` elements, which stay inert until looked up through
    /// [`Fragment::template`].
    pub fn from_str(html: &str) -> Result<Self> {
        Self::from_str_with_config(html, TemplateConfig::default())
    }

    /// Create a template from an HTML string with custom configuration
    pub fn from_str_with_config(html: &str, config: TemplateConfig) -> Result<Self> {
        let document = Document::from(html);
        let templates = document.select("template");
        // the parser may place a bare template under head or body; only a
        // top-level element is the template itself, anything deeper is
        // nested content
        let top_level = templates.nodes().iter().find(|node| {
            node.parent()
                .and_then(|parent| parent.node_name().map(|n| n.to_lowercase()))
                .map(|name| matches!(name.as_str(), "html" | "head" | "body"))
                .unwrap_or(true)
        });
        if let Some(node) = top_level {
            return Self::from_node_with_config(node, config);
        }
        if html.trim().is_empty() {
            return Err(Error::parse_static("template has no content"));
        }
        Ok(Self {
            name: None,
            content_html: html.to_string(),
            config,
        })
    }

    /// Create a template from an element already held in a document
    pub fn from_node(node: &Node) -> Result<Self> {
        Self::from_node_with_config(node, TemplateConfig::default())
    }

    /// Create a template from an element with custom configuration
    pub fn from_node_with_config(node: &Node, config: TemplateConfig) -> Result<Self> {
        let name = node.attr(TEMPLATE_ATTR).map(|s| s.to_string());
        let content_html = template_content_html(node);
        if content_html.trim().is_empty() {
            return Err(Error::parse_static("template has no content"));
        }
        Ok(Self {
            name,
            content_html,
            config,
        })
    }

    /// The template's name, when it carries the `data-tmpl` marker
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The serialized template content
    pub fn content_html(&self) -> &str {
        &self.content_html
    }

    pub fn config(&self) -> &TemplateConfig {
        &self.config
    }

    /// Replace the template's configuration
    pub fn with_config(mut self, config: TemplateConfig) -> Self {
        self.config = config;
        self
    }

    /// Instantiate the template against a state
    pub fn instantiate(&self, state: &State) -> Result<Fragment> {
        Instantiator::new(self).instantiate(state)
    }

    /// Instantiate the template, appending child content into the slot
    ///
    /// The provider is invoked with the already directive-resolved clone
    /// and the state; whatever it returns converts into [`ChildContent`]
    /// (zero, one, or many items).
    pub fn instantiate_with<F, C>(&self, state: &State, child_provider: F) -> Result<Fragment>
    where
        F: FnOnce(&Fragment, &State) -> C,
        C: Into<ChildContent>,
    {
        Instantiator::new(self).instantiate_with(state, child_provider)
    }
}

/// Serialized content of a template-bearing node
///
/// `<template>` element contents live in the parser's separate fragment
/// tree and must be read from there; any other element contributes its
/// inner HTML.
pub(crate) fn template_content_html(node: &Node) -> String {
    let is_template = node
        .node_name()
        .map(|name| name.to_lowercase() == "template")
        .unwrap_or(false);
    if is_template {
        let contents_id = node
            .query(|tree_node| {
                tree_node
                    .as_element()
                    .and_then(|elem| elem.template_contents)
            })
            .flatten();
        if let Some(contents_id) = contents_id {
            let contents = Node::new(contents_id, node.tree);
            return contents.inner_html().to_string();
        }
    }
    node.inner_html().to_string()
}

/// The detached, resolved output of one instantiation call
///
/// Owns its document; the engine holds no reference to it after the render
/// call returns. The instantiating template's configuration is carried
/// along so nested templates looked up through [`Fragment::template`]
/// inherit it.
pub struct Fragment {
    doc: Document,
    config: TemplateConfig,
}

impl Fragment {
    pub(crate) fn new(doc: Document, config: TemplateConfig) -> Self {
        Self { doc, config }
    }

    /// The underlying document
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Select elements in the fragment by CSS selector
    pub fn select(&self, selector: &str) -> Selection {
        self.doc.select(selector)
    }

    /// Serialize the fragment back to HTML
    pub fn html(&self) -> String {
        let body = self.doc.select("body");
        if let Some(body_node) = body.nodes().first() {
            return body_node.inner_html().to_string();
        }
        let mut out = String::new();
        for node in self.doc.select(":root > *").nodes() {
            out.push_str(&node.html());
        }
        out
    }

    /// Look up a nested named template inside the fragment
    ///
    /// This is the child-provider use case: a resolved clone may carry
    /// `template[data-tmpl]` elements whose instantiation is driven by the
    /// caller. The returned template inherits this fragment's
    /// configuration.
    pub fn template(&self, name: &str) -> Result<Template> {
        let selector = format!("template[{}='{}']", TEMPLATE_ATTR, name);
        let selection = self.doc.select(&selector);
        match selection.nodes().first() {
            Some(node) => Template::from_node_with_config(node, self.config.clone()),
            None => Err(Error::parse_owned(format!("template not found: {}", name))),
        }
    }

    /// The first element carrying the slot marker, in document order
    ///
    /// Slots inside nested template subtrees belong to those templates'
    /// own instantiations and are skipped.
    pub(crate) fn slot_node(&self) -> Option<Node> {
        let selector = format!("[{}]", SLOT_ATTR);
        let selection = self.doc.select(&selector);
        selection
            .nodes()
            .iter()
            .find(|node| !crate::directives::inside_template(node))
            .cloned()
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fragment")
            .field("html", &self.html())
            .finish()
    }
}

/// Child-provider output: zero, one, or many items
///
/// Providers rarely name this type; closures returning a [`Fragment`], a
/// `Vec<Fragment>`, an `Option<Fragment>`, raw HTML, or `()` all convert
/// into it.
#[derive(Debug)]
pub enum ChildContent {
    /// Nothing to attach
    None,
    /// A single resolved fragment
    One(Fragment),
    /// Multiple resolved fragments, appended in order
    Many(Vec<Fragment>),
    /// Raw static markup
    Raw(String),
}

impl ChildContent {
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            ChildContent::None => true,
            ChildContent::One(_) => false,
            ChildContent::Many(items) => items.is_empty(),
            ChildContent::Raw(html) => html.is_empty(),
        }
    }
}

impl From<Fragment> for ChildContent {
    fn from(fragment: Fragment) -> Self {
        ChildContent::One(fragment)
    }
}

impl From<Vec<Fragment>> for ChildContent {
    fn from(fragments: Vec<Fragment>) -> Self {
        ChildContent::Many(fragments)
    }
}

impl From<Option<Fragment>> for ChildContent {
    fn from(fragment: Option<Fragment>) -> Self {
        match fragment {
            Some(fragment) => ChildContent::One(fragment),
            None => ChildContent::None,
        }
    }
}

impl From<String> for ChildContent {
    fn from(html: String) -> Self {
        ChildContent::Raw(html)
    }
}

impl From<&str> for ChildContent {
    fn from(html: &str) -> Self {
        ChildContent::Raw(html.to_string())
    }
}

impl From<()> for ChildContent {
    fn from(_: ()) -> Self {
        ChildContent::None
    }
}
