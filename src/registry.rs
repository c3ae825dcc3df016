//! Named template collection
//!
//! A [`TemplateRegistry`] gathers every `template[data-tmpl]` element of a
//! markup document into a name-to-template map, so components can look up
//! their stamps by name instead of re-parsing documents per render.

use dom_query::Document;
use indexmap::IndexMap;

use crate::directives::TEMPLATE_ATTR;
use crate::error::{Error, Result};
use crate::types::{Template, TemplateConfig};

/// Registry of named templates extracted from one document
///
/// Insertion order follows document order. Duplicate names are rejected:
/// silently shadowing a named template would corrupt lookups invisibly.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: IndexMap<String, Template>,
}

impl TemplateRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every named template from an HTML document
    pub fn from_html(html: &str) -> Result<Self> {
        Self::from_html_with_config(html, TemplateConfig::default())
    }

    /// Collect every named template, propagating a configuration to each
    pub fn from_html_with_config(html: &str, config: TemplateConfig) -> Result<Self> {
        let document = Document::from(html);
        let selection = document.select(&format!("template[{}]", TEMPLATE_ATTR));

        let mut registry = Self::new();
        for node in selection.nodes() {
            let template = Template::from_node_with_config(node, config.clone())?;
            registry.insert(template)?;
        }
        Ok(registry)
    }

    /// Add a template under its own name
    pub fn insert(&mut self, template: Template) -> Result<()> {
        let name = template
            .name()
            .ok_or_else(|| Error::parse_static("cannot register an unnamed template"))?
            .to_string();
        if self.templates.contains_key(&name) {
            return Err(Error::parse_owned(format!(
                "duplicate template name: {}",
                name
            )));
        }
        self.templates.insert(name, template);
        Ok(())
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Whether a template with the given name exists
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Template names in document order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
