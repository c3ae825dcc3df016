//! Template instantiation
//!
//! This module implements the render pipeline that takes a [`Template`]
//! and a [`State`] and produces a detached, populated [`Fragment`]:
//! re-parse the stored content HTML into a fresh document, resolve every
//! directive in place, then optionally attach child-provider output into
//! the slot element.

use dom_query::Document;

use crate::directives::resolve_directives;
use crate::error::{Error, Result};
use crate::state::State;
use crate::types::{ChildContent, Fragment, Template};

/// One-shot renderer binding a template to a render call
pub struct Instantiator<'a> {
    template: &'a Template,
}

impl<'a> Instantiator<'a> {
    pub fn new(template: &'a Template) -> Self {
        Self { template }
    }

    /// Instantiate without child content
    pub fn instantiate(&self, state: &State) -> Result<Fragment> {
        self.clone_and_resolve(state)
    }

    /// Instantiate and append the provider's output into the slot
    ///
    /// The provider runs against the already-resolved clone, so slot
    /// insertion never re-resolves injected content. A provider returning
    /// nothing is always fine; a provider returning content against a
    /// slot-less template is a hard [`Error::SlotError`]. The missing-slot
    /// warning is emitted before the provider runs, whatever it returns.
    pub fn instantiate_with<F, C>(&self, state: &State, child_provider: F) -> Result<Fragment>
    where
        F: FnOnce(&Fragment, &State) -> C,
        C: Into<ChildContent>,
    {
        let fragment = self.clone_and_resolve(state)?;

        if fragment.slot_node().is_none() {
            self.template.config.diagnostics.warn(&self.missing_slot_message());
        }

        let content: ChildContent = child_provider(&fragment, state).into();
        if content.is_empty() {
            return Ok(fragment);
        }

        {
            let slot = fragment.slot_node().ok_or_else(|| {
                Error::slot_static("child content supplied but template has no slot element")
            })?;
            match content {
                ChildContent::None => {}
                ChildContent::One(child) => slot.append_html(child.html()),
                ChildContent::Many(children) => {
                    for child in children {
                        slot.append_html(child.html());
                    }
                }
                ChildContent::Raw(html) => slot.append_html(html),
            }
        }

        Ok(fragment)
    }

    fn clone_and_resolve(&self, state: &State) -> Result<Fragment> {
        // every call re-parses the content: the clone shares nothing with
        // the template or with any other instantiation
        let doc = Document::from(self.template.content_html.as_str());
        let has_elements = !doc.select("body > *").is_empty();
        let has_text = !doc.select("body").text().trim().is_empty();
        if !has_elements && !has_text {
            return Err(Error::render_static("template content produced no nodes"));
        }
        let fragment = Fragment::new(doc, self.template.config.clone());
        resolve_directives(fragment.document(), state, &self.template.config)?;
        Ok(fragment)
    }

    fn missing_slot_message(&self) -> String {
        match self.template.name() {
            Some(name) => format!(
                "template '{}' has no slot element; child content cannot be attached",
                name
            ),
            None => "template has no slot element; child content cannot be attached".to_string(),
        }
    }
}
