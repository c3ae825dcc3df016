//! Declarative HTML fragment templating using data-attribute directives
//!
//! This crate turns markup templates carrying data-attribute directives
//! into populated, detached document fragments, given a flat key-value
//! state. It is reactivity-free by design: every render clones the
//! template content afresh and resolves it from scratch: no diffing, no
//! caching, no incremental update.
//!
//! # Directives
//!
//! | Marker | Value | Effect |
//! |---|---|---|
//! | `data-tmpl` | template name | identifies a template for lookup |
//! | `data-show` | `[!...]key` | toggles the `display` style |
//! | `data-text` | `[$ctx.]key` | sets text content |
//! | `data-attr` / `data-attrs` | `name=[$ctx.]key,...` | sets attributes |
//! | `data-slot` | (none) | insertion point for child content |
//!
//! # Examples
//!
//! ```rust,ignore
//! use html_stamp::{State, Template};
//!
//! let template = Template::from_str(r#"
//!     <template data-tmpl="card">
//!         <article>
//!             <h1 data-text="title"></h1>
//!             <a data-attr="href=link" data-show="link"></a>
//!             <ul data-slot></ul>
//!         </article>
//!     </template>
//! "#)?;
//!
//! let state = State::from_pairs([("title", "Hello"), ("link", "/hello")]);
//! let fragment = template.instantiate(&state)?;
//! assert!(fragment.html().contains("Hello"));
//!
//! // child content goes through the slot
//! let fragment = template.instantiate_with(&state, |_clone, _state| {
//!     "<li>static child</li>"
//! })?;
//! # Ok::<(), html_stamp::Error>(())
//! ```

pub mod diagnostics;
pub mod directives;
pub mod error;
pub mod expr;
pub mod node_ext;
pub mod registry;
pub mod renderer;
pub mod state;
pub mod types;

// Re-export commonly used types
pub use diagnostics::{CaptureDiagnostics, Diagnostics, LogDiagnostics};
pub use directives::{
    resolve_directives, DirectiveKind, ATTRS_ATTR, ATTR_ATTR, SHOW_ATTR, SLOT_ATTR, TEMPLATE_ATTR,
    TEXT_ATTR,
};
pub use error::{Error, Result};
pub use expr::CTX_PREFIX;
pub use node_ext::NodeExt;
pub use registry::TemplateRegistry;
pub use renderer::Instantiator;
pub use state::State;
pub use types::{ChildContent, Fragment, MissingKeyMode, Template, TemplateConfig};
