//! Error handling for html-stamp
//!
//! All fallible operations in this crate return [`Result<T>`]. The error
//! enum is small on purpose: the engine treats most authoring mistakes
//! (unknown state keys, malformed directive expressions) as data, not as
//! errors, so only structural failures surface here.
//!
//! # Error Types
//!
//! - [`Error::ParseError`] - template extraction and lookup errors
//! - [`Error::RenderError`] - fragment rendering and DOM mutation errors
//! - [`Error::SlotError`] - child content supplied with no slot element
//!
//! # Memory Efficiency
//!
//! Error messages use `Cow<'static, str>` to avoid allocations for static
//! messages while still supporting owned strings with runtime context.

use std::borrow::Cow;
use thiserror::Error;

/// Error type for all html-stamp operations
#[derive(Error, Debug)]
pub enum Error {
    /// Template extraction and lookup errors
    ///
    /// Occurs when template content is empty, a named template cannot be
    /// found, a registry contains duplicate names, or state input is not a
    /// flat scalar mapping.
    #[error("Parse error: {0}")]
    ParseError(Cow<'static, str>),

    /// Fragment rendering and DOM mutation errors
    #[error("Render error: {0}")]
    RenderError(Cow<'static, str>),

    /// A child provider returned content but the template has no slot
    ///
    /// Silently dropping rendered child content would corrupt output
    /// invisibly, so attaching to a nonexistent slot is a hard failure.
    #[error("Slot error: {0}")]
    SlotError(Cow<'static, str>),
}

impl Error {
    /// Create a parse error with a static string
    pub fn parse_static(msg: &'static str) -> Self {
        Error::ParseError(Cow::Borrowed(msg))
    }

    /// Create a parse error with an owned string
    pub fn parse_owned(msg: String) -> Self {
        Error::ParseError(Cow::Owned(msg))
    }

    /// Create a render error with a static string
    pub fn render_static(msg: &'static str) -> Self {
        Error::RenderError(Cow::Borrowed(msg))
    }

    /// Create a render error with an owned string
    pub fn render_owned(msg: String) -> Self {
        Error::RenderError(Cow::Owned(msg))
    }

    /// Create a slot error with a static string
    pub fn slot_static(msg: &'static str) -> Self {
        Error::SlotError(Cow::Borrowed(msg))
    }

    /// Create a slot error with an owned string
    pub fn slot_owned(msg: String) -> Self {
        Error::SlotError(Cow::Owned(msg))
    }
}

/// Result type alias for html-stamp operations
pub type Result<T> = std::result::Result<T, Error>;
