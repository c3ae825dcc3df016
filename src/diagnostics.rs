//! Diagnostics sink for non-fatal render warnings
//!
//! The engine never prints to process-wide output directly. Warnings (for
//! example a child provider supplied against a template with no slot) go
//! through the [`Diagnostics`] trait, which is injectable via
//! [`TemplateConfig`](crate::TemplateConfig) so the core stays testable.

use std::sync::Mutex;

/// Sink for non-fatal warnings emitted during instantiation
pub trait Diagnostics: Send + Sync {
    fn warn(&self, message: &str);
}

/// Default sink forwarding warnings to the `log` crate
#[derive(Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn warn(&self, message: &str) {
        log::warn!(target: "html_stamp", "{}", message);
    }
}

/// Sink that buffers warnings for inspection, mainly in tests
#[derive(Debug, Default)]
pub struct CaptureDiagnostics {
    messages: Mutex<Vec<String>>,
}

impl CaptureDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages captured so far, in emission order
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("diagnostics lock poisoned").clone()
    }
}

impl Diagnostics for CaptureDiagnostics {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .expect("diagnostics lock poisoned")
            .push(message.to_string());
    }
}
