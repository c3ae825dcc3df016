use dom_query::Node;
use once_cell::sync::Lazy;
use regex::Regex;

static DISPLAY_DECL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)display\s*:[^;]*;?").expect("Invalid display regex"));

/// Extension trait for dom_query::Node providing inline-style helpers
///
/// Visibility directives only ever touch the `display` declaration of the
/// `style` attribute; other inline declarations are preserved.
pub trait NodeExt {
    /// Merge `display: none` into the element's inline style.
    fn set_display_none(&self);

    /// Strip any `display` declaration from the element's inline style,
    /// removing the attribute entirely when nothing else remains.
    fn reset_display(&self);

    /// Replace the element's children with a single text node carrying
    /// `value`. The value is HTML-escaped so it is inserted as literal
    /// text rather than parsed as markup.
    fn set_text_content(&self, value: &str);
}

impl<'a> NodeExt for Node<'a> {
    fn set_display_none(&self) {
        let style = self
            .attr("style")
            .map(|s| s.to_string())
            .unwrap_or_default();
        let mut rewritten = strip_display(&style);
        if !rewritten.is_empty() {
            if !rewritten.ends_with(';') {
                rewritten.push(';');
            }
            rewritten.push(' ');
        }
        rewritten.push_str("display: none;");
        self.set_attr("style", &rewritten);
    }

    fn reset_display(&self) {
        if let Some(style) = self.attr("style") {
            let rewritten = strip_display(&style);
            if rewritten.is_empty() {
                self.remove_attr("style");
            } else {
                self.set_attr("style", &rewritten);
            }
        }
    }

    fn set_text_content(&self, value: &str) {
        self.set_html(escape_text(value));
    }
}

/// HTML-escape a string so it serializes as literal text content.
fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn strip_display(style: &str) -> String {
    DISPLAY_DECL_REGEX.replace_all(style, "").trim().to_string()
}
