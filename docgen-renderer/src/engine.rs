//! Tera rendering engine, [`DocumentRenderer`].
//!
//! The document template is compiled into the binary. Tera auto-escapes any
//! template whose name ends in `.html`, so field values cannot inject markup
//! into the generated documents. Link fields go through [`HTML_ATTR_FILTER`]
//! instead, which escapes only what HTML needs and leaves `/` intact.

use std::collections::HashMap;

use tera::{Tera, Value};

use docgen_core::Record;

use crate::context::DocumentContext;
use crate::error::RenderError;

/// Name the embedded template is registered under.
pub const DOCUMENT_TEMPLATE: &str = "document.html";

const DOCUMENT_SOURCE: &str = include_str!("templates/document.html.tera");

/// Filter escaping `& < > " '` only. Mark its output `safe`.
pub const HTML_ATTR_FILTER: &str = "html_attr";

fn html_attr(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("{HTML_ATTR_FILTER} expects a string")))?;
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    Ok(Value::String(out))
}

/// Renders one document per [`Record`].
///
/// Create once with [`DocumentRenderer::new`] and reuse; the template is
/// parsed a single time.
pub struct DocumentRenderer {
    tera: Tera,
    template: String,
}

impl DocumentRenderer {
    /// Construct a renderer around the embedded document template.
    pub fn new() -> Result<Self, RenderError> {
        Self::from_template(DOCUMENT_TEMPLATE, DOCUMENT_SOURCE)
    }

    /// Construct a renderer around a caller-provided template.
    ///
    /// Escaping follows the name: `.html`, `.htm` and `.xml` names are
    /// auto-escaped, anything else renders values verbatim.
    pub fn from_template(name: &str, source: &str) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.register_filter(HTML_ATTR_FILTER, html_attr);
        tera.add_raw_template(name, source)?;
        Ok(DocumentRenderer {
            tera,
            template: name.to_string(),
        })
    }

    /// Render the document for `record`.
    pub fn render(&self, record: &Record) -> Result<String, RenderError> {
        self.render_with_context(&DocumentContext::from_record(record))
    }

    /// Render using caller-provided bindings.
    pub fn render_with_context(&self, ctx: &DocumentContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        Ok(self.tera.render(&self.template, &tera_ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
