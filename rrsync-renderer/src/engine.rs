//! Tera rendering engine — [`TemplateEngine`] and [`Renderer`].
//!
//! The playlist template is embedded at compile time. Autoescaping is off
//! (the template name does not end in `.xml`), so every text node goes
//! through the `xml_escape` filter instead, which escapes `&`, `<` and `>`
//! only.

use std::collections::HashMap;
use std::path::Path;

use tera::{Tera, Value};

use rrsync_core::types::Document;

use crate::context::PlaylistContext;
use crate::error::{io_err, RenderError};

// ---------------------------------------------------------------------------
// Embedded template
// ---------------------------------------------------------------------------

/// Name under which the playlist template is registered.
pub const PLAYLIST_TEMPLATE: &str = "playlist.xspf.tera";

const TPLS: &[(&str, &str)] = &[(
    PLAYLIST_TEMPLATE,
    include_str!("templates/playlist.xspf.tera"),
)];

fn xml_escape(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = tera::try_get_value!("xml_escape", "value", String, value);
    Ok(Value::String(quick_xml::escape::partial_escape(&s).into_owned()))
}

fn build_tera() -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    tera.register_filter("xml_escape", xml_escape);
    tera.add_raw_templates(TPLS.iter().copied())?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine holding the compiled playlist template.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    pub fn new() -> Result<Self, RenderError> {
        Ok(TemplateEngine { tera: build_tera()? })
    }

    /// Render the playlist template with the supplied context.
    pub fn render(&self, ctx: &PlaylistContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        Ok(self.tera.render(PLAYLIST_TEMPLATE, &tera_ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Serializes [`Document`]s to XSPF text. Create once with [`Renderer::new`]
/// and reuse.
pub struct Renderer {
    engine: TemplateEngine,
}

impl Renderer {
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer {
            engine: TemplateEngine::new()?,
        })
    }

    /// Render `document` to a tab-indented, UTF-8 declared XSPF string.
    pub fn render(&self, document: &Document) -> Result<String, RenderError> {
        let ctx = PlaylistContext::from_document(document);
        self.engine.render(&ctx)
    }

    /// Render `document` and overwrite `path` with the result.
    ///
    /// Parent directories are created as needed. The write is a plain
    /// truncate-and-write, not a rename.
    pub fn write(&self, document: &Document, path: &Path) -> Result<(), RenderError> {
        let content = self.render(document)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
        std::fs::write(path, content).map_err(|e| io_err(path, e))?;
        tracing::info!(path = %path.display(), tracks = document.len(), "playlist written");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
