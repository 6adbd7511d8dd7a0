//! # rrsync-renderer
//!
//! Tera-based XSPF serialization of a [`Document`](rrsync_core::Document),
//! plus the reverse title projection used to diff two renderings.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use rrsync_core::Document;
//! use rrsync_renderer::{read_titles, Renderer};
//!
//! fn save(doc: &Document) {
//!     if let Ok(renderer) = Renderer::new() {
//!         let path = Path::new("rr_stations.xspf");
//!         if renderer.write(doc, path).is_ok() {
//!             println!("{:?}", read_titles(path));
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod reader;

pub use context::PlaylistContext;
pub use engine::{Renderer, TemplateEngine};
pub use error::{ReadError, RenderError};
pub use reader::{read_title_file, read_titles, TitleRead};
