//! Feed model and RSS 2.0 rendering.
//!
//! [`Feed`] and [`Item`] are plain in-memory values constructed fresh inside a
//! scenario generator, rendered once by [`render_rss`], and discarded. Only
//! well-formed documents are representable here; the deliberately broken
//! scenario bypasses this module entirely with a raw literal.

mod model;
mod render;

pub use model::{Author, Feed, Item};
pub use render::render_rss;
