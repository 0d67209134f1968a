//! Streaming HTML/XML renderer for rill virtual DOM trees.
//!
//! The renderer walks an immutable [`VNode`](rill_dom::VNode) tree and
//! emits well-formed markup in document order. Output is available three
//! ways:
//!
//! - [`render_to_string`]: drive the walk synchronously into one string.
//! - [`render_to_stream`]: a pull-driven [`RenderStream`] of byte chunks;
//!   a large page begins arriving before rendering completes, and the
//!   consumer's polling rate is the back-pressure.
//! - [`Renderer::render_to_writer`]: flush chunks into a caller-owned
//!   `io::Write` sink.
//!
//! Component nodes resolve through their contracts in `rill-dom`: default
//! props merge under explicit props, the pre-mount hook runs once with a
//! synchronous-merge state surface, child context extends downward only,
//! and `render` runs exactly once per instance. [`shallow_render`] stops
//! expansion at component boundaries instead, emitting pseudo-tags.
//!
//! Rendering is deterministic: the same tree and options produce
//! byte-identical output, and nothing is cached between renders.

#![warn(missing_docs)]

mod attr;
mod driver;
mod encode;
mod error;
mod options;
mod render;
mod runner;
mod style;
mod walker;

pub use driver::{RenderBody, RenderStream};
pub use encode::encode_entities;
pub use error::{BoxError, RenderError};
pub use options::RenderOptions;
pub use render::{
	Renderer, render_to_string, render_to_string_in, render_to_stream, render_to_stream_in,
	shallow_render, shallow_render_in,
};
pub use style::style_to_css;
