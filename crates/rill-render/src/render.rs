//! The rendering entry points.

use std::io;

use rill_dom::{Context, VNode};
use tracing::debug;

use crate::driver::RenderStream;
use crate::error::RenderError;
use crate::options::RenderOptions;
use crate::walker::{WalkEvent, Walker};

/// A configured renderer.
///
/// Holds the immutable per-render options; the root context is supplied
/// per call. Renders are independent: the renderer keeps no state between
/// calls, and concurrent renders share nothing mutable.
///
/// # Example
///
/// ```
/// use rill_dom::{Props, VNode, h};
/// use rill_render::{RenderOptions, Renderer};
///
/// let renderer = Renderer::with_options(RenderOptions::new().sort_attributes());
/// let html = renderer
///     .render_to_string(h("div", Props::new().attr("b", "2").attr("a", "1"), vec![]))
///     .unwrap();
/// assert_eq!(html, "<div a=\"1\" b=\"2\"></div>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renderer {
	options: RenderOptions,
}

impl Renderer {
	/// Creates a renderer with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a renderer with the given options.
	pub fn with_options(options: RenderOptions) -> Self {
		Self { options }
	}

	/// The options this renderer applies.
	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// Renders a tree to a single string.
	pub fn render_to_string(&self, vnode: VNode) -> Result<String, RenderError> {
		self.render_to_string_in(vnode, Context::new())
	}

	/// Renders a tree to a single string under a root context.
	pub fn render_to_string_in(
		&self,
		vnode: VNode,
		context: Context,
	) -> Result<String, RenderError> {
		debug!(
			shallow = self.options.shallow,
			xml = self.options.xml,
			"rendering to string"
		);
		let mut walker = Walker::new(vnode, context, self.options.clone());
		let mut out = String::new();
		loop {
			match walker.step(&mut out)? {
				WalkEvent::Finished => return Ok(out),
				WalkEvent::Wrote | WalkEvent::Boundary => {}
			}
		}
	}

	/// Renders a tree as a chunk stream.
	pub fn render_to_stream(&self, vnode: VNode) -> RenderStream {
		self.render_to_stream_in(vnode, Context::new())
	}

	/// Renders a tree as a chunk stream under a root context.
	pub fn render_to_stream_in(&self, vnode: VNode, context: Context) -> RenderStream {
		debug!(
			shallow = self.options.shallow,
			xml = self.options.xml,
			"rendering to stream"
		);
		RenderStream::new(Walker::new(vnode, context, self.options.clone()))
	}

	/// Renders a tree into a caller-owned sink, flushing at chunk
	/// boundaries. Sink failures surface as [`RenderError::Sink`].
	pub fn render_to_writer<W: io::Write>(
		&self,
		vnode: VNode,
		writer: &mut W,
	) -> Result<(), RenderError> {
		self.render_to_writer_in(vnode, Context::new(), writer)
	}

	/// Renders a tree into a caller-owned sink under a root context.
	pub fn render_to_writer_in<W: io::Write>(
		&self,
		vnode: VNode,
		context: Context,
		writer: &mut W,
	) -> Result<(), RenderError> {
		let mut walker = Walker::new(vnode, context, self.options.clone());
		let mut buf = String::new();
		loop {
			match walker.step(&mut buf)? {
				WalkEvent::Wrote => {}
				WalkEvent::Boundary => {
					if !buf.is_empty() {
						writer.write_all(buf.as_bytes())?;
						buf.clear();
					}
				}
				WalkEvent::Finished => {
					if !buf.is_empty() {
						writer.write_all(buf.as_bytes())?;
					}
					return Ok(());
				}
			}
		}
	}
}

/// Renders a tree to a string with default options.
pub fn render_to_string(vnode: VNode) -> Result<String, RenderError> {
	Renderer::new().render_to_string(vnode)
}

/// Renders a tree to a string under a root context.
pub fn render_to_string_in(vnode: VNode, context: Context) -> Result<String, RenderError> {
	Renderer::new().render_to_string_in(vnode, context)
}

/// Renders a tree as a chunk stream with default options.
pub fn render_to_stream(vnode: VNode) -> RenderStream {
	Renderer::new().render_to_stream(vnode)
}

/// Renders a tree as a chunk stream under a root context.
pub fn render_to_stream_in(vnode: VNode, context: Context) -> RenderStream {
	Renderer::new().render_to_stream_in(vnode, context)
}

/// Renders shallowly: expansion stops at component boundaries, which emit
/// as pseudo-tags named by their display name.
pub fn shallow_render(vnode: VNode) -> Result<String, RenderError> {
	shallow_render_in(vnode, Context::new())
}

/// Shallow render under a root context.
pub fn shallow_render_in(vnode: VNode, context: Context) -> Result<String, RenderError> {
	Renderer::with_options(RenderOptions::new().shallow()).render_to_string_in(vnode, context)
}
