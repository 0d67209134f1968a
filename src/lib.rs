//! rill: a streaming server-side renderer for virtual DOM trees.
//!
//! rill turns an immutable tree of element and component descriptors into
//! a well-formed HTML (or XML) byte stream in document order. Consumers
//! read the stream incrementally, so a large page begins arriving on the
//! wire before rendering is complete.
//!
//! The workspace splits into two members, both re-exported here:
//!
//! - [`dom`]: the data model: [`VNode`], [`Props`], [`Context`], the
//!   [`h`] factory, and the component contracts.
//! - [`render`]: the engine: [`render_to_string`], [`render_to_stream`],
//!   [`shallow_render`], [`Renderer`], and [`RenderOptions`].
//!
//! # Example
//!
//! ```
//! use rill::prelude::*;
//!
//! let tree = h(
//!     "div",
//!     Props::new().attr("class", "greeting"),
//!     vec![VNode::from("hello")],
//! );
//! assert_eq!(
//!     render_to_string(tree).unwrap(),
//!     "<div class=\"greeting\">hello</div>"
//! );
//! ```

#![warn(missing_docs)]

pub use rill_dom as dom;
pub use rill_render as render;

pub mod prelude;

pub use rill_dom::{
	AttrValue, Callback, Component, ComponentDef, Context, Element, Mount, NodeName, Props, VNode,
	h,
};
pub use rill_render::{
	RenderBody, RenderError, RenderOptions, RenderStream, Renderer, render_to_string,
	render_to_string_in, render_to_stream, render_to_stream_in, shallow_render, shallow_render_in,
};
