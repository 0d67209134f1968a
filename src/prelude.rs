//! Unified prelude: all commonly used types with a single import.
//!
//! ```
//! use rill::prelude::*;
//!
//! let node = h("p", Props::new(), vec![VNode::from("hi")]);
//! assert_eq!(render_to_string(node).unwrap(), "<p>hi</p>");
//! ```

pub use rill_dom::{
	AttrValue, BoxError, Callback, Component, ComponentDef, ComponentKind, Context, Element,
	Mount, NodeName, Props, VNode, h,
};
pub use rill_render::{
	RenderBody, RenderError, RenderOptions, RenderStream, Renderer, render_to_string,
	render_to_string_in, render_to_stream, render_to_stream_in, shallow_render, shallow_render_in,
};
