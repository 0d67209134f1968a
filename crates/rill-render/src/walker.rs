//! The tree walker: emits a virtual tree as markup fragments.
//!
//! The walk is an explicit work stack rather than recursion so the driver
//! can suspend it at any chunk boundary: each [`Walker::step`] processes
//! one frame and reports whether it wrote, crossed a boundary, or
//! finished. The caller decides when to keep going, which is what gives
//! the stream its back-pressure.

use std::fmt::Write as _;

use rill_dom::{AttrValue, Context, Element, Props, VNode};

use crate::attr::{AttrMode, is_unsafe_name, serialize_attributes};
use crate::encode::encode_entities;
use crate::error::RenderError;
use crate::options::RenderOptions;
use crate::runner::resolve_component;

/// HTML tags that never take a closing tag, keyed by lowercased name.
const VOID_ELEMENTS: [&str; 15] = [
	"area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta", "param",
	"source", "track", "wbr",
];

fn is_void(tag: &str) -> bool {
	VOID_ELEMENTS.iter().any(|v| tag.eq_ignore_ascii_case(v))
}

/// What one step of the walk did.
pub(crate) enum WalkEvent {
	/// Fragments were appended (or nothing happened); keep stepping.
	Wrote,
	/// A component or element boundary was crossed. Nothing was written by
	/// this step; the driver may flush before continuing.
	Boundary,
	/// The walk is complete.
	Finished,
}

enum Frame {
	/// A node awaiting emission.
	Node {
		node: VNode,
		context: Context,
		svg: bool,
		root: bool,
	},
	/// An element whose boundary has been crossed; emit the open tag.
	Open {
		element: Element,
		context: Context,
		svg: bool,
	},
	/// Close an open element.
	Close { tag: String },
}

/// The walk state over one tree.
pub(crate) struct Walker {
	stack: Vec<Frame>,
	options: RenderOptions,
	/// An XML open tag whose `>` is deferred: if the element closes before
	/// anything else is emitted it self-closes instead.
	pending_open: bool,
}

impl Walker {
	pub(crate) fn new(root: VNode, context: Context, options: RenderOptions) -> Self {
		Self {
			stack: vec![Frame::Node {
				node: root,
				context,
				svg: false,
				root: true,
			}],
			options,
			pending_open: false,
		}
	}

	/// Processes one frame, appending any output to `out`.
	pub(crate) fn step(&mut self, out: &mut String) -> Result<WalkEvent, RenderError> {
		let Some(frame) = self.stack.pop() else {
			return Ok(WalkEvent::Finished);
		};
		match frame {
			Frame::Node {
				node,
				context,
				svg,
				root,
			} => self.step_node(node, context, svg, root, out),
			Frame::Open {
				element,
				context,
				svg,
			} => self.step_open(element, context, svg, out),
			Frame::Close { tag } => {
				if self.pending_open {
					self.pending_open = false;
					out.push_str(" />");
				} else {
					out.push_str("</");
					out.push_str(&tag);
					out.push('>');
				}
				Ok(WalkEvent::Wrote)
			}
		}
	}

	fn step_node(
		&mut self,
		node: VNode,
		context: Context,
		svg: bool,
		root: bool,
		out: &mut String,
	) -> Result<WalkEvent, RenderError> {
		match node {
			// Blank leaves emit nothing but still separate their siblings.
			VNode::Null | VNode::Bool(_) => Ok(WalkEvent::Wrote),
			VNode::Text(text) => {
				if !text.is_empty() {
					self.flush_pending(out);
					out.push_str(&encode_entities(&text));
				}
				Ok(WalkEvent::Wrote)
			}
			VNode::Int(n) => {
				self.flush_pending(out);
				let _ = write!(out, "{n}");
				Ok(WalkEvent::Wrote)
			}
			VNode::Float(n) => {
				self.flush_pending(out);
				let _ = write!(out, "{n}");
				Ok(WalkEvent::Wrote)
			}
			VNode::Fragment(items) => {
				for item in items.into_iter().rev() {
					self.stack.push(Frame::Node {
						node: item,
						context: context.clone(),
						svg,
						root,
					});
				}
				Ok(WalkEvent::Wrote)
			}
			VNode::Element(element) => {
				self.stack.push(Frame::Open {
					element: *element,
					context,
					svg,
				});
				Ok(WalkEvent::Boundary)
			}
			VNode::Component(component) => {
				let component = *component;
				if self.options.shallow && (!root || !self.options.shallow_high_order) {
					// Pseudo-tag: the component's display name rendered as
					// an element over its raw props and children.
					let element = Element {
						name: component.def.display_name().to_string(),
						attrs: component.props,
						children: component.children,
					};
					self.stack.push(Frame::Open {
						element,
						context,
						svg,
					});
					return Ok(WalkEvent::Boundary);
				}
				let resolved = resolve_component(component, &context)?;
				self.stack.push(Frame::Node {
					node: resolved.child,
					context: resolved.context,
					svg,
					root: false,
				});
				Ok(WalkEvent::Boundary)
			}
		}
	}

	fn step_open(
		&mut self,
		element: Element,
		context: Context,
		svg: bool,
		out: &mut String,
	) -> Result<WalkEvent, RenderError> {
		let Element {
			name,
			attrs,
			children,
		} = element;

		if is_unsafe_name(&name) {
			return Err(RenderError::InvalidNode { name });
		}

		self.flush_pending(out);

		// The element's own attributes see the inherited mode; `svg`
		// switches it on for the subtree, `foreignObject` switches it off.
		let child_svg = if name.eq_ignore_ascii_case("svg") {
			true
		} else if name.eq_ignore_ascii_case("foreignObject") {
			false
		} else {
			svg
		};

		out.push('<');
		out.push_str(&name);
		serialize_attributes(
			&attrs,
			AttrMode {
				xml: self.options.xml,
				svg,
				sort: self.options.sort_attributes,
			},
			out,
		);

		if let Some(html) = inner_html(&attrs) {
			out.push('>');
			out.push_str(&html);
			out.push_str("</");
			out.push_str(&name);
			out.push('>');
			return Ok(WalkEvent::Wrote);
		}

		if self.options.xml {
			self.pending_open = true;
			self.stack.push(Frame::Close { tag: name });
		} else if is_void(&name) {
			// Void elements never contain: self-close now, and let any
			// children render as following siblings.
			out.push_str(" />");
		} else {
			out.push('>');
			self.stack.push(Frame::Close { tag: name });
		}

		for child in children.into_iter().rev() {
			self.stack.push(Frame::Node {
				node: child,
				context: context.clone(),
				svg: child_svg,
				root: false,
			});
		}
		Ok(WalkEvent::Wrote)
	}

	fn flush_pending(&mut self, out: &mut String) {
		if self.pending_open {
			self.pending_open = false;
			out.push('>');
		}
	}
}

/// Raw markup substitution: present when the element carries a
/// `dangerouslySetInnerHTML` mapping with an `__html` entry.
fn inner_html(attrs: &Props) -> Option<String> {
	match attrs.get("dangerouslySetInnerHTML") {
		Some(AttrValue::Map(map)) => map.get("__html").map(|v| v.to_string()),
		_ => None,
	}
}
