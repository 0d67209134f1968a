//! The `h` factory: the inbound contract for building virtual trees.

use std::sync::Arc;

use crate::component::ComponentDef;
use crate::node::{ComponentVNode, Element, VNode};
use crate::props::Props;

/// What `h` is invoked on: a string tag or a component descriptor.
#[derive(Debug, Clone)]
pub enum NodeName {
	/// A primitive element tag.
	Tag(String),
	/// A component descriptor.
	Component(Arc<ComponentDef>),
}

impl From<&str> for NodeName {
	fn from(value: &str) -> Self {
		NodeName::Tag(value.to_string())
	}
}

impl From<String> for NodeName {
	fn from(value: String) -> Self {
		NodeName::Tag(value)
	}
}

impl From<Arc<ComponentDef>> for NodeName {
	fn from(value: Arc<ComponentDef>) -> Self {
		NodeName::Component(value)
	}
}

impl From<&Arc<ComponentDef>> for NodeName {
	fn from(value: &Arc<ComponentDef>) -> Self {
		NodeName::Component(Arc::clone(value))
	}
}

/// Builds a virtual node.
///
/// The returned node exposes exactly the three fields the renderer relies
/// on: the name (tag or component), the attributes, and the ordered
/// children.
///
/// # Example
///
/// ```
/// use rill_dom::{Props, VNode, h};
///
/// let tree = h(
///     "div",
///     Props::new().attr("class", "box"),
///     vec![h("span", Props::new(), vec![VNode::from("hi")])],
/// );
/// # let _ = tree;
/// ```
pub fn h(name: impl Into<NodeName>, attrs: Props, children: Vec<VNode>) -> VNode {
	match name.into() {
		NodeName::Tag(name) => VNode::Element(Box::new(Element {
			name,
			attrs,
			children,
		})),
		NodeName::Component(def) => VNode::Component(Box::new(ComponentVNode {
			def,
			props: attrs,
			children,
		})),
	}
}
