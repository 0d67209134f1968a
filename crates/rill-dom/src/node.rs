//! The virtual node tree.

use std::sync::Arc;

use crate::component::ComponentDef;
use crate::props::Props;
use crate::value::AttrValue;

/// A node in the virtual tree: the unit of the renderer's input.
///
/// Primitive variants cover the leaf values a component library produces:
/// `Null` (standing in for both `null` and `undefined`), booleans (which
/// render nothing), numbers, and text. `Fragment` covers nested child
/// sequences, which the walker flattens in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum VNode {
	/// Absent child; renders nothing.
	#[default]
	Null,
	/// Boolean child; renders nothing.
	Bool(bool),
	/// Integer child; renders its decimal form.
	Int(i64),
	/// Floating-point child; renders its shortest decimal form.
	Float(f64),
	/// Text child; entity-encoded on emission.
	Text(String),
	/// An ordered sequence of children, flattened in place.
	Fragment(Vec<VNode>),
	/// A primitive element.
	Element(Box<Element>),
	/// A component invocation, resolved by the renderer.
	Component(Box<ComponentVNode>),
}

impl VNode {
	/// Creates a text node.
	pub fn text(s: impl Into<String>) -> Self {
		VNode::Text(s.into())
	}

	/// True for the variants that emit no output on their own.
	pub fn is_blank(&self) -> bool {
		matches!(self, VNode::Null | VNode::Bool(_))
	}
}

/// A primitive element: a tag name, attributes, and ordered children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
	/// Tag name, as given. Case is preserved in output.
	pub name: String,
	/// Attributes in insertion order.
	pub attrs: Props,
	/// Ordered children.
	pub children: Vec<VNode>,
}

/// A component invocation: the descriptor plus the props and children the
/// call site supplied.
#[derive(Debug, Clone)]
pub struct ComponentVNode {
	/// The component being invoked.
	pub def: Arc<ComponentDef>,
	/// Explicit props from the call site, in insertion order.
	pub props: Props,
	/// Ordered children, injected as the `children` prop on resolution.
	pub children: Vec<VNode>,
}

impl PartialEq for ComponentVNode {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.def, &other.def)
			&& self.props == other.props
			&& self.children == other.children
	}
}

impl From<&str> for VNode {
	fn from(value: &str) -> Self {
		VNode::Text(value.to_string())
	}
}

impl From<String> for VNode {
	fn from(value: String) -> Self {
		VNode::Text(value)
	}
}

impl From<bool> for VNode {
	fn from(value: bool) -> Self {
		VNode::Bool(value)
	}
}

impl From<i32> for VNode {
	fn from(value: i32) -> Self {
		VNode::Int(value.into())
	}
}

impl From<i64> for VNode {
	fn from(value: i64) -> Self {
		VNode::Int(value)
	}
}

impl From<f64> for VNode {
	fn from(value: f64) -> Self {
		VNode::Float(value)
	}
}

impl From<Vec<VNode>> for VNode {
	fn from(value: Vec<VNode>) -> Self {
		VNode::Fragment(value)
	}
}

impl<T: Into<VNode>> From<Option<T>> for VNode {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(v) => v.into(),
			None => VNode::Null,
		}
	}
}

impl From<AttrValue> for VNode {
	/// Reinterprets a prop value as a child, the shape the `children` prop
	/// takes when a component forwards it into a tree.
	fn from(value: AttrValue) -> Self {
		match value {
			AttrValue::Null | AttrValue::Handler(_) => VNode::Null,
			AttrValue::Bool(b) => VNode::Bool(b),
			AttrValue::Int(n) => VNode::Int(n),
			AttrValue::Float(n) => VNode::Float(n),
			AttrValue::Text(s) => VNode::Text(s),
			AttrValue::Map(map) => VNode::Text(map.to_json().to_string()),
			AttrValue::Nodes(nodes) => VNode::Fragment(nodes),
		}
	}
}
