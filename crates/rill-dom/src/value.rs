//! Attribute and prop values.
//!
//! [`AttrValue`] is the dynamic value carried by element attributes and
//! component props. It mirrors the value set a component library hands a
//! renderer: scalars, nested maps (style objects, class maps), child node
//! sequences, and opaque event handlers. Handlers are never invoked or
//! serialized during server rendering.

use std::fmt;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::node::VNode;
use crate::props::Props;

/// An opaque event callback carried by a prop.
///
/// Server rendering never invokes handlers; the attribute serializer skips
/// them entirely. The wrapper exists so trees built for client use can pass
/// through the renderer unchanged.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn() + Send + Sync>);

impl Callback {
	/// Wraps a closure.
	pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
		Self(Arc::new(f))
	}

	/// Invokes the wrapped closure.
	pub fn call(&self) {
		(self.0)()
	}
}

impl fmt::Debug for Callback {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Callback")
	}
}

impl PartialEq for Callback {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

/// The value of an attribute or component prop.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AttrValue {
	/// Absent value, covering both `null` and `undefined`.
	#[default]
	Null,
	/// Boolean value.
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// Floating-point value.
	Float(f64),
	/// String value.
	Text(String),
	/// Nested mapping (style objects, class maps, `__html` wrappers).
	Map(Props),
	/// Virtual node sequence (the `children` prop).
	Nodes(Vec<VNode>),
	/// Event handler; skipped by the serializer.
	Handler(Callback),
}

impl AttrValue {
	/// Returns true for [`AttrValue::Null`].
	pub fn is_nullish(&self) -> bool {
		matches!(self, AttrValue::Null)
	}

	/// JS-style truthiness: `null`, `false`, `0`, `NaN`, and the empty
	/// string are falsy; everything else is truthy.
	pub fn is_truthy(&self) -> bool {
		match self {
			AttrValue::Null => false,
			AttrValue::Bool(b) => *b,
			AttrValue::Int(n) => *n != 0,
			AttrValue::Float(n) => *n != 0.0 && !n.is_nan(),
			AttrValue::Text(s) => !s.is_empty(),
			AttrValue::Map(_) | AttrValue::Nodes(_) | AttrValue::Handler(_) => true,
		}
	}

	/// Borrows the string content of a [`AttrValue::Text`] value.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			AttrValue::Text(s) => Some(s),
			_ => None,
		}
	}

	/// Converts the value into its JSON form.
	///
	/// Handlers and node sequences have no JSON representation and map to
	/// `null`, as does a non-finite float.
	pub fn to_json(&self) -> JsonValue {
		match self {
			AttrValue::Null => JsonValue::Null,
			AttrValue::Bool(b) => JsonValue::Bool(*b),
			AttrValue::Int(n) => JsonValue::from(*n),
			AttrValue::Float(n) => serde_json::Number::from_f64(*n)
				.map(JsonValue::Number)
				.unwrap_or(JsonValue::Null),
			AttrValue::Text(s) => JsonValue::String(s.clone()),
			AttrValue::Map(map) => map.to_json(),
			AttrValue::Nodes(_) | AttrValue::Handler(_) => JsonValue::Null,
		}
	}
}

impl fmt::Display for AttrValue {
	/// Stringification used for attribute emission and style values.
	///
	/// Scalars print their value, `Null` prints nothing, maps print their
	/// compact JSON form, handlers and node sequences print nothing.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AttrValue::Null => Ok(()),
			AttrValue::Bool(b) => write!(f, "{b}"),
			AttrValue::Int(n) => write!(f, "{n}"),
			AttrValue::Float(n) => write!(f, "{n}"),
			AttrValue::Text(s) => f.write_str(s),
			AttrValue::Map(map) => f.write_str(&map.to_json().to_string()),
			AttrValue::Nodes(_) | AttrValue::Handler(_) => Ok(()),
		}
	}
}

impl serde::Serialize for AttrValue {
	/// Serializes through the JSON form, so props embed cleanly in
	/// serialized payloads.
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.to_json().serialize(serializer)
	}
}

impl From<JsonValue> for AttrValue {
	fn from(value: JsonValue) -> Self {
		match value {
			JsonValue::Null => AttrValue::Null,
			JsonValue::Bool(b) => AttrValue::Bool(b),
			JsonValue::Number(n) => {
				if let Some(i) = n.as_i64() {
					AttrValue::Int(i)
				} else {
					AttrValue::Float(n.as_f64().unwrap_or(f64::NAN))
				}
			}
			JsonValue::String(s) => AttrValue::Text(s),
			JsonValue::Array(items) => AttrValue::Nodes(
				items.into_iter().map(|item| VNode::from(AttrValue::from(item))).collect(),
			),
			JsonValue::Object(map) => AttrValue::Map(
				map.into_iter().map(|(k, v)| (k, AttrValue::from(v))).collect(),
			),
		}
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::Text(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Text(value)
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		AttrValue::Bool(value)
	}
}

impl From<i32> for AttrValue {
	fn from(value: i32) -> Self {
		AttrValue::Int(value.into())
	}
}

impl From<i64> for AttrValue {
	fn from(value: i64) -> Self {
		AttrValue::Int(value)
	}
}

impl From<f64> for AttrValue {
	fn from(value: f64) -> Self {
		AttrValue::Float(value)
	}
}

impl From<Props> for AttrValue {
	fn from(value: Props) -> Self {
		AttrValue::Map(value)
	}
}

impl From<Vec<VNode>> for AttrValue {
	fn from(value: Vec<VNode>) -> Self {
		AttrValue::Nodes(value)
	}
}

impl From<Callback> for AttrValue {
	fn from(value: Callback) -> Self {
		AttrValue::Handler(value)
	}
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(v) => v.into(),
			None => AttrValue::Null,
		}
	}
}
