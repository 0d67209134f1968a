//! Insertion-ordered attribute and prop maps.

use serde_json::Value as JsonValue;

use crate::value::AttrValue;

/// An insertion-ordered mapping from attribute or prop name to value.
///
/// Insertion order is significant: the serializer emits attributes in the
/// order they were set unless sorted output is requested. Setting an
/// existing name replaces its value in place, keeping its position.
///
/// # Example
///
/// ```
/// use rill_dom::Props;
///
/// let props = Props::new().attr("class", "card").attr("id", "main");
/// assert_eq!(props.get("class").unwrap().as_str(), Some("card"));
/// assert_eq!(props.names().collect::<Vec<_>>(), vec!["class", "id"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Props {
	entries: Vec<(String, AttrValue)>,
}

impl Props {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a value, chaining style.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.set(name, value);
		self
	}

	/// Sets a value in place. Replaces an existing entry without moving it.
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
		let name = name.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(n, _)| *n == name) {
			Some(entry) => entry.1 = value,
			None => self.entries.push((name, value)),
		}
	}

	/// Looks up a value by name.
	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
	}

	/// Returns true when the name is present, regardless of its value.
	pub fn contains(&self, name: &str) -> bool {
		self.entries.iter().any(|(n, _)| n == name)
	}

	/// Removes an entry, returning its value.
	pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
		let index = self.entries.iter().position(|(n, _)| n == name)?;
		Some(self.entries.remove(index).1)
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True when the map has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.entries.iter().map(|(n, v)| (n.as_str(), v))
	}

	/// Iterates names in insertion order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(n, _)| n.as_str())
	}

	/// Merges `overrides` on top of this map.
	///
	/// Overridden names keep their position in `self`; novel names are
	/// appended in the overrides' order. Used to merge a component's
	/// default props under its explicit props.
	pub fn merged_with(&self, overrides: &Props) -> Props {
		let mut merged = self.clone();
		for (name, value) in overrides.iter() {
			merged.set(name, value.clone());
		}
		merged
	}

	/// Converts the map into a JSON object, preserving what is
	/// representable (handlers and node sequences become `null`).
	pub fn to_json(&self) -> JsonValue {
		JsonValue::Object(
			self.entries
				.iter()
				.map(|(n, v)| (n.clone(), v.to_json()))
				.collect(),
		)
	}

	/// Builds a map from a JSON object. Non-object values yield an empty map.
	pub fn from_json(value: JsonValue) -> Self {
		match value {
			JsonValue::Object(map) => map
				.into_iter()
				.map(|(k, v)| (k, AttrValue::from(v)))
				.collect(),
			_ => Props::new(),
		}
	}
}

impl serde::Serialize for Props {
	/// Serializes through the JSON form.
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.to_json().serialize(serializer)
	}
}

impl FromIterator<(String, AttrValue)> for Props {
	fn from_iter<I: IntoIterator<Item = (String, AttrValue)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().collect(),
		}
	}
}

impl IntoIterator for Props {
	type Item = (String, AttrValue);
	type IntoIter = std::vec::IntoIter<(String, AttrValue)>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}
