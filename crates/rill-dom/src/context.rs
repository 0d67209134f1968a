//! Render context: ambient values propagated to descendants.

use std::collections::HashMap;
use std::sync::Arc;

use crate::props::Props;
use crate::value::AttrValue;

/// An immutable mapping of ambient values visible to a subtree.
///
/// Context flows one way: a component that provides child context produces
/// a new `Context` for its subtree via [`Context::extend`]; the parent's
/// view is never touched, so siblings always observe the same context as
/// their parent. Cloning is cheap (shared storage).
#[derive(Debug, Clone, Default)]
pub struct Context {
	values: Arc<HashMap<String, AttrValue>>,
}

impl Context {
	/// Creates an empty context.
	pub fn new() -> Self {
		Self::default()
	}

	/// Looks up an ambient value.
	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.values.get(name)
	}

	/// Returns true when the name is present.
	pub fn contains(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}

	/// Number of ambient values.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// True when no ambient values are present.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Produces a new context with `patch` merged over this one.
	///
	/// The receiver is unchanged; only the returned context carries the
	/// patched view.
	pub fn extend(&self, patch: &Props) -> Context {
		if patch.is_empty() {
			return self.clone();
		}
		let mut values = (*self.values).clone();
		for (name, value) in patch.iter() {
			values.insert(name.to_string(), value.clone());
		}
		Context {
			values: Arc::new(values),
		}
	}
}

impl From<Props> for Context {
	fn from(props: Props) -> Self {
		Context::new().extend(&props)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_extend_does_not_touch_parent() {
		let parent = Context::from(Props::new().attr("theme", "light"));
		let child = parent.extend(&Props::new().attr("theme", "dark").attr("lang", "en"));

		assert_eq!(parent.get("theme").unwrap().as_str(), Some("light"));
		assert!(!parent.contains("lang"));
		assert_eq!(child.get("theme").unwrap().as_str(), Some("dark"));
		assert_eq!(child.get("lang").unwrap().as_str(), Some("en"));
	}

	#[test]
	fn test_empty_patch_shares_storage() {
		let parent = Context::from(Props::new().attr("a", 1));
		let child = parent.extend(&Props::new());
		assert_eq!(child.get("a"), parent.get("a"));
		assert_eq!(child.len(), 1);
	}
}
