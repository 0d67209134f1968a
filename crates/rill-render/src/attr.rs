//! Attribute serialization: skip/collapse/rewrite rules and class
//! resolution.

use rill_dom::{AttrValue, Props};

use crate::encode::encode_entities;
use crate::style::style_to_css;

/// Names consumed elsewhere in the walk; never emitted as attributes.
const CONSUMED_NAMES: [&str; 4] = ["key", "ref", "children", "dangerouslySetInnerHTML"];

/// Characters that make an attribute name unemittable.
const UNSAFE_NAME_CHARS: [char; 12] =
	['\0', '\t', '\n', '\r', ' ', '/', '\\', '=', '\'', '"', '<', '>'];

/// True when a name cannot appear in markup without breaking it.
pub(crate) fn is_unsafe_name(name: &str) -> bool {
	name.is_empty() || name.contains(UNSAFE_NAME_CHARS)
}

/// Per-element serialization mode.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AttrMode {
	/// XML serialization: boolean-true attributes expand, empty strings
	/// keep their quotes.
	pub xml: bool,
	/// The element sits inside an SVG subtree; `xlinkXxx` names rewrite.
	pub svg: bool,
	/// Emit attributes sorted lexicographically by name.
	pub sort: bool,
}

/// Resolves the `class`/`className` pair.
///
/// A `class` attribute present with a non-nullish value wins and
/// `className` is ignored. A mapping value flattens to the space-joined
/// keys whose values are truthy, in insertion order.
pub(crate) fn resolve_class(value: &AttrValue) -> String {
	match value {
		AttrValue::Map(map) => {
			let mut out = String::new();
			for (name, v) in map.iter() {
				if !v.is_truthy() {
					continue;
				}
				if !out.is_empty() {
					out.push(' ');
				}
				out.push_str(name);
			}
			out
		}
		other => other.to_string(),
	}
}

/// Serializes an element's attribute list into `out`.
///
/// Each emitted fragment is ` name="VALUE"` (entity-encoded), a bare
/// ` name` when HTML collapse rules apply, or nothing when the attribute
/// is skipped.
pub(crate) fn serialize_attributes(attrs: &Props, mode: AttrMode, out: &mut String) {
	let mut pairs: Vec<(&str, &AttrValue)> = attrs.iter().collect();
	if mode.sort {
		pairs.sort_by(|a, b| a.0.cmp(b.0));
	}

	let class_present = attrs.get("class").is_some_and(|v| !v.is_nullish());

	for (name, value) in pairs {
		if CONSUMED_NAMES.contains(&name) || is_unsafe_name(name) {
			continue;
		}

		let mut emit_name = match name {
			"className" => {
				if class_present {
					continue;
				}
				"class".to_string()
			}
			"htmlFor" => "for".to_string(),
			"defaultValue" => "value".to_string(),
			other => other.to_string(),
		};

		if mode.svg
			&& let Some(rest) = name.strip_prefix("xlink")
			&& !rest.is_empty()
		{
			let rest = rest.strip_prefix(':').unwrap_or(rest);
			emit_name = format!("xlink:{}", rest.to_ascii_lowercase());
		}

		match value {
			AttrValue::Null | AttrValue::Bool(false) | AttrValue::Handler(_) => continue,
			AttrValue::Bool(true) => {
				if mode.xml {
					push_pair(out, &emit_name, &emit_name);
				} else {
					push_bare(out, &emit_name);
				}
			}
			_ if emit_name == "class" || name == "class" || name == "className" => {
				let resolved = resolve_class(value);
				push_collapsible(out, "class", &resolved, mode.xml);
			}
			AttrValue::Map(map) if emit_name == "style" => {
				let css = style_to_css(map);
				if !css.is_empty() {
					push_pair(out, "style", &css);
				}
			}
			other => {
				let text = other.to_string();
				push_collapsible(out, &emit_name, &text, mode.xml);
			}
		}
	}
}

/// Emits ` name="value"`, collapsing to a bare name in HTML mode when the
/// value is empty or equal to the name.
fn push_collapsible(out: &mut String, name: &str, value: &str, xml: bool) {
	if !xml && (value.is_empty() || value == name) {
		push_bare(out, name);
	} else {
		push_pair(out, name, value);
	}
}

fn push_bare(out: &mut String, name: &str) {
	out.push(' ');
	out.push_str(name);
}

fn push_pair(out: &mut String, name: &str, value: &str) {
	out.push(' ');
	out.push_str(name);
	out.push_str("=\"");
	out.push_str(&encode_entities(value));
	out.push('"');
}
