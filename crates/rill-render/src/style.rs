//! Style-object serialization.

use rill_dom::Props;

/// Converts a style mapping into a CSS declaration string.
///
/// Each declaration is emitted as `name: value;` with a single space after
/// the colon and declarations separated by a single space. Nullish values
/// are skipped. ASCII camelCase property names are hyphenated
/// (`borderTop` becomes `border-top`) unless the name starts with `-`.
/// Numeric values are stringified as-is; the caller owns units.
///
/// An empty mapping (or one whose values are all nullish) serializes to
/// the empty string, which suppresses the `style` attribute entirely.
pub fn style_to_css(style: &Props) -> String {
	let mut css = String::new();
	for (name, value) in style.iter() {
		if value.is_nullish() {
			continue;
		}
		if !css.is_empty() {
			css.push(' ');
		}
		push_property_name(&mut css, name);
		css.push_str(": ");
		css.push_str(&value.to_string());
		css.push(';');
	}
	css
}

fn push_property_name(out: &mut String, name: &str) {
	if name.starts_with('-') {
		out.push_str(name);
		return;
	}
	for ch in name.chars() {
		if ch.is_ascii_uppercase() {
			out.push('-');
			out.push(ch.to_ascii_lowercase());
		} else {
			out.push(ch);
		}
	}
}
