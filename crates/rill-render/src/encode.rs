//! Entity encoding for text and attribute contexts.

use std::borrow::Cow;

/// Escapes `&`, `<`, `>`, and `"`.
///
/// One rule covers both text and attribute contexts; no other characters
/// are transformed. Returns the input unchanged (borrowed) when nothing
/// needs escaping.
pub fn encode_entities(input: &str) -> Cow<'_, str> {
	let Some(first) = input.find(['&', '<', '>', '"']) else {
		return Cow::Borrowed(input);
	};

	let mut out = String::with_capacity(input.len() + 8);
	out.push_str(&input[..first]);
	for ch in input[first..].chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			other => out.push(other),
		}
	}
	Cow::Owned(out)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_escapes_all_four_entities() {
		assert_eq!(encode_entities(r#""<>&"#), "&quot;&lt;&gt;&amp;");
		assert_eq!(encode_entities("a & b < c"), "a &amp; b &lt; c");
	}

	#[test]
	fn test_clean_input_is_borrowed() {
		let input = "plain text with no entities";
		assert!(matches!(encode_entities(input), Cow::Borrowed(_)));
	}

	#[test]
	fn test_no_other_transformations() {
		assert_eq!(encode_entities("it's 'fine'"), "it's 'fine'");
		assert_eq!(encode_entities("caf\u{e9}"), "caf\u{e9}");
	}
}
