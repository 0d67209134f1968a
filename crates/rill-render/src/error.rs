//! Error types for rendering.

use thiserror::Error;

pub use rill_dom::BoxError;

/// Errors that terminate a render.
///
/// Rendering is deterministic and has no retry: the first error aborts the
/// walk, surfaces once, and no further output follows it.
#[derive(Debug, Error)]
pub enum RenderError {
	/// An element carries a name that would break markup (empty, or
	/// containing whitespace, quotes, or tag-delimiter characters).
	#[error("invalid element name {name:?}")]
	InvalidNode {
		/// The offending name.
		name: String,
	},

	/// A component entry point (`render`, the pre-mount hook, the child
	/// context provider, or a functional body) returned an error.
	#[error("component {name} failed: {source}")]
	Component {
		/// The component's display name.
		name: String,
		/// The original cause.
		#[source]
		source: BoxError,
	},

	/// The downstream sink failed to accept output.
	#[error("sink error: {0}")]
	Sink(#[from] std::io::Error),
}

impl RenderError {
	/// Wraps a component failure with its display name.
	pub(crate) fn component(name: &str, source: BoxError) -> Self {
		RenderError::Component {
			name: name.to_string(),
			source,
		}
	}
}
