//! The stream driver: chunks the walk and owns end/error semantics.

use std::pin::Pin;
use std::task::{Context as TaskContext, Poll};

use bytes::Bytes;
use futures::stream::{FusedStream, Stream};
use tracing::trace;

use crate::error::RenderError;
use crate::walker::{WalkEvent, Walker};

/// Boxed render stream, the shape a response body expects.
pub type RenderBody = Pin<Box<dyn Stream<Item = Result<Bytes, RenderError>> + Send>>;

/// A pull-driven stream of rendered chunks.
///
/// Chunks correspond one-to-one with boundaries: a new chunk starts at
/// each component boundary (before its rendered output) and each element
/// boundary (before its open tag); text within an element appends to the
/// current chunk. Adjacent boundaries yield empty chunks, so a tree with N
/// components and M elements produces exactly N + M chunks.
///
/// The walk only advances inside `poll_next`, so a consumer that stops
/// polling pauses rendering, and dropping the stream aborts it: no further
/// component runs, and all in-flight instances are released.
///
/// After an `Err` item no further items follow. The stream ends (`None`)
/// once the final chunk has been delivered.
#[must_use = "streams do nothing unless polled"]
pub struct RenderStream {
	walker: Walker,
	buf: String,
	started: bool,
	done: bool,
}

impl RenderStream {
	pub(crate) fn new(walker: Walker) -> Self {
		Self {
			walker,
			buf: String::new(),
			started: false,
			done: false,
		}
	}

	/// Boxes the stream into a [`RenderBody`].
	pub fn into_body(self) -> RenderBody {
		Box::pin(self)
	}
}

impl Stream for RenderStream {
	type Item = Result<Bytes, RenderError>;

	fn poll_next(self: Pin<&mut Self>, _cx: &mut TaskContext<'_>) -> Poll<Option<Self::Item>> {
		let this = self.get_mut();
		if this.done {
			return Poll::Ready(None);
		}
		loop {
			match this.walker.step(&mut this.buf) {
				Ok(WalkEvent::Wrote) => {}
				Ok(WalkEvent::Boundary) => {
					if this.started {
						let chunk = std::mem::take(&mut this.buf);
						trace!(bytes = chunk.len(), "flushing chunk");
						return Poll::Ready(Some(Ok(Bytes::from(chunk))));
					}
					this.started = true;
				}
				Ok(WalkEvent::Finished) => {
					this.done = true;
					if this.started || !this.buf.is_empty() {
						let chunk = std::mem::take(&mut this.buf);
						trace!(bytes = chunk.len(), "flushing final chunk");
						return Poll::Ready(Some(Ok(Bytes::from(chunk))));
					}
					return Poll::Ready(None);
				}
				Err(err) => {
					this.done = true;
					this.buf.clear();
					return Poll::Ready(Some(Err(err)));
				}
			}
		}
	}
}

impl FusedStream for RenderStream {
	fn is_terminated(&self) -> bool {
		self.done
	}
}
