//! Component contracts.
//!
//! Two component shapes exist, dispatched by a tag computed once per
//! descriptor rather than by runtime inspection:
//!
//! - **Functional**: a callable taking `(props, context)` and returning a
//!   rendered child.
//! - **Classful**: a type implementing [`Component`], constructed per
//!   invocation, with an optional pre-mount hook and child-context
//!   provider.
//!
//! During server rendering no component may cause itself to re-render.
//! There is no scheduler to disable: the only update surface a component
//! sees is [`Mount`], whose `set_state` merges synchronously and whose
//! `force_update` records the request and returns. `render` runs exactly
//! once per instance, after the pre-mount hook.

use std::fmt;
use std::sync::Arc;

use crate::context::Context;
use crate::node::VNode;
use crate::props::Props;

/// Boxed error type for fallible component entry points.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Fallback display name for components that do not declare one.
pub const ANONYMOUS_COMPONENT: &str = "Component";

/// The pre-mount update surface handed to [`Component::component_will_mount`].
///
/// State changes requested here take effect before `render` runs and never
/// trigger a second render pass.
pub struct Mount<'a> {
	props: &'a Props,
	context: &'a Context,
	state: &'a mut Props,
	force_requested: bool,
}

impl<'a> Mount<'a> {
	/// Builds the surface over an instance's slots.
	pub fn new(props: &'a Props, context: &'a Context, state: &'a mut Props) -> Self {
		Self {
			props,
			context,
			state,
			force_requested: false,
		}
	}

	/// The resolved props (defaults merged under explicit values).
	pub fn props(&self) -> &Props {
		self.props
	}

	/// The inherited context.
	pub fn context(&self) -> &Context {
		self.context
	}

	/// The current state.
	pub fn state(&self) -> &Props {
		self.state
	}

	/// Merges `patch` into the state immediately.
	pub fn set_state(&mut self, patch: Props) {
		for (name, value) in patch {
			self.state.set(name, value);
		}
	}

	/// Records a re-render request. The merged state is already visible to
	/// the upcoming `render`; no second pass happens.
	pub fn force_update(&mut self) {
		self.force_requested = true;
	}

	/// Whether `force_update` was called during the hook.
	pub fn force_update_requested(&self) -> bool {
		self.force_requested
	}
}

/// A classful component.
///
/// Instances are created per invocation and live only for the duration of
/// their subtree's emission. `props`, `state`, and `context` are passed
/// explicitly rather than held as instance slots, so the borrow story is
/// plain: the renderer owns the slots, the component reads them.
pub trait Component: Send + Sync {
	/// Produces the rendered child. Called exactly once per instance.
	fn render(&self, props: &Props, state: &Props, context: &Context) -> Result<VNode, BoxError>;

	/// Initial state for a fresh instance. Defaults to the empty mapping.
	fn initial_state(&self, _props: &Props) -> Props {
		Props::new()
	}

	/// Pre-mount hook, run after construction and before `render`.
	fn component_will_mount(&mut self, _mount: &mut Mount<'_>) -> Result<(), BoxError> {
		Ok(())
	}

	/// Ambient values for the subtree. A returned mapping is merged over
	/// the inherited context for descendants; siblings are unaffected.
	fn get_child_context(
		&self,
		_props: &Props,
		_state: &Props,
		_context: &Context,
	) -> Result<Option<Props>, BoxError> {
		Ok(None)
	}
}

/// A functional component body.
pub type FunctionalFn = dyn Fn(&Props, &Context) -> Result<VNode, BoxError> + Send + Sync;

/// A classful component constructor.
pub type ClassFactory = dyn Fn(&Props, &Context) -> Box<dyn Component> + Send + Sync;

/// How a component resolves, decided once when the descriptor is built.
#[derive(Clone)]
pub enum ComponentKind {
	/// Invoke with `(props, context)`.
	Functional(Arc<FunctionalFn>),
	/// Construct, pre-mount, then render.
	Classful(Arc<ClassFactory>),
}

impl fmt::Debug for ComponentKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ComponentKind::Functional(_) => f.write_str("Functional"),
			ComponentKind::Classful(_) => f.write_str("Classful"),
		}
	}
}

/// A component descriptor: dispatch tag, display name, and default props.
///
/// Descriptors are shared (`Arc`) between every call site that references
/// the component, so a component keeps a single identity however many
/// trees mention it.
///
/// # Example
///
/// ```
/// use rill_dom::{ComponentDef, Props, VNode, h};
///
/// let greeting = ComponentDef::functional("Greeting", |props, _ctx| {
///     let name = props.get("name").and_then(|v| v.as_str()).unwrap_or("world");
///     Ok(h("p", Props::new(), vec![VNode::text(format!("Hello, {name}!"))]))
/// })
/// .shared();
///
/// let node = h(&greeting, Props::new().attr("name", "rill"), vec![]);
/// # let _ = node;
/// ```
#[derive(Debug, Clone)]
pub struct ComponentDef {
	kind: ComponentKind,
	display_name: Option<String>,
	default_props: Props,
}

impl ComponentDef {
	/// Builds a functional component descriptor.
	pub fn functional(
		name: impl Into<String>,
		body: impl Fn(&Props, &Context) -> Result<VNode, BoxError> + Send + Sync + 'static,
	) -> Self {
		Self {
			kind: ComponentKind::Functional(Arc::new(body)),
			display_name: Some(name.into()),
			default_props: Props::new(),
		}
	}

	/// Builds a classful component descriptor from a constructor.
	pub fn class<C: Component + 'static>(
		name: impl Into<String>,
		factory: impl Fn(&Props, &Context) -> C + Send + Sync + 'static,
	) -> Self {
		Self {
			kind: ComponentKind::Classful(Arc::new(move |props, context| {
				Box::new(factory(props, context))
			})),
			display_name: Some(name.into()),
			default_props: Props::new(),
		}
	}

	/// Builds an anonymous functional component descriptor.
	pub fn anonymous(
		body: impl Fn(&Props, &Context) -> Result<VNode, BoxError> + Send + Sync + 'static,
	) -> Self {
		Self {
			kind: ComponentKind::Functional(Arc::new(body)),
			display_name: None,
			default_props: Props::new(),
		}
	}

	/// Attaches default props, merged under explicit props at every
	/// invocation.
	pub fn default_props(mut self, props: Props) -> Self {
		self.default_props = props;
		self
	}

	/// Wraps the descriptor for sharing between call sites.
	pub fn shared(self) -> Arc<Self> {
		Arc::new(self)
	}

	/// The dispatch tag.
	pub fn kind(&self) -> &ComponentKind {
		&self.kind
	}

	/// The display name, falling back to [`ANONYMOUS_COMPONENT`].
	pub fn display_name(&self) -> &str {
		self.display_name.as_deref().unwrap_or(ANONYMOUS_COMPONENT)
	}

	/// The declared default props.
	pub fn defaults(&self) -> &Props {
		&self.default_props
	}
}
