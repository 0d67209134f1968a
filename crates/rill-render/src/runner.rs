//! Component resolution: instantiation, pre-mount, and render.

use rill_dom::{AttrValue, ComponentKind, ComponentVNode, Context, Mount, Props, VNode};
use tracing::trace;

use crate::error::RenderError;

/// The outcome of resolving a component node: the rendered child and the
/// context its subtree inherits.
#[derive(Debug)]
pub(crate) struct Resolved {
	pub child: VNode,
	pub context: Context,
}

/// Resolves a component node against the inherited context.
///
/// Default props merge under the node's explicit props, the child sequence
/// (flattened one level) is injected as the `children` prop, and the
/// component runs exactly once: construct, pre-mount, child-context,
/// render. State changes requested during pre-mount merge synchronously
/// and are visible to `render`; nothing reschedules.
pub(crate) fn resolve_component(
	vnode: ComponentVNode,
	context: &Context,
) -> Result<Resolved, RenderError> {
	let ComponentVNode {
		def,
		props: explicit,
		children,
	} = vnode;

	let name = def.display_name();
	trace!(component = name, "resolving component");

	let mut props = def.defaults().merged_with(&explicit);
	props.set("children", AttrValue::Nodes(flatten_once(children)));

	match def.kind() {
		ComponentKind::Functional(body) => {
			let child = body(&props, context)
				.map_err(|source| RenderError::component(name, source))?;
			Ok(Resolved {
				child,
				context: context.clone(),
			})
		}
		ComponentKind::Classful(factory) => {
			let mut instance = factory(&props, context);
			let mut state = instance.initial_state(&props);

			let mut mount = Mount::new(&props, context, &mut state);
			instance
				.component_will_mount(&mut mount)
				.map_err(|source| RenderError::component(name, source))?;

			let child_context = match instance
				.get_child_context(&props, &state, context)
				.map_err(|source| RenderError::component(name, source))?
			{
				Some(patch) => context.extend(&patch),
				None => context.clone(),
			};

			let child = instance
				.render(&props, &state, &child_context)
				.map_err(|source| RenderError::component(name, source))?;

			Ok(Resolved {
				child,
				context: child_context,
			})
		}
	}
}

/// Flattens one level of nesting, the shape the `children` prop takes.
fn flatten_once(children: Vec<VNode>) -> Vec<VNode> {
	let mut flat = Vec::with_capacity(children.len());
	for child in children {
		match child {
			VNode::Fragment(items) => flat.extend(items),
			other => flat.push(other),
		}
	}
	flat
}
