//! Component behavior integration tests.
//!
//! Test Categories:
//! 1. Functional Components - invocation, props, children
//! 2. Classful Lifecycle - pre-mount ordering and state locking
//! 3. Context - child context visibility and isolation
//! 4. Default Props - merge semantics
//! 5. Failures - error wrapping with display names

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rill_dom::{
	AttrValue, BoxError, Component, ComponentDef, Context, Mount, Props, VNode, h,
};
use rill_render::{RenderError, render_to_string, render_to_string_in};

// ============================================================================
// Test Components
// ============================================================================

/// Records lifecycle entry order and counts renders.
struct Traced {
	log: Arc<Mutex<Vec<&'static str>>>,
	renders: Arc<AtomicUsize>,
}

impl Component for Traced {
	fn initial_state(&self, _props: &Props) -> Props {
		Props::new().attr("count", 1)
	}

	fn component_will_mount(&mut self, mount: &mut Mount<'_>) -> Result<(), BoxError> {
		self.log.lock().unwrap().push("will_mount");
		mount.set_state(Props::new().attr("count", 5));
		mount.force_update();
		Ok(())
	}

	fn render(&self, _props: &Props, state: &Props, _context: &Context) -> Result<VNode, BoxError> {
		self.log.lock().unwrap().push("render");
		self.renders.fetch_add(1, Ordering::SeqCst);
		let count = state.get("count").map(|v| v.to_string()).unwrap_or_default();
		Ok(h("div", Props::new(), vec![VNode::from(count)]))
	}
}

/// Provides ambient values to its subtree and renders its children.
struct Provider;

impl Component for Provider {
	fn get_child_context(
		&self,
		props: &Props,
		_state: &Props,
		_context: &Context,
	) -> Result<Option<Props>, BoxError> {
		let theme = props.get("theme").cloned().unwrap_or(AttrValue::Null);
		Ok(Some(Props::new().attr("theme", theme)))
	}

	fn render(&self, props: &Props, _state: &Props, _context: &Context) -> Result<VNode, BoxError> {
		let children = props.get("children").cloned().unwrap_or(AttrValue::Null);
		Ok(VNode::from(children))
	}
}

fn reader_def() -> Arc<ComponentDef> {
	ComponentDef::functional("Reader", |_props, context| {
		let theme = context
			.get("theme")
			.map(|v| v.to_string())
			.unwrap_or_else(|| "missing".to_string());
		Ok(h("i", Props::new(), vec![VNode::from(theme)]))
	})
	.shared()
}

// ============================================================================
// Category 1: Functional Components
// ============================================================================

#[test]
fn test_functional_component_receives_props_and_children() {
	let def = ComponentDef::functional("Wrapper", |props, _context| {
		let title = props.get("title").and_then(|v| v.as_str()).unwrap_or("?");
		let children = props.get("children").cloned().unwrap_or(AttrValue::Null);
		Ok(h(
			"section",
			Props::new().attr("title", title.to_string()),
			vec![VNode::from(children)],
		))
	})
	.shared();

	let html = render_to_string(h(
		&def,
		Props::new().attr("title", "greetings"),
		vec![VNode::from("hi")],
	))
	.unwrap();
	assert_eq!(html, "<section title=\"greetings\">hi</section>");
}

#[test]
fn test_components_nest() {
	let item = ComponentDef::functional("Item", |props, _context| {
		let children = props.get("children").cloned().unwrap_or(AttrValue::Null);
		Ok(h("li", Props::new(), vec![VNode::from(children)]))
	})
	.shared();

	let item_a = Arc::clone(&item);
	let list = ComponentDef::functional("List", move |_props, _context| {
		Ok(h(
			"ul",
			Props::new(),
			vec![
				h(&item_a, Props::new(), vec![VNode::from("one")]),
				h(&item_a, Props::new(), vec![VNode::from("two")]),
			],
		))
	})
	.shared();

	let html = render_to_string(h(&list, Props::new(), vec![])).unwrap();
	assert_eq!(html, "<ul><li>one</li><li>two</li></ul>");
}

// ============================================================================
// Category 2: Classful Lifecycle
// ============================================================================

#[test]
fn test_will_mount_runs_exactly_once_before_render() {
	let log = Arc::new(Mutex::new(Vec::new()));
	let renders = Arc::new(AtomicUsize::new(0));

	let log_for_factory = Arc::clone(&log);
	let renders_for_factory = Arc::clone(&renders);
	let def = ComponentDef::class("Traced", move |_props, _context| Traced {
		log: Arc::clone(&log_for_factory),
		renders: Arc::clone(&renders_for_factory),
	})
	.shared();

	render_to_string(h(&def, Props::new(), vec![])).unwrap();
	assert_eq!(*log.lock().unwrap(), vec!["will_mount", "render"]);
}

#[test]
fn test_premount_state_merge_is_visible_to_render() {
	let log = Arc::new(Mutex::new(Vec::new()));
	let renders = Arc::new(AtomicUsize::new(0));

	let log_for_factory = Arc::clone(&log);
	let renders_for_factory = Arc::clone(&renders);
	let def = ComponentDef::class("Traced", move |_props, _context| Traced {
		log: Arc::clone(&log_for_factory),
		renders: Arc::clone(&renders_for_factory),
	})
	.shared();

	let html = render_to_string(h(&def, Props::new(), vec![])).unwrap();
	assert_eq!(html, "<div>5</div>");
}

#[test]
fn test_force_update_during_premount_causes_no_second_render() {
	let log = Arc::new(Mutex::new(Vec::new()));
	let renders = Arc::new(AtomicUsize::new(0));

	let log_for_factory = Arc::clone(&log);
	let renders_for_factory = Arc::clone(&renders);
	let def = ComponentDef::class("Traced", move |_props, _context| Traced {
		log: Arc::clone(&log_for_factory),
		renders: Arc::clone(&renders_for_factory),
	})
	.shared();

	render_to_string(h(&def, Props::new(), vec![])).unwrap();
	assert_eq!(renders.load(Ordering::SeqCst), 1);
}

// ============================================================================
// Category 3: Context
// ============================================================================

#[test]
fn test_child_context_is_visible_to_descendants_but_not_siblings() {
	let provider = ComponentDef::class("Provider", |_props, _context| Provider).shared();
	let reader = reader_def();

	let tree = h(
		"div",
		Props::new(),
		vec![
			h(
				&provider,
				Props::new().attr("theme", "dark"),
				vec![h(&reader, Props::new(), vec![])],
			),
			h(&reader, Props::new(), vec![]),
		],
	);

	let html = render_to_string(tree).unwrap();
	assert_eq!(html, "<div><i>dark</i><i>missing</i></div>");
}

#[test]
fn test_nested_providers_shadow_for_their_subtree_only() {
	let provider = ComponentDef::class("Provider", |_props, _context| Provider).shared();
	let reader = reader_def();

	let tree = h(
		&provider,
		Props::new().attr("theme", "light"),
		vec![
			h(
				&provider,
				Props::new().attr("theme", "dark"),
				vec![h(&reader, Props::new(), vec![])],
			),
			h(&reader, Props::new(), vec![]),
		],
	);

	let html = render_to_string(tree).unwrap();
	assert_eq!(html, "<i>dark</i><i>light</i>");
}

#[test]
fn test_root_context_reaches_components() {
	let reader = reader_def();
	let context = Context::from(Props::new().attr("theme", "sepia"));
	let html = render_to_string_in(h(&reader, Props::new(), vec![]), context).unwrap();
	assert_eq!(html, "<i>sepia</i>");
}

// ============================================================================
// Category 4: Default Props
// ============================================================================

#[test]
fn test_default_props_merge_under_explicit_props() {
	let def = ComponentDef::functional("Labelled", |props, _context| {
		let label = props.get("label").and_then(|v| v.as_str()).unwrap_or("?");
		let kind = props.get("kind").and_then(|v| v.as_str()).unwrap_or("?");
		Ok(h(
			"span",
			Props::new()
				.attr("data-label", label.to_string())
				.attr("data-kind", kind.to_string()),
			vec![],
		))
	})
	.default_props(Props::new().attr("label", "default").attr("kind", "plain"))
	.shared();

	let html = render_to_string(h(
		&def,
		Props::new().attr("label", "explicit"),
		vec![],
	))
	.unwrap();
	assert_eq!(
		html,
		"<span data-label=\"explicit\" data-kind=\"plain\"></span>"
	);
}

// ============================================================================
// Category 5: Failures
// ============================================================================

#[test]
fn test_functional_failure_carries_display_name() {
	let def = ComponentDef::functional("Broken", |_props, _context| Err("nope".into())).shared();
	let err = render_to_string(h(&def, Props::new(), vec![])).unwrap_err();
	match err {
		RenderError::Component { name, .. } => assert_eq!(name, "Broken"),
		other => panic!("unexpected error: {other:?}"),
	}
}

#[test]
fn test_premount_failure_aborts_the_render() {
	struct FailsEarly;
	impl Component for FailsEarly {
		fn component_will_mount(&mut self, _mount: &mut Mount<'_>) -> Result<(), BoxError> {
			Err("pre-mount failed".into())
		}
		fn render(
			&self,
			_props: &Props,
			_state: &Props,
			_context: &Context,
		) -> Result<VNode, BoxError> {
			panic!("render must not run after a failed pre-mount");
		}
	}

	let def = ComponentDef::class("FailsEarly", |_props, _context| FailsEarly).shared();
	let err = render_to_string(h("div", Props::new(), vec![h(&def, Props::new(), vec![])]))
		.unwrap_err();
	assert!(matches!(err, RenderError::Component { .. }));
}

#[test]
fn test_no_partial_result_on_component_failure() {
	let def = ComponentDef::functional("Broken", |_props, _context| Err("nope".into())).shared();
	let result = render_to_string(h(
		"div",
		Props::new(),
		vec![VNode::from("before"), h(&def, Props::new(), vec![])],
	));
	assert!(result.is_err());
}
