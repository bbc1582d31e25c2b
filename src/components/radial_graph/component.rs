use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent, TouchList, WheelEvent,
	Window,
};

use super::config::EditorConfig;
use super::coords::Point;
use super::drag::PointerId;
use super::inspector::InspectorPanel;
use super::persistence::PersistenceGateway;
use super::render;
use super::state::EditorState;
use super::types::GraphModel;

const DEFAULT_WIDTH: f64 = 800.0;
const DEFAULT_HEIGHT: f64 = 600.0;

/// Position relative to the canvas element's top-left corner.
fn canvas_point(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	client_x: i32,
	client_y: i32,
) -> Option<Point> {
	let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some(Point::new(
		client_x as f64 - rect.left(),
		client_y as f64 - rect.top(),
	))
}

fn for_each_touch(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	touches: TouchList,
	mut f: impl FnMut(PointerId, Point),
) {
	for i in 0..touches.length() {
		let Some(touch) = touches.get(i) else {
			continue;
		};
		if let Some(p) = canvas_point(canvas_ref, touch.client_x(), touch.client_y()) {
			f(PointerId::Touch(touch.identifier()), p);
		}
	}
}

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Radial editor: a canvas where categories orbit a center node, plus the
/// inspector form for the selected category.
///
/// The graph is loaded from `gateway` once the canvas is mounted and written
/// back wholesale when the user saves.
#[component]
pub fn RadialGraphEditor<G>(
	gateway: G,
	#[prop(optional)] config: Option<EditorConfig>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView
where
	G: PersistenceGateway + Send + Sync + 'static,
{
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let gateway = StoredValue::new(gateway);
	let state = RwSignal::new(EditorState::new(
		GraphModel::default(),
		config.unwrap_or_default(),
		DEFAULT_WIDTH,
		DEFAULT_HEIGHT,
	));
	let status = RwSignal::new(None::<String>);
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("no window, editor not started");
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window).unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(DEFAULT_WIDTH)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(DEFAULT_HEIGHT)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		state.update(|s| s.resize(w, h));

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					error!("2d context has unexpected type");
					return;
				}
			},
			_ => {
				error!("canvas has no 2d context");
				return;
			}
		};

		// the render below may briefly show an empty graph until this lands
		match gateway.with_value(|g| g.load()) {
			Ok(model) => state.update(|s| s.replace_model(model)),
			Err(e) => {
				warn!("load failed: {e}");
				status.set(Some(format!("Could not load graph: {e}")));
			}
		}

		if fullscreen {
			let canvas_resize = canvas.clone();
			*resize_cb.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				state.update(|s| s.resize(nw, nh));
			}));
			if let Some(ref cb) = *resize_cb.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let animate_inner = animate.clone();
		*animate.borrow_mut() = Some(Closure::new(move || {
			if state
				.try_with_untracked(|s| render::render(s, &ctx))
				.is_none()
			{
				// editor was unmounted
				return;
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let on_mousedown = move |ev: MouseEvent| {
		if let Some(p) = canvas_point(canvas_ref, ev.client_x(), ev.client_y()) {
			state.update(|s| s.pointer_down(PointerId::Mouse, p));
		}
	};

	let on_mousemove = move |ev: MouseEvent| {
		if let Some(p) = canvas_point(canvas_ref, ev.client_x(), ev.client_y()) {
			state.update(|s| s.pointer_move(PointerId::Mouse, p));
		}
	};

	let on_mouseup = move |_: MouseEvent| {
		state.update(|s| s.pointer_up(PointerId::Mouse));
	};

	let on_mouseleave = move |_: MouseEvent| {
		state.update(|s| s.pointer_leave());
	};

	let on_touchstart = move |ev: TouchEvent| {
		ev.prevent_default();
		for_each_touch(canvas_ref, ev.changed_touches(), |id, p| {
			state.update(|s| s.pointer_down(id, p));
		});
	};

	let on_touchmove = move |ev: TouchEvent| {
		ev.prevent_default();
		for_each_touch(canvas_ref, ev.changed_touches(), |id, p| {
			state.update(|s| s.pointer_move(id, p));
		});
	};

	let on_touchend = move |ev: TouchEvent| {
		for_each_touch(canvas_ref, ev.changed_touches(), |id, _| {
			state.update(|s| s.pointer_up(id));
		});
	};

	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		if let Some(p) = canvas_point(canvas_ref, ev.client_x(), ev.client_y()) {
			state.update(|s| s.wheel(p, ev.delta_y()));
		}
	};

	let on_save = Callback::new(move |_: ()| {
		let result = state.with_untracked(|s| gateway.with_value(|g| g.save(&s.model)));
		match result {
			Ok(()) => status.set(Some("Saved".to_owned())),
			Err(e) => {
				error!("save failed: {e}");
				status.set(Some(format!("Save failed: {e}")));
			}
		}
	});

	let cursor = move || {
		state.with(|s| {
			if s.drag.dragging().is_some() || s.pan.pointer.is_some() {
				"cursor: grabbing;"
			} else if s.hover.is_some() {
				"cursor: pointer;"
			} else {
				"cursor: grab;"
			}
		})
	};

	info!("radial graph editor mounted");

	view! {
		<div class="radial-graph-editor">
			<canvas
				node_ref=canvas_ref
				class="radial-graph-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:touchstart=on_touchstart
				on:touchmove=on_touchmove
				on:touchend=on_touchend
				on:touchcancel=on_touchend
				on:wheel=on_wheel
				style=move || format!("display: block; touch-action: none; {}", cursor())
			/>
			<InspectorPanel state=state status=status on_save=on_save />
		</div>
	}
}
