use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::config::resolve_color;
use super::coords::Point;
use super::state::{EditorState, ORIGIN};
use super::types::{Category, NodeHit};

const BACKGROUND: &str = "#0f172a";
const GUIDE: &str = "rgba(148, 163, 184, 0.25)";
const SPOKE: &str = "rgba(148, 163, 184, 0.5)";
const CENTER_FILL: &str = "#f8fafc";
const LABEL: &str = "#e2e8f0";

pub fn render(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_guides(state, ctx);
	draw_center(state, ctx);
	for category in &state.model.categories {
		draw_category(state, ctx, category);
	}
	ctx.restore();
}

fn circle(ctx: &CanvasRenderingContext2d, p: Point, radius: f64) {
	ctx.begin_path();
	let _ = ctx.arc(p.x, p.y, radius, 0.0, 2.0 * PI);
}

fn draw_guides(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	ctx.set_stroke_style_str(GUIDE);
	ctx.set_line_width(1.0 / k);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(6.0 / k),
		&JsValue::from_f64(6.0 / k),
	));
	for &ring in &state.config.rings {
		circle(ctx, ORIGIN, ring);
		ctx.stroke();
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());

	ctx.set_stroke_style_str(SPOKE);
	ctx.set_line_width(1.5 / k);
	for category in &state.model.categories {
		let p = state.category_position(category);
		ctx.begin_path();
		ctx.move_to(ORIGIN.x, ORIGIN.y);
		ctx.line_to(p.x, p.y);
		ctx.stroke();
	}
}

fn draw_center(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	circle(ctx, ORIGIN, state.config.center_radius);
	ctx.set_fill_style_str(CENTER_FILL);
	ctx.fill();
	if state.is_hovered(&NodeHit::Center) {
		ctx.set_stroke_style_str("white");
		ctx.set_line_width(2.0 / k);
		circle(ctx, ORIGIN, state.config.center_radius + 3.0 / k);
		ctx.stroke();
	}
	if !state.model.title.is_empty() {
		ctx.set_fill_style_str(BACKGROUND);
		ctx.set_font(&format!("bold {}px sans-serif", 11.0 / k.max(0.5)));
		ctx.set_text_align("center");
		let _ = ctx.fill_text(&state.model.title, ORIGIN.x, ORIGIN.y + 4.0);
		ctx.set_text_align("start");
	}
}

fn draw_category(state: &EditorState, ctx: &CanvasRenderingContext2d, category: &Category) {
	let k = state.transform.k;
	let p = state.category_position(category);
	let r = state.config.node_radius;
	let selected = state.selection.is_selected(&category.id);
	let dragging = state.drag.dragging() == Some(&category.id);

	// satellites first so the node sits on top of its links
	for (tool, pos) in category.tools.iter().zip(state.tool_positions(category)) {
		ctx.set_stroke_style_str(GUIDE);
		ctx.set_line_width(1.0 / k);
		ctx.begin_path();
		ctx.move_to(p.x, p.y);
		ctx.line_to(pos.x, pos.y);
		ctx.stroke();

		let color = if tool.color.is_empty() {
			&category.color
		} else {
			&tool.color
		};
		circle(ctx, pos, state.config.tool_radius);
		ctx.set_fill_style_str(resolve_color(color));
		ctx.fill();

		let hit = NodeHit::Tool {
			category: category.id.clone(),
			tool: tool.id.clone(),
		};
		if state.is_hovered(&hit) && !tool.name.is_empty() {
			ctx.set_fill_style_str(LABEL);
			ctx.set_font(&format!("{}px sans-serif", 9.0 / k.max(0.5)));
			let x = pos.x + state.config.tool_radius + 2.0;
			let _ = ctx.fill_text(&tool.name, x, pos.y + 3.0);
		}
	}

	if selected || dragging {
		ctx.set_global_alpha(0.35);
		circle(ctx, p, r * 1.6);
		ctx.set_fill_style_str(resolve_color(&category.color));
		ctx.fill();
		ctx.set_global_alpha(1.0);
	}

	circle(ctx, p, r);
	ctx.set_fill_style_str(resolve_color(&category.color));
	ctx.fill();

	if selected || state.is_hovered(&NodeHit::Category(category.id.clone())) {
		circle(ctx, p, r + 2.0 / k);
		let ring = if selected {
			"white"
		} else {
			"rgba(255, 255, 255, 0.6)"
		};
		ctx.set_stroke_style_str(ring);
		ctx.set_line_width(1.5 / k);
		ctx.stroke();
	}

	if !category.label.is_empty() {
		ctx.set_fill_style_str(LABEL);
		ctx.set_font(&format!("{}px sans-serif", 11.0 / k.max(0.5)));
		ctx.set_text_align("center");
		let _ = ctx.fill_text(&category.label, p.x, p.y + r + 14.0 / k.max(0.5));
		ctx.set_text_align("start");
	}
}
