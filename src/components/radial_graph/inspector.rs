use leptos::prelude::*;
use log::info;

use super::config::PALETTE;
use super::state::EditorState;
use super::types::{Category, Tool, ToolField, ToolId};

fn confirm(message: &str) -> bool {
	web_sys::window()
		.and_then(|w| w.confirm_with_message(message).ok())
		.unwrap_or(false)
}

fn parse_number(value: &str) -> Option<f64> {
	value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Side panel bound to the current selection. Without a selection it edits
/// the graph title and subtitle.
#[component]
pub fn InspectorPanel(
	state: RwSignal<EditorState>,
	status: RwSignal<Option<String>>,
	on_save: Callback<()>,
) -> impl IntoView {
	let selected_id = Memo::new(move |_| state.with(|s| s.selection.selected_id().cloned()));

	let on_add = move |_| {
		state.update(|s| {
			s.add_category();
		});
	};

	view! {
		<aside class="inspector">
			{move || match selected_id.get() {
				Some(_) => view! { <CategoryForm state=state /> }.into_any(),
				None => view! { <GlobalForm state=state /> }.into_any(),
			}}
			<div class="inspector-actions">
				<button on:click=on_add>"Add category"</button>
				<button on:click=move |_| on_save.run(())>"Save"</button>
			</div>
			<p class="inspector-status">{move || status.get().unwrap_or_default()}</p>
		</aside>
	}
}

#[component]
fn GlobalForm(state: RwSignal<EditorState>) -> impl IntoView {
	view! {
		<h2>"Graph"</h2>
		<label>
			"Title"
			<input
				type="text"
				prop:value=move || state.with(|s| s.model.title.clone())
				on:input=move |ev| {
					let v = event_target_value(&ev);
					state.update(|s| s.inspector().set_title(v));
				}
			/>
		</label>
		<label>
			"Subtitle"
			<input
				type="text"
				prop:value=move || state.with(|s| s.model.subtitle.clone())
				on:input=move |ev| {
					let v = event_target_value(&ev);
					state.update(|s| s.inspector().set_subtitle(v));
				}
			/>
		</label>
		<p class="hint">"Select a category on the canvas to edit it."</p>
	}
}

#[component]
fn CategoryForm(state: RwSignal<EditorState>) -> impl IntoView {
	let selected = Memo::new(move |_| state.with(|s| s.selected().cloned()));
	let tools = move || selected.with(|c| c.as_ref().map(|c| c.tools.clone()).unwrap_or_default());
	let read =
		move |f: fn(&Category) -> String| selected.with(|c| c.as_ref().map(f).unwrap_or_default());

	let on_delete = move |_| {
		if !confirm("Delete this category and its tools?") {
			return;
		}
		state.update(|s| {
			if let Some(removed) = s.inspector().remove_selected() {
				info!("deleted category {}", removed.id);
			}
		});
	};

	let on_add_tool = move |_| {
		state.update(|s| {
			s.inspector().add_tool();
		});
	};

	view! {
		<h2>"Category"</h2>
		<label>
			"Label"
			<input
				type="text"
				prop:value=move || read(|c| c.label.clone())
				on:input=move |ev| {
					let v = event_target_value(&ev);
					state.update(|s| s.inspector().set_label(v));
				}
			/>
		</label>
		<label>
			"Icon"
			<input
				type="text"
				prop:value=move || read(|c| c.icon_type.clone())
				on:input=move |ev| {
					let v = event_target_value(&ev);
					state.update(|s| s.inspector().set_icon_type(v));
				}
			/>
		</label>
		<label>
			"Color"
			<select
				prop:value=move || read(|c| c.color.clone())
				on:change=move |ev| {
					let v = event_target_value(&ev);
					state.update(|s| s.inspector().set_color(v));
				}
			>
				{PALETTE
					.iter()
					.map(|(name, _)| view! { <option value=*name>{*name}</option> })
					.collect_view()}
			</select>
		</label>
		<label>
			"Angle (°)"
			<input
				type="number"
				min="0"
				max="359"
				step="1"
				prop:value=move || read(|c| c.angle.to_string())
				on:change=move |ev| {
					if let Some(v) = parse_number(&event_target_value(&ev)) {
						state.update(|s| s.inspector().set_angle(v));
					}
				}
			/>
		</label>
		<label>
			"Radius"
			<input
				type="number"
				min="0"
				step="1"
				prop:value=move || read(|c| c.radius.to_string())
				on:change=move |ev| {
					if let Some(v) = parse_number(&event_target_value(&ev)) {
						state.update(|s| s.inspector().set_radius(v));
					}
				}
			/>
		</label>

		<h3>"Tools"</h3>
		<ul class="tool-list">
			<For
				each=tools
				key=|tool: &Tool| tool.id.clone()
				children=move |tool: Tool| view! { <ToolRow state=state tool_id=tool.id /> }
			/>
		</ul>
		<div class="inspector-actions">
			<button on:click=on_add_tool>"Add tool"</button>
			<button class="danger" on:click=on_delete>"Delete category"</button>
		</div>
	}
}

#[component]
fn ToolRow(state: RwSignal<EditorState>, tool_id: ToolId) -> impl IntoView {
	let tool_id = StoredValue::new(tool_id);
	let tool = Memo::new(move |_| {
		let id = tool_id.get_value();
		state.with(|s| {
			s.selected()
				.and_then(|c| c.tools.iter().find(|t| t.id == id))
				.cloned()
		})
	});
	let read = move |f: fn(&Tool) -> String| tool.with(|t| t.as_ref().map(f).unwrap_or_default());
	let write = move |field: ToolField, value: String| {
		let id = tool_id.get_value();
		state.update(|s| s.inspector().update_tool(&id, field, value));
	};

	view! {
		<li class="tool-row">
			<input
				type="text"
				placeholder="Name"
				prop:value=move || read(|t| t.name.clone())
				on:input=move |ev| write(ToolField::Name, event_target_value(&ev))
			/>
			<input
				type="text"
				placeholder="Icon URL"
				prop:value=move || read(|t| t.icon_url.clone())
				on:input=move |ev| write(ToolField::IconUrl, event_target_value(&ev))
			/>
			<input
				type="text"
				placeholder="Color"
				prop:value=move || read(|t| t.color.clone())
				on:input=move |ev| write(ToolField::Color, event_target_value(&ev))
			/>
			<button on:click=move |_| {
				let id = tool_id.get_value();
				state.update(|s| s.inspector().remove_tool(&id));
			}>"Remove"</button>
		</li>
	}
}
