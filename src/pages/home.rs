use leptos::prelude::*;

use crate::components::radial_graph::{
	Category, EditorConfig, GraphModel, LocalStorageGateway, RadialGraphEditor, Tool,
};

/// Graph shown the first time the editor opens, before anything was saved.
fn seed_graph() -> GraphModel {
	let ring = [
		("frontend", "Frontend", "monitor", "blue"),
		("backend", "Backend", "server", "green"),
		("design", "Design", "pen", "pink"),
		("ops", "Ops", "cloud", "orange"),
	];
	let tools: [&[&str]; 4] = [
		&["Leptos", "TypeScript"],
		&["Rust", "PostgreSQL", "Redis"],
		&["Figma"],
		&[],
	];
	let step = 360.0 / ring.len() as f64;
	let categories = ring
		.iter()
		.zip(tools)
		.enumerate()
		.map(|(i, ((id, label, icon, color), tools))| Category {
			id: (*id).into(),
			label: (*label).into(),
			icon_type: (*icon).into(),
			angle: step * i as f64,
			radius: if i % 2 == 0 { 200.0 } else { 300.0 },
			color: (*color).into(),
			tools: tools
				.iter()
				.enumerate()
				.map(|(j, name)| Tool {
					id: format!("{id}-tool-{j}").into(),
					name: (*name).into(),
					icon_url: String::new(),
					color: String::new(),
				})
				.collect(),
		})
		.collect();

	GraphModel {
		title: "Expertise".into(),
		subtitle: "What I build with".into(),
		categories,
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let config = EditorConfig::default();
	let gateway = LocalStorageGateway::new(config.storage_key.clone(), seed_graph());

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<RadialGraphEditor gateway=gateway config=config fullscreen=true />
				<div class="graph-overlay">
					<h1>"Expertise Editor"</h1>
					<p class="subtitle">
						"Drag categories to place them. Scroll to zoom. Drag the background to pan."
					</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::seed_graph;

	#[test]
	fn test_seed_graph_is_valid() {
		let mut model = seed_graph();
		let before = model.clone();
		model.sanitize();
		assert_eq!(model, before);
		let ops = model
			.categories
			.iter()
			.find(|c| c.id.as_str() == "ops")
			.unwrap();
		assert!(ops.tools.is_empty());
		for c in &model.categories {
			for (i, t) in c.tools.iter().enumerate() {
				assert!(c.tools[i + 1..].iter().all(|o| o.id != t.id));
			}
		}
	}
}
