//! Text and JSON output for grouped label trees.

use std::fmt::Write;

use clau_navigation::{LabelNode, NodeKind, Surface};
use serde_json::{Map, Value};

/// Indented outline, one node per line. Leaves show their route.
pub fn outline(surface: Surface, nodes: &[LabelNode]) -> String {
	let mut out = format!("{surface}\n");
	if nodes.is_empty() {
		out.push_str("  (empty)\n");
	}
	for node in nodes {
		write_node(&mut out, node, 1);
	}
	out
}

fn write_node(out: &mut String, node: &LabelNode, depth: usize) {
	let indent = "  ".repeat(depth);
	let _ = match (node.kind, &node.route) {
		(NodeKind::Leaf, Some(route)) => writeln!(out, "{indent}- {} ({route})", node.title),
		(NodeKind::Leaf, None) => writeln!(out, "{indent}- {}", node.title),
		(NodeKind::Group, _) => writeln!(out, "{indent}+ {}", node.title),
	};
	for child in &node.children {
		write_node(out, child, depth + 1);
	}
}

/// `{ "<surface>": [nodes...] }` for every requested surface.
pub fn json(trees: &[(Surface, Vec<LabelNode>)]) -> serde_json::Result<String> {
	let mut map = Map::new();
	for (surface, nodes) in trees {
		map.insert(surface.as_str().to_owned(), serde_json::to_value(nodes)?);
	}
	serde_json::to_string_pretty(&Value::Object(map))
}

#[cfg(test)]
mod tests {
	use clau_navigation::{NavigationStore, RouteManifest, TreePolicy};
	use pretty_assertions::assert_eq;

	use super::*;

	const MANIFEST: &str = r#"[
		{ "name": "index", "path": "/", "meta": { "title": "Home", "navbar": { "show": true } } },
		{ "name": "blog", "path": "/blog", "meta": { "title": "Blog", "navbar": { "show": true } } },
		{ "name": "blog-slug", "path": "/blog/:slug", "meta": { "title": "Post", "navbar": { "show": true } } }
	]"#;

	fn navbar() -> Vec<LabelNode> {
		let manifest = RouteManifest::from_json(MANIFEST).unwrap();
		let store = NavigationStore::from_source(&manifest, TreePolicy::default()).unwrap();
		store.grouped(Surface::Navbar).as_ref().clone()
	}

	#[test]
	fn renders_outline() {
		assert_eq!(
			outline(Surface::Navbar, &navbar()),
			"navbar\n  + blog\n    - Blog (/blog)\n    + :slug\n      - Post (/blog/:slug)\n"
		);
	}

	#[test]
	fn marks_empty_surfaces() {
		assert_eq!(outline(Surface::Footer, &[]), "footer\n  (empty)\n");
	}

	#[test]
	fn renders_json_keyed_by_surface() {
		let text = json(&[(Surface::Navbar, navbar()), (Surface::Footer, Vec::new())]).unwrap();
		let value: Value = serde_json::from_str(&text).unwrap();
		assert_eq!(value["footer"], Value::Array(Vec::new()));
		assert_eq!(value["navbar"][0]["kind"], "group");
		assert_eq!(value["navbar"][0]["children"][1]["children"][0]["route"], "/blog/:slug");
	}
}
