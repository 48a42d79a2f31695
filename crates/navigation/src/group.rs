//! Folding visible pages into per-surface label trees.

use serde::Serialize;

use crate::segment::{is_root_route, segments};
use crate::{MatchKey, Page, Surface, SurfaceLabel, TreePolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
	/// Synthetic node for a shared path segment.
	Group,
	/// A registered page.
	Leaf,
}

/// One node of a grouped label tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelNode {
	pub kind: NodeKind,
	pub id: String,
	pub title: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub show: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub index: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub route: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub icon: Option<String>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub children: Vec<LabelNode>,
}

impl LabelNode {
	/// Grouping node for `segment`, carrying the label's display fields.
	fn group(segment: &str, label: &SurfaceLabel) -> Self {
		Self {
			kind: NodeKind::Group,
			id: segment.to_owned(),
			title: segment.to_owned(),
			description: label.description.clone(),
			show: label.show,
			index: label.index,
			route: label.route.clone(),
			icon: label.icon.clone(),
			children: Vec::new(),
		}
	}

	fn leaf(title: &str, page: &Page, label: &SurfaceLabel, match_key: MatchKey) -> Self {
		let id = match match_key {
			MatchKey::Title => title.to_owned(),
			MatchKey::Id => label.id.clone(),
		};
		let description = label
			.description
			.clone()
			.or_else(|| page.description.clone())
			.unwrap_or_default();
		Self {
			kind: NodeKind::Leaf,
			id,
			title: title.to_owned(),
			description: Some(description),
			show: label.show,
			index: label.index,
			route: label.route.clone(),
			icon: label.icon.clone(),
			children: Vec::new(),
		}
	}

	fn key(&self, match_key: MatchKey) -> &str {
		match match_key {
			MatchKey::Title => &self.title,
			MatchKey::Id => &self.id,
		}
	}

	#[inline]
	pub fn is_leaf(&self) -> bool {
		self.kind == NodeKind::Leaf
	}

	/// First direct child titled `title`.
	pub fn child(&self, title: &str) -> Option<&LabelNode> {
		self.children.iter().find(|child| child.title == title)
	}

	/// Node count of this subtree, including `self`.
	pub fn node_count(&self) -> usize {
		1 + self.children.iter().map(LabelNode::node_count).sum::<usize>()
	}
}

/// Builds the grouped forest for `surface` from already-selected pages.
///
/// Each route segment walks one level down, reusing the sibling whose key equals the
/// segment and creating a grouping node otherwise. The page's leaf is appended after the
/// last segment when the page has a non-empty title. Root routes produce nothing; route
/// parameters are skipped when [`TreePolicy::group_params`] is off.
pub fn group_by_segments<'a, I>(pages: I, surface: Surface, policy: &TreePolicy) -> Vec<LabelNode>
where
	I: IntoIterator<Item = &'a Page>,
{
	let mut forest: Vec<LabelNode> = Vec::new();

	for page in pages {
		if is_root_route(&page.route) {
			tracing::debug!(page = %page.id, %surface, "root route has no tree position");
			continue;
		}
		let label = page.label(surface);

		let mut siblings = &mut forest;
		for segment in segments(&page.route) {
			if segment.is_param() && !policy.group_params {
				continue;
			}
			let key = segment.raw();
			let slot = match siblings
				.iter()
				.position(|node| node.key(policy.match_key) == key)
			{
				Some(slot) => slot,
				None => {
					siblings.push(LabelNode::group(key, label));
					siblings.len() - 1
				}
			};
			siblings = &mut siblings[slot].children;
		}

		if let Some(title) = page.title.as_deref().filter(|title| !title.is_empty()) {
			siblings.push(LabelNode::leaf(title, page, label, policy.match_key));
		}
	}

	forest
}
