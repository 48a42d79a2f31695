//! Deduplicated page registry.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{LabelDefaults, Page, PageSpec, Surface, TreePolicy};

/// Result of [`PageRegistry::register_page`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RegisterOutcome {
	/// Id was new; page appended.
	Inserted,
	/// Id already registered; the incoming page was dropped.
	KeptExisting,
}

/// Insertion-ordered set of pages keyed by id. The first registration of an id wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageRegistry {
	pages: Vec<Arc<Page>>,
	by_id: FxHashMap<Box<str>, usize>,
	defaults: LabelDefaults,
}

impl PageRegistry {
	pub fn new(defaults: LabelDefaults) -> Self {
		Self {
			defaults,
			..Self::default()
		}
	}

	/// Resolves and appends `page` unless its id is already present.
	pub fn register_page(&mut self, page: PageSpec) -> RegisterOutcome {
		if self.by_id.contains_key(page.id.as_str()) {
			tracing::debug!(page = %page.id, route = %page.route, "duplicate page id ignored");
			return RegisterOutcome::KeptExisting;
		}

		let page = Page::resolve(page, &self.defaults);
		tracing::trace!(page = %page.id, route = %page.route, "page registered");
		self.by_id
			.insert(Box::from(page.id.as_str()), self.pages.len());
		self.pages.push(Arc::new(page));
		RegisterOutcome::Inserted
	}

	#[inline]
	pub fn get(&self, id: &str) -> Option<&Arc<Page>> {
		self.by_id.get(id).map(|&slot| &self.pages[slot])
	}

	#[inline]
	pub fn contains(&self, id: &str) -> bool {
		self.by_id.contains_key(id)
	}

	/// Pages in registration order.
	#[inline]
	pub fn pages(&self) -> &[Arc<Page>] {
		&self.pages
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.pages.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.pages.is_empty()
	}

	#[inline]
	pub fn defaults(&self) -> &LabelDefaults {
		&self.defaults
	}

	pub fn select_visible(&self, surface: Surface, policy: &TreePolicy) -> Vec<Arc<Page>> {
		select_visible(&self.pages, surface, policy)
	}
}

/// Pages shown on `surface`, in input order, minus the excluded ids (the home page).
pub fn select_visible(pages: &[Arc<Page>], surface: Surface, policy: &TreePolicy) -> Vec<Arc<Page>> {
	pages
		.iter()
		.filter(|page| page.label(surface).show && !policy.is_excluded(&page.id))
		.cloned()
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::LabelSpec;

	fn shown(id: &str, route: &str) -> PageSpec {
		PageSpec::new(id, route).with_label(Surface::Navbar, LabelSpec::shown())
	}

	#[test]
	fn first_registration_wins() {
		let mut registry = PageRegistry::default();
		assert_eq!(registry.register_page(shown("a", "/a")), RegisterOutcome::Inserted);

		let before = registry.clone();
		let outcome = registry.register_page(PageSpec::new("a", "/other").with_title("Other"));
		assert_eq!(outcome, RegisterOutcome::KeptExisting);
		assert_eq!(registry, before);
		assert_eq!(registry.get("a").unwrap().route, "/a");
	}

	#[test]
	fn preserves_arrival_order() {
		let mut registry = PageRegistry::default();
		for id in ["c", "a", "b"] {
			registry.register_page(shown(id, &format!("/{id}")));
		}
		let ids: Vec<&str> = registry.pages().iter().map(|p| p.id.as_str()).collect();
		assert_eq!(ids, vec!["c", "a", "b"]);
	}

	#[test]
	fn visible_skips_hidden_and_home() {
		let mut registry = PageRegistry::default();
		registry.register_page(shown("index", "/"));
		registry.register_page(shown("a", "/a"));
		registry.register_page(PageSpec::new("b", "/b"));

		let visible = registry.select_visible(Surface::Navbar, &TreePolicy::default());
		let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
		assert_eq!(ids, vec!["a"]);
		assert!(registry.select_visible(Surface::Footer, &TreePolicy::default()).is_empty());
	}

	#[test]
	fn default_show_applies_to_unlabelled_surfaces() {
		let defaults = LabelDefaults { show: true, index: 0 };
		let policy = TreePolicy {
			defaults,
			..TreePolicy::default()
		};
		let mut registry = PageRegistry::new(defaults);
		registry.register_page(PageSpec::new("a", "/a"));

		assert_eq!(registry.select_visible(Surface::Sidebar, &policy).len(), 1);
	}
}
