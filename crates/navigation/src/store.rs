use std::sync::Arc;

use clau_reactive::{Memo, Store, Version};

use crate::{
	LabelNode, Page, PageRegistry, RegisterOutcome, Result, RouteDescriptor, RouteSource, Surface,
	TreePolicy, group_by_segments, normalize_page, select_visible,
};

/// Navigation state for one application instance.
///
/// Owns the page registry and the last route snapshot. Per-surface projections are
/// computed on first read after a registry change and cached until the next one.
#[derive(Debug)]
pub struct NavigationStore {
	registry: Store<PageRegistry>,
	routes: Vec<RouteDescriptor>,
	policy: TreePolicy,
	visible: [Memo<Vec<Arc<Page>>>; 3],
	grouped: [Memo<Vec<LabelNode>>; 3],
}

impl NavigationStore {
	pub fn new(policy: TreePolicy) -> Self {
		Self {
			registry: Store::new(PageRegistry::new(policy.defaults)),
			routes: Vec::new(),
			policy,
			visible: Default::default(),
			grouped: Default::default(),
		}
	}

	/// Creates a store and registers every route of `source`.
	pub fn from_source<S>(source: &S, policy: TreePolicy) -> Result<Self>
	where
		S: RouteSource + ?Sized,
	{
		let mut store = Self::new(policy);
		store.sync(source)?;
		Ok(store)
	}

	/// Registers the routes of a fresh snapshot whose ids are not known yet.
	///
	/// All descriptors are normalized before anything is registered, so a malformed
	/// route leaves the store untouched. Returns the number of pages added.
	pub fn sync<S>(&mut self, source: &S) -> Result<usize>
	where
		S: RouteSource + ?Sized,
	{
		let routes = source.routes();
		let specs = routes
			.iter()
			.map(normalize_page)
			.collect::<Result<Vec<_>>>()?;

		let added = self.registry.update(|registry| {
			let added = specs
				.into_iter()
				.map(|spec| registry.register_page(spec))
				.filter(|outcome| *outcome == RegisterOutcome::Inserted)
				.count();
			(added, added > 0)
		});
		self.routes = routes;

		tracing::debug!(added, total = self.registry.get().len(), version = %self.registry.version(), "navigation routes synced");
		Ok(added)
	}

	/// Registers a single descriptor.
	pub fn register(&mut self, descriptor: &RouteDescriptor) -> Result<RegisterOutcome> {
		let spec = normalize_page(descriptor)?;
		Ok(self.registry.update(|registry| {
			let outcome = registry.register_page(spec);
			(outcome, outcome == RegisterOutcome::Inserted)
		}))
	}

	#[inline]
	pub fn registry(&self) -> &PageRegistry {
		self.registry.get()
	}

	/// Last route snapshot passed to [`NavigationStore::sync`].
	#[inline]
	pub fn routes(&self) -> &[RouteDescriptor] {
		&self.routes
	}

	#[inline]
	pub fn policy(&self) -> &TreePolicy {
		&self.policy
	}

	/// Registry version; moves only when a page is added.
	#[inline]
	pub fn version(&self) -> Version {
		self.registry.version()
	}

	/// Pages shown on `surface`.
	pub fn visible(&self, surface: Surface) -> Arc<Vec<Arc<Page>>> {
		self.visible[surface.slot()].get(self.version(), || {
			select_visible(self.registry.get().pages(), surface, &self.policy)
		})
	}

	/// Grouped label forest for `surface`.
	pub fn grouped(&self, surface: Surface) -> Arc<Vec<LabelNode>> {
		self.grouped[surface.slot()].get(self.version(), || {
			let visible = self.visible(surface);
			group_by_segments(visible.iter().map(Arc::as_ref), surface, &self.policy)
		})
	}
}

impl Default for NavigationStore {
	fn default() -> Self {
		Self::new(TreePolicy::default())
	}
}
