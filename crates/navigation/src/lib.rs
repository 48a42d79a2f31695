#![cfg_attr(doc, allow(rustdoc::private_intra_doc_links))]
//! Route-derived navigation menus.
//!
//! # Purpose
//!
//! Projects the host router's flat route list into display-ready label trees for three
//! surfaces: navbar, sidebar and footer. Navigation itself stays with the router.
//!
//! # Mental Model
//!
//! 1. **Normalize:** [`normalize_page`] turns a [`RouteDescriptor`] into a [`PageSpec`],
//!    reading title, layout and per-surface [`LabelSpec`]s from route metadata.
//! 2. **Register:** [`PageRegistry::register_page`] resolves labels with
//!    [`format_surface_label`] and appends the [`Page`]. The first page for an id wins.
//! 3. **Select:** [`select_visible`] keeps pages whose surface label is shown, minus the
//!    home page.
//! 4. **Group:** [`group_by_segments`] folds the selected routes into a [`LabelNode`] forest,
//!    one level per path segment.
//! 5. **Read:** [`NavigationStore`] caches steps 3 and 4 per surface until the registry
//!    changes.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`NavigationStore`] | Explicitly constructed owner of registry and projections. |
//! | [`PageRegistry`] | Insertion-ordered pages keyed by id. |
//! | [`Page`] | Registered page with one resolved [`SurfaceLabel`] per surface. |
//! | [`LabelNode`] | Grouping node or leaf of a surface tree. |
//! | [`TreePolicy`] | Default visibility, sibling match key, excluded ids. |
//!
//! # Invariants
//!
//! - Registering an id twice leaves the registry unchanged after the first call.
//!   - Enforced in: [`PageRegistry::register_page`].
//!   - Tested by: `tests::registration_is_idempotent`
//! - The home page (`index`) is never selected for any surface.
//!   - Enforced in: [`select_visible`] via [`TreePolicy::is_excluded`].
//!   - Tested by: `tests::home_never_visible`
//! - Grouping the same input sequence twice yields equal forests.
//!   - Enforced in: [`group_by_segments`] (pure, order-preserving).
//!   - Tested by: `tests::grouping_is_deterministic`
//! - Hidden labels never reach a tree.
//!   - Enforced in: [`select_visible`].
//!   - Tested by: `tests::hidden_pages_stay_out_of_tree`

mod error;
mod group;
mod page;
mod policy;
mod registry;
mod route;
pub mod segment;
mod store;
mod surface;

pub use error::{NavigationError, Result};
pub use group::{LabelNode, NodeKind, group_by_segments};
pub use page::{
	LabelDefaults, LabelSpec, Page, PageSpec, SurfaceLabel, format_surface_label, normalize_page,
};
pub use policy::{MatchKey, TreePolicy};
pub use registry::{PageRegistry, RegisterOutcome, select_visible};
pub use route::{RouteDescriptor, RouteManifest, RouteSource};
pub use store::NavigationStore;
pub use surface::Surface;
