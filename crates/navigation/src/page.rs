//! Page records and surface labels.
//!
//! Three merge layers resolve every label field, highest first:
//!
//! 1. Values written in the surface label itself ([`LabelSpec`]).
//! 2. Values derived from the owning page (id, route, title from the last route segment).
//! 3. Hardcoded [`LabelDefaults`] (`show`, `index`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::segment::last_path_segment;
use crate::{NavigationError, Result, RouteDescriptor, Surface};

/// Surface label as written in route metadata. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSpec {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub show: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub index: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub route: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub icon: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

impl LabelSpec {
	pub fn shown() -> Self {
		Self {
			show: Some(true),
			..Self::default()
		}
	}
}

/// Fallbacks for label fields nobody supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDefaults {
	pub show: bool,
	pub index: i64,
}

/// Page as normalized from a route descriptor, before label resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSpec {
	pub id: String,
	pub route: String,
	pub title: Option<String>,
	pub description: Option<String>,
	pub layout: Option<String>,
	pub navbar: Option<LabelSpec>,
	pub sidebar: Option<LabelSpec>,
	pub footer: Option<LabelSpec>,
	/// Remaining meta keys, untouched.
	pub extra: Map<String, Value>,
}

impl PageSpec {
	pub fn new(id: impl Into<String>, route: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			route: route.into(),
			..Self::default()
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn with_label(mut self, surface: Surface, label: LabelSpec) -> Self {
		*self.label_slot(surface) = Some(label);
		self
	}

	pub fn label(&self, surface: Surface) -> Option<&LabelSpec> {
		match surface {
			Surface::Navbar => self.navbar.as_ref(),
			Surface::Sidebar => self.sidebar.as_ref(),
			Surface::Footer => self.footer.as_ref(),
		}
	}

	fn label_slot(&mut self, surface: Surface) -> &mut Option<LabelSpec> {
		match surface {
			Surface::Navbar => &mut self.navbar,
			Surface::Sidebar => &mut self.sidebar,
			Surface::Footer => &mut self.footer,
		}
	}
}

/// Fully resolved label for one surface of a registered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurfaceLabel {
	pub id: String,
	pub show: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub index: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub route: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub icon: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

impl SurfaceLabel {
	/// Label used for a surface the page did not mention, derived from the page itself.
	pub fn placeholder(page: &PageSpec, defaults: &LabelDefaults) -> Self {
		Self {
			index: Some(defaults.index),
			..format_surface_label(&LabelSpec::default(), page, defaults)
		}
	}
}

/// Registry entry. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
	pub id: String,
	pub route: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub layout: Option<String>,
	pub navbar: SurfaceLabel,
	pub sidebar: SurfaceLabel,
	pub footer: SurfaceLabel,
	#[serde(skip_serializing_if = "Map::is_empty")]
	pub extra: Map<String, Value>,
}

impl Page {
	/// Resolves every surface label of `spec` against `defaults`.
	pub fn resolve(spec: PageSpec, defaults: &LabelDefaults) -> Self {
		let resolve = |surface: Surface| match spec.label(surface) {
			Some(label) => format_surface_label(label, &spec, defaults),
			None => SurfaceLabel::placeholder(&spec, defaults),
		};
		let navbar = resolve(Surface::Navbar);
		let sidebar = resolve(Surface::Sidebar);
		let footer = resolve(Surface::Footer);

		Self {
			id: spec.id,
			route: spec.route,
			title: spec.title,
			description: spec.description,
			layout: spec.layout,
			navbar,
			sidebar,
			footer,
			extra: spec.extra,
		}
	}

	pub fn label(&self, surface: Surface) -> &SurfaceLabel {
		match surface {
			Surface::Navbar => &self.navbar,
			Surface::Sidebar => &self.sidebar,
			Surface::Footer => &self.footer,
		}
	}
}

/// Builds a [`PageSpec`] from a route descriptor.
///
/// `id` comes from the route name, `route` from its path, everything else from `meta`.
/// Fails when the path or name is missing, or when navigation meta has the wrong shape.
pub fn normalize_page(descriptor: &RouteDescriptor) -> Result<PageSpec> {
	let route = descriptor
		.path
		.clone()
		.ok_or_else(|| NavigationError::MissingRoute {
			name: descriptor.name.clone(),
		})?;
	let id = match descriptor.name.as_deref() {
		Some(name) if !name.is_empty() => name.to_owned(),
		_ => return Err(NavigationError::MissingId { path: route }),
	};

	let mut extra = descriptor.meta.clone();
	let title = take_string(&mut extra, &id, "title")?;
	let description = take_string(&mut extra, &id, "description")?;
	let layout = take_string(&mut extra, &id, "layout")?;
	let navbar = take_label(&mut extra, &id, Surface::Navbar)?;
	let sidebar = take_label(&mut extra, &id, Surface::Sidebar)?;
	let footer = take_label(&mut extra, &id, Surface::Footer)?;

	Ok(PageSpec {
		id,
		route,
		title,
		description,
		layout,
		navbar,
		sidebar,
		footer,
		extra,
	})
}

fn take_string(meta: &mut Map<String, Value>, id: &str, key: &'static str) -> Result<Option<String>> {
	match meta.remove(key) {
		None | Some(Value::Null) => Ok(None),
		Some(Value::String(value)) => Ok(Some(value)),
		Some(_) => Err(NavigationError::InvalidField {
			id: id.to_owned(),
			key,
		}),
	}
}

fn take_label(meta: &mut Map<String, Value>, id: &str, surface: Surface) -> Result<Option<LabelSpec>> {
	match meta.remove(surface.as_str()) {
		None | Some(Value::Null) => Ok(None),
		Some(value) => serde_json::from_value(value)
			.map(Some)
			.map_err(|source| NavigationError::InvalidLabel {
				id: id.to_owned(),
				surface,
				source,
			}),
	}
}

/// Resolves a label against its page.
///
/// - `id`: the label's own id unless empty, else the page id.
/// - `route`: the label's route, else the page route.
/// - `title`: the label's title, else the last segment of the resolved route
///   (`None` for the root route).
/// - `show`: the label's flag, else `defaults.show`.
pub fn format_surface_label(label: &LabelSpec, page: &PageSpec, defaults: &LabelDefaults) -> SurfaceLabel {
	let id = match label.id.as_deref() {
		Some(id) if !id.is_empty() => id.to_owned(),
		_ => page.id.clone(),
	};
	let route = label.route.clone().unwrap_or_else(|| page.route.clone());
	let title = label
		.title
		.clone()
		.or_else(|| last_path_segment(&route).map(str::to_owned));

	SurfaceLabel {
		id,
		show: label.show.unwrap_or(defaults.show),
		index: label.index,
		route: Some(route),
		icon: label.icon.clone(),
		title,
		description: label.description.clone(),
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn descriptor(value: Value) -> RouteDescriptor {
		serde_json::from_value(value).unwrap()
	}

	#[test]
	fn normalize_reads_meta_fields() {
		let page = normalize_page(&descriptor(json!({
			"name": "blog",
			"path": "/blog",
			"meta": {
				"title": "Blog",
				"layout": "wide",
				"navbar": { "show": true, "icon": "book" },
				"requiresAuth": true
			}
		})))
		.unwrap();

		assert_eq!(page.id, "blog");
		assert_eq!(page.route, "/blog");
		assert_eq!(page.title.as_deref(), Some("Blog"));
		assert_eq!(page.layout.as_deref(), Some("wide"));
		assert_eq!(page.navbar.as_ref().and_then(|l| l.icon.as_deref()), Some("book"));
		assert!(page.sidebar.is_none());
		assert_eq!(page.extra.get("requiresAuth"), Some(&Value::Bool(true)));
		assert!(!page.extra.contains_key("navbar"));
	}

	#[test]
	fn normalize_requires_route() {
		let err = normalize_page(&descriptor(json!({ "name": "orphan" }))).unwrap_err();
		assert!(matches!(err, NavigationError::MissingRoute { ref name } if name.as_deref() == Some("orphan")));
		assert!(err.to_string().starts_with("route is required"));
	}

	#[test]
	fn normalize_requires_name() {
		let err = normalize_page(&descriptor(json!({ "path": "/x" }))).unwrap_err();
		assert!(matches!(err, NavigationError::MissingId { ref path } if path == "/x"));
	}

	#[test]
	fn normalize_rejects_malformed_label() {
		let err = normalize_page(&descriptor(json!({
			"name": "x",
			"path": "/x",
			"meta": { "sidebar": "yes" }
		})))
		.unwrap_err();
		assert!(matches!(err, NavigationError::InvalidLabel { surface: Surface::Sidebar, .. }));
	}

	#[test]
	fn normalize_rejects_non_string_title() {
		let err = normalize_page(&descriptor(json!({
			"name": "x",
			"path": "/x",
			"meta": { "title": 3 }
		})))
		.unwrap_err();
		assert!(matches!(err, NavigationError::InvalidField { key: "title", .. }));
	}

	#[test]
	fn title_defaults_to_last_route_segment() {
		let page = PageSpec::new("1", "/page1");
		let label = LabelSpec {
			route: Some("/blog/:slug".into()),
			..LabelSpec::default()
		};
		let formatted = format_surface_label(&label, &page, &LabelDefaults::default());
		assert_eq!(formatted.title.as_deref(), Some("slug"));
		assert_eq!(formatted.route.as_deref(), Some("/blog/:slug"));

		let formatted = format_surface_label(&LabelSpec::default(), &page, &LabelDefaults::default());
		assert_eq!(formatted.title.as_deref(), Some("page1"));
	}

	#[test]
	fn explicit_title_wins() {
		let page = PageSpec::new("1", "/page1").with_title("Page 1");
		let label = LabelSpec {
			id: Some("1".into()),
			route: Some("/page1".into()),
			title: Some("Page 1".into()),
			..LabelSpec::default()
		};
		let formatted = format_surface_label(&label, &page, &LabelDefaults::default());
		assert_eq!(formatted.id, "1");
		assert_eq!(formatted.route.as_deref(), Some("/page1"));
		assert_eq!(formatted.title.as_deref(), Some("Page 1"));
	}

	#[test]
	fn id_falls_back_to_page_id() {
		let page = PageSpec::new("1", "/p");
		let defaults = LabelDefaults::default();

		let own = LabelSpec {
			id: Some("2".into()),
			..LabelSpec::default()
		};
		assert_eq!(format_surface_label(&own, &page, &defaults).id, "2");
		assert_eq!(format_surface_label(&LabelSpec::default(), &page, &defaults).id, "1");

		let empty = LabelSpec {
			id: Some(String::new()),
			..LabelSpec::default()
		};
		assert_eq!(format_surface_label(&empty, &page, &defaults).id, "1");
	}

	#[test]
	fn root_route_has_no_default_title() {
		let page = PageSpec::new("index", "/");
		let formatted = format_surface_label(&LabelSpec::shown(), &page, &LabelDefaults::default());
		assert_eq!(formatted.title, None);
		assert!(formatted.show);
	}

	#[test]
	fn show_defaults_follow_configuration() {
		let page = PageSpec::new("a", "/a");
		let hidden = format_surface_label(&LabelSpec::default(), &page, &LabelDefaults::default());
		assert!(!hidden.show);

		let visible_by_default = LabelDefaults { show: true, index: 0 };
		let shown = format_surface_label(&LabelSpec::default(), &page, &visible_by_default);
		assert!(shown.show);
	}

	#[test]
	fn resolve_fills_missing_surfaces_from_the_page() {
		let spec = PageSpec::new("a", "/a").with_label(Surface::Footer, LabelSpec::shown());
		let page = Page::resolve(spec, &LabelDefaults::default());

		assert_eq!(page.navbar.id, "a");
		assert_eq!(page.navbar.route.as_deref(), Some("/a"));
		assert_eq!(page.navbar.title.as_deref(), Some("a"));
		assert_eq!(page.navbar.index, Some(0));
		assert!(!page.navbar.show);
		assert!(page.footer.show);
		assert_eq!(page.footer.id, "a");
		assert_eq!(page.footer.title.as_deref(), Some("a"));
	}
}
