//! Slash-delimited route path segments.

/// One non-empty piece of a route path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
	raw: &'a str,
}

impl<'a> Segment<'a> {
	/// Segment text exactly as written in the route.
	#[inline]
	pub fn raw(&self) -> &'a str {
		self.raw
	}

	/// True for route parameters such as `:slug` or `:id(\d+)?`.
	#[inline]
	pub fn is_param(&self) -> bool {
		self.raw.starts_with(':')
	}

	/// Segment text without parameter syntax: `:slug()` becomes `slug`.
	pub fn name(&self) -> &'a str {
		match self.raw.strip_prefix(':') {
			Some(param) => {
				let end = param
					.find(['(', '?', '*', '+'])
					.unwrap_or(param.len());
				&param[..end]
			}
			None => self.raw,
		}
	}
}

/// Splits `route` on `/`, dropping empty segments.
pub fn segments(route: &str) -> impl Iterator<Item = Segment<'_>> {
	route
		.split('/')
		.filter(|raw| !raw.is_empty())
		.map(|raw| Segment { raw })
}

/// Final segment name of `route`, or `None` for the root route.
pub fn last_path_segment(route: &str) -> Option<&str> {
	segments(route)
		.last()
		.map(|segment| segment.name())
		.filter(|name| !name.is_empty())
}

/// A route with no non-empty segments (`/`, `""`, `//`).
///
/// Root routes never produce tree entries.
pub fn is_root_route(route: &str) -> bool {
	segments(route).next().is_none()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn drops_empty_segments() {
		let raw: Vec<&str> = segments("//blog///posts/").map(|s| s.raw()).collect();
		assert_eq!(raw, vec!["blog", "posts"]);
	}

	#[test]
	fn last_segment_strips_param_syntax() {
		assert_eq!(last_path_segment("/blog/:slug"), Some("slug"));
		assert_eq!(last_path_segment("/blog/:slug()"), Some("slug"));
		assert_eq!(last_path_segment("/users/:id(\\d+)?"), Some("id"));
		assert_eq!(last_path_segment("/page1"), Some("page1"));
	}

	#[test]
	fn root_has_no_last_segment() {
		assert_eq!(last_path_segment("/"), None);
		assert_eq!(last_path_segment(""), None);
		assert!(is_root_route("/"));
		assert!(!is_root_route("/a"));
	}

	#[test]
	fn params_are_detected() {
		let kinds: Vec<bool> = segments("/blog/:slug").map(|s| s.is_param()).collect();
		assert_eq!(kinds, vec![false, true]);
	}
}
