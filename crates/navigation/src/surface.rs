use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::NavigationError;

/// Display location a page label can appear in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
	Navbar,
	Sidebar,
	Footer,
}

impl Surface {
	pub const ALL: [Surface; 3] = [Surface::Navbar, Surface::Sidebar, Surface::Footer];

	/// Meta key the surface label is read from.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Navbar => "navbar",
			Self::Sidebar => "sidebar",
			Self::Footer => "footer",
		}
	}

	/// Dense slot for per-surface arrays.
	pub(crate) const fn slot(self) -> usize {
		match self {
			Self::Navbar => 0,
			Self::Sidebar => 1,
			Self::Footer => 2,
		}
	}
}

impl std::fmt::Display for Surface {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Surface {
	type Err = NavigationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Surface::ALL
			.into_iter()
			.find(|surface| surface.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| NavigationError::UnknownSurface(s.to_owned()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_case_insensitively() {
		assert_eq!("Navbar".parse::<Surface>().unwrap(), Surface::Navbar);
		assert_eq!("footer".parse::<Surface>().unwrap(), Surface::Footer);
		assert!(matches!("header".parse::<Surface>(), Err(NavigationError::UnknownSurface(s)) if s == "header"));
	}

	#[test]
	fn slots_are_dense() {
		let slots: Vec<usize> = Surface::ALL.iter().map(|s| s.slot()).collect();
		assert_eq!(slots, vec![0, 1, 2]);
	}
}
