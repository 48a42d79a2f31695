/// Monotonic change counter for a [`Store`](crate::Store).
///
/// Starts at zero for a freshly constructed store.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u64);

impl Version {
	/// The version of a store that has never been mutated.
	pub const INITIAL: Self = Self(0);

	/// Returns the following version.
	#[inline]
	pub const fn next(self) -> Self {
		Self(self.0.wrapping_add(1))
	}

	#[inline]
	pub const fn as_u64(self) -> u64 {
		self.0
	}
}

impl std::fmt::Display for Version {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "v{}", self.0)
	}
}
