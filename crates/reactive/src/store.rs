use crate::Version;

/// Explicitly owned state container with change tracking.
///
/// A store is constructed and passed around like any other value; there is no
/// process-wide instance. Derived values observe it through [`Store::version`].
#[derive(Debug, Default, Clone)]
pub struct Store<T> {
	value: T,
	version: Version,
}

impl<T> Store<T> {
	pub fn new(value: T) -> Self {
		Self {
			value,
			version: Version::INITIAL,
		}
	}

	#[inline]
	pub fn get(&self) -> &T {
		&self.value
	}

	#[inline]
	pub fn version(&self) -> Version {
		self.version
	}

	/// Replaces the value and bumps the version unconditionally.
	pub fn set(&mut self, value: T) {
		self.value = value;
		self.bump();
	}

	/// Mutates the value in place.
	///
	/// The closure reports whether it changed anything; the version only moves when it did.
	pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> (R, bool)) -> R {
		let (out, changed) = f(&mut self.value);
		if changed {
			self.bump();
		}
		out
	}

	pub fn into_inner(self) -> T {
		self.value
	}

	fn bump(&mut self) {
		self.version = self.version.next();
		tracing::trace!(version = %self.version, "store.bump");
	}
}
