use std::sync::Arc;

use parking_lot::Mutex;

use crate::Version;

/// Cached derived value keyed on the source [`Version`].
///
/// Recomputation is lazy: nothing happens on mutation, the next [`Memo::get`] with a
/// different version runs the compute function once and caches the result.
pub struct Memo<T> {
	slot: Mutex<Option<(Version, Arc<T>)>>,
}

impl<T> Default for Memo<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Memo<T> {
	pub fn new() -> Self {
		Self {
			slot: Mutex::new(None),
		}
	}

	/// Returns the cached value for `version`, computing it if the cache is empty or stale.
	pub fn get(&self, version: Version, compute: impl FnOnce() -> T) -> Arc<T> {
		let mut slot = self.slot.lock();
		if let Some((cached, value)) = slot.as_ref()
			&& *cached == version
		{
			return value.clone();
		}
		let value = Arc::new(compute());
		*slot = Some((version, value.clone()));
		value
	}

	/// Returns true if a value computed for `version` is cached.
	pub fn is_fresh(&self, version: Version) -> bool {
		matches!(self.slot.lock().as_ref(), Some((cached, _)) if *cached == version)
	}

	/// Drops the cached value so the next read recomputes regardless of version.
	pub fn invalidate(&self) {
		self.slot.lock().take();
	}
}

impl<T> std::fmt::Debug for Memo<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let version = self.slot.lock().as_ref().map(|(v, _)| *v);
		f.debug_struct("Memo").field("version", &version).finish()
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use proptest::prelude::*;

	use super::*;
	use crate::Store;

	#[test]
	fn repeated_reads_are_reference_stable() {
		let store = Store::new(vec![1, 2, 3]);
		let memo = Memo::new();
		let calls = Cell::new(0);

		let sum = || {
			calls.set(calls.get() + 1);
			store.get().iter().sum::<i32>()
		};
		let a = memo.get(store.version(), sum);
		let b = memo.get(store.version(), || unreachable!("cached value must be reused"));

		assert!(Arc::ptr_eq(&a, &b));
		assert_eq!(*a, 6);
		assert_eq!(calls.get(), 1);
	}

	#[test]
	fn version_bump_recomputes() {
		let mut store = Store::new(vec![1]);
		let memo = Memo::new();

		let first = memo.get(store.version(), || store.get().len());
		store.update(|v| {
			v.push(2);
			((), true)
		});
		assert!(!memo.is_fresh(store.version()));

		let second = memo.get(store.version(), || store.get().len());
		assert_eq!((*first, *second), (1, 2));
		assert!(memo.is_fresh(store.version()));
	}

	#[test]
	fn invalidate_forces_recompute() {
		let memo = Memo::new();
		let a = memo.get(Version::INITIAL, || 1);
		memo.invalidate();
		let b = memo.get(Version::INITIAL, || 2);
		assert!(!Arc::ptr_eq(&a, &b));
		assert_eq!(*b, 2);
	}

	proptest! {
		#[test]
		fn memo_always_matches_direct_computation(pushes in proptest::collection::vec(any::<u8>(), 0..32)) {
			let mut store = Store::new(Vec::<u8>::new());
			let memo = Memo::new();
			for byte in pushes {
				store.update(|v| {
					v.push(byte);
					((), true)
				});
				let derived = memo.get(store.version(), || store.get().iter().map(|&b| b as u32).sum::<u32>());
				let direct: u32 = store.get().iter().map(|&b| b as u32).sum();
				prop_assert_eq!(*derived, direct);
			}
		}
	}
}
