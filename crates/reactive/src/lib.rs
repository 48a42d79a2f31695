//! Versioned state containers and pull-based derived values.
//!
//! # Mental Model
//!
//! 1. **State:** A [`Store`] owns a value and a monotonic [`Version`]. Every mutation that
//!    reports a change bumps the version; no-op mutations leave it untouched.
//! 2. **Derivation:** A [`Memo`] caches the result of a pure function together with the
//!    version it was computed from. Reading with the same version returns the cached `Arc`;
//!    reading with a newer version recomputes.
//! 3. **Consumption:** Readers pull. Nothing is pushed to observers, so an unread projection
//!    costs nothing after a mutation.
//!
//! # Invariants
//!
//! - Two reads without an intervening version bump return the same `Arc` (`Arc::ptr_eq`).
//!   - Enforced in: [`Memo::get`].
//!   - Tested by: `memo::tests::repeated_reads_are_reference_stable`
//! - A version bump invalidates every memo keyed on that store.
//!   - Enforced in: [`Store::update`], [`Memo::get`].
//!   - Tested by: `memo::tests::version_bump_recomputes`

mod memo;
mod store;
mod version;

pub use memo::Memo;
pub use store::Store;
pub use version::Version;
