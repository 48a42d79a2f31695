use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use parking_lot::RwLock;

use crate::LogLevel;

/// Shared logger settings: a prefix tag and a minimum level.
///
/// Cloning yields a handle to the same settings, so a level change made through any clone
/// applies to every installed [`LogLayer`](crate::LogLayer) immediately.
#[derive(Debug, Clone)]
pub struct Logger {
	prefix: Arc<RwLock<String>>,
	level: Arc<AtomicU8>,
}

impl Logger {
	pub const DEFAULT_PREFIX: &'static str = "CLAU";

	pub fn new(prefix: impl Into<String>, level: LogLevel) -> Self {
		Self {
			prefix: Arc::new(RwLock::new(prefix.into())),
			level: Arc::new(AtomicU8::new(level.as_u8())),
		}
	}

	pub fn level(&self) -> LogLevel {
		LogLevel::from_u8(self.level.load(Ordering::Relaxed))
	}

	pub fn prefix(&self) -> String {
		self.prefix.read().clone()
	}

	pub fn set_level(&self, level: LogLevel) {
		self.level.store(level.as_u8(), Ordering::Relaxed);
	}

	pub fn set_level_debug(&self) {
		self.set_level(LogLevel::Debug);
	}

	pub fn set_level_info(&self) {
		self.set_level(LogLevel::Info);
	}

	pub fn set_level_warn(&self) {
		self.set_level(LogLevel::Warn);
	}

	pub fn set_level_error(&self) {
		self.set_level(LogLevel::Error);
	}

	pub fn set_prefix(&self, prefix: impl Into<String>) {
		*self.prefix.write() = prefix.into();
	}

	/// Errors always pass; other levels must reach the configured minimum.
	pub fn should_log(&self, level: LogLevel) -> bool {
		level == LogLevel::Error || level >= self.level()
	}
}

impl Default for Logger {
	fn default() -> Self {
		Self::new(Self::DEFAULT_PREFIX, LogLevel::Debug)
	}
}
