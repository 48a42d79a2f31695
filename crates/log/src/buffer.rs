//! Bounded in-memory history of rendered log entries.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::LogLevel;

/// Default number of entries retained.
pub const MAX_LOG_ENTRIES: usize = 1000;

/// A single log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
	pub timestamp: DateTime<Utc>,
	pub level: LogLevel,
	/// Module or target that produced this log.
	pub target: String,
	/// Logger prefix at the time the entry was recorded.
	pub prefix: String,
	/// Message with structured fields appended.
	pub message: String,
}

/// Thread-safe ring buffer for log entries.
#[derive(Debug)]
pub struct LogRingBuffer {
	capacity: usize,
	entries: RwLock<VecDeque<LogEntry>>,
}

impl LogRingBuffer {
	pub fn new() -> Self {
		Self::with_capacity(MAX_LOG_ENTRIES)
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			capacity: capacity.max(1),
			entries: RwLock::new(VecDeque::with_capacity(capacity.max(1))),
		}
	}

	/// Pushes a new log entry, evicting the oldest if at capacity.
	pub fn push(&self, entry: LogEntry) {
		let mut entries = self.entries.write();
		if entries.len() >= self.capacity {
			entries.pop_front();
		}
		entries.push_back(entry);
	}

	/// Returns a snapshot of all log entries, oldest first.
	pub fn entries(&self) -> Vec<LogEntry> {
		self.entries.read().iter().cloned().collect()
	}

	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}

	pub fn clear(&self) {
		self.entries.write().clear();
	}
}

impl Default for LogRingBuffer {
	fn default() -> Self {
		Self::new()
	}
}
