//! Leveled, prefixed logging on top of `tracing`.
//!
//! Code logs with the ordinary `tracing` macros. [`init`] installs a [`LogLayer`] that
//! applies the [`Logger`]'s level and prefix, renders each event, and keeps the most
//! recent ones in a [`LogRingBuffer`].

mod buffer;
pub mod format;
mod layer;
mod level;
mod logger;

use std::io::IsTerminal;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use buffer::{LogEntry, LogRingBuffer, MAX_LOG_ENTRIES};
pub use layer::LogLayer;
pub use level::LogLevel;
pub use logger::Logger;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
	#[error("unknown log level {0:?} (expected debug, info, warn or error)")]
	UnknownLevel(String),

	#[error("failed to install global subscriber: {0}")]
	Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs the global subscriber for `logger`, writing to stderr (coloured when it is a terminal).
///
/// Returns the shared entry history. Fails if a global subscriber is already set.
pub fn init(logger: &Logger) -> Result<Arc<LogRingBuffer>, LogError> {
	let layer = LogLayer::new(logger.clone()).with_ansi(std::io::stderr().is_terminal());
	let buffer = layer.buffer();
	tracing_subscriber::registry().with(layer).try_init()?;
	tracing::debug!(prefix = %logger.prefix(), level = %logger.level(), "logger installed");
	Ok(buffer)
}
