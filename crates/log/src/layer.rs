//! Tracing layer applying [`Logger`] settings to every event.
//!
//! Events below the logger's level are dropped (errors always pass). Surviving events are
//! rendered as `[timestamp] [LEVEL] [PREFIX] message {field=value ...}`, with bracketed
//! tags uppercased and JSON values pretty-printed, then recorded in a [`LogRingBuffer`] and
//! written to the configured writer.

use std::io::Write;
use std::sync::Arc;

use chrono::Utc;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::Context;

use crate::format::{emphasize_tags, render_line, try_pretty_json};
use crate::{LogEntry, LogLevel, LogRingBuffer, Logger};

/// Collects an event's `message` and its remaining fields as `key=value` pairs.
#[derive(Default)]
struct EventVisitor {
	message: Option<String>,
	fields: Vec<String>,
}

impl EventVisitor {
	fn push_field(&mut self, field: &Field, value: &str) {
		self.fields.push(format!("{}={}", field.name(), try_pretty_json(value)));
	}

	/// `message {k=v ...}` with tags emphasized; the event name stands in for a missing message.
	fn render(self, event_name: &str) -> String {
		let message = match self.message {
			Some(message) if !message.is_empty() => emphasize_tags(&try_pretty_json(&message)),
			_ => event_name.to_owned(),
		};
		if self.fields.is_empty() {
			message
		} else {
			format!("{message} {{{}}}", self.fields.join(" "))
		}
	}
}

impl Visit for EventVisitor {
	fn record_str(&mut self, field: &Field, value: &str) {
		match field.name() {
			"message" => self.message = Some(value.to_owned()),
			_ => self.push_field(field, value),
		}
	}

	fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
		let text = format!("{value:?}");
		match field.name() {
			"message" => self.message = Some(text),
			_ => self.push_field(field, &text),
		}
	}
}

/// A [`tracing_subscriber::Layer`] that filters, renders and records events.
pub struct LogLayer<W = fn() -> std::io::Stderr> {
	logger: Logger,
	buffer: Arc<LogRingBuffer>,
	writer: W,
	ansi: bool,
}

impl LogLayer {
	/// Layer writing rendered lines to stderr.
	pub fn new(logger: Logger) -> Self {
		Self {
			logger,
			buffer: Arc::new(LogRingBuffer::new()),
			writer: std::io::stderr,
			ansi: false,
		}
	}
}

impl<W> LogLayer<W> {
	pub fn with_writer<W2>(self, writer: W2) -> LogLayer<W2>
	where
		W2: for<'w> MakeWriter<'w> + 'static,
	{
		LogLayer {
			logger: self.logger,
			buffer: self.buffer,
			writer,
			ansi: self.ansi,
		}
	}

	/// Colours level tags in written lines. Buffered entries stay plain.
	pub fn with_ansi(mut self, ansi: bool) -> Self {
		self.ansi = ansi;
		self
	}

	pub fn with_buffer(mut self, buffer: Arc<LogRingBuffer>) -> Self {
		self.buffer = buffer;
		self
	}

	/// Shared history of recorded entries.
	pub fn buffer(&self) -> Arc<LogRingBuffer> {
		self.buffer.clone()
	}

	pub fn logger(&self) -> &Logger {
		&self.logger
	}
}

impl<S, W> tracing_subscriber::Layer<S> for LogLayer<W>
where
	S: Subscriber,
	W: for<'w> MakeWriter<'w> + 'static,
{
	fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
		let level = LogLevel::from(*event.metadata().level());
		if !self.logger.should_log(level) {
			return;
		}

		let mut visitor = EventVisitor::default();
		event.record(&mut visitor);
		let message = visitor.render(event.metadata().name());

		let entry = LogEntry {
			timestamp: Utc::now(),
			level,
			target: event.metadata().target().to_string(),
			prefix: self.logger.prefix(),
			message,
		};

		let line = render_line(&entry.timestamp, entry.level, &entry.prefix, &entry.message, self.ansi);
		let _ = writeln!(self.writer.make_writer(), "{line}");
		self.buffer.push(entry);
	}
}
