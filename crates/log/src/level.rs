use std::str::FromStr;

use crossterm::style::Color;

use crate::LogError;

/// Log severity levels, ordered from least to most severe.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
	/// Debugging information for developers.
	#[default]
	Debug,
	/// General informational messages.
	Info,
	/// Warnings about potential issues.
	Warn,
	/// Error conditions; always emitted.
	Error,
}

impl LogLevel {
	pub const ALL: [LogLevel; 4] = [Self::Debug, Self::Info, Self::Warn, Self::Error];

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Debug => "debug",
			Self::Info => "info",
			Self::Warn => "warn",
			Self::Error => "error",
		}
	}

	pub(crate) const fn as_u8(self) -> u8 {
		self as u8
	}

	/// Terminal colour of the level tag.
	pub const fn color(self) -> Color {
		match self {
			Self::Debug => Color::Blue,
			Self::Info => Color::Green,
			Self::Warn => Color::Rgb { r: 255, g: 165, b: 0 },
			Self::Error => Color::Red,
		}
	}

	pub(crate) const fn from_u8(raw: u8) -> Self {
		match raw {
			0 => Self::Debug,
			1 => Self::Info,
			2 => Self::Warn,
			_ => Self::Error,
		}
	}
}

impl From<tracing::Level> for LogLevel {
	fn from(level: tracing::Level) -> Self {
		match level {
			tracing::Level::ERROR => LogLevel::Error,
			tracing::Level::WARN => LogLevel::Warn,
			tracing::Level::INFO => LogLevel::Info,
			tracing::Level::DEBUG | tracing::Level::TRACE => LogLevel::Debug,
		}
	}
}

impl From<LogLevel> for tracing::Level {
	fn from(level: LogLevel) -> Self {
		match level {
			LogLevel::Debug => tracing::Level::DEBUG,
			LogLevel::Info => tracing::Level::INFO,
			LogLevel::Warn => tracing::Level::WARN,
			LogLevel::Error => tracing::Level::ERROR,
		}
	}
}

impl std::fmt::Display for LogLevel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for LogLevel {
	type Err = LogError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		LogLevel::ALL
			.into_iter()
			.find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| LogError::UnknownLevel(s.to_owned()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ordering_matches_severity() {
		assert!(LogLevel::Debug < LogLevel::Info);
		assert!(LogLevel::Warn < LogLevel::Error);
	}

	#[test]
	fn round_trips_through_u8() {
		for level in LogLevel::ALL {
			assert_eq!(LogLevel::from_u8(level.as_u8()), level);
		}
	}

	#[test]
	fn parses_names() {
		assert_eq!(" WARN ".parse::<LogLevel>().unwrap(), LogLevel::Warn);
		assert!("verbose".parse::<LogLevel>().is_err());
	}
}
