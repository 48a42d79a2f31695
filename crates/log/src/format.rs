//! Message rendering helpers.

use chrono::{DateTime, SecondsFormat, Utc};
use crossterm::style::Stylize;

use crate::LogLevel;

/// Pretty-prints `text` when it holds a JSON object or array; anything else is returned as is.
pub fn try_pretty_json(text: &str) -> String {
	let trimmed = text.trim();
	let bracketed = matches!(
		(trimmed.chars().next(), trimmed.chars().last()),
		(Some('{'), Some('}')) | (Some('['), Some(']'))
	);
	bracketed
		.then(|| serde_json::from_str::<serde_json::Value>(trimmed).ok())
		.flatten()
		.and_then(|value| serde_json::to_string_pretty(&value).ok())
		.unwrap_or_else(|| text.to_owned())
}

/// Uppercases bracketed tags: `[method: group]` becomes `[METHOD: GROUP]`.
///
/// A tag opens on a word starting with `[` and closes on the next word ending with `]`.
pub fn emphasize_tags(message: &str) -> String {
	let words: Vec<&str> = message.split(' ').collect();
	let mut out: Vec<String> = Vec::with_capacity(words.len());
	let mut i = 0;
	while i < words.len() {
		if words[i].starts_with('[')
			&& let Some(len) = words[i..].iter().position(|w| w.ends_with(']'))
			&& words[i + 1..=i + len].iter().all(|w| !w.starts_with('['))
		{
			out.extend(words[i..=i + len].iter().map(|w| w.to_uppercase()));
			i += len + 1;
			continue;
		}
		out.push(words[i].to_owned());
		i += 1;
	}
	out.join(" ")
}

/// `[timestamp] [LEVEL] [PREFIX] message`, with the level coloured when `ansi` is set.
pub fn render_line(timestamp: &DateTime<Utc>, level: LogLevel, prefix: &str, message: &str, ansi: bool) -> String {
	let tag = level.as_str().to_uppercase();
	let tag = if ansi { tag.with(level.color()).to_string() } else { tag };
	format!(
		"[{}] [{tag}] [{prefix}] {message}",
		timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
	)
}
