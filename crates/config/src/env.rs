//! `CLAU_*` environment overrides.
//!
//! | Variable | Field |
//! |----------|-------|
//! | `CLAU_LOG_LEVEL`, `CLAU_LOG_PREFIX` | `log.level`, `log.prefix` |
//! | `CLAU_NAV_DEFAULT_SHOW` | `navigation.default_show` (bool) |
//! | `CLAU_NAV_MATCH_KEY` | `navigation.match_key` |
//! | `CLAU_NAV_GROUP_PARAMS` | `navigation.group_params` (bool) |
//! | `CLAU_NAV_EXCLUDED_IDS` | `navigation.excluded_ids` (comma separated) |
//! | `CLAU_PUBLIC_<KEY>` | `runtime.public.<key>` |
//! | `CLAU_RUNTIME_<KEY>` | `runtime.<key>` |
//! | `CLAU_APP_<KEY>` | `app.<key>` |
//!
//! Unrecognized `CLAU_*` variables are ignored.

use toml::{Table, Value};

use crate::{ConfigError, Result};

pub const ENV_PREFIX: &str = "CLAU_";

/// Applies every recognized variable in `vars` onto `table`.
pub fn apply_env<I, K, V>(table: &mut Table, vars: I) -> Result<()>
where
	I: IntoIterator<Item = (K, V)>,
	K: AsRef<str>,
	V: AsRef<str>,
{
	for (var, raw) in vars {
		let (var, raw) = (var.as_ref(), raw.as_ref());
		let Some(key) = var.strip_prefix(ENV_PREFIX) else {
			continue;
		};
		let Some((path, value)) = resolve(var, key, raw)? else {
			continue;
		};
		tracing::debug!(%var, field = %path.join("."), "config env override");
		insert_path(table, &path, value);
	}
	Ok(())
}

fn resolve(var: &str, key: &str, raw: &str) -> Result<Option<(Vec<String>, Value)>> {
	let path = |parts: &[&str]| parts.iter().map(|p| p.to_string()).collect::<Vec<_>>();
	let text = || Value::String(raw.to_owned());

	let resolved = match key {
		"LOG_LEVEL" => (path(&["log", "level"]), text()),
		"LOG_PREFIX" => (path(&["log", "prefix"]), text()),
		"NAV_DEFAULT_SHOW" => (path(&["navigation", "default_show"]), parse_bool(var, raw)?),
		"NAV_GROUP_PARAMS" => (path(&["navigation", "group_params"]), parse_bool(var, raw)?),
		"NAV_MATCH_KEY" => (path(&["navigation", "match_key"]), Value::String(raw.to_ascii_lowercase())),
		"NAV_EXCLUDED_IDS" => {
			let ids = raw
				.split(',')
				.map(str::trim)
				.filter(|id| !id.is_empty())
				.map(|id| Value::String(id.to_owned()))
				.collect();
			(path(&["navigation", "excluded_ids"]), Value::Array(ids))
		}
		_ => {
			let scoped = [("PUBLIC_", &["runtime", "public"][..]), ("RUNTIME_", &["runtime"][..]), ("APP_", &["app"][..])];
			let Some((rest, parent)) = scoped
				.iter()
				.find_map(|(prefix, parent)| key.strip_prefix(prefix).map(|rest| (rest, *parent)))
			else {
				return Ok(None);
			};
			if rest.is_empty() {
				return Ok(None);
			}
			let mut full = path(parent);
			full.push(rest.to_ascii_lowercase());
			(full, text())
		}
	};
	Ok(Some(resolved))
}

fn parse_bool(var: &str, raw: &str) -> Result<Value> {
	match raw.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Ok(Value::Boolean(true)),
		"0" | "false" | "no" | "off" => Ok(Value::Boolean(false)),
		_ => Err(ConfigError::InvalidEnv {
			var: var.to_owned(),
			value: raw.to_owned(),
			expected: "a boolean",
		}),
	}
}

/// Sets `path` in `table`, creating intermediate tables and replacing non-table values.
fn insert_path(table: &mut Table, path: &[String], value: Value) {
	let Some((last, parents)) = path.split_last() else {
		return;
	};
	let mut current = table;
	for part in parents {
		let entry = current
			.entry(part.clone())
			.or_insert(Value::Table(Table::new()));
		if !entry.is_table() {
			*entry = Value::Table(Table::new());
		}
		current = match entry {
			Value::Table(next) => next,
			_ => return,
		};
	}
	current.insert(last.clone(), value);
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn maps_known_variables() {
		let mut table = Table::new();
		apply_env(
			&mut table,
			[
				("CLAU_PUBLIC_BASE_BUCKET", "https://cdn.test"),
				("CLAU_LOG_LEVEL", "warn"),
				("CLAU_NAV_DEFAULT_SHOW", "yes"),
				("CLAU_NAV_EXCLUDED_IDS", "index, login"),
				("CLAU_RUNTIME_API_SECRET", "s3cret"),
				("HOME", "/root"),
			],
		)
		.unwrap();

		let expected: Table = toml::from_str(
			r#"
			[runtime]
			api_secret = "s3cret"

			[runtime.public]
			base_bucket = "https://cdn.test"

			[log]
			level = "warn"

			[navigation]
			default_show = true
			excluded_ids = ["index", "login"]
			"#,
		)
		.unwrap();

		assert_eq!(table, expected);
	}

	#[test]
	fn rejects_bad_booleans() {
		let mut table = Table::new();
		let err = apply_env(&mut table, [("CLAU_NAV_GROUP_PARAMS", "maybe")]).unwrap_err();
		assert!(matches!(err, ConfigError::InvalidEnv { ref var, .. } if var == "CLAU_NAV_GROUP_PARAMS"));
	}

	#[test]
	fn overrides_replace_scalars_on_the_path() {
		let mut table: Table = toml::from_str("runtime = 3").unwrap();
		apply_env(&mut table, [("CLAU_PUBLIC_NAME", "x")]).unwrap();
		assert_eq!(table["runtime"]["public"]["name"].as_str(), Some("x"));
	}

	#[test]
	fn ignores_bare_scopes() {
		let mut table = Table::new();
		apply_env(&mut table, [("CLAU_PUBLIC_", "x"), ("CLAU_UNKNOWN", "y")]).unwrap();
		assert!(table.is_empty());
	}
}
