use toml::{Table, Value};

/// Site identity derived from the public asset bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
	pub favicon: String,
	pub logo: String,
	pub name: String,
}

impl Brand {
	pub const NAME: &'static str = "Clau";

	/// Asset urls under `base_bucket`, or site-relative ones when no bucket is set.
	pub fn from_bucket(base_bucket: Option<&str>) -> Self {
		let base = base_bucket.map(|b| b.trim_end_matches('/')).unwrap_or("");
		Self {
			favicon: format!("{base}/favicon.ico"),
			logo: format!("{base}/logo.jpg"),
			name: Self::NAME.to_owned(),
		}
	}

	/// `{ favicon, logo, name }` as merged into [`AppConfig::flatten`](crate::AppConfig::flatten).
	pub(crate) fn to_table(&self) -> Table {
		let mut table = Table::new();
		table.insert("favicon".into(), Value::String(self.favicon.clone()));
		table.insert("logo".into(), Value::String(self.logo.clone()));
		table.insert("name".into(), Value::String(self.name.clone()));
		table
	}
}
