use std::path::PathBuf;

use clap::Parser;
use clau_navigation::Surface;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "clau-menu")]
#[command(about = "Build navigation menus from a route manifest")]
#[command(version)]
pub struct Cli {
	/// JSON file holding an array of route descriptors
	#[arg(value_name = "MANIFEST")]
	pub manifest: PathBuf,

	/// Only print this surface (navbar, sidebar or footer)
	#[arg(long, short = 's')]
	pub surface: Option<Surface>,

	/// Print the label trees as JSON instead of an outline
	#[arg(long)]
	pub json: bool,

	/// Config file (defaults to ./clau.toml when present)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}

impl Cli {
	pub fn surfaces(&self) -> Vec<Surface> {
		match self.surface {
			Some(surface) => vec![surface],
			None => Surface::ALL.to_vec(),
		}
	}
}
