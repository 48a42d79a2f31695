//! `clau-menu`: prints the navigation menus a route manifest produces.

mod cli;
mod render;

use anyhow::Context;
use clap::Parser;
use clau_config::AppConfig;
use clau_navigation::{NavigationStore, RouteManifest};

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let config = AppConfig::load(cli.config.as_deref()).context("failed to load config")?;
	let logger = config.log.logger()?;
	if cli.verbose {
		logger.set_level_debug();
	} else if config.log.level.is_none() {
		logger.set_level_warn();
	}
	clau_log::init(&logger)?;

	let text = std::fs::read_to_string(&cli.manifest)
		.with_context(|| format!("failed to read {}", cli.manifest.display()))?;
	let manifest = RouteManifest::from_json(&text)
		.with_context(|| format!("invalid route manifest {}", cli.manifest.display()))?;
	tracing::info!(routes = manifest.len(), "manifest loaded");

	let store = NavigationStore::from_source(&manifest, config.navigation.policy())?;
	let trees: Vec<_> = cli
		.surfaces()
		.into_iter()
		.map(|surface| (surface, store.grouped(surface).as_ref().clone()))
		.collect();

	if cli.json {
		println!("{}", render::json(&trees)?);
	} else {
		for (surface, nodes) in &trees {
			print!("{}", render::outline(*surface, nodes));
		}
	}
	Ok(())
}
