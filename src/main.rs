//! seo-tags - render SEO meta tags from `seo.toml`.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, common::load_config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    seo_tags::logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Render { args } => {
            let config = load_config(&cli, false)?;
            cli::render::run_render(args, &config)
        }
        Commands::Check { url } => {
            let config = load_config(&cli, true)?;
            cli::check::run_check(url.as_deref(), &config)
        }
        Commands::Init { force } => cli::init::run_init(&cli.config, *force),
    }
}
