//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Render SEO meta tags from a `seo.toml` config
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: seo.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "seo.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the rendered meta tags
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Validate the config file
    #[command(visible_alias = "c")]
    Check {
        /// Page URL to check as a canonical link
        #[arg(short, long, value_hint = clap::ValueHint::Url)]
        url: Option<String>,
    },

    /// Write a default config file
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

/// Which entity to render.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Canonical, robots and default metas
    Misc,
    /// Twitter card tags
    Twitter,
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Current page URL (used for the canonical link)
    #[arg(short, long, value_hint = clap::ValueHint::Url)]
    pub url: Option<String>,

    /// Override the twitter card type
    #[arg(short = 'k', long)]
    pub card: Option<String>,

    /// Twitter card title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Twitter card description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Twitter card image URL (repeatable, at most 4 are kept)
    #[arg(short, long = "image", value_name = "URL")]
    pub images: Vec<String>,

    /// Render a single section only
    #[arg(short, long)]
    pub only: Option<Section>,
}

impl RenderArgs {
    pub fn wants(&self, section: Section) -> bool {
        self.only.is_none_or(|only| only == section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_args() {
        let cli = Cli::parse_from([
            "seo-tags",
            "render",
            "--url",
            "https://x.test/",
            "-i",
            "https://x.test/a.png",
            "-i",
            "https://x.test/b.png",
            "--only",
            "twitter",
        ]);
        let Commands::Render { args } = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.url.as_deref(), Some("https://x.test/"));
        assert_eq!(args.images.len(), 2);
        assert!(args.wants(Section::Twitter));
        assert!(!args.wants(Section::Misc));
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["seo-tags", "check", "-C", "site/seo.toml"]);
        assert_eq!(cli.config, PathBuf::from("site/seo.toml"));
        assert!(matches!(cli.command, Commands::Check { url: None }));
    }

    #[test]
    fn test_wants_everything_by_default() {
        let args = RenderArgs::default();
        assert!(args.wants(Section::Misc));
        assert!(args.wants(Section::Twitter));
    }
}
