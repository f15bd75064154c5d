//! `render` command: print the meta tags for one page.

use anyhow::{Context, Result};
use seo_tags::twitter::Card;
use seo_tags::{MiscTags, SeoConfig, debug};

use super::{RenderArgs, Section};

/// Build the entities from `config`, apply CLI overrides and render them.
///
/// MiscTags come first, then the twitter card; empty sections are skipped.
pub fn render(args: &RenderArgs, config: &SeoConfig) -> Result<String> {
    let mut sections = Vec::with_capacity(2);

    if args.wants(Section::Misc) {
        let mut misc = MiscTags::new(config.misc.clone());
        if let Some(url) = &args.url {
            misc.set_url(url.as_str());
        }
        sections.push(misc.render());
    }

    if args.wants(Section::Twitter) {
        let mut card = Card::new(config.twitter.clone()).context("invalid [twitter] config")?;
        if let Some(kind) = &args.card {
            card.set_type(kind).context("invalid --card")?;
        }
        if let Some(title) = &args.title {
            card.set_title(title.as_str());
        }
        if let Some(description) = &args.description {
            card.set_description(description.as_str());
        }
        for image in &args.images {
            card.add_image(image.as_str());
        }
        sections.push(card.render());
    }

    sections.retain(|s| !s.is_empty());
    Ok(sections.join("\n"))
}

pub fn run_render(args: &RenderArgs, config: &SeoConfig) -> Result<()> {
    let output = render(args, config)?;
    debug!("render"; "{} tags", output.lines().count());
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
