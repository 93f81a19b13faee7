use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFooterBuilder};

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x90_54_30;

/// Build one embed per pre-rendered page description.
///
/// Every embed carries the shared title and a `Page i/N` footer when there
/// is more than one page.
pub fn build_page_embeds(title: &str, pages: &[String]) -> anyhow::Result<Vec<Embed>> {
    let total_pages = pages.len();

    pages
        .iter()
        .enumerate()
        .map(|(index, description)| {
            build_page_embed(title, description.as_str(), index + 1, total_pages)
        })
        .collect()
}

/// Build a single page embed with consistent styling.
pub fn build_page_embed(
    title: &str,
    description: impl Into<String>,
    page: usize,
    total_pages: usize,
) -> anyhow::Result<Embed> {
    let builder = EmbedBuilder::new()
        .title(title)
        .color(DEFAULT_EMBED_COLOR)
        .description(description);

    let embed = if total_pages > 1 {
        let footer = EmbedFooterBuilder::new(page_footer(page, total_pages)).build();
        builder.footer(footer).validate()?.build()
    } else {
        builder.validate()?.build()
    };

    Ok(embed)
}

/// Footer text for a one-based page position.
pub fn page_footer(page: usize, total_pages: usize) -> String {
    let total_pages = total_pages.max(1);
    format!("Page {}/{}", page.clamp(1, total_pages), total_pages)
}
