use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::CommandMeta;
use crate::pagination::spawn_reaction_pagination;
use rusty_core::{BotConfig, Context};
use rusty_pagination::PaginatorOptions;
use rusty_utils::embed::build_page_embeds;
use rusty_utils::page::bulleted_pages;
use rusty_utils::parse::{PageMode, parse_duration_seconds, parse_page_mode};

pub const META: CommandMeta = CommandMeta {
    name: "pages",
    desc: "Page through sample embeds with reactions.",
    category: "utility",
    usage: "!pages [basic|extended] [timeout]",
};

const ITEMS_PER_PAGE: usize = 5;
const SAMPLE_ITEM_COUNT: usize = 24;

/// Parsed `!pages` arguments with config defaults filled in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct PagesArgs {
    mode: PageMode,
    timeout_secs: u64,
}

/// Send sample embed pages navigable by reactions.
///
/// Inputs:
/// - optional navigation mode: `basic` or `extended`.
/// - optional idle timeout such as `45s` or `2m`.
///
/// Error behavior:
/// - unknown or repeated arguments reply with usage text.
pub async fn run(
    ctx: Context,
    msg: Box<MessageCreate>,
    arg1: Option<&str>,
    arg_tail: Option<&str>,
) -> anyhow::Result<()> {
    let http = &ctx.http;

    let Some(args) = parse_args(arg1, arg_tail, &ctx.config) else {
        let usage = format!("Usage: `{}`", META.usage);
        http.create_message(msg.channel_id).content(&usage).await?;
        return Ok(());
    };

    let descriptions = bulleted_pages(&build_sample_items(), ITEMS_PER_PAGE);
    let embeds = build_page_embeds("Reaction Pagination", &descriptions)?;
    let Some(first_embed) = embeds.first() else {
        return Ok(());
    };

    let sent = http
        .create_message(msg.channel_id)
        .embeds(std::slice::from_ref(first_embed))
        .await?
        .model()
        .await?;

    let options = PaginatorOptions::default()
        .rich_pages(embeds)
        .timeout_secs(args.timeout_secs)
        .extended(args.mode.is_extended())
        .only(msg.author.id)
        .clear_reactions_on_exit(true);

    spawn_reaction_pagination(&ctx, &sent, options).await?;

    Ok(())
}

/// Accept up to one mode and one timeout, in either order.
fn parse_args(
    arg1: Option<&str>,
    arg_tail: Option<&str>,
    config: &BotConfig,
) -> Option<PagesArgs> {
    let mut mode = None;
    let mut timeout_secs = None;

    let tokens = arg1
        .into_iter()
        .chain(arg_tail.into_iter().flat_map(str::split_whitespace));

    for token in tokens {
        if let Some(parsed) = parse_page_mode(token) {
            if mode.replace(parsed).is_some() {
                return None;
            }
        } else if let Some(parsed) = parse_duration_seconds(token) {
            if timeout_secs.replace(parsed).is_some() {
                return None;
            }
        } else {
            return None;
        }
    }

    let default_mode = if config.extended_navigation {
        PageMode::Extended
    } else {
        PageMode::Basic
    };

    Some(PagesArgs {
        mode: mode.unwrap_or(default_mode),
        timeout_secs: timeout_secs.unwrap_or(config.page_timeout_secs),
    })
}

fn build_sample_items() -> Vec<String> {
    (1..=SAMPLE_ITEM_COUNT)
        .map(|index| format!("Sample pagination item #{index}"))
        .collect()
}
