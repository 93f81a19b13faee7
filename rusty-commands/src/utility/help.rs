use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::pagination::spawn_reaction_pagination;
use crate::{COMMANDS, CommandMeta};
use rusty_core::Context;
use rusty_pagination::PaginatorOptions;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "!help",
};

const HELP_COMMANDS_PER_PAGE: usize = 10;

/// Render the command catalog as plain-text pages.
///
/// A single page is sent as-is; longer catalogs get reaction navigation
/// limited to the caller.
pub async fn run(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    let pages = help_pages(&sorted_commands(), HELP_COMMANDS_PER_PAGE);
    let Some(first_page) = pages.first() else {
        return Ok(());
    };

    let sent = ctx
        .http
        .create_message(msg.channel_id)
        .content(first_page)
        .await?
        .model()
        .await?;

    if pages.len() > 1 {
        let options = PaginatorOptions::default()
            .text_pages(pages)
            .timeout_secs(ctx.config.page_timeout_secs)
            .extended(ctx.config.extended_navigation)
            .only(msg.author.id);

        spawn_reaction_pagination(&ctx, &sent, options).await?;
    }

    Ok(())
}

fn sorted_commands() -> Vec<&'static CommandMeta> {
    let mut commands: Vec<&CommandMeta> = COMMANDS.iter().collect();
    commands.sort_by_key(|command| (command.category, command.name));
    commands
}

/// Group commands by category, `per_page` commands per page.
fn help_pages(commands: &[&CommandMeta], per_page: usize) -> Vec<String> {
    commands
        .chunks(per_page.max(1))
        .map(grouped_help_description)
        .collect()
}

fn grouped_help_description(commands: &[&CommandMeta]) -> String {
    let mut out = String::new();
    let mut current_category: Option<&str> = None;

    for command in commands {
        if current_category != Some(command.category) {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("**{}**\n", display_category(command.category)));
            current_category = Some(command.category);
        }

        out.push_str(&format!("• `{}` - {}\n", command.usage, command.desc));
    }

    out.trim_end().to_owned()
}

fn display_category(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
