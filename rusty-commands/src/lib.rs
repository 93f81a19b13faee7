pub mod pagination;
pub mod utility;

use twilight_model::gateway::payload::incoming::MessageCreate;

use rusty_core::Context;
use rusty_utils::COMMAND_PREFIX;

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::help::META,
    utility::pages::META,
    // Add new commands here
];

/// Split a message into a lowercase command name, its first argument and the
/// remaining argument text.
fn split_command(content: &str) -> Option<(String, Option<&str>, Option<&str>)> {
    let content = content.trim().strip_prefix(COMMAND_PREFIX)?.trim();

    let mut command_and_rest = content.splitn(2, char::is_whitespace);
    let cmd = command_and_rest.next().unwrap_or("").to_ascii_lowercase();
    let rest = command_and_rest
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    let (arg1, arg_tail) = match rest {
        Some(value) => {
            let mut args = value.splitn(2, char::is_whitespace);
            let first = args.next().filter(|arg| !arg.is_empty());
            let tail = args
                .next()
                .map(str::trim)
                .filter(|remaining| !remaining.is_empty());

            (first, tail)
        }
        None => (None, None),
    };

    Some((cmd, arg1, arg_tail))
}

pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.author.bot {
        return Ok(());
    }

    let content = msg.content.clone();
    let Some((cmd, arg1, arg_tail)) = split_command(&content) else {
        return Ok(());
    };

    match cmd.as_str() {
        "help" => utility::help::run(ctx.clone(), msg).await?,
        "pages" => utility::pages::run(ctx.clone(), msg, arg1, arg_tail).await?,
        // Add new commands here
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_messages_without_prefix() {
        assert!(split_command("pages extended").is_none());
    }

    #[test]
    fn splits_command_and_arguments() {
        let (cmd, arg1, tail) = split_command("  !PAGES extended   45s ").unwrap();

        assert_eq!(cmd, "pages");
        assert_eq!(arg1, Some("extended"));
        assert_eq!(tail, Some("45s"));
    }

    #[test]
    fn bare_command_has_no_arguments() {
        let (cmd, arg1, tail) = split_command("!help").unwrap();

        assert_eq!(cmd, "help");
        assert_eq!(arg1, None);
        assert_eq!(tail, None);
    }
}
