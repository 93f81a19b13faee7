//! Launching reaction pagination sessions from command handlers.

use std::sync::Arc;

use tracing::{error, info, warn};
use twilight_model::channel::Message;

use rusty_core::{Context, TwilightMessage};
use rusty_pagination::{Paginator, PaginatorOptions};

/// Message shown when a session cannot be created.
pub const PAGINATION_UNAVAILABLE_MESSAGE: &str =
    "Pagination is not available right now. Try again in a moment.";

/// Attach a reaction pagination session to an already-sent message and run it
/// in the background.
///
/// Returns `false` when the session could not be built, after telling the
/// channel so.
pub async fn spawn_reaction_pagination(
    ctx: &Context,
    message: &Message,
    options: PaginatorOptions,
) -> anyhow::Result<bool> {
    let target = TwilightMessage::new(Arc::clone(&ctx.http), message.channel_id, message.id);

    let paginator = match Paginator::new(Arc::clone(&ctx.reactions), target, options) {
        Ok(paginator) => paginator,
        Err(source) => {
            warn!(?source, message_id = message.id.get(), "could not start pagination");
            ctx.http
                .create_message(message.channel_id)
                .content(PAGINATION_UNAVAILABLE_MESSAGE)
                .await?;
            return Ok(false);
        }
    };

    let message_id = message.id.get();
    tokio::spawn(async move {
        match paginator.start().await {
            Ok(end) => info!(message_id, ?end, "pagination finished"),
            Err(source) => error!(?source, message_id, "pagination failed to start"),
        }
    });

    Ok(true)
}
