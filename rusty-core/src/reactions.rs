use std::sync::{Arc, OnceLock, RwLock};

use async_trait::async_trait;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, warn};
use twilight_http::{Client, request::channel::reaction::RequestReactionType};
use twilight_model::{
    channel::message::EmojiReactionType,
    gateway::{GatewayReaction, event::Event},
    id::{
        Id,
        marker::{ChannelMarker, EmojiMarker, MessageMarker, UserMarker},
    },
};

use rusty_pagination::{PageView, PaginatedMessage, ReactionEvent, ReactionKind, ReactionSource};

/// Buffered reaction events per subscriber before it starts lagging.
const REACTION_CHANNEL_CAPACITY: usize = 256;

/// Fans gateway reaction events out to every running pagination session.
pub struct ReactionHub {
    // `None` once the gateway stream has ended.
    sender: RwLock<Option<broadcast::Sender<ReactionEvent>>>,
    bot_user_id: OnceLock<Id<UserMarker>>,
}

impl Default for ReactionHub {
    fn default() -> Self {
        Self::new()
    }
}

impl ReactionHub {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(REACTION_CHANNEL_CAPACITY);

        Self {
            sender: RwLock::new(Some(sender)),
            bot_user_id: OnceLock::new(),
        }
    }

    /// Record the bot's own user id. Later calls are ignored.
    pub fn set_current_user(&self, user_id: Id<UserMarker>) {
        let _ = self.bot_user_id.set(user_id);
    }

    /// Deliver `event` to every waiting session.
    pub fn publish(&self, event: ReactionEvent) {
        let Ok(sender) = self.sender.read() else {
            return;
        };

        if let Some(sender) = sender.as_ref() {
            // No receivers just means no session is waiting right now.
            let _ = sender.send(event);
        }
    }

    /// Stop delivering events. Waiting sessions get an error and later
    /// waits fail immediately.
    pub fn close(&self) {
        let closed = match self.sender.write() {
            Ok(mut sender) => sender.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };

        if closed.is_some() {
            debug!("reaction hub closed");
        }
    }

    fn subscribe(&self) -> Option<broadcast::Receiver<ReactionEvent>> {
        let sender = self.sender.read().ok()?;
        sender.as_ref().map(broadcast::Sender::subscribe)
    }

    /// Feed one gateway event into the hub, ignoring unrelated events.
    pub fn handle_gateway_event(&self, event: &Event) {
        match event {
            Event::Ready(ready) => {
                debug!(user_id = ready.user.id.get(), "reaction hub bound to bot user");
                self.set_current_user(ready.user.id);
            }
            Event::ReactionAdd(reaction) => {
                self.publish(reaction_event(ReactionKind::Added, &reaction.0));
            }
            Event::ReactionRemove(reaction) => {
                self.publish(reaction_event(ReactionKind::Removed, &reaction.0));
            }
            _ => {}
        }
    }
}

#[async_trait]
impl ReactionSource for ReactionHub {
    fn current_user_id(&self) -> Option<Id<UserMarker>> {
        self.bot_user_id.get().copied()
    }

    async fn next_reaction(
        &self,
        kind: ReactionKind,
        filter: &(dyn for<'e> Fn(&'e ReactionEvent) -> bool + Send + Sync),
    ) -> anyhow::Result<ReactionEvent> {
        let Some(mut receiver) = self.subscribe() else {
            anyhow::bail!("reaction hub closed");
        };

        loop {
            match receiver.recv().await {
                Ok(event) if event.kind == kind && filter(&event) => return Ok(event),
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "reaction subscriber lagged behind the gateway");
                }
                Err(RecvError::Closed) => anyhow::bail!("reaction hub closed"),
            }
        }
    }
}

/// Convert a twilight gateway reaction into a pagination event.
pub fn reaction_event(kind: ReactionKind, reaction: &GatewayReaction) -> ReactionEvent {
    ReactionEvent {
        kind,
        user_id: reaction.user_id,
        message_id: reaction.message_id,
        channel_id: reaction.channel_id,
        emoji: emoji_token(&reaction.emoji),
    }
}

/// Text form of a reaction emoji: the unicode itself, or `<:name:id>` /
/// `<a:name:id>` for custom emojis.
pub fn emoji_token(emoji: &EmojiReactionType) -> String {
    match emoji {
        EmojiReactionType::Unicode { name } => name.clone(),
        EmojiReactionType::Custom { animated, id, name } => {
            let prefix = if *animated { "a" } else { "" };
            format!("<{prefix}:{}:{id}>", name.as_deref().unwrap_or("_"))
        }
    }
}

/// Request form of an emoji token produced by [`emoji_token`].
pub fn request_reaction(token: &str) -> RequestReactionType<'_> {
    match parse_custom_emoji(token) {
        Some((name, id)) => RequestReactionType::Custom {
            id,
            name: Some(name),
        },
        None => RequestReactionType::Unicode { name: token },
    }
}

fn parse_custom_emoji(token: &str) -> Option<(&str, Id<EmojiMarker>)> {
    let inner = token.strip_prefix('<')?.strip_suffix('>')?;
    let inner = inner
        .strip_prefix("a:")
        .or_else(|| inner.strip_prefix(':'))?;
    let (name, raw_id) = inner.rsplit_once(':')?;
    let id = raw_id.parse::<u64>().ok().and_then(Id::new_checked)?;

    Some((name, id))
}

/// A message edited through the twilight HTTP client.
#[derive(Clone)]
pub struct TwilightMessage {
    http: Arc<Client>,
    channel_id: Id<ChannelMarker>,
    message_id: Id<MessageMarker>,
}

impl TwilightMessage {
    pub fn new(
        http: Arc<Client>,
        channel_id: Id<ChannelMarker>,
        message_id: Id<MessageMarker>,
    ) -> Self {
        Self {
            http,
            channel_id,
            message_id,
        }
    }
}

#[async_trait]
impl PaginatedMessage for TwilightMessage {
    fn id(&self) -> Id<MessageMarker> {
        self.message_id
    }

    fn channel_id(&self) -> Id<ChannelMarker> {
        self.channel_id
    }

    async fn edit(&self, page: PageView<'_>) -> anyhow::Result<()> {
        let request = self.http.update_message(self.channel_id, self.message_id);

        match page {
            PageView::Text(content) => request.content(Some(content)).await?,
            PageView::Rich(embed) => request.embeds(Some(std::slice::from_ref(embed))).await?,
        };

        Ok(())
    }

    async fn add_reaction(&self, emoji: &str) -> anyhow::Result<()> {
        self.http
            .create_reaction(self.channel_id, self.message_id, &request_reaction(emoji))
            .await?;

        Ok(())
    }

    async fn clear_reactions(&self) -> anyhow::Result<()> {
        self.http
            .delete_all_reactions(self.channel_id, self.message_id)
            .await?;

        Ok(())
    }
}
