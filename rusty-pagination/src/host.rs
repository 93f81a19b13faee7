//! Collaborator interfaces a session drives.
//!
//! The paginator never talks to the gateway or HTTP API directly. A host
//! application implements [`ReactionSource`] over its event stream and
//! [`PaginatedMessage`] over its REST client.

use async_trait::async_trait;
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, MessageMarker, UserMarker},
};

use crate::content::PageView;

/// Whether a reaction was added to or removed from a message.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ReactionKind {
    Added,
    Removed,
}

/// A reaction change observed on the gateway.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReactionEvent {
    pub kind: ReactionKind,
    /// User who added or removed the reaction.
    pub user_id: Id<UserMarker>,
    pub message_id: Id<MessageMarker>,
    pub channel_id: Id<ChannelMarker>,
    /// Raw emoji token, e.g. `"➡️"` or `"<:next:123>"`.
    pub emoji: String,
}

/// Stream of reaction events shared by every running session.
#[async_trait]
pub trait ReactionSource: Send + Sync {
    /// The bot's own user, or `None` when it is not known yet.
    fn current_user_id(&self) -> Option<Id<UserMarker>>;

    /// Wait for the next event of `kind` accepted by `filter`.
    ///
    /// Never resolves while no such event arrives; callers cancel by dropping
    /// the future. Errors mean the source itself is gone.
    async fn next_reaction(
        &self,
        kind: ReactionKind,
        filter: &(dyn for<'e> Fn(&'e ReactionEvent) -> bool + Send + Sync),
    ) -> anyhow::Result<ReactionEvent>;
}

/// The message a session displays its pages on.
#[async_trait]
pub trait PaginatedMessage: Send + Sync {
    fn id(&self) -> Id<MessageMarker>;

    fn channel_id(&self) -> Id<ChannelMarker>;

    /// Replace the displayed content with `page`.
    async fn edit(&self, page: PageView<'_>) -> anyhow::Result<()>;

    /// Add one navigation reaction.
    async fn add_reaction(&self, emoji: &str) -> anyhow::Result<()>;

    /// Remove every reaction from the message.
    async fn clear_reactions(&self) -> anyhow::Result<()>;
}
