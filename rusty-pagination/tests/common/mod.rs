//! In-memory host used by the session tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::mpsc;
use twilight_model::channel::message::embed::Embed;
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, MessageMarker, UserMarker},
};
use twilight_util::builder::embed::EmbedBuilder;

use rusty_pagination::{PageView, PaginatedMessage, ReactionEvent, ReactionKind, ReactionSource};

pub const BOT_ID: u64 = 1;
pub const OWNER_ID: u64 = 2;
pub const STRANGER_ID: u64 = 3;
pub const CHANNEL_ID: u64 = 50;
pub const MESSAGE_ID: u64 = 100;

/// Reaction source fed from the test body through [`Feed`].
pub struct FakeHost {
    bot_user_id: Option<Id<UserMarker>>,
    added: tokio::sync::Mutex<mpsc::UnboundedReceiver<ReactionEvent>>,
    removed: tokio::sync::Mutex<mpsc::UnboundedReceiver<ReactionEvent>>,
}

/// Sending half of a [`FakeHost`]. Dropping it closes the source.
pub struct Feed {
    added: mpsc::UnboundedSender<ReactionEvent>,
    removed: mpsc::UnboundedSender<ReactionEvent>,
}

impl FakeHost {
    pub fn new() -> (Arc<Self>, Feed) {
        Self::with_user(Some(Id::new(BOT_ID)))
    }

    /// A host that never finished logging in.
    pub fn not_ready() -> (Arc<Self>, Feed) {
        Self::with_user(None)
    }

    fn with_user(bot_user_id: Option<Id<UserMarker>>) -> (Arc<Self>, Feed) {
        let (added_tx, added_rx) = mpsc::unbounded_channel();
        let (removed_tx, removed_rx) = mpsc::unbounded_channel();

        let host = Self {
            bot_user_id,
            added: tokio::sync::Mutex::new(added_rx),
            removed: tokio::sync::Mutex::new(removed_rx),
        };
        let feed = Feed {
            added: added_tx,
            removed: removed_tx,
        };

        (Arc::new(host), feed)
    }
}

#[async_trait]
impl ReactionSource for FakeHost {
    fn current_user_id(&self) -> Option<Id<UserMarker>> {
        self.bot_user_id
    }

    async fn next_reaction(
        &self,
        kind: ReactionKind,
        filter: &(dyn for<'e> Fn(&'e ReactionEvent) -> bool + Send + Sync),
    ) -> anyhow::Result<ReactionEvent> {
        let receiver = match kind {
            ReactionKind::Added => &self.added,
            ReactionKind::Removed => &self.removed,
        };
        let mut receiver = receiver.lock().await;

        loop {
            let Some(event) = receiver.recv().await else {
                anyhow::bail!("reaction feed closed");
            };

            if filter(&event) {
                return Ok(event);
            }
        }
    }
}

impl Feed {
    pub fn add(&self, user_id: u64, emoji: &str) {
        self.send(ReactionKind::Added, user_id, MESSAGE_ID, emoji);
    }

    pub fn remove(&self, user_id: u64, emoji: &str) {
        self.send(ReactionKind::Removed, user_id, MESSAGE_ID, emoji);
    }

    pub fn send(&self, kind: ReactionKind, user_id: u64, message_id: u64, emoji: &str) {
        let event = ReactionEvent {
            kind,
            user_id: Id::new(user_id),
            message_id: Id::new(message_id),
            channel_id: Id::new(CHANNEL_ID),
            emoji: emoji.to_owned(),
        };

        let sender = match kind {
            ReactionKind::Added => &self.added,
            ReactionKind::Removed => &self.removed,
        };
        sender.send(event).expect("fake host dropped");
    }
}

/// Something the session did to the message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendered {
    Text(String),
    /// Rich page, identified by its embed title.
    Rich(String),
    Reaction(String),
    Cleared,
}

/// Message that records every call and can be told to fail edits.
#[derive(Clone, Default)]
pub struct FakeMessage {
    log: Arc<Mutex<Vec<Rendered>>>,
    failing_edits: Arc<AtomicUsize>,
}

impl FakeMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `count` edits fail.
    pub fn fail_next_edits(&self, count: usize) {
        self.failing_edits.store(count, Ordering::SeqCst);
    }

    pub fn log(&self) -> Vec<Rendered> {
        self.log.lock().unwrap().clone()
    }

    /// Only the page renders, without reactions or cleanup.
    pub fn pages_shown(&self) -> Vec<Rendered> {
        self.log()
            .into_iter()
            .filter(|entry| matches!(entry, Rendered::Text(_) | Rendered::Rich(_)))
            .collect()
    }

    pub fn reactions(&self) -> Vec<String> {
        self.log()
            .into_iter()
            .filter_map(|entry| match entry {
                Rendered::Reaction(emoji) => Some(emoji),
                _ => None,
            })
            .collect()
    }

    fn push(&self, entry: Rendered) {
        self.log.lock().unwrap().push(entry);
    }
}

#[async_trait]
impl PaginatedMessage for FakeMessage {
    fn id(&self) -> Id<MessageMarker> {
        Id::new(MESSAGE_ID)
    }

    fn channel_id(&self) -> Id<ChannelMarker> {
        Id::new(CHANNEL_ID)
    }

    async fn edit(&self, page: PageView<'_>) -> anyhow::Result<()> {
        let remaining = self.failing_edits.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failing_edits.store(remaining - 1, Ordering::SeqCst);
            anyhow::bail!("edit rejected");
        }

        match page {
            PageView::Text(text) => self.push(Rendered::Text(text.to_owned())),
            PageView::Rich(embed) => {
                self.push(Rendered::Rich(embed.title.clone().unwrap_or_default()))
            }
        }

        Ok(())
    }

    async fn add_reaction(&self, emoji: &str) -> anyhow::Result<()> {
        self.push(Rendered::Reaction(emoji.to_owned()));
        Ok(())
    }

    async fn clear_reactions(&self) -> anyhow::Result<()> {
        self.push(Rendered::Cleared);
        Ok(())
    }
}

pub fn text_pages(pages: &[&str]) -> Vec<String> {
    pages.iter().map(|page| (*page).to_owned()).collect()
}

pub fn embeds(titles: &[&str]) -> Vec<Embed> {
    titles
        .iter()
        .map(|title| EmbedBuilder::new().title(*title).build())
        .collect()
}

pub fn text(page: &str) -> Rendered {
    Rendered::Text(page.to_owned())
}

pub fn rich(title: &str) -> Rendered {
    Rendered::Rich(title.to_owned())
}
