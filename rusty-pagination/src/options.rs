//! Session configuration.

use tokio_util::sync::CancellationToken;
use twilight_model::{
    channel::message::embed::Embed,
    id::{Id, marker::UserMarker},
};

use crate::DEFAULT_TIMEOUT_SECS;
use crate::emoji::EmojiMap;

/// Options accepted by [`Paginator::new`](crate::Paginator::new).
///
/// ```ignore
/// let options = PaginatorOptions::default()
///     .text_pages(vec!["one".into(), "two".into()])
///     .extended(true)
///     .only(author_id);
/// ```
#[derive(Clone, Debug)]
pub struct PaginatorOptions {
    pub text_pages: Option<Vec<String>>,
    pub rich_pages: Option<Vec<Embed>>,
    /// Idle seconds allowed between accepted reactions.
    pub timeout_secs: u64,
    /// Enable the first/last reactions.
    pub extended: bool,
    /// Only accept reactions from this user.
    pub only: Option<Id<UserMarker>>,
    /// Remove all reactions from the message when the session ends.
    pub clear_reactions_on_exit: bool,
    pub emojis: EmojiMap,
    /// Ends the session early when cancelled.
    pub cancel_token: Option<CancellationToken>,
}

impl Default for PaginatorOptions {
    fn default() -> Self {
        Self {
            text_pages: None,
            rich_pages: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            extended: false,
            only: None,
            clear_reactions_on_exit: false,
            emojis: EmojiMap::default(),
            cancel_token: None,
        }
    }
}

impl PaginatorOptions {
    pub fn text_pages(mut self, pages: Vec<String>) -> Self {
        self.text_pages = Some(pages);
        self
    }

    pub fn rich_pages(mut self, pages: Vec<Embed>) -> Self {
        self.rich_pages = Some(pages);
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    pub fn only(mut self, user_id: Id<UserMarker>) -> Self {
        self.only = Some(user_id);
        self
    }

    pub fn clear_reactions_on_exit(mut self, clear: bool) -> Self {
        self.clear_reactions_on_exit = clear;
        self
    }

    pub fn emojis(mut self, emojis: EmojiMap) -> Self {
        self.emojis = emojis;
        self
    }

    pub fn cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = Some(token);
        self
    }
}
