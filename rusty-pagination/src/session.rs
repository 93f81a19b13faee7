//! Session construction and the reaction wait loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::content::Pages;
use crate::emoji::{Alphabet, NavSymbol};
use crate::error::PaginatorError;
use crate::filter::InputFilter;
use crate::host::{PaginatedMessage, ReactionEvent, ReactionKind, ReactionSource};
use crate::navigation::Navigator;
use crate::options::PaginatorOptions;

/// How a finished session ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionEnd {
    /// No accepted reaction arrived within the timeout.
    TimedOut,
    /// The cancellation token fired.
    Cancelled,
    /// The reaction source stopped delivering events.
    SourceClosed,
}

/// Outcome of handling one wait-loop iteration.
#[derive(Debug)]
pub enum Step {
    /// The message now shows page `index`.
    Navigated { index: usize },
    /// The input was a boundary no-op or not for this session.
    Ignored,
    TimedOut,
    Cancelled,
    /// Editing the message failed; the index is unchanged.
    RenderFailed(anyhow::Error),
    /// Waiting for reactions failed; the session cannot continue.
    SourceClosed(anyhow::Error),
}

/// A reaction pagination session bound to one message.
pub struct Paginator<H: ?Sized, M> {
    host: Arc<H>,
    message: M,
    pages: Pages,
    navigator: Navigator,
    filter: InputFilter,
    timeout: Duration,
    clear_reactions_on_exit: bool,
    cancel_token: CancellationToken,
}

impl<H, M> Paginator<H, M>
where
    H: ReactionSource + ?Sized,
    M: PaginatedMessage,
{
    /// Validate `options` and bind a session to `message`.
    ///
    /// Nothing is sent to the host here; reactions are added by [`start`].
    ///
    /// [`start`]: Paginator::start
    pub fn new(
        host: Arc<H>,
        message: M,
        options: PaginatorOptions,
    ) -> Result<Self, PaginatorError> {
        let bot_user_id = host
            .current_user_id()
            .ok_or(PaginatorError::InvalidHost)?;

        let pages = match (options.text_pages, options.rich_pages) {
            (Some(text), rich) => {
                if rich.is_some() {
                    warn!(
                        message_id = message.id().get(),
                        "both text and rich pages supplied, using text pages"
                    );
                }
                Pages::Text(text)
            }
            (None, Some(rich)) => Pages::Rich(rich),
            (None, None) => {
                return Err(PaginatorError::MissingContent(
                    "neither text nor rich pages were supplied",
                ));
            }
        };

        if pages.is_empty() {
            return Err(PaginatorError::MissingContent("page list is empty"));
        }

        if options.timeout_secs == 0 {
            return Err(PaginatorError::InvalidConfig(
                "timeout must be at least one second".to_owned(),
            ));
        }

        options.emojis.validate()?;

        let filter = InputFilter {
            bot_user_id,
            message_id: message.id(),
            only: options.only,
            alphabet: Alphabet::from_extended(options.extended),
            emojis: options.emojis,
        };

        Ok(Self {
            host,
            navigator: Navigator::new(pages.len()),
            message,
            pages,
            filter,
            timeout: Duration::from_secs(options.timeout_secs),
            clear_reactions_on_exit: options.clear_reactions_on_exit,
            cancel_token: options.cancel_token.unwrap_or_else(CancellationToken::new),
        })
    }

    /// Current zero-based page index.
    pub fn index(&self) -> usize {
        self.navigator.index()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn alphabet(&self) -> Alphabet {
        self.filter.alphabet
    }

    /// Whether this session would act on `event`.
    pub fn is_relevant_input(&self, event: &ReactionEvent) -> bool {
        self.filter.is_relevant(event)
    }

    /// Add the navigation reactions and follow reaction events until the
    /// session ends.
    ///
    /// Returns an error only if the initial reactions cannot be added.
    /// Timeouts, cancellation and a closed event source end the session
    /// normally.
    pub async fn start(mut self) -> anyhow::Result<SessionEnd> {
        self.add_reactions().await?;

        let message_id = self.message.id().get();
        info!(
            message_id,
            pages = self.page_count(),
            alphabet = ?self.alphabet(),
            "pagination session started"
        );

        let end = loop {
            match self.step().await {
                Step::Navigated { index } => {
                    debug!(message_id, index, "page changed");
                }
                Step::Ignored => {}
                Step::RenderFailed(source) => {
                    warn!(?source, message_id, "failed to render page");
                }
                Step::TimedOut => break SessionEnd::TimedOut,
                Step::Cancelled => break SessionEnd::Cancelled,
                Step::SourceClosed(source) => {
                    warn!(?source, message_id, "reaction source closed");
                    break SessionEnd::SourceClosed;
                }
            }
        };

        if self.clear_reactions_on_exit
            && let Err(source) = self.message.clear_reactions().await
        {
            warn!(?source, message_id, "failed to clear pagination reactions");
        }

        info!(message_id, ?end, "pagination session ended");
        Ok(end)
    }

    /// Move according to `symbol`, re-rendering the message if the page
    /// changes. The index only moves once the edit succeeds.
    pub async fn navigate(&mut self, symbol: NavSymbol) -> Step {
        let Some(target) = self.navigator.target(symbol) else {
            return Step::Ignored;
        };

        let Some(page) = self.pages.view(target) else {
            return Step::Ignored;
        };

        match self.message.edit(page).await {
            Ok(()) => {
                self.navigator.commit(target);
                Step::Navigated { index: target }
            }
            Err(source) => Step::RenderFailed(source),
        }
    }

    async fn add_reactions(&self) -> anyhow::Result<()> {
        for symbol in self.filter.alphabet.symbols() {
            self.message
                .add_reaction(self.filter.emojis.token(*symbol))
                .await?;
        }

        Ok(())
    }

    /// Wait for the first of: an added reaction, a removed reaction,
    /// cancellation, or the deadline. Losing waits are dropped.
    async fn step(&mut self) -> Step {
        let deadline = Instant::now() + self.timeout;

        let received = {
            let filter = &self.filter;
            let relevant = |event: &ReactionEvent| filter.is_relevant(event);

            tokio::select! {
                result = self.host.next_reaction(ReactionKind::Added, &relevant) => result,
                result = self.host.next_reaction(ReactionKind::Removed, &relevant) => result,
                () = self.cancel_token.cancelled() => return Step::Cancelled,
                () = sleep_until(deadline) => return Step::TimedOut,
            }
        };

        let event = match received {
            Ok(event) => event,
            Err(source) => return Step::SourceClosed(source),
        };

        // Sources may deliver loosely filtered events; re-check before acting.
        let Some(symbol) = self.filter.accept(&event) else {
            return Step::Ignored;
        };

        self.navigate(symbol).await
    }
}
