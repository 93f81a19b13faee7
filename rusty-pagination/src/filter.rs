//! Relevance check for incoming reaction events.

use twilight_model::id::{
    Id,
    marker::{MessageMarker, UserMarker},
};

use crate::emoji::{Alphabet, EmojiMap, NavSymbol};
use crate::host::ReactionEvent;

/// Decides whether a reaction event belongs to one session.
#[derive(Clone, Debug)]
pub struct InputFilter {
    pub(crate) bot_user_id: Id<UserMarker>,
    pub(crate) message_id: Id<MessageMarker>,
    pub(crate) only: Option<Id<UserMarker>>,
    pub(crate) alphabet: Alphabet,
    pub(crate) emojis: EmojiMap,
}

impl InputFilter {
    /// Symbol carried by `event` if the session should act on it.
    pub fn accept(&self, event: &ReactionEvent) -> Option<NavSymbol> {
        if event.user_id == self.bot_user_id {
            return None;
        }

        if event.message_id != self.message_id {
            return None;
        }

        if let Some(only) = self.only
            && event.user_id != only
        {
            return None;
        }

        self.emojis
            .symbol(&event.emoji)
            .filter(|symbol| self.alphabet.contains(*symbol))
    }

    pub fn is_relevant(&self, event: &ReactionEvent) -> bool {
        self.accept(event).is_some()
    }
}

#[cfg(test)]
mod tests {
    use twilight_model::id::Id;

    use super::*;
    use crate::host::ReactionKind;

    const BOT: u64 = 1;
    const OWNER: u64 = 2;
    const OTHER: u64 = 3;
    const MESSAGE: u64 = 10;

    fn filter(only: Option<u64>, alphabet: Alphabet) -> InputFilter {
        InputFilter {
            bot_user_id: Id::new(BOT),
            message_id: Id::new(MESSAGE),
            only: only.map(Id::new),
            alphabet,
            emojis: EmojiMap::default(),
        }
    }

    fn event(user_id: u64, message_id: u64, emoji: &str) -> ReactionEvent {
        ReactionEvent {
            kind: ReactionKind::Added,
            user_id: Id::new(user_id),
            message_id: Id::new(message_id),
            channel_id: Id::new(99),
            emoji: emoji.to_owned(),
        }
    }

    #[test]
    fn accepts_navigation_from_any_user_when_unrestricted() {
        let filter = filter(None, Alphabet::Basic);

        assert_eq!(
            filter.accept(&event(OWNER, MESSAGE, "➡️")),
            Some(NavSymbol::Next)
        );
        assert_eq!(
            filter.accept(&event(OTHER, MESSAGE, "⬅️")),
            Some(NavSymbol::Previous)
        );
    }

    #[test]
    fn rejects_the_bots_own_reactions() {
        let filter = filter(None, Alphabet::Extended);
        assert!(!filter.is_relevant(&event(BOT, MESSAGE, "➡️")));
    }

    #[test]
    fn rejects_reactions_on_other_messages() {
        let filter = filter(None, Alphabet::Basic);
        assert!(!filter.is_relevant(&event(OWNER, MESSAGE + 1, "➡️")));
    }

    #[test]
    fn restricted_session_only_hears_its_owner() {
        let filter = filter(Some(OWNER), Alphabet::Basic);

        assert!(filter.is_relevant(&event(OWNER, MESSAGE, "➡️")));
        assert!(!filter.is_relevant(&event(OTHER, MESSAGE, "➡️")));
    }

    #[test]
    fn basic_alphabet_ignores_first_and_last() {
        let filter = filter(None, Alphabet::Basic);

        assert!(!filter.is_relevant(&event(OWNER, MESSAGE, "⏪")));
        assert!(!filter.is_relevant(&event(OWNER, MESSAGE, "⏩")));
    }

    #[test]
    fn extended_alphabet_accepts_first_and_last() {
        let filter = filter(None, Alphabet::Extended);

        assert_eq!(
            filter.accept(&event(OWNER, MESSAGE, "⏪")),
            Some(NavSymbol::First)
        );
        assert_eq!(
            filter.accept(&event(OWNER, MESSAGE, "⏩")),
            Some(NavSymbol::Last)
        );
    }

    #[test]
    fn rejects_unrelated_emojis() {
        let filter = filter(None, Alphabet::Extended);
        assert!(!filter.is_relevant(&event(OWNER, MESSAGE, "🎉")));
    }
}
