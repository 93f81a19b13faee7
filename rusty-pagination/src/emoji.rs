//! Navigation symbols, alphabets, and the emoji tokens that trigger them.

use crate::error::PaginatorError;

/// Abstract navigation action triggered by a reaction.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum NavSymbol {
    First,
    Previous,
    Next,
    Last,
}

/// The set of symbols a session reacts to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum Alphabet {
    /// Previous and next only.
    #[default]
    Basic,
    /// First, previous, next and last.
    Extended,
}

impl Alphabet {
    /// Pick the alphabet for the extended-navigation flag.
    pub fn from_extended(extended: bool) -> Self {
        if extended {
            Self::Extended
        } else {
            Self::Basic
        }
    }

    /// Symbols in the order their reactions are rendered.
    pub fn symbols(self) -> &'static [NavSymbol] {
        match self {
            Self::Basic => &[NavSymbol::Previous, NavSymbol::Next],
            Self::Extended => &[
                NavSymbol::First,
                NavSymbol::Previous,
                NavSymbol::Next,
                NavSymbol::Last,
            ],
        }
    }

    pub fn contains(self, symbol: NavSymbol) -> bool {
        self.symbols().contains(&symbol)
    }
}

/// Mapping between raw reaction tokens and navigation symbols.
///
/// Tokens are compared exactly as the gateway reports them: a unicode
/// emoji (`"➡️"`) or a custom emoji mention (`"<:next:123>"`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmojiMap {
    pub first: String,
    pub previous: String,
    pub next: String,
    pub last: String,
}

impl Default for EmojiMap {
    fn default() -> Self {
        Self {
            first: "⏪".to_owned(),
            previous: "⬅️".to_owned(),
            next: "➡️".to_owned(),
            last: "⏩".to_owned(),
        }
    }
}

impl EmojiMap {
    /// Token rendered for a symbol.
    pub fn token(&self, symbol: NavSymbol) -> &str {
        match symbol {
            NavSymbol::First => &self.first,
            NavSymbol::Previous => &self.previous,
            NavSymbol::Next => &self.next,
            NavSymbol::Last => &self.last,
        }
    }

    /// Resolve a raw reaction token to its symbol, if it is one of ours.
    pub fn symbol(&self, token: &str) -> Option<NavSymbol> {
        [
            NavSymbol::First,
            NavSymbol::Previous,
            NavSymbol::Next,
            NavSymbol::Last,
        ]
        .into_iter()
        .find(|symbol| self.token(*symbol) == token)
    }

    pub(crate) fn validate(&self) -> Result<(), PaginatorError> {
        let tokens = [&self.first, &self.previous, &self.next, &self.last];

        if tokens.iter().any(|token| token.trim().is_empty()) {
            return Err(PaginatorError::InvalidConfig(
                "emoji tokens must not be empty".to_owned(),
            ));
        }

        for (position, token) in tokens.iter().enumerate() {
            if tokens[position + 1..].contains(token) {
                return Err(PaginatorError::InvalidConfig(format!(
                    "emoji `{token}` is mapped to more than one action"
                )));
            }
        }

        Ok(())
    }
}
