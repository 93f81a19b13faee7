//! Reaction-driven pagination for pre-rendered message pages.
//!
//! A [`Paginator`] owns one message and its pages. Calling
//! [`Paginator::start`] adds the navigation reactions and then follows
//! reaction add/remove events until the session times out, is cancelled or
//! the event source goes away.

/// Default idle timeout for reaction pagination sessions.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

mod content;
mod emoji;
mod error;
mod filter;
pub mod host;
mod navigation;
mod options;
mod session;

pub use content::{PageView, Pages};
pub use emoji::{Alphabet, EmojiMap, NavSymbol};
pub use error::PaginatorError;
pub use filter::InputFilter;
pub use host::{PaginatedMessage, ReactionEvent, ReactionKind, ReactionSource};
pub use navigation::Navigator;
pub use options::PaginatorOptions;
pub use session::{Paginator, SessionEnd, Step};
