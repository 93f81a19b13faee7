/// Embed builders for paginated pages.
pub mod embed;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';
/// Page-splitting helpers.
pub mod page;
/// Pure parser helpers.
pub mod parse;
