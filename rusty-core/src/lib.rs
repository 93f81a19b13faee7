use std::sync::Arc;

use twilight_http::Client;

/// Environment-driven bot configuration.
pub mod config;
/// Twilight-backed reaction source and paginated message.
pub mod reactions;

pub use config::BotConfig;
pub use reactions::{ReactionHub, TwilightMessage};

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    pub reactions: Arc<ReactionHub>,
    pub config: Arc<BotConfig>,
}

impl Context {
    /// Create a new application context.
    pub fn new(http: Arc<Client>, reactions: Arc<ReactionHub>, config: BotConfig) -> Self {
        Self {
            http,
            reactions,
            config: Arc::new(config),
        }
    }
}
