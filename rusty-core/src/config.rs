use std::{env, fmt};

use rusty_pagination::DEFAULT_TIMEOUT_SECS;
use rusty_utils::parse::{parse_duration_seconds, parse_flag};

const TOKEN_VAR: &str = "DISCORD_TOKEN";
const TIMEOUT_VAR: &str = "PAGINATOR_TIMEOUT";
const EXTENDED_VAR: &str = "PAGINATOR_EXTENDED";

/// Settings read once at startup.
#[derive(Clone)]
pub struct BotConfig {
    pub discord_token: String,
    /// Default idle timeout for reaction pagination.
    pub page_timeout_secs: u64,
    /// Whether pagination uses first/last reactions unless told otherwise.
    pub extended_navigation: bool,
}

impl BotConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which returns a variable's
    /// value if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let discord_token = lookup(TOKEN_VAR)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("{TOKEN_VAR} is not set"))?;

        let page_timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(raw) => parse_duration_seconds(&raw)
                .ok_or_else(|| anyhow::anyhow!("{TIMEOUT_VAR} is not a valid duration: {raw}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let extended_navigation = match lookup(EXTENDED_VAR) {
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| anyhow::anyhow!("{EXTENDED_VAR} must be true or false: {raw}"))?,
            None => false,
        };

        Ok(Self {
            discord_token,
            page_timeout_secs,
            extended_navigation,
        })
    }
}

// Keep the token out of logs.
impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("discord_token", &"<redacted>")
            .field("page_timeout_secs", &self.page_timeout_secs)
            .field("extended_navigation", &self.extended_navigation)
            .finish()
    }
}
