/// Navigation layout requested for a paginated message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PageMode {
    /// Previous/next reactions only.
    Basic,
    /// First/previous/next/last reactions.
    Extended,
}

impl PageMode {
    pub fn is_extended(self) -> bool {
        matches!(self, Self::Extended)
    }
}

/// Parse `basic` or `extended` (case-insensitive, `ext` accepted).
pub fn parse_page_mode(raw: &str) -> Option<PageMode> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "basic" => Some(PageMode::Basic),
        "extended" | "ext" => Some(PageMode::Extended),
        _ => None,
    }
}

/// Parse a boolean switch such as `true`, `1`, `yes`, `off`.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a compact duration token like `30s`, `10m`, `2h`, or plain seconds.
///
/// Zero is rejected; a session needs at least one second to wait.
pub fn parse_duration_seconds(raw: &str) -> Option<u64> {
    let value = raw.trim();

    let (number_raw, multiplier) = match value.char_indices().next_back()? {
        (split, 's' | 'S') => (&value[..split], 1_u64),
        (split, 'm' | 'M') => (&value[..split], 60),
        (split, 'h' | 'H') => (&value[..split], 60 * 60),
        (_, last) if last.is_ascii_digit() => (value, 1),
        _ => return None,
    };

    number_raw
        .parse::<u64>()
        .ok()
        .filter(|number| *number > 0)?
        .checked_mul(multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_accept_units_and_plain_seconds() {
        assert_eq!(parse_duration_seconds("45"), Some(45));
        assert_eq!(parse_duration_seconds("45s"), Some(45));
        assert_eq!(parse_duration_seconds("2m"), Some(120));
        assert_eq!(parse_duration_seconds(" 1H "), Some(3600));
    }

    #[test]
    fn durations_reject_zero_and_garbage() {
        assert_eq!(parse_duration_seconds(""), None);
        assert_eq!(parse_duration_seconds("0s"), None);
        assert_eq!(parse_duration_seconds("m"), None);
        assert_eq!(parse_duration_seconds("soon"), None);
        assert_eq!(parse_duration_seconds("3d"), None);
    }

    #[test]
    fn page_modes() {
        assert_eq!(parse_page_mode("basic"), Some(PageMode::Basic));
        assert_eq!(parse_page_mode("EXTENDED"), Some(PageMode::Extended));
        assert_eq!(parse_page_mode("ext"), Some(PageMode::Extended));
        assert_eq!(parse_page_mode("fancy"), None);
    }

    #[test]
    fn flags() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("Off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
