use std::str::FromStr;

/// Tunables shared by the interactive parts of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingConfig {
    pub autoplay_interval_ms: u32,
    pub simulated_latency_ms: u32,
    pub simulated_success_rate: f64,
    pub success_dismiss_ms: u32,
    pub navbar_scroll_threshold: f64,
    pub ripple_lifetime_ms: u32,
    pub announcement_lifetime_ms: u32,
    pub stat_highlight_ms: u32,
    pub storage_key: &'static str,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 5_000,
            simulated_latency_ms: 1_500,
            simulated_success_rate: 0.95,
            success_dismiss_ms: 5_000,
            navbar_scroll_threshold: 100.0,
            ripple_lifetime_ms: 600,
            announcement_lifetime_ms: 1_000,
            stat_highlight_ms: 500,
            storage_key: "waitlist",
        }
    }
}

pub fn get_config() -> LandingConfig {
    LandingConfig::default()
}

/// Real registration endpoint, baked in at build time.
/// When absent the waitlist talks to the simulated backend.
pub fn get_waitlist_endpoint() -> Option<&'static str> {
    option_env!("LANDING_WAITLIST_ENDPOINT").filter(|url| !url.trim().is_empty())
}

pub fn get_log_level() -> log::Level {
    parse_log_level(option_env!("LANDING_LOG_LEVEL"))
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|level| log::Level::from_str(level.trim()).ok())
        .unwrap_or(log::Level::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_defaults_to_info() {
        assert_eq!(parse_log_level(None), log::Level::Info);
        assert_eq!(parse_log_level(Some("chatty")), log::Level::Info);
    }

    #[test]
    fn log_level_is_case_insensitive() {
        assert_eq!(parse_log_level(Some("DEBUG")), log::Level::Debug);
        assert_eq!(parse_log_level(Some(" warn ")), log::Level::Warn);
    }

    #[test]
    fn defaults_match_page_timings() {
        let config = LandingConfig::default();
        assert_eq!(config.autoplay_interval_ms, 5_000);
        assert_eq!(config.simulated_latency_ms, 1_500);
        assert_eq!(config.storage_key, "waitlist");
    }
}
