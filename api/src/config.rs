use std::env;

use crate::app::DEFAULT_MAX_DRAW_ATTEMPTS;

#[derive(Clone, Debug)]
pub struct Config {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Seconds a deck lives after creation; unset keeps decks forever
    pub deck_ttl_secs: Option<i64>,
    /// Read-draw-save rounds before a contended draw gives up
    pub draw_max_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            deck_ttl_secs: None,
            draw_max_attempts: DEFAULT_MAX_DRAW_ATTEMPTS,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            deck_ttl_secs: env::var("DECK_TTL_SECS")
                .ok()
                .and_then(|s| parse_ttl_secs(&s)),
            draw_max_attempts: env::var("DRAW_MAX_ATTEMPTS")
                .ok()
                .and_then(|n| n.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.draw_max_attempts),
        }
    }

    /// Deck TTL, if decks expire
    pub fn deck_ttl(&self) -> Option<chrono::Duration> {
        self.deck_ttl_secs.and_then(chrono::Duration::try_seconds)
    }
}

/// Positive TTL in seconds that fits a `chrono::Duration`
fn parse_ttl_secs(value: &str) -> Option<i64> {
    value
        .trim()
        .parse()
        .ok()
        .filter(|secs: &i64| *secs > 0 && chrono::Duration::try_seconds(*secs).is_some())
}
