//! Runtime configuration read from the environment.
//!
//! HOST, PORT: bind address (default 0.0.0.0:8080).
//! LEAGUE_DATA: optional JSON snapshot loaded at startup.
//! POINTS_WIN, POINTS_LOSS, POINTS_FORFEIT_LOSS, POINTS_BONUS_LOSER: league scoring.

use crate::logic::LeaguePoints;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq)]
pub struct PortalConfig {
    pub host: String,
    pub port: u16,
    pub data_file: Option<PathBuf>,
    pub points: LeaguePoints,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: None,
            points: LeaguePoints::default(),
        }
    }
}

impl PortalConfig {
    /// Read from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read using `lookup` for each variable. Unset or unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = LeaguePoints::default();
        let number = |key: &str, default: u32| -> u32 {
            match lookup(key) {
                Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                    log::warn!("Ignoring {}={:?}: not a number", key, raw);
                    default
                }),
                None => default,
            }
        };
        Self {
            host: lookup("HOST").unwrap_or_else(default_host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(default_port),
            data_file: lookup("LEAGUE_DATA")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            points: LeaguePoints {
                win: number("POINTS_WIN", defaults.win),
                loss: number("POINTS_LOSS", defaults.loss),
                forfeit_loss: number("POINTS_FORFEIT_LOSS", defaults.forfeit_loss),
                bonus_loser: number("POINTS_BONUS_LOSER", defaults.bonus_loser),
            },
        }
    }
}
