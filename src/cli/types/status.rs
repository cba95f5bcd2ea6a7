//! Player field status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a player currently sits.
///
/// The API stores `bench` or `field`. Anything else it may add later is
/// kept as `Unknown` instead of failing the whole roster fetch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    #[default]
    Bench,
    Field,
    #[serde(other)]
    #[value(skip)]
    Unknown,
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayerStatus::Bench => "bench",
            PlayerStatus::Field => "field",
            PlayerStatus::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_deserializes_lowercase() {
        let status: PlayerStatus = serde_json::from_str("\"field\"").unwrap();
        assert_eq!(status, PlayerStatus::Field);
    }

    #[test]
    fn test_unrecognised_status_is_unknown() {
        let status: PlayerStatus = serde_json::from_str("\"injured\"").unwrap();
        assert_eq!(status, PlayerStatus::Unknown);
        assert_eq!(status.to_string(), "unknown");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PlayerStatus::Bench).unwrap(),
            "\"bench\""
        );
    }
}
