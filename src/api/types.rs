use crate::cli::types::{PlayerId, PlayerStatus, TeamId};
use crate::{PuppyBowlError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};


/// Treat an explicit `null` the same as a missing field.
fn de_null_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Player record as served by the API
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub breed: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub status: PlayerStatus,
    #[serde(rename = "imageUrl", default, deserialize_with = "de_null_default")]
    pub image_url: String,
    #[serde(rename = "teamId", default)]
    pub team_id: Option<TeamId>,
    #[serde(rename = "cohortId", default)]
    pub cohort_id: Option<u32>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub team: Option<Team>,
}

impl Player {
    /// Team name for display, `"Unassigned"` when the player has no team.
    pub fn team_name(&self) -> &str {
        self.team
            .as_ref()
            .map(|t| t.name.as_str())
            .unwrap_or(UNASSIGNED_TEAM)
    }
}

pub const UNASSIGNED_TEAM: &str = "Unassigned";

/// Team record; `/teams` also embeds players and a score, which are ignored
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

/// Body of `POST /players`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPlayerPayload {
    pub name: String,
    pub breed: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "teamId", skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PlayerStatus>,
}

/// Error object carried by a `success: false` response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Top-level envelope shared by every endpoint
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    pub error: Option<ApiErrorBody>,
    pub data: Option<T>,
}

fn default_success() -> bool {
    true
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the `data` member, turning `success: false` into an API error.
    pub fn into_data(self, field: &str) -> Result<T> {
        if !self.success {
            let message = self
                .error
                .and_then(|e| e.message.or(e.name))
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(PuppyBowlError::Api { message });
        }
        self.data.ok_or_else(|| PuppyBowlError::MissingData {
            field: field.to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct PlayersData {
    pub players: Vec<Player>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerData {
    pub player: Player,
}

#[derive(Debug, Deserialize)]
pub struct NewPlayerData {
    #[serde(rename = "newPlayer")]
    pub new_player: Player,
}

#[derive(Debug, Deserialize)]
pub struct TeamsData {
    pub teams: Vec<Team>,
}
