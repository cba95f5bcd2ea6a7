//! HTTP client for the Puppy Bowl REST API.
//!
//! Every operation performs exactly one round trip with no retry and no
//! explicit timeout. Failures are logged here, at the operation boundary,
//! and then handed back to the caller as an `Err`.

use log::{debug, error};
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    api::types::{
        ApiEnvelope, NewPlayerData, NewPlayerPayload, Player, PlayerData, PlayersData, Team,
        TeamsData,
    },
    cli::types::PlayerId,
    core::{default_headers, ClientConfig},
    PuppyBowlError, Result,
};


/// Async client bound to one cohort's endpoint root.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Self::with_base_url(config.base_url())
    }

    /// Build a client against an arbitrary base URL (a mock server in tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_headers()?)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, field: &str) -> Result<T> {
        let res = self.client.get(self.url(path)).send().await?;
        read_envelope(res, field).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        field: &str,
    ) -> Result<T> {
        let res = self.client.post(self.url(path)).json(body).send().await?;
        read_envelope(res, field).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        debug!("DELETE {url}");
        self.client.delete(url).send().await?.error_for_status()?;
        Ok(())
    }

    /// `GET /players`, in server order.
    pub async fn fetch_all_players(&self) -> Result<Vec<Player>> {
        self.get::<PlayersData>("players", "players")
            .await
            .map(|d| d.players)
            .inspect_err(|err| error!("Uh oh, trouble fetching players! {err}"))
    }

    /// `GET /teams`
    pub async fn fetch_teams(&self) -> Result<Vec<Team>> {
        self.get::<TeamsData>("teams", "teams")
            .await
            .map(|d| d.teams)
            .inspect_err(|err| error!("Uh oh, trouble fetching teams! {err}"))
    }

    /// `GET /players/{id}`
    pub async fn fetch_single_player(&self, player_id: PlayerId) -> Result<Player> {
        self.get::<PlayerData>(&format!("players/{player_id}"), "player")
            .await
            .map(|d| d.player)
            .inspect_err(|err| error!("Oh no, trouble fetching player #{player_id}! {err}"))
    }

    /// `POST /players`; returns the created player with its server-assigned fields.
    pub async fn add_new_player(&self, payload: &NewPlayerPayload) -> Result<Player> {
        self.post::<NewPlayerData, _>("players", payload, "newPlayer")
            .await
            .map(|d| d.new_player)
            .inspect_err(|err| {
                error!("Oops, something went wrong with adding that player! {err}")
            })
    }

    /// `DELETE /players/{id}`; the response body is not required.
    pub async fn remove_player(&self, player_id: PlayerId) -> Result<()> {
        self.delete(&format!("players/{player_id}"))
            .await
            .inspect_err(|err| {
                error!("Whoops, trouble removing player #{player_id} from the roster! {err}")
            })
    }
}

/// Decode a response envelope, keeping the server's error message when the
/// body says `success: false` even on a non-2xx status.
async fn read_envelope<T: DeserializeOwned>(res: Response, field: &str) -> Result<T> {
    let status = res.status();
    debug!("{} -> {}", res.url(), status);

    let body = res.text().await?;
    match serde_json::from_str::<ApiEnvelope<T>>(&body) {
        Ok(envelope) => envelope.into_data(field),
        Err(parse_err) => {
            if status.is_client_error() || status.is_server_error() {
                Err(PuppyBowlError::Api {
                    message: format!("{status}"),
                })
            } else {
                Err(parse_err.into())
            }
        }
    }
}
