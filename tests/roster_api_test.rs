//! Integration tests for the API client against a stateful fake server

use std::sync::{Arc, Mutex};

use puppy_bowl::{api::ApiClient, NewPlayerPayload, PlayerId, TeamId};
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path, path_regex},
    Mock, MockServer, Request, Respond, ResponseTemplate,
};

const BASE: &str = "/api/2408-TEST";

/// In-memory roster shared by all mounted responders
#[derive(Default)]
struct FakeRoster {
    players: Vec<Value>,
    next_id: u32,
}

impl FakeRoster {
    fn seeded() -> Arc<Mutex<Self>> {
        let mut roster = FakeRoster {
            players: Vec::new(),
            next_id: 1,
        };
        for name in ["Ace", "Bolt", "Coco"] {
            roster.insert(json!({ "name": name, "breed": "Pug", "imageUrl": "x.png" }));
        }
        Arc::new(Mutex::new(roster))
    }

    fn insert(&mut self, body: Value) -> Value {
        let player = json!({
            "id": self.next_id,
            "name": body["name"],
            "breed": body["breed"],
            "status": body.get("status").cloned().unwrap_or(json!("bench")),
            "imageUrl": body["imageUrl"],
            "teamId": body.get("teamId").cloned().unwrap_or(Value::Null),
            "cohortId": 2740,
            "createdAt": "2024-08-21T16:41:02.137Z",
            "updatedAt": "2024-08-21T16:41:02.137Z",
            "team": null
        });
        self.next_id += 1;
        self.players.push(player.clone());
        player
    }
}

fn envelope(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": true, "error": null, "data": data }))
}

fn id_from(request: &Request) -> Option<u64> {
    request.url.path().rsplit('/').next()?.parse().ok()
}

struct ListPlayers(Arc<Mutex<FakeRoster>>);

impl Respond for ListPlayers {
    fn respond(&self, _: &Request) -> ResponseTemplate {
        let roster = self.0.lock().unwrap();
        envelope(json!({ "players": roster.players }))
    }
}

struct GetPlayer(Arc<Mutex<FakeRoster>>);

impl Respond for GetPlayer {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let roster = self.0.lock().unwrap();
        let id = id_from(request);
        match roster.players.iter().find(|p| p["id"].as_u64() == id) {
            Some(player) => envelope(json!({ "player": player })),
            None => ResponseTemplate::new(404).set_body_json(json!({
                "success": false,
                "error": { "name": "NotFoundError", "message": "Player not found" },
                "data": null
            })),
        }
    }
}

struct AddPlayer(Arc<Mutex<FakeRoster>>);

impl Respond for AddPlayer {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap();
        let player = self.0.lock().unwrap().insert(body);
        envelope(json!({ "newPlayer": player }))
    }
}

struct DeletePlayer(Arc<Mutex<FakeRoster>>);

impl Respond for DeletePlayer {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = id_from(request);
        self.0
            .lock()
            .unwrap()
            .players
            .retain(|p| p["id"].as_u64() != id);
        ResponseTemplate::new(204)
    }
}

async fn fake_server() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let roster = FakeRoster::seeded();

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/players")))
        .respond_with(ListPlayers(roster.clone()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/api/2408-TEST/players/\d+$"))
        .respond_with(GetPlayer(roster.clone()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{BASE}/players")))
        .respond_with(AddPlayer(roster.clone()))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path_regex(r"^/api/2408-TEST/players/\d+$"))
        .respond_with(DeletePlayer(roster))
        .mount(&server)
        .await;

    let client = ApiClient::with_base_url(format!("{}{BASE}", server.uri())).unwrap();
    (server, client)
}

#[tokio::test]
async fn test_fetch_all_players_returns_named_players() {
    let (_server, client) = fake_server().await;

    let players = client.fetch_all_players().await.unwrap();
    assert_eq!(players.len(), 3);
    for player in &players {
        assert!(!player.name.is_empty());
        assert!(player.id.as_u32() > 0);
    }
}

#[tokio::test]
async fn test_fetch_single_player_returns_one_record() {
    let (_server, client) = fake_server().await;

    let players = client.fetch_all_players().await.unwrap();
    let last = players.last().unwrap();
    let player = client.fetch_single_player(last.id).await.unwrap();

    assert_eq!(player.id, last.id);
    assert_eq!(player.name, "Coco");
    assert_eq!(player.breed, "Pug");
    assert_eq!(player.status.to_string(), "bench");
}

#[tokio::test]
async fn test_add_new_player_grows_roster_by_one() {
    let (_server, client) = fake_server().await;

    let before = client.fetch_all_players().await.unwrap().len();
    let created = client
        .add_new_player(&NewPlayerPayload {
            name: "Fido".to_string(),
            breed: "Pug".to_string(),
            image_url: "x.png".to_string(),
            team_id: Some(TeamId::new(11)),
            status: None,
        })
        .await
        .unwrap();
    let after = client.fetch_all_players().await.unwrap().len();

    assert_eq!(after, before + 1);
    assert_eq!(created.id, PlayerId::new(4));
    assert_eq!(created.cohort_id, Some(2740));
    assert_eq!(created.team_id, Some(TeamId::new(11)));
}

#[tokio::test]
async fn test_remove_player_shrinks_roster_by_one() {
    let (_server, client) = fake_server().await;

    let players = client.fetch_all_players().await.unwrap();
    let last = players.last().unwrap().id;
    client.remove_player(last).await.unwrap();
    let after = client.fetch_all_players().await.unwrap();

    assert_eq!(after.len(), players.len() - 1);
    assert!(after.iter().all(|p| p.id != last));
    assert!(client.fetch_single_player(last).await.is_err());
}
