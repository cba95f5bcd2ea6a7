//! Roster view: every player of the cohort as a list of cards.

use crate::api::types::Player;

use super::{Element, Intent, Node};

pub const NO_PLAYERS_MESSAGE: &str = "No puppies here...";

/// Render the whole roster.
///
/// `None` (the roster could not be fetched) and an empty roster both render
/// the placeholder heading and nothing else. Each card carries the
/// `SelectPlayer` intent, so its heading, id line and image all lead to the
/// detail view.
pub fn render_roster(players: Option<&[Player]>) -> Node {
    match players {
        Some(players) if !players.is_empty() => Element::new("ul")
            .attr("class", "player-deck")
            .children(players.iter().map(player_card))
            .into(),
        _ => Element::new("h1").text(NO_PLAYERS_MESSAGE).into(),
    }
}

fn player_card(p: &Player) -> Node {
    Element::new("li")
        .attr("id", p.id.to_string())
        .attr("class", "player-card")
        .on(Intent::SelectPlayer(p.id))
        .child(Element::new("h2").text(&p.name))
        .child(Element::new("div").text(format!("id#:{}", p.id)))
        .child(
            Element::new("img")
                .attr("src", &p.image_url)
                .attr("alt", &p.name),
        )
        .into()
}
