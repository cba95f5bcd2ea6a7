//! Detail view for a single player.

use crate::api::types::Player;

use super::{Element, Intent, Node};

/// Render one player's full record with back and remove buttons.
pub fn render_detail(player: &Player) -> Node {
    let card = Element::new("li")
        .child(
            Element::new("button")
                .attr("id", "return")
                .on(Intent::Back)
                .text("Back to all players"),
        )
        .child(Element::new("h2").text(&player.name))
        .child(labelled("ID: ", player.id.to_string()))
        .child(labelled("Breed: ", &player.breed))
        .child(
            Element::new("img")
                .attr("src", &player.image_url)
                .attr("alt", &player.name),
        )
        .child(Element::new("h3").text(format!("Team: {}", player.team_name())))
        .child(
            Element::new("button")
                .attr("id", format!("delete-{}", player.id))
                .attr("class", "remove-button")
                .on(Intent::RemovePlayer(player.id))
                .text("Remove Player"),
        );

    Element::new("ul").child(card).into()
}

fn labelled(label: &str, value: impl Into<String>) -> Element {
    Element::new("p")
        .child(Element::new("strong").text(label))
        .text(value)
}
