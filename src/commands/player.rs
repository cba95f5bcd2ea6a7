//! Single-player commands: show, add and remove.
//!
//! Add and remove finish the way the page did after a mutation: the roster
//! is fetched again and printed, whether or not the request succeeded.

use crate::{
    app::{Action, App, CurrentView},
    cli::{
        types::{PlayerId, PlayerStatus},
        EndpointArgs,
    },
    view::{FormInput, Node, TeamSelection},
    Result,
};

use super::{print_view, resolve_client};

/// Parameters for the add command
#[derive(Debug, Clone)]
pub struct AddPlayerParams {
    pub name: String,
    pub breed: String,
    pub image_url: String,
    pub team: Option<String>,
    pub status: Option<PlayerStatus>,
}

impl AddPlayerParams {
    pub fn into_form_input(self) -> FormInput {
        FormInput {
            name: self.name,
            breed: self.breed,
            image_url: self.image_url,
            team: self
                .team
                .as_deref()
                .map(TeamSelection::from_option)
                .unwrap_or_default(),
            status: self.status,
        }
    }
}

/// Select one player and return what `show` prints: the detail view, or
/// only the error notice when the fetch failed.
pub async fn show_player(app: &mut App, id: PlayerId) -> Result<Node> {
    app.dispatch(Action::Select(id)).await?;

    if let CurrentView::Detail(_) = app.view() {
        return Ok(app.render());
    }
    Ok(app
        .render_notice()
        .unwrap_or_else(|| Node::Text(String::new())))
}

/// Print the detail view of one player
pub async fn handle_show(endpoint: &EndpointArgs, id: PlayerId, html: bool) -> Result<()> {
    let mut app = App::new(resolve_client(endpoint)?);
    let node = show_player(&mut app, id).await?;
    print_view(&node, html)
}

/// Submit the creation form and print the refreshed roster
pub async fn handle_add(endpoint: &EndpointArgs, params: AddPlayerParams) -> Result<()> {
    let mut app = App::new(resolve_client(endpoint)?);
    app.bootstrap().await;
    app.dispatch(Action::Submit(params.into_form_input())).await?;
    print_view(&app.render_page(), false)
}

/// Remove a player and print the refreshed roster
pub async fn handle_remove(endpoint: &EndpointArgs, id: PlayerId) -> Result<()> {
    let mut app = App::new(resolve_client(endpoint)?);
    app.dispatch(Action::Remove(id)).await?;
    print_view(&app.render_page(), false)
}
