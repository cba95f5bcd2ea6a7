//! Application state and intent dispatch.
//!
//! [`App`] owns the current view, the loaded creation form and an optional
//! notice. Every state change goes through [`App::dispatch`]. Mutations are
//! always followed by a roster re-fetch; nothing fetched is kept past the
//! next transition.

use log::info;

use crate::{
    api::{types::Player, ApiClient},
    cli::types::PlayerId,
    view::{render_detail, render_roster, CreationForm, Element, FormInput, Intent, Node},
    PuppyBowlError, Result,
};


/// What the content mount currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrentView {
    /// `None` when the roster could not be fetched.
    Roster(Option<Vec<Player>>),
    Detail(Player),
}

/// Message shown above the content after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// A dispatched user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Select(PlayerId),
    Back,
    Remove(PlayerId),
    Submit(FormInput),
}

impl Action {
    /// Map a view intent to an action. Form submission needs the typed input,
    /// so `SubmitForm` has no direct mapping.
    pub fn from_intent(intent: &Intent) -> Option<Self> {
        match intent {
            Intent::SelectPlayer(id) => Some(Action::Select(*id)),
            Intent::Back => Some(Action::Back),
            Intent::RemovePlayer(id) => Some(Action::Remove(*id)),
            Intent::SubmitForm => None,
        }
    }
}

pub struct App {
    client: ApiClient,
    view: CurrentView,
    form: Option<CreationForm>,
    notice: Option<Notice>,
}

impl App {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            view: CurrentView::Roster(None),
            form: None,
            notice: None,
        }
    }

    pub fn view(&self) -> &CurrentView {
        &self.view
    }

    pub fn form(&self) -> Option<&CreationForm> {
        self.form.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Fetch the roster, render it, then populate the creation form.
    ///
    /// A failed roster fetch shows the "no players" placeholder; a failed
    /// team fetch leaves the form unloaded.
    pub async fn bootstrap(&mut self) {
        self.reload_roster().await;
        self.form = CreationForm::load(&self.client).await.ok();
    }

    async fn reload_roster(&mut self) {
        let players = self.client.fetch_all_players().await.ok();
        info!(
            "Showing roster ({} players)",
            players.as_ref().map_or(0, Vec::len)
        );
        self.view = CurrentView::Roster(players);
    }

    /// Apply one action. Actions are not debounced: dispatching the same
    /// removal twice sends two DELETE requests.
    pub async fn dispatch(&mut self, action: Action) -> Result<()> {
        self.notice = None;

        match action {
            Action::Select(id) => match self.client.fetch_single_player(id).await {
                Ok(player) => {
                    info!("Showing player #{id}");
                    self.view = CurrentView::Detail(player);
                }
                Err(err) => {
                    self.notice = Some(Notice::Error(format!("Could not load player #{id}: {err}")));
                }
            },

            Action::Back => self.reload_roster().await,

            Action::Remove(id) => {
                let result = self.client.remove_player(id).await;
                self.reload_roster().await;
                self.notice = Some(match result {
                    Ok(()) => Notice::Info(format!("Removed player #{id}")),
                    Err(err) => Notice::Error(format!("Could not remove player #{id}: {err}")),
                });
            }

            Action::Submit(input) => {
                let form = self.form.as_ref().ok_or(PuppyBowlError::FormNotLoaded)?;
                let payload = form.build_payload(&input);
                let result = self.client.add_new_player(&payload).await;
                self.reload_roster().await;
                self.notice = Some(match result {
                    Ok(player) => Notice::Info(format!("Added {} as #{}", player.name, player.id)),
                    Err(err) => Notice::Error(format!("Could not add {}: {err}", payload.name)),
                });
            }
        }

        Ok(())
    }

    /// Content of the mount for the current view.
    pub fn render(&self) -> Node {
        match &self.view {
            CurrentView::Roster(players) => render_roster(players.as_deref()),
            CurrentView::Detail(player) => render_detail(player),
        }
    }

    /// The pending notice, if the last action left one.
    pub fn render_notice(&self) -> Option<Node> {
        self.notice.as_ref().map(|notice| {
            let (class, message) = match notice {
                Notice::Info(m) => ("notice", m),
                Notice::Error(m) => ("notice error", m),
            };
            Element::new("p").attr("class", class).text(message).into()
        })
    }

    /// Notice, content mount and form, as one page.
    pub fn render_page(&self) -> Node {
        let mut body = Element::new("body");
        if let Some(notice) = self.render_notice() {
            body = body.child(notice);
        }
        body = body.child(Element::new("main").child(self.render()));
        if let Some(form) = &self.form {
            body = body.child(form.render());
        }
        body.into()
    }
}
