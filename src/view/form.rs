//! New player form.
//!
//! The team selector is filled from `/teams`. Selected names are resolved
//! through a [`TeamDirectory`] built once when the list arrives.

use std::collections::HashMap;

use log::{error, warn};

use crate::{
    api::{
        types::{NewPlayerPayload, Team},
        ApiClient,
    },
    cli::types::{PlayerStatus, TeamId},
    Result,
};

use super::{Element, Intent, Node};

pub const TEAM_PLACEHOLDER: &str = "Team Name";
pub const TEAM_UNASSIGNED: &str = "unassigned";

/// Team name to team id, resolved once per fetched team list.
#[derive(Debug, Clone, Default)]
pub struct TeamDirectory {
    ids: HashMap<String, TeamId>,
}

impl TeamDirectory {
    /// The first team wins when two share a name.
    pub fn from_teams(teams: &[Team]) -> Self {
        let mut ids = HashMap::with_capacity(teams.len());
        for team in teams {
            if ids.contains_key(&team.name) {
                warn!(
                    "Duplicate team name {:?}; keeping the first id, ignoring #{}",
                    team.name, team.id
                );
                continue;
            }
            ids.insert(team.name.clone(), team.id);
        }
        Self { ids }
    }

    /// Id for a real team selection; zero ids count as no team.
    pub fn resolve(&self, selection: &TeamSelection) -> Option<TeamId> {
        match selection {
            TeamSelection::Team(name) => self.ids.get(name).copied().filter(TeamId::is_assigned),
            TeamSelection::Placeholder | TeamSelection::Unassigned => None,
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Value of the `team-selector` element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TeamSelection {
    #[default]
    Placeholder,
    Unassigned,
    Team(String),
}

impl TeamSelection {
    /// Interpret a selector option value.
    pub fn from_option(value: &str) -> Self {
        match value {
            TEAM_PLACEHOLDER | "" => TeamSelection::Placeholder,
            TEAM_UNASSIGNED => TeamSelection::Unassigned,
            name => TeamSelection::Team(name.to_string()),
        }
    }
}

/// What the user typed into the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormInput {
    pub name: String,
    pub breed: String,
    pub image_url: String,
    pub team: TeamSelection,
    pub status: Option<PlayerStatus>,
}

/// Populated creation form.
#[derive(Debug, Clone)]
pub struct CreationForm {
    teams: Vec<Team>,
    directory: TeamDirectory,
}

impl CreationForm {
    /// Fetch the teams and populate the form. A failed fetch leaves the form
    /// unfilled; the caller gets the error.
    pub async fn load(client: &ApiClient) -> Result<Self> {
        let teams = client.fetch_teams().await.inspect_err(|err| {
            error!("Uh oh, trouble rendering the new player form! {err}");
        })?;
        Ok(Self::from_teams(teams))
    }

    pub fn from_teams(teams: Vec<Team>) -> Self {
        let directory = TeamDirectory::from_teams(&teams);
        Self { teams, directory }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn directory(&self) -> &TeamDirectory {
        &self.directory
    }

    /// Build the request body for one submission.
    pub fn build_payload(&self, input: &FormInput) -> NewPlayerPayload {
        NewPlayerPayload {
            name: input.name.clone(),
            breed: input.breed.clone(),
            image_url: input.image_url.clone(),
            team_id: self.directory.resolve(&input.team),
            status: input.status,
        }
    }

    pub fn render(&self) -> Node {
        let options = [TEAM_PLACEHOLDER, TEAM_UNASSIGNED]
            .into_iter()
            .chain(self.teams.iter().map(|t| t.name.as_str()))
            .map(|name| Node::from(Element::new("option").attr("value", name).text(name)));

        Element::new("form")
            .attr("id", "new-player-form")
            .child(text_input("name", "name"))
            .child(text_input("breed", "breed"))
            .child(text_input("image-url", "image url"))
            .child(
                Element::new("select")
                    .attr("id", "team-selector")
                    .children(options),
            )
            .child(
                Element::new("button")
                    .attr("type", "submit")
                    .on(Intent::SubmitForm)
                    .text("Submit"),
            )
            .into()
    }
}

fn text_input(id: &str, placeholder: &str) -> Element {
    Element::new("input")
        .attr("type", "text")
        .attr("id", id)
        .attr("placeholder", placeholder)
}
