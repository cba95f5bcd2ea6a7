//! Interactive roster browser.
//!
//! Reads one command per line from a rustyline editor (with history) and
//! resolves it against the intents of the view currently on screen, so
//! `remove` only works on a detail view and a player id only works when
//! that card is shown.

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::{
    app::{Action, App},
    cli::{types::PlayerId, EndpointArgs},
    view::{to_text, FormInput, Intent, Node, TeamSelection},
    PuppyBowlError, Result,
};

use super::resolve_client;

const HELP: &str = "Commands: <id> | back | remove | add | help | quit";

/// One parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Act(Action),
    Add,
    Help,
    Quit,
    Unknown(String),
}

/// Resolve a line of input against the intents offered by `view`.
pub fn parse_command(line: &str, view: &Node) -> BrowseCommand {
    let line = line.trim();
    let intents = view.intents();

    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => BrowseCommand::Quit,
        "h" | "help" | "?" => BrowseCommand::Help,
        "a" | "add" => BrowseCommand::Add,
        // Back is always allowed; on the roster it simply refreshes.
        "b" | "back" => BrowseCommand::Act(Action::Back),
        "r" | "remove" => intents
            .into_iter()
            .find(|i| matches!(i, Intent::RemovePlayer(_)))
            .and_then(Action::from_intent)
            .map(BrowseCommand::Act)
            .unwrap_or_else(|| {
                BrowseCommand::Unknown("select a player before removing".to_string())
            }),
        other => match other.parse::<PlayerId>() {
            Ok(id) if intents.contains(&&Intent::SelectPlayer(id)) => {
                BrowseCommand::Act(Action::Select(id))
            }
            Ok(id) => BrowseCommand::Unknown(format!("player #{id} is not on screen")),
            Err(_) => BrowseCommand::Unknown(format!("unrecognised command {other:?}")),
        },
    }
}

/// Run the interactive session until `quit`, Ctrl-C or Ctrl-D
pub async fn handle_browse(endpoint: &EndpointArgs) -> Result<()> {
    let mut app = App::new(resolve_client(endpoint)?);
    app.bootstrap().await;

    let mut editor = DefaultEditor::new()?;
    println!("{HELP}");

    loop {
        print!("{}", to_text(&app.render_page()));
        let Some(line) = prompt(&mut editor, "> ")? else {
            break;
        };
        if !line.trim().is_empty() {
            editor.add_history_entry(line.as_str())?;
        }

        match parse_command(&line, &app.render()) {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => println!("{HELP}"),
            BrowseCommand::Unknown(reason) => println!("{reason}"),
            BrowseCommand::Act(action) => app.dispatch(action).await?,
            BrowseCommand::Add => {
                if app.form().is_none() {
                    println!("{}", PuppyBowlError::FormNotLoaded);
                    continue;
                }
                let Some(input) = read_form(&mut editor)? else {
                    break;
                };
                app.dispatch(Action::Submit(input)).await?;
            }
        }
    }

    Ok(())
}

fn read_form(editor: &mut DefaultEditor) -> Result<Option<FormInput>> {
    let mut fields = Vec::with_capacity(4);
    for label in ["name", "breed", "image url", "team (blank for none)"] {
        match prompt(editor, &format!("{label}: "))? {
            Some(value) => fields.push(value.trim().to_string()),
            None => return Ok(None),
        }
    }

    let team = fields.pop().unwrap_or_default();
    let image_url = fields.pop().unwrap_or_default();
    let breed = fields.pop().unwrap_or_default();
    let name = fields.pop().unwrap_or_default();

    Ok(Some(FormInput {
        name,
        breed,
        image_url,
        team: TeamSelection::from_option(&team),
        status: None,
    }))
}

/// `None` once the user interrupts or closes input.
fn prompt(editor: &mut DefaultEditor, label: &str) -> Result<Option<String>> {
    match editor.readline(label) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
