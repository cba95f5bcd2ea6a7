//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use env_logger::Env;
use puppy_bowl::{
    cli::{Commands, PuppyBowl},
    commands::{
        browse::handle_browse,
        player::{handle_add, handle_remove, handle_show, AddPlayerParams},
        roster::handle_roster,
        teams::handle_teams,
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let app = PuppyBowl::parse();
    let endpoint = &app.endpoint;

    match app.command {
        Commands::Roster { html } => handle_roster(endpoint, html).await?,

        Commands::Show { id, html } => handle_show(endpoint, id, html).await?,

        Commands::Add {
            name,
            breed,
            image_url,
            team,
            status,
        } => {
            handle_add(
                endpoint,
                AddPlayerParams {
                    name,
                    breed,
                    image_url,
                    team,
                    status,
                },
            )
            .await?
        }

        Commands::Remove { id } => handle_remove(endpoint, id).await?,

        Commands::Teams => handle_teams(endpoint).await?,

        Commands::Browse => handle_browse(endpoint).await?,
    }

    Ok(())
}
