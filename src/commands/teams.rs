//! Teams command implementation

use crate::{cli::EndpointArgs, Result};

use super::resolve_client;

/// Print every team of the cohort as `id name`
pub async fn handle_teams(endpoint: &EndpointArgs) -> Result<()> {
    let client = resolve_client(endpoint)?;
    let teams = client.fetch_teams().await?;

    if teams.is_empty() {
        println!("No teams found");
    }
    for team in teams {
        println!("{} {}", team.id, team.name);
    }
    Ok(())
}
