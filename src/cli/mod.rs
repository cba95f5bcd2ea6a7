//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{PlayerId, PlayerStatus};

/// Endpoint options shared by every command
#[derive(Debug, Args)]
pub struct EndpointArgs {
    /// Cohort name (or set `PUPPY_BOWL_COHORT` env var).
    #[clap(long, short, global = true)]
    pub cohort: Option<String>,

    /// API root URL (or set `PUPPY_BOWL_API_URL` env var).
    #[clap(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the roster and the new player form.
    Roster {
        /// Output HTML instead of terminal text.
        #[clap(long)]
        html: bool,
    },

    /// Show one player's details.
    Show {
        id: PlayerId,

        /// Output HTML instead of terminal text.
        #[clap(long)]
        html: bool,
    },

    /// Add a player, then show the refreshed roster.
    Add {
        #[clap(long, short)]
        name: String,

        #[clap(long, short)]
        breed: String,

        #[clap(long, short = 'i')]
        image_url: String,

        /// Team name; leave out (or pass `unassigned`) for no team.
        #[clap(long, short)]
        team: Option<String>,

        #[clap(long, value_enum)]
        status: Option<PlayerStatus>,
    },

    /// Remove a player, then show the refreshed roster.
    Remove { id: PlayerId },

    /// List the cohort's teams.
    Teams,

    /// Browse the roster interactively.
    Browse,
}

#[derive(Debug, Parser)]
#[clap(name = "puppy-bowl", about = "Puppy Bowl roster client")]
pub struct PuppyBowl {
    #[clap(flatten)]
    pub endpoint: EndpointArgs,

    #[clap(subcommand)]
    pub command: Commands,
}
