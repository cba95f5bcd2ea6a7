//! Puppy Bowl roster client
//!
//! A client for the Puppy Bowl roster REST API: list, inspect, add and
//! remove players of a cohort, and render the results as declarative views
//! (HTML or terminal text).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use puppy_bowl::{api::ApiClient, app::App, core::ClientConfig, view::to_text};
//!
//! # async fn example() -> puppy_bowl::Result<()> {
//! let client = ApiClient::new(&ClientConfig::resolve(None, None)?)?;
//! let mut app = App::new(client);
//! app.bootstrap().await;
//! println!("{}", to_text(&app.render_page()));
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export PUPPY_BOWL_COHORT=2408-FTB-MT-WEB-PT
//! export PUPPY_BOWL_API_URL=https://fsa-puppy-bowl.herokuapp.com/api
//! ```

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod view;

// Re-export commonly used types
pub use api::types::{NewPlayerPayload, Player, Team};
pub use cli::types::{PlayerId, PlayerStatus, TeamId};
pub use error::{PuppyBowlError, Result};

pub const COHORT_ENV_VAR: &str = "PUPPY_BOWL_COHORT";
pub const API_URL_ENV_VAR: &str = "PUPPY_BOWL_API_URL";
pub const DEFAULT_COHORT: &str = "2408-FTB-MT-WEB-PT";
pub const DEFAULT_API_ROOT: &str = "https://fsa-puppy-bowl.herokuapp.com/api";
