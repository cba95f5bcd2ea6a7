//! Error types for the Puppy Bowl roster client

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, PuppyBowlError>;

#[derive(Error, Debug)]
pub enum PuppyBowlError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Puppy Bowl API reported an error: {message}")]
    Api { message: String },

    #[error("Puppy Bowl API response is missing `{field}`")]
    MissingData { field: String },

    #[error("Failed to parse player ID: {0}")]
    InvalidPlayerId(#[from] std::num::ParseIntError),

    #[error("Configuration value `{name}` must not be empty")]
    InvalidConfig { name: String },

    #[error("New player form has not been loaded")]
    FormNotLoaded,
}
