//! Core utilities for the Puppy Bowl client
//!
//! - `config`: cohort and API endpoint resolution
//! - `http`: shared request headers

pub mod config;
pub mod http;

pub use config::{resolve_api_root, resolve_cohort, ClientConfig};
pub use http::default_headers;
