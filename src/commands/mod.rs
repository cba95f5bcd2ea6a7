//! Command implementations for the Puppy Bowl CLI

pub mod browse;
pub mod player;
pub mod roster;
pub mod teams;

use crate::{
    api::ApiClient,
    cli::EndpointArgs,
    core::ClientConfig,
    view::{to_html, to_text, Node},
    Result,
};

/// Build an API client from CLI options and the environment
pub fn resolve_client(endpoint: &EndpointArgs) -> Result<ApiClient> {
    let config = ClientConfig::resolve(endpoint.api_url.clone(), endpoint.cohort.clone())?;
    log::debug!("Using endpoint {}", config.base_url());
    ApiClient::new(&config)
}

/// Print a view as HTML or terminal text
pub fn print_view(node: &Node, html: bool) -> Result<()> {
    if html {
        println!("{}", to_html(node)?);
    } else {
        print!("{}", to_text(node));
    }
    Ok(())
}
