//! Roster command implementation

use crate::{app::App, cli::EndpointArgs, Result};

use super::{print_view, resolve_client};

/// Bootstrap the app and print the roster page
pub async fn handle_roster(endpoint: &EndpointArgs, html: bool) -> Result<()> {
    let mut app = App::new(resolve_client(endpoint)?);
    app.bootstrap().await;
    print_view(&app.render_page(), html)
}
