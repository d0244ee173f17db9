//! Stop listing for one or more routes.

use std::io::Write;

use anyhow::{Result, bail};
use tracing::debug;

use crate::api::{ApiRequest, Envelope, Resource, StopAttributes};
use crate::drivers::AlertDriver;
use crate::fetch::{HttpClient, fetch_json};

/// Writes the stop list for one route as a heading plus bullets.
///
/// The body is hardcoded Markdown regardless of the selected driver; the
/// original tool behaves the same way, so this is preserved rather than
/// routed through the driver's item contract.
pub fn render_route(
    out: &mut dyn Write,
    route: &str,
    stops: &[Resource<StopAttributes>],
) -> Result<()> {
    writeln!(out, "## Route: {route}")?;
    for stop in stops {
        writeln!(out, "* {}", stop.attributes.name)?;
    }
    Ok(())
}

/// Fetches and prints the stop list for each route in a comma-separated
/// route list, wrapped in the driver's feed preamble and postamble.
pub async fn run<C: HttpClient>(
    client: &C,
    driver: &dyn AlertDriver,
    out: &mut dyn Write,
    routes: Option<&str>,
    api_key: Option<&str>,
) -> Result<()> {
    let Some(routes) = routes else {
        bail!("route list must be provided when listing stops");
    };

    driver.start(out)?;
    for route in routes.split(',') {
        let req = ApiRequest::new("stops")
            .param("filter[route]", route)
            .maybe_param("api_key", api_key);

        let envelope: Envelope<StopAttributes> = fetch_json(client, &req.url()).await?;
        debug!(route, stop_count = envelope.data.len(), "Stops fetched");

        render_route(out, route, &envelope.data)?;
    }
    driver.end(out)?;
    Ok(())
}
