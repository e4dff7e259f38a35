use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::Client;
use tracing::{debug, info, warn};

/// Header GitLab reads personal and project access tokens from
pub const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// Fetch the raw client list from the registry
///
/// Issues a single GET with no timeout or retry. Transport failures and
/// non-success statuses are returned as errors.
pub async fn fetch_clients(client: &reqwest::Client, config: &Config) -> Result<Vec<Client>> {
    info!(url = %config.url, "Fetching client list");

    let mut request = client.get(&config.url);
    match config.token.as_deref() {
        Some(token) => request = request.header(TOKEN_HEADER, token),
        None => warn!(
            "{} is not set, requesting without {} header",
            crate::config::TOKEN_ENV,
            TOKEN_HEADER
        ),
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: config.url.clone(),
            status,
        });
    }

    let body = response.bytes().await?;
    debug!(bytes = body.len(), "Received client list");

    parse_clients(&body)
}

/// Parse a registry document: a JSON array of client objects
pub fn parse_clients(body: &[u8]) -> Result<Vec<Client>> {
    Ok(serde_json::from_slice(body)?)
}
