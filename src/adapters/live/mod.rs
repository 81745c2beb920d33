//! Live adapters for real external interactions.

pub mod clock;
pub mod html;
pub mod oca;
pub mod orthocal;

pub use clock::LiveClock;
pub use oca::LiveOcaSource;
pub use orthocal::LiveOrthocalSource;

use reqwest::Client;

use crate::config::SourceConfig;
use crate::ports::SourceError;

/// Builds the HTTP client shared by the live source adapters.
pub(crate) fn build_client(config: &SourceConfig) -> Result<Client, SourceError> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout)
        .build()
        .map_err(SourceError::Client)
}

/// Fetches `url` and returns its body, failing on non-success statuses.
pub(crate) async fn get_text(client: &Client, url: &str) -> Result<String, SourceError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| SourceError::Http { url: url.to_string(), source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status { url: url.to_string(), status: status.as_u16() });
    }

    response.text().await.map_err(|source| SourceError::Http { url: url.to_string(), source })
}
