// Best-lineup data feed: one HTTP GET, or a saved JSON snapshot.

use std::path::{Path, PathBuf};

use bestxi_core::BestLineupData;
use tracing::{debug, info};

use crate::config::SourceConfig;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("request to {url} failed: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid best-lineup payload from {origin}: {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },
}

/// Query parameters the endpoint expects, in request order.
pub fn query_params(source: &SourceConfig) -> [(&'static str, String); 3] {
    [
        ("nomeLega", source.league.clone()),
        ("competitionId", source.competition_id.to_string()),
        ("idSquadra", source.team_id.to_string()),
    ]
}

/// Parse a payload body. `origin` names the URL or file for error messages.
pub fn parse_payload(body: &str, origin: &str) -> Result<BestLineupData, FeedError> {
    serde_json::from_str(body).map_err(|e| FeedError::Parse {
        origin: origin.to_string(),
        source: e,
    })
}

/// Fetch the payload from the configured endpoint.
pub async fn fetch(client: &reqwest::Client, source: &SourceConfig) -> Result<BestLineupData, FeedError> {
    let url = source.base_url.clone();
    debug!("GET {} for league {}", url, source.league);

    let response = client
        .get(&url)
        .query(&query_params(source))
        .send()
        .await
        .map_err(|e| FeedError::Http {
            url: url.clone(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::Status { url, status });
    }

    let body = response.text().await.map_err(|e| FeedError::Http {
        url: url.clone(),
        source: e,
    })?;
    let data = parse_payload(&body, &url)?;
    info!("fetched {} modules from {}", data.modules.len(), url);
    Ok(data)
}

/// Read a saved payload from disk.
pub fn load_file(path: &Path) -> Result<BestLineupData, FeedError> {
    let body = std::fs::read_to_string(path).map_err(|e| FeedError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let data = parse_payload(&body, &path.display().to_string())?;
    info!("loaded {} modules from {}", data.modules.len(), path.display());
    Ok(data)
}

/// Load from the snapshot file when configured, otherwise from the network.
pub async fn load(source: &SourceConfig) -> Result<BestLineupData, FeedError> {
    match &source.file {
        Some(path) => load_file(path),
        None => fetch(&reqwest::Client::new(), source).await,
    }
}
