//! HTTP station source and document assembly.

use rrsync_core::config::SyncConfig;
use rrsync_core::types::{Document, Station, TrackFields};

use crate::catalog::parse_catalog;
use crate::error::SourceError;

/// Anything that can produce the current station list.
pub trait StationSource {
    fn fetch_stations(&self) -> Result<Vec<Station>, SourceError>;
}

/// Blocking ureq client for the stations endpoint.
///
/// No timeout is configured; a stalled server stalls the run.
pub struct HttpStationSource {
    agent: ureq::Agent,
    endpoint: String,
}

impl HttpStationSource {
    pub fn new(endpoint: impl Into<String>, user_agent: &str) -> Self {
        HttpStationSource {
            agent: ureq::AgentBuilder::new().user_agent(user_agent).build(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &SyncConfig) -> Self {
        Self::new(config.endpoint.clone(), &config.user_agent)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl StationSource for HttpStationSource {
    fn fetch_stations(&self) -> Result<Vec<Station>, SourceError> {
        let url = self.endpoint.clone();
        tracing::debug!(url = %url, "fetching stations catalog");

        let response = match self.agent.get(&url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                return Err(SourceError::Status { url, status })
            }
            Err(ureq::Error::Transport(source)) => {
                return Err(SourceError::Transport {
                    url,
                    source: Box::new(source),
                })
            }
        };
        if response.status() != 200 {
            return Err(SourceError::Status {
                url,
                status: response.status(),
            });
        }

        let body = response
            .into_string()
            .map_err(|source| SourceError::Body { url: url.clone(), source })?;
        let stations = parse_catalog(&body)?;
        tracing::info!(url = %url, stations = stations.len(), "fetched stations catalog");
        Ok(stations)
    }
}

/// Fetch stations from `source` and add one track per station, in order.
pub fn build_document(source: &dyn StationSource) -> Result<Document, SourceError> {
    let stations = source.fetch_stations()?;
    let mut document = Document::new();
    for station in &stations {
        document.add_track(&station.stream_url, TrackFields::from(station));
    }
    Ok(document)
}
