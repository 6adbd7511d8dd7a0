//! Run configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "rr_stations.xspf";

/// Stations catalog endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://radiorecord.ru/api/stations";

/// The catalog server answers 403 to library user agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Same-day backup cap: `{stem}_{date}{ext}.bak` plus indices 1..=99.
pub const DEFAULT_MAX_BACKUPS: usize = 100;

/// Everything a sync run needs besides the current date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    pub output: PathBuf,
    pub endpoint: String,
    pub user_agent: String,
    pub max_backups: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            output: PathBuf::from(DEFAULT_OUTPUT),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            max_backups: DEFAULT_MAX_BACKUPS,
        }
    }
}

impl SyncConfig {
    /// Override the output path. An empty path keeps the current one.
    pub fn with_output(mut self, output: impl AsRef<Path>) -> Self {
        let output = output.as_ref();
        if !output.as_os_str().is_empty() {
            self.output = output.to_path_buf();
        }
        self
    }
}
