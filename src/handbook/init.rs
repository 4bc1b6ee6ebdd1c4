use crate::api::HandbookApi;
use crate::commands::HandbookPaths;
use crate::config::HandbookConfig;
use crate::error::{HandbookError, Result};
use crate::store::FsBackend;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, warn};

pub const HOME_ENV: &str = "HANDBOOK_HOME";

pub struct HandbookContext {
    pub api: HandbookApi<FsBackend>,
    pub config: HandbookConfig,
    pub paths: HandbookPaths,
}

/// Picks the data directory: an explicit path wins, then `$HANDBOOK_HOME`,
/// then the platform data directory.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }

    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    ProjectDirs::from("com", "handbook", "handbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| HandbookError::Config("Could not determine a data directory".to_string()))
}

pub fn initialize(data_dir: PathBuf) -> HandbookContext {
    let config = HandbookConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "could not read config, using defaults");
        HandbookConfig::default()
    });
    debug!(data_dir = %data_dir.display(), key = %config.storage_key, "initializing");

    let backend = FsBackend::new(data_dir.clone());
    let api = HandbookApi::new(backend, config.storage_key.clone());

    HandbookContext {
        api,
        config,
        paths: HandbookPaths { data_dir },
    }
}
