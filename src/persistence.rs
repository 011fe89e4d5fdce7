use crate::types::StateVector;

pub const DEFAULT_FILE_PREFIX: &str = "adsb_data";
const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PersistenceConfig {
    pub file_prefix: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        PersistenceConfig {
            file_prefix: String::from(DEFAULT_FILE_PREFIX),
        }
    }
}

#[derive(Debug)]
pub enum PersistError {
    Serialize(serde_json::Error),
    Io {
        source: std::io::Error,
        path: std::path::PathBuf,
    },
}
impl std::fmt::Display for PersistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistError::Serialize(error) => {
                write!(f, "Failed to serialize state vectors: {error}")
            }
            PersistError::Io {
                source: error,
                path,
            } => {
                write!(f, "Failed to write '{}': {}", path.display(), error)
            }
        }
    }
}
impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistError::Serialize(error) => Some(error),
            PersistError::Io { source: error, .. } => Some(error),
        }
    }
}

/// Builds `<prefix>_YYYYmmdd_HHMMSS.json` from the given local time.
#[must_use]
pub fn timestamped_file_name(prefix: &str, now: chrono::DateTime<chrono::Local>) -> std::path::PathBuf {
    std::path::PathBuf::from(format!(
        "{prefix}_{0}.json",
        now.format(FILE_TIMESTAMP_FORMAT)
    ))
}

/// Writes the state vectors as a pretty printed JSON array, replacing any
/// existing file. Without an explicit path a timestamped name is derived.
pub fn save(
    state_vectors: &[StateVector],
    path: Option<&std::path::Path>,
    config: &PersistenceConfig,
) -> Result<std::path::PathBuf, PersistError> {
    let path = path.map_or_else(
        || timestamped_file_name(&config.file_prefix, chrono::Local::now()),
        std::path::Path::to_path_buf,
    );

    let json = serde_json::to_string_pretty(state_vectors).map_err(PersistError::Serialize)?;
    std::fs::write(&path, json).map_err(|error| PersistError::Io {
        source: error,
        path: path.clone(),
    })?;

    log::debug!("Wrote {0} state vectors to {1}", state_vectors.len(), path.display());
    Ok(path)
}
