use crate::ingestor::config::OpenSkyConfig;
use crate::persistence::PersistenceConfig;
use crate::renderer::DEFAULT_MAX_ROWS;

#[derive(serde::Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ApplicationConfig {
    pub opensky: OpenSkyConfig,
    pub display: DisplayConfig,
    pub persistence: PersistenceConfig,
}

impl ApplicationConfig {
    pub fn construct_from_path(
        path: &std::path::PathBuf,
    ) -> Result<ApplicationConfig, errors::ApplicationConfigError> {
        let string =
            std::fs::read_to_string(path).map_err(|error| errors::ApplicationConfigError::Io {
                source: error,
                path: path.clone(),
            })?;

        toml::from_str(&string).map_err(|error| errors::ApplicationConfigError::Parse {
            source: error,
            path: path.clone(),
        })
    }

    /// Loads the file when one is given, otherwise falls back to defaults.
    pub fn load(
        path: Option<&std::path::PathBuf>,
    ) -> Result<ApplicationConfig, errors::ApplicationConfigError> {
        match path {
            Some(path) => ApplicationConfig::construct_from_path(path),
            None => Ok(ApplicationConfig::default()),
        }
    }
}

#[derive(serde::Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub max_rows: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

pub mod errors {
    const SECTIONS: &str = "[opensky], [display] and [persistence]";

    #[derive(Debug)]
    pub enum ApplicationConfigError {
        Parse {
            source: toml::de::Error,
            path: std::path::PathBuf,
        },
        Io {
            source: std::io::Error,
            path: std::path::PathBuf,
        },
    }
    impl std::fmt::Display for ApplicationConfigError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                ApplicationConfigError::Io {
                    source: error,
                    path,
                } => {
                    write!(
                        f,
                        "Cannot read adsb-checker config '{}': {}",
                        path.display(),
                        error
                    )
                }
                ApplicationConfigError::Parse {
                    source: error,
                    path,
                } => {
                    write!(
                        f,
                        "Invalid adsb-checker config '{}' (expected only {SECTIONS} sections): {}",
                        path.display(),
                        error
                    )
                }
            }
        }
    }
    impl std::error::Error for ApplicationConfigError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match self {
                ApplicationConfigError::Io { source: error, .. } => Some(error),
                ApplicationConfigError::Parse { source: error, .. } => Some(error),
            }
        }
    }
}
