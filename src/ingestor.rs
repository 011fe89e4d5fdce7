pub mod config;
pub mod error;

use crate::ingestor::config::OpenSkyConfig;
use crate::ingestor::error::FetchError;
use crate::parser::parse_state_vectors;
use crate::types::StateVector;

const WINDOW_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Body of a `states/all` response. `states` is null when nothing is airborne.
#[derive(serde::Deserialize, Debug, Default, PartialEq)]
pub struct StatesResponse {
    #[serde(default)]
    pub states: Option<Vec<Vec<serde_json::Value>>>,
}

/// The span of time a poll is reported against, ending at the poll itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookbackWindow {
    pub minutes: u32,
    pub start: chrono::DateTime<chrono::Local>,
    pub end: chrono::DateTime<chrono::Local>,
}

impl LookbackWindow {
    #[must_use]
    pub fn ending_at(minutes: u32, end: chrono::DateTime<chrono::Local>) -> Self {
        LookbackWindow {
            minutes,
            start: end - chrono::TimeDelta::minutes(i64::from(minutes)),
            end,
        }
    }

    #[must_use]
    pub fn ending_now(minutes: u32) -> Self {
        LookbackWindow::ending_at(minutes, chrono::Local::now())
    }
}

impl std::fmt::Display for LookbackWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fetching ADS-B data from {0} minutes ago...", self.minutes)?;
        write!(
            f,
            "Time range: {0} to {1}",
            self.start.format(WINDOW_FORMAT),
            self.end.format(WINDOW_FORMAT)
        )
    }
}

/// Anything that can produce one snapshot of all current state vectors.
pub trait StatesSource {
    fn fetch_states(&self) -> Result<StatesResponse, FetchError>;
}

/// Blocking client for the OpenSky Network REST API.
///
/// Holds one connection pool for the lifetime of the process; it is released
/// when the client is dropped.
pub struct OpenSkyClient {
    client: reqwest::blocking::Client,
    states_url: String,
}

impl OpenSkyClient {
    pub fn new(config: &OpenSkyConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self::from_client(client, config))
    }

    #[must_use]
    pub fn from_client(client: reqwest::blocking::Client, config: &OpenSkyConfig) -> Self {
        OpenSkyClient {
            client,
            states_url: config.states_url(),
        }
    }
}

impl StatesSource for OpenSkyClient {
    fn fetch_states(&self) -> Result<StatesResponse, FetchError> {
        log::debug!("GET {0}", self.states_url);
        let body = self
            .client
            .get(&self.states_url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::text)
            .map_err(|source| FetchError::Transport {
                source,
                url: self.states_url.clone(),
            })?;

        serde_json::from_str(&body).map_err(|source| FetchError::MalformedResponse {
            source,
            url: self.states_url.clone(),
        })
    }
}

pub struct Ingestor<S: StatesSource> {
    source: S,
}

impl<S: StatesSource> Ingestor<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Ingestor { source }
    }

    /// Fetches the current global snapshot.
    ///
    /// The lookback window is only reported; the endpoint always returns the
    /// latest state of every aircraft. Failures are logged and yield an empty
    /// vector.
    pub fn fetch(&self, lookback_minutes: u32) -> Vec<StateVector> {
        self.fetch_in_window(&LookbackWindow::ending_now(lookback_minutes))
    }

    pub fn fetch_in_window(&self, window: &LookbackWindow) -> Vec<StateVector> {
        log::debug!("{window}");

        match self.source.fetch_states() {
            Ok(response) => parse_state_vectors(
                response.states.as_deref().unwrap_or_default(),
                window.end.naive_local(),
            ),
            Err(err) => {
                log::error!("Error fetching ADS-B data: {err}");
                Vec::new()
            }
        }
    }
}
