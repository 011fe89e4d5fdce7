pub const DEFAULT_BASE_URL: &str = "https://opensky-network.org/api";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
const STATES_PATH: &str = "/states/all";

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OpenSkyConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl OpenSkyConfig {
    #[must_use]
    pub fn states_url(&self) -> String {
        format!("{0}{STATES_PATH}", self.base_url.trim_end_matches('/'))
    }

    #[must_use]
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for OpenSkyConfig {
    fn default() -> Self {
        OpenSkyConfig {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}
