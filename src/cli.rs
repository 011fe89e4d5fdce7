use clap::Parser;

/// Monitors and displays ADS-B state vectors from the OpenSky Network.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Look back N minutes (informational only)
    #[arg(long, value_name = "N", default_value_t = 15)]
    pub lookback: u32,

    /// Run continuous monitoring
    #[arg(long, default_value_t = false)]
    pub continuous: bool,

    /// Check interval in seconds for continuous monitoring
    #[arg(long, value_name = "N", default_value_t = 60)]
    pub interval: u64,

    /// Save data to a JSON file (single check only)
    #[arg(long, default_value_t = false)]
    pub save: bool,

    /// File to save to instead of a timestamped name
    #[arg(long, value_name = "FILE", requires = "save")]
    pub output: Option<std::path::PathBuf>,

    #[arg(short, long, default_value_t = log::LevelFilter::Info)]
    pub logging_level: log::LevelFilter,

    #[arg(long)]
    pub config_file: Option<std::path::PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.interval)
    }
}
