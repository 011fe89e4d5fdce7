pub mod cli;
pub mod config;
pub mod ingestor;
pub mod logging;
pub mod monitor;
pub mod parser;
pub mod persistence;
pub mod renderer;
pub mod scheduler;
pub mod types;
