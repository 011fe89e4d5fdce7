use adsb_checker::cli::Cli;
use adsb_checker::config::ApplicationConfig;
use adsb_checker::ingestor::{Ingestor, OpenSkyClient, StatesSource};
use adsb_checker::logging::setup_logging;
use adsb_checker::monitor::Monitor;
use adsb_checker::renderer::TerminalRenderer;
use adsb_checker::scheduler::interrupt_receiver;
use clap::Parser;
use log::info;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.logging_level);

    let application_config = match ApplicationConfig::load(cli.config_file.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return std::process::ExitCode::FAILURE;
        }
    };
    info!("Main: Application started.");

    let client = match OpenSkyClient::new(&application_config.opensky) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Error constructing HTTP client: {e}");
            return std::process::ExitCode::FAILURE;
        }
    };

    // The monitor owns the HTTP client; dropping it at the end of this scope
    // releases the connection pool before the process exits.
    let result = {
        let mut monitor = Monitor::new(
            Ingestor::new(client),
            TerminalRenderer::new(application_config.display.max_rows),
            std::io::stdout(),
            cli.lookback,
        );
        if cli.continuous {
            run_continuous(&mut monitor, &cli)
        } else {
            run_single(&mut monitor, &cli, &application_config)
        }
    };

    info!("Main: Program finished.");
    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            std::process::ExitCode::FAILURE
        }
    }
}

fn run_single<S: StatesSource, W: std::io::Write>(
    monitor: &mut Monitor<S, W>,
    cli: &Cli,
    application_config: &ApplicationConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let state_vectors = monitor.check_once()?;
    if cli.save {
        monitor.save(
            &state_vectors,
            cli.output.as_deref(),
            &application_config.persistence,
        )?;
    }
    Ok(())
}

fn run_continuous<S: StatesSource, W: std::io::Write>(
    monitor: &mut Monitor<S, W>,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    if cli.save {
        log::warn!("--save is ignored in continuous mode");
    }
    let stop_receiver = interrupt_receiver()?;
    let reason = monitor.run_continuous(cli.interval(), &stop_receiver)?;
    info!("Main: Monitoring ended ({reason:?}).");
    Ok(())
}
