use crate::ingestor::{Ingestor, LookbackWindow, StatesSource};
use crate::persistence::{self, PersistError, PersistenceConfig};
use crate::renderer::TerminalRenderer;
use crate::scheduler::{run_task_with_interval, SteppableTask, StopReason};
use crate::types::StateVector;
use std::io::Write;

const BANNER_WIDTH: usize = 70;
const HEADER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum CycleOutcome {
    Completed,
    Interrupted,
}

/// Drives fetch and display cycles, either once or on a fixed interval.
pub struct Monitor<S: StatesSource, W: Write> {
    ingestor: Ingestor<S>,
    renderer: TerminalRenderer,
    out: W,
    lookback_minutes: u32,
    iteration: u64,
}

impl<S: StatesSource, W: Write> Monitor<S, W> {
    #[must_use]
    pub fn new(
        ingestor: Ingestor<S>,
        renderer: TerminalRenderer,
        out: W,
        lookback_minutes: u32,
    ) -> Self {
        Monitor {
            ingestor,
            renderer,
            out,
            lookback_minutes,
            iteration: 0,
        }
    }

    #[must_use]
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Fetches and displays one snapshot, returning it for optional saving.
    pub fn check_once(&mut self) -> std::io::Result<Vec<StateVector>> {
        let state_vectors = self.fetch()?;
        self.display(&state_vectors)?;
        Ok(state_vectors)
    }

    /// Saves the snapshot and reports where it went.
    pub fn save(
        &mut self,
        state_vectors: &[StateVector],
        path: Option<&std::path::Path>,
        config: &PersistenceConfig,
    ) -> Result<std::path::PathBuf, PersistError> {
        let path = persistence::save(state_vectors, path, config)?;
        writeln!(self.out, "\nData saved to {}", path.display())
            .and_then(|()| self.out.flush())
            .map_err(|error| PersistError::Io {
                source: error,
                path: path.clone(),
            })?;
        Ok(path)
    }

    /// Repeats checks every `interval` until a stop signal arrives.
    ///
    /// A stop signal that arrives while a fetch is in flight suppresses that
    /// cycle's display. Output errors end the loop and are returned.
    pub fn run_continuous(
        &mut self,
        interval: std::time::Duration,
        stop_receiver: &crossbeam_channel::Receiver<()>,
    ) -> std::io::Result<StopReason> {
        let mut cycle = ContinuousCycle {
            monitor: &mut *self,
            interval,
            stop_receiver,
            interrupted: false,
            error: None,
        };
        let mut reason = run_task_with_interval(&mut cycle, interval, stop_receiver);
        if let Some(error) = cycle.error.take() {
            return Err(error);
        }
        if cycle.interrupted {
            reason = StopReason::Interrupted;
        }

        if reason == StopReason::Interrupted {
            writeln!(self.out, "\n\nMonitoring stopped.")?;
            self.out.flush()?;
        }
        log::info!("Continuous monitoring ended after {0} checks", self.iteration);
        Ok(reason)
    }

    fn fetch(&mut self) -> std::io::Result<Vec<StateVector>> {
        let window = LookbackWindow::ending_now(self.lookback_minutes);
        writeln!(self.out, "{window}")?;
        self.out.flush()?;
        Ok(self.ingestor.fetch_in_window(&window))
    }

    fn display(&mut self, state_vectors: &[StateVector]) -> std::io::Result<()> {
        self.renderer.render(state_vectors, &mut self.out)?;
        self.out.flush()
    }

    fn run_cycle(
        &mut self,
        interval: std::time::Duration,
        stop_receiver: &crossbeam_channel::Receiver<()>,
    ) -> std::io::Result<CycleOutcome> {
        self.iteration += 1;
        let banner = "=".repeat(BANNER_WIDTH);
        writeln!(self.out, "\n{banner}")?;
        writeln!(
            self.out,
            "Check #{0} - {1}",
            self.iteration,
            chrono::Local::now().format(HEADER_TIME_FORMAT)
        )?;
        writeln!(self.out, "{banner}")?;
        self.out.flush()?;

        let state_vectors = self.fetch()?;
        if stop_requested(stop_receiver) {
            log::debug!("Stop signal received during fetch, skipping display");
            return Ok(CycleOutcome::Interrupted);
        }
        self.display(&state_vectors)?;

        writeln!(
            self.out,
            "\nNext check in {0} seconds. Press Ctrl+C to stop.",
            interval.as_secs()
        )?;
        self.out.flush()?;
        Ok(CycleOutcome::Completed)
    }
}

fn stop_requested(stop_receiver: &crossbeam_channel::Receiver<()>) -> bool {
    matches!(
        stop_receiver.try_recv(),
        Ok(()) | Err(crossbeam_channel::TryRecvError::Disconnected)
    )
}

struct ContinuousCycle<'a, S: StatesSource, W: Write> {
    monitor: &'a mut Monitor<S, W>,
    interval: std::time::Duration,
    stop_receiver: &'a crossbeam_channel::Receiver<()>,
    interrupted: bool,
    error: Option<std::io::Error>,
}

impl<S: StatesSource, W: Write> SteppableTask for ContinuousCycle<'_, S, W> {
    fn step(&mut self) -> bool {
        match self.monitor.run_cycle(self.interval, self.stop_receiver) {
            Ok(CycleOutcome::Completed) => true,
            Ok(CycleOutcome::Interrupted) => {
                self.interrupted = true;
                false
            }
            Err(err) => {
                log::error!("Failed to write check output: {err}");
                self.error = Some(err);
                false
            }
        }
    }
}
