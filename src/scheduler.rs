pub trait SteppableTask {
    /// Runs one unit of work. Returning `false` ends the schedule.
    fn step(&mut self) -> bool;
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StopReason {
    Interrupted,
    TaskFinished,
}

/// Installs a Ctrl+C / termination handler and returns the channel it signals on.
pub fn interrupt_receiver() -> Result<crossbeam_channel::Receiver<()>, ctrlc::Error> {
    let (stop_sender, stop_receiver) = crossbeam_channel::bounded::<()>(1);
    ctrlc::set_handler(move || {
        // A pending signal is already enough to stop.
        let _ = stop_sender.try_send(());
    })?;
    Ok(stop_receiver)
}

/// Steps `task` on the calling thread, waiting `interval` after each step.
///
/// The stop channel is checked before every step and waited on during the
/// interval, so a stop signal never lets another step start. A disconnected
/// channel counts as a stop signal.
pub fn run_task_with_interval<T: SteppableTask>(
    task: &mut T,
    interval: std::time::Duration,
    stop_receiver: &crossbeam_channel::Receiver<()>,
) -> StopReason {
    loop {
        match stop_receiver.try_recv() {
            Ok(()) | Err(crossbeam_channel::TryRecvError::Disconnected) => {
                return StopReason::Interrupted
            }
            Err(crossbeam_channel::TryRecvError::Empty) => {}
        }

        if !task.step() {
            return StopReason::TaskFinished;
        }

        match stop_receiver.recv_timeout(interval) {
            Ok(()) | Err(crossbeam_channel::RecvTimeoutError::Disconnected) => {
                log::debug!("Stop signal received while waiting");
                return StopReason::Interrupted;
            }
            Err(crossbeam_channel::RecvTimeoutError::Timeout) => {}
        }
    }
}
