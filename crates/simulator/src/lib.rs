//! Battery simulator: a cancellable periodic task that draws one
//! [`Delta`] per tick.
//!
//! The task never touches the battery level itself.  It only produces
//! deltas; the state owner applies them (`BatteryLevel::apply` clamps to
//! `0..=100`).

pub mod source;

pub use source::DeltaSource;

use powerai_config::SimulatorConfig;
use powerai_core::{Delta, PowerAiError, Result};
use tokio::{sync::mpsc, task::JoinHandle, time};
use tracing::{debug, info};

/// Owner of a running simulator task.
///
/// Dropping the handle aborts the task, so the schedule never outlives the
/// view that acquired it.
#[derive(Debug)]
pub struct SimulatorHandle {
    rx:   mpsc::Receiver<Delta>,
    task: JoinHandle<()>,
}

impl SimulatorHandle {
    /// Wait for the next tick's delta.  `None` once the task has stopped.
    pub async fn next(&mut self) -> Option<Delta> {
        self.rx.recv().await
    }
}

impl Drop for SimulatorHandle {
    fn drop(&mut self) {
        debug!("Battery simulator handle dropped; cancelling schedule");
        self.task.abort();
    }
}

/// Spawn a background Tokio task that draws a delta every
/// `cfg.interval_ms` milliseconds and forwards it through the returned handle.
///
/// The first delta arrives one full interval after the call.
pub fn spawn_simulator(cfg: &SimulatorConfig) -> Result<SimulatorHandle> {
    if cfg.interval_ms == 0 {
        return Err(PowerAiError::Simulator("tick interval must be non-zero".into()));
    }
    if !(0.0..=1.0).contains(&cfg.change_probability) {
        return Err(PowerAiError::Simulator(format!(
            "change probability {} is outside 0.0..=1.0",
            cfg.change_probability
        )));
    }

    let (tx, rx) = mpsc::channel(4);
    let interval = cfg.interval();
    let mut source = DeltaSource::new(cfg.change_probability, cfg.seed);

    info!(
        "Battery simulator started (every {} ms, p = {})",
        cfg.interval_ms, cfg.change_probability
    );

    let task = tokio::spawn(async move {
        let mut ticker = time::interval(interval);
        ticker.tick().await; // the first tick completes immediately

        loop {
            ticker.tick().await;

            if tx.send(source.next_delta()).await.is_err() {
                break; // receiver dropped
            }
        }
    });

    Ok(SimulatorHandle { rx, task })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::Instant;

    fn sim_cfg(interval_ms: u64, change_probability: f64) -> SimulatorConfig {
        SimulatorConfig {
            interval_ms,
            change_probability,
            seed: Some(3),
            ..SimulatorConfig::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn first_delta_after_one_interval() {
        let mut handle = spawn_simulator(&sim_cfg(5_000, 1.0)).unwrap();
        let start = Instant::now();

        let delta = handle.next().await.unwrap();
        assert_ne!(delta, Delta::Hold);
        assert!(start.elapsed() >= Duration::from_millis(5_000));
    }

    #[tokio::test(start_paused = true)]
    async fn one_delta_per_tick() {
        let mut handle = spawn_simulator(&sim_cfg(100, 0.3)).unwrap();
        let start = Instant::now();
        for _ in 0..10 {
            handle.next().await.unwrap();
        }
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(1_000));
        assert!(elapsed < Duration::from_millis(1_100));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_cancels_the_task() {
        let handle = spawn_simulator(&sim_cfg(100, 0.3)).unwrap();
        let abort = handle.task.abort_handle();
        assert!(!abort.is_finished());

        drop(handle);
        for _ in 0..16 {
            if abort.is_finished() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(abort.is_finished());
    }

    #[tokio::test]
    async fn rejects_zero_interval() {
        let err = spawn_simulator(&sim_cfg(0, 0.3)).unwrap_err();
        assert!(matches!(err, PowerAiError::Simulator(_)));
    }

    #[tokio::test]
    async fn rejects_bad_probability() {
        assert!(spawn_simulator(&sim_cfg(100, -0.1)).is_err());
    }
}
