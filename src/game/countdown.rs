//! Time Attack countdown.
//!
//! The countdown is a tokio task that sends a [`GameEngineCommand::Tick`] into
//! the session's command channel once per period. It never touches the round
//! itself; the session applies each tick on its own loop.

use log::{debug, trace, warn};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use uuid::Uuid;

use crate::model::GameEngineCommand;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub struct Countdown {
    command_tx: mpsc::UnboundedSender<GameEngineCommand>,
    period: Duration,
    task: Option<(Uuid, JoinHandle<()>)>,
}

impl Countdown {
    pub fn new(command_tx: mpsc::UnboundedSender<GameEngineCommand>) -> Self {
        Self::with_period(command_tx, TICK_PERIOD)
    }

    fn with_period(
        command_tx: mpsc::UnboundedSender<GameEngineCommand>,
        period: Duration,
    ) -> Self {
        Self {
            command_tx,
            period,
            task: None,
        }
    }

    /// Starts ticking for `round_id`, replacing any countdown already running.
    ///
    /// Outside a tokio runtime this only logs; the round then has to be ticked
    /// by hand.
    pub fn arm(&mut self, round_id: Uuid) {
        self.cancel();

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(target: "countdown", "No tokio runtime; countdown for {} not started", round_id);
            return;
        };

        let command_tx = self.command_tx.clone();
        let period = self.period;
        let handle = runtime.spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                trace!(target: "countdown", "Tick for round {}", round_id);
                if command_tx.send(GameEngineCommand::Tick(round_id)).is_err() {
                    // session is gone
                    break;
                }
            }
        });

        self.task = Some((round_id, handle));
        debug!(target: "countdown", "Countdown armed for round {}", round_id);
    }

    /// No-op when nothing is armed.
    pub fn cancel(&mut self) {
        if let Some((round_id, handle)) = self.task.take() {
            handle.abort();
            debug!(target: "countdown", "Countdown cancelled for round {}", round_id);
        }
    }

    pub fn armed_round(&self) -> Option<Uuid> {
        self.task.as_ref().map(|(round_id, _)| *round_id)
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.cancel();
    }
}
