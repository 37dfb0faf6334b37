use log::trace;
use tokio::sync::mpsc;

use super::countdown::Countdown;
use super::game_engine::GameEngine;
use crate::events::EventEmitter;
use crate::model::{GameEngineCommand, GameEngineEvent, RoundState};

/// Single owner of the engine. Applies commands, keeps at most one countdown
/// alive for the current Time Attack round and republishes the round to
/// subscribers after every command.
pub struct GameSession {
    engine: GameEngine,
    countdown: Countdown,
    event_emitter: EventEmitter<GameEngineEvent>,
}

impl GameSession {
    /// `command_tx` is the sending half of the channel the owner feeds back
    /// into [`GameSession::handle_command`]; the countdown ticks through it.
    pub fn new(
        engine: GameEngine,
        command_tx: mpsc::UnboundedSender<GameEngineCommand>,
        event_emitter: EventEmitter<GameEngineEvent>,
    ) -> Self {
        Self {
            engine,
            countdown: Countdown::new(command_tx),
            event_emitter,
        }
    }

    pub fn state(&self) -> &RoundState {
        self.engine.round()
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn handle_command(&mut self, command: GameEngineCommand) -> &RoundState {
        trace!(target: "session", "Handling command: {:?}", command);
        let was_over = self.engine.round().is_over();

        match command {
            GameEngineCommand::StartRound(mode) => {
                self.countdown.cancel();
                self.engine.start_round(mode);
                self.arm_countdown();
            }
            GameEngineCommand::ResetRound => {
                self.countdown.cancel();
                self.engine.reset_round();
                self.arm_countdown();
            }
            GameEngineCommand::ExitRound => {
                self.countdown.cancel();
                self.engine.exit_round();
            }
            GameEngineCommand::SubmitGuess(text) => {
                self.engine.submit_guess(&text);
            }
            GameEngineCommand::Tick(round_id) => {
                if self.countdown.armed_round() != Some(round_id) {
                    trace!(target: "session", "Dropping stale tick for round {}", round_id);
                    return self.engine.round();
                }
                let before = self.engine.round().time_remaining;
                let after = self.engine.tick().time_remaining;
                if after != before {
                    self.event_emitter
                        .emit(&GameEngineEvent::TimeRemainingChanged(after));
                }
                if !self.engine.round().is_over() {
                    return self.engine.round();
                }
            }
        }

        if self.engine.round().is_over() {
            self.countdown.cancel();
        }
        self.publish(was_over);
        self.engine.round()
    }

    fn arm_countdown(&mut self) {
        let round = self.engine.round();
        if let (Some(mode), Some(round_id)) = (round.mode, round.round_id) {
            if mode.is_timed() && round.is_active() {
                self.countdown.arm(round_id);
            }
        }
    }

    fn publish(&mut self, was_over: bool) {
        if !self.event_emitter.has_listeners() {
            self.engine.take_new_best();
            return;
        }
        if let Some((mode, value)) = self.engine.take_new_best() {
            self.event_emitter
                .emit(&GameEngineEvent::NewBestRecord { mode, value });
        }

        let round = self.engine.round();
        if round.is_over() && !was_over {
            if let Some(mode) = round.mode {
                self.event_emitter.emit(&GameEngineEvent::RoundFinished {
                    mode,
                    phase: round.phase,
                    guess_count: round.guess_count,
                });
            }
        }
        self.event_emitter
            .emit(&GameEngineEvent::RoundUpdated(round.clone()));
    }
}
