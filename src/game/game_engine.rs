use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::notifier::Notifier;
use super::record_store::RecordStore;
use super::settings::Settings;
use crate::model::hint::{self, DistanceBand, INVALID_INPUT_HINT};
use crate::model::{BestRecords, GameMode, RoundPhase, RoundState, SECRET_RANGE};

/// The round state machine.
///
/// `NotStarted -> Active -> {Won, LostTimeout, LostExhausted}`. Only an active
/// round accepts guesses and ticks; a finished round stays frozen until it is
/// reset, restarted or exited.
pub struct GameEngine {
    rng: StdRng,
    secret_number: u32,
    round: RoundState,
    records: BestRecords,
    new_best: Option<(GameMode, u32)>,
    record_store: Box<dyn RecordStore>,
    notifier: Box<dyn Notifier>,
    debug_mode: bool,
}

impl GameEngine {
    pub fn new(
        record_store: Box<dyn RecordStore>,
        notifier: Box<dyn Notifier>,
        seed: Option<u64>,
    ) -> Self {
        let seed = seed.unwrap_or_else(rand::random::<u64>);
        let records = record_store.best_records(0);
        Self {
            rng: StdRng::seed_from_u64(seed),
            secret_number: 0,
            round: RoundState::default(),
            records,
            new_best: None,
            record_store,
            notifier,
            debug_mode: Settings::is_debug_mode(),
        }
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn records(&self) -> &BestRecords {
        &self.records
    }

    pub fn record_store(&self) -> &dyn RecordStore {
        self.record_store.as_ref()
    }

    /// The record set by the last command, if any. Cleared on read.
    pub fn take_new_best(&mut self) -> Option<(GameMode, u32)> {
        self.new_best.take()
    }

    pub fn start_round(&mut self, mode: GameMode) -> &RoundState {
        let secret = self.rng.random_range(SECRET_RANGE);
        self.begin_round(mode, secret)
    }

    fn begin_round(&mut self, mode: GameMode, secret: u32) -> &RoundState {
        self.secret_number = secret;
        self.new_best = None;
        self.records = self.record_store.best_records(self.records.current_streak);
        self.round = RoundState::new_round(mode, self.records);
        info!(
            target: "game_engine",
            "Round started; mode: {:?}; id: {:?}",
            mode, self.round.round_id
        );
        if self.debug_mode {
            debug!(target: "game_engine", "Secret number: {}", secret);
        }
        &self.round
    }

    /// Starts the current mode again. Does nothing before any mode was chosen.
    pub fn reset_round(&mut self) -> &RoundState {
        let mode = self.round.mode;
        match mode {
            Some(mode) => self.start_round(mode),
            None => &self.round,
        }
    }

    pub fn exit_round(&mut self) -> &RoundState {
        trace!(target: "game_engine", "Exiting round {:?}", self.round.round_id);
        self.secret_number = 0;
        self.new_best = None;
        self.round = RoundState::default();
        &self.round
    }

    pub fn submit_guess(&mut self, text: &str) -> &RoundState {
        let active_mode = self.round.mode.filter(|_| self.round.is_active());
        let Some(mode) = active_mode else {
            trace!(target: "game_engine", "Ignoring guess; no active round");
            return &self.round;
        };

        let guess = match text.trim().parse::<i32>() {
            Ok(guess) => guess,
            Err(_) => {
                self.round.set_hint(INVALID_INPUT_HINT);
                return &self.round;
            }
        };

        self.round.count_guess();
        let distance = (i64::from(self.secret_number) - i64::from(guess)).unsigned_abs();
        let distance = u32::try_from(distance).unwrap_or(u32::MAX);
        trace!(
            target: "game_engine",
            "Guess #{}: {}; distance: {}",
            self.round.guess_count, guess, distance
        );

        match DistanceBand::for_distance(distance) {
            None => self.win(mode),
            Some(band) => {
                if mode.has_try_limit() && self.round.tries_remaining == 0 {
                    self.lose_exhausted();
                } else {
                    self.round.set_hint(band.message());
                }
            }
        }
        &self.round
    }

    /// One second of Time Attack. Does nothing unless a timed round is active
    /// with time left.
    pub fn tick(&mut self) -> &RoundState {
        let timed = self.round.mode.is_some_and(|mode| mode.is_timed());
        if !timed || !self.round.is_active() || self.round.time_remaining == 0 {
            return &self.round;
        }

        if self.round.count_down() == 0 {
            info!(target: "game_engine", "Time ran out; round {:?}", self.round.round_id);
            self.round.finish(
                RoundPhase::LostTimeout,
                hint::timeout_message(self.secret_number),
            );
        }
        &self.round
    }

    fn win(&mut self, mode: GameMode) {
        let guess_count = self.round.guess_count;
        let result = match mode {
            GameMode::Classic => guess_count,
            GameMode::TimeAttack => self.round.elapsed_seconds(),
            GameMode::Survival => {
                self.records.current_streak += 1;
                self.records.current_streak
            }
        };
        self.update_best(mode, result);
        self.round.set_records(self.records);
        self.round.finish(RoundPhase::Won, hint::win_message(mode, result));
        info!(
            target: "game_engine",
            "Round won; mode: {:?}; guesses: {}; result: {}",
            mode, guess_count, result
        );

        self.notifier.announce_win(guess_count);
    }

    fn lose_exhausted(&mut self) {
        self.records.current_streak = 0;
        self.records.survival_best_streak = 0;
        if let Err(e) = self.record_store.reset_streak() {
            warn!(target: "game_engine", "Failed to reset survival streak: {}", e);
        }
        self.round.set_records(self.records);
        self.round.finish(
            RoundPhase::LostExhausted,
            hint::exhausted_message(self.secret_number),
        );
        info!(target: "game_engine", "Out of tries; round {:?}", self.round.round_id);
    }

    fn update_best(&mut self, mode: GameMode, value: u32) {
        if !self.records.is_improvement(mode, value) {
            return;
        }
        self.records.set_best(mode, value);
        self.new_best = Some((mode, value));
        if let Err(e) = self.record_store.save(mode, value) {
            warn!(target: "game_engine", "Failed to save {:?} record: {}", mode, e);
        }
    }
}
