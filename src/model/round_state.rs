use uuid::Uuid;

use super::hint::SELECT_MODE_PROMPT;
use super::{BestRecords, GameMode, TIME_LIMIT_SECONDS, TRIES_LIMIT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    NotStarted,
    Active,
    Won,
    LostTimeout,
    LostExhausted,
}

impl RoundPhase {
    pub fn is_active(&self) -> bool {
        matches!(self, RoundPhase::Active)
    }

    pub fn is_over(&self) -> bool {
        matches!(
            self,
            RoundPhase::Won | RoundPhase::LostTimeout | RoundPhase::LostExhausted
        )
    }
}

/// Snapshot of the current round. Fields are read-only outside this module;
/// the engine changes them only through the transition methods below.
#[readonly::make]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub round_id: Option<Uuid>,
    pub mode: Option<GameMode>,
    pub phase: RoundPhase,
    pub hint: String,
    pub guess_count: u32,
    pub tries_remaining: u32,
    pub time_remaining: u32,
    pub records: BestRecords,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            round_id: None,
            mode: None,
            phase: RoundPhase::NotStarted,
            hint: SELECT_MODE_PROMPT.to_string(),
            guess_count: 0,
            tries_remaining: TRIES_LIMIT,
            time_remaining: TIME_LIMIT_SECONDS,
            records: BestRecords::default(),
        }
    }
}

impl RoundState {
    pub(crate) fn new_round(mode: GameMode, records: BestRecords) -> Self {
        Self {
            round_id: Some(Uuid::new_v4()),
            mode: Some(mode),
            phase: RoundPhase::Active,
            hint: mode.opening_prompt(),
            records,
            ..Self::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn won(&self) -> bool {
        self.phase == RoundPhase::Won
    }

    /// Seconds used so far in a Time Attack round.
    pub fn elapsed_seconds(&self) -> u32 {
        TIME_LIMIT_SECONDS.saturating_sub(self.time_remaining)
    }

    pub(crate) fn set_hint(&mut self, hint: impl Into<String>) {
        self.hint = hint.into();
    }

    pub(crate) fn set_records(&mut self, records: BestRecords) {
        self.records = records;
    }

    /// Counts an accepted guess, spending a try in Survival.
    pub(crate) fn count_guess(&mut self) {
        self.guess_count += 1;
        if self.mode.is_some_and(|mode| mode.has_try_limit()) {
            self.tries_remaining = self.tries_remaining.saturating_sub(1);
        }
    }

    /// Takes one second off the clock and returns what is left.
    pub(crate) fn count_down(&mut self) -> u32 {
        self.time_remaining = self.time_remaining.saturating_sub(1);
        self.time_remaining
    }

    pub(crate) fn finish(&mut self, phase: RoundPhase, hint: impl Into<String>) {
        debug_assert!(phase.is_over());
        self.phase = phase;
        self.hint = hint.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_started() {
        let state = RoundState::default();
        assert!(!state.is_active());
        assert!(!state.is_over());
        assert!(!state.won());
        assert_eq!(state.mode, None);
        assert_eq!(state.hint, "Select a mode to start!");
        assert_eq!(state.tries_remaining, 7);
        assert_eq!(state.time_remaining, 60);
    }

    #[test]
    fn test_count_guess_only_spends_tries_in_survival() {
        let mut classic = RoundState::new_round(GameMode::Classic, BestRecords::default());
        classic.count_guess();
        assert_eq!(classic.guess_count, 1);
        assert_eq!(classic.tries_remaining, TRIES_LIMIT);

        let mut survival = RoundState::new_round(GameMode::Survival, BestRecords::default());
        survival.count_guess();
        assert_eq!(survival.guess_count, 1);
        assert_eq!(survival.tries_remaining, TRIES_LIMIT - 1);
    }

    #[test]
    fn test_count_down_clamps_at_zero() {
        let mut state = RoundState::new_round(GameMode::TimeAttack, BestRecords::default());
        for _ in 0..TIME_LIMIT_SECONDS + 5 {
            state.count_down();
        }
        assert_eq!(state.time_remaining, 0);
        assert_eq!(state.elapsed_seconds(), TIME_LIMIT_SECONDS);
    }

    #[test]
    fn test_active_and_over_are_exclusive() {
        let mut state = RoundState::new_round(GameMode::Classic, BestRecords::default());
        assert!(state.is_active() && !state.is_over());
        state.finish(RoundPhase::Won, "done");
        assert!(!state.is_active() && state.is_over() && state.won());
    }

    #[test]
    fn test_new_rounds_get_distinct_ids() {
        let a = RoundState::new_round(GameMode::Classic, BestRecords::default());
        let b = RoundState::new_round(GameMode::Classic, BestRecords::default());
        assert!(a.round_id.is_some());
        assert_ne!(a.round_id, b.round_id);
    }
}
