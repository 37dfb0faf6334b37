use super::GameMode;

/// Best result per mode, as shown next to a round.
///
/// `current_streak` is never persisted; it lives for the session only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestRecords {
    pub classic_best_tries: Option<u32>,
    pub time_attack_best_seconds: Option<u32>,
    pub survival_best_streak: u32,
    pub current_streak: u32,
}

impl BestRecords {
    pub fn best_for(&self, mode: GameMode) -> Option<u32> {
        match mode {
            GameMode::Classic => self.classic_best_tries,
            GameMode::TimeAttack => self.time_attack_best_seconds,
            GameMode::Survival => Some(self.survival_best_streak),
        }
    }

    /// Lower-is-better modes improve on a strictly lower value or on no
    /// record at all; Survival improves on a strictly higher streak.
    pub fn is_improvement(&self, mode: GameMode, value: u32) -> bool {
        let best = self.best_for(mode);
        if mode.lower_is_better() {
            best.map_or(true, |best| value < best)
        } else {
            value > best.unwrap_or(0)
        }
    }

    pub fn set_best(&mut self, mode: GameMode, value: u32) {
        match mode {
            GameMode::Classic => self.classic_best_tries = Some(value),
            GameMode::TimeAttack => self.time_attack_best_seconds = Some(value),
            GameMode::Survival => self.survival_best_streak = value,
        }
    }

    /// "--" when there is no record yet.
    pub fn display_best(&self, mode: GameMode) -> String {
        match self.best_for(mode) {
            Some(value) => match mode {
                GameMode::TimeAttack => format!("{}s", value),
                _ => value.to_string(),
            },
            None => "--".to_string(),
        }
    }
}
