use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// The secret number is drawn uniformly from this range.
pub const SECRET_RANGE: RangeInclusive<u32> = 1..=100;

/// Seconds on the clock at the start of a Time Attack round.
pub const TIME_LIMIT_SECONDS: u32 = 60;

/// Guesses available at the start of a Survival round.
pub const TRIES_LIMIT: u32 = 7;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Classic,
    TimeAttack,
    Survival,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::Classic
    }
}

impl GameMode {
    pub fn all() -> Vec<GameMode> {
        vec![GameMode::Classic, GameMode::TimeAttack, GameMode::Survival]
    }

    pub fn title(&self) -> &'static str {
        match self {
            GameMode::Classic => "Classic Mode",
            GameMode::TimeAttack => "Time Attack",
            GameMode::Survival => "Survival Mode",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GameMode::Classic => "Beat your best score.",
            GameMode::TimeAttack => "Guess before time runs out.",
            GameMode::Survival => "Guess with a limited number of tries.",
        }
    }

    pub fn opening_prompt(&self) -> String {
        let base = format!(
            "I'm thinking of a number between {} and {}.",
            SECRET_RANGE.start(),
            SECRET_RANGE.end()
        );
        match self {
            GameMode::Classic => base,
            GameMode::TimeAttack => format!("{} You have {} seconds!", base, TIME_LIMIT_SECONDS),
            GameMode::Survival => format!("{} You have {} tries!", base, TRIES_LIMIT),
        }
    }

    /// Whether a lower best value beats a higher one for this mode.
    pub fn lower_is_better(&self) -> bool {
        !matches!(self, GameMode::Survival)
    }

    pub fn is_timed(&self) -> bool {
        matches!(self, GameMode::TimeAttack)
    }

    pub fn has_try_limit(&self) -> bool {
        matches!(self, GameMode::Survival)
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" | "c" => Ok(GameMode::Classic),
            "time" | "t" | "time-attack" | "time_attack" | "timeattack" => {
                Ok(GameMode::TimeAttack)
            }
            "survival" | "s" => Ok(GameMode::Survival),
            other => Err(format!("unknown game mode: {}", other)),
        }
    }
}
