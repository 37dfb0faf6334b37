use super::GameMode;

pub const SELECT_MODE_PROMPT: &str = "Select a mode to start!";
pub const INVALID_INPUT_HINT: &str = "Please enter a valid number.";

/// How far a guess landed from the secret. Bands are ordered from closest to
/// farthest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceBand {
    BurningHot,
    Hot,
    Warm,
    Cold,
    Freezing,
}

impl DistanceBand {
    /// Returns `None` for a distance of zero, which is a win rather than a hint.
    pub fn for_distance(distance: u32) -> Option<DistanceBand> {
        match distance {
            0 => None,
            1..=3 => Some(DistanceBand::BurningHot),
            4..=10 => Some(DistanceBand::Hot),
            11..=25 => Some(DistanceBand::Warm),
            26..=50 => Some(DistanceBand::Cold),
            _ => Some(DistanceBand::Freezing),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            DistanceBand::BurningHot => "Burning hot! You're so close!",
            DistanceBand::Hot => "Getting hot! Really close!",
            DistanceBand::Warm => "Warm. You're on the right track.",
            DistanceBand::Cold => "Cold... Try a different range.",
            DistanceBand::Freezing => "Freezing cold! You're far away.",
        }
    }
}

/// `result` is the guess count for Classic and the elapsed seconds for Time
/// Attack; Survival ignores it.
pub fn win_message(mode: GameMode, result: u32) -> String {
    match mode {
        GameMode::Classic => format!("You got it in {} tries!", result),
        GameMode::TimeAttack => format!("You got it in {}s!", result),
        GameMode::Survival => "You survived!".to_string(),
    }
}

pub fn timeout_message(secret: u32) -> String {
    format!("Time's Up! The number was {}.", secret)
}

pub fn exhausted_message(secret: u32) -> String {
    format!("Out of tries! The number was {}.", secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(DistanceBand::for_distance(0), None);
        assert_eq!(DistanceBand::for_distance(1), Some(DistanceBand::BurningHot));
        assert_eq!(DistanceBand::for_distance(3), Some(DistanceBand::BurningHot));
        assert_eq!(DistanceBand::for_distance(4), Some(DistanceBand::Hot));
        assert_eq!(DistanceBand::for_distance(10), Some(DistanceBand::Hot));
        assert_eq!(DistanceBand::for_distance(11), Some(DistanceBand::Warm));
        assert_eq!(DistanceBand::for_distance(25), Some(DistanceBand::Warm));
        assert_eq!(DistanceBand::for_distance(26), Some(DistanceBand::Cold));
        assert_eq!(DistanceBand::for_distance(50), Some(DistanceBand::Cold));
        assert_eq!(DistanceBand::for_distance(51), Some(DistanceBand::Freezing));
        assert_eq!(
            DistanceBand::for_distance(u32::MAX),
            Some(DistanceBand::Freezing)
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(win_message(GameMode::Classic, 3), "You got it in 3 tries!");
        assert_eq!(win_message(GameMode::TimeAttack, 12), "You got it in 12s!");
        assert_eq!(win_message(GameMode::Survival, 5), "You survived!");
        assert_eq!(timeout_message(17), "Time's Up! The number was 17.");
        assert_eq!(exhausted_message(99), "Out of tries! The number was 99.");
    }
}
