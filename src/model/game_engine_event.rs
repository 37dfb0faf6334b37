use super::{GameMode, RoundPhase, RoundState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEngineEvent {
    RoundUpdated(RoundState),
    TimeRemainingChanged(u32),
    RoundFinished {
        mode: GameMode,
        phase: RoundPhase,
        guess_count: u32,
    },
    NewBestRecord {
        mode: GameMode,
        value: u32,
    },
}
