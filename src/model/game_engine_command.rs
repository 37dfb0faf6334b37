use super::GameMode;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEngineCommand {
    StartRound(GameMode),
    SubmitGuess(String),
    Tick(Uuid), // round the countdown was armed for
    ResetRound,
    ExitRound,
}
