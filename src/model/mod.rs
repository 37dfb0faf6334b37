mod best_records;
mod game_engine_command;
mod game_engine_event;
mod game_mode;
pub mod hint;
mod round_state;

pub use best_records::BestRecords;
pub use game_engine_command::GameEngineCommand;
pub use game_engine_event::GameEngineEvent;
pub use game_mode::{GameMode, SECRET_RANGE, TIME_LIMIT_SECONDS, TRIES_LIMIT};
pub use hint::DistanceBand;
pub use round_state::{RoundPhase, RoundState};
