pub mod countdown;
pub mod game_engine;
pub mod notifier;
pub mod record_store;
pub mod session;
pub mod settings;

pub use countdown::Countdown;
pub use game_engine::GameEngine;
pub use notifier::{DesktopNotifier, Notifier, SilentNotifier};
pub use record_store::{JsonRecordStore, MemoryRecordStore, RecordStore};
pub use session::GameSession;
pub use settings::Settings;
