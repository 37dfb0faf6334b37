use log::{error, info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use numguess::events::Channel;
use numguess::game::{
    DesktopNotifier, GameEngine, GameSession, JsonRecordStore, MemoryRecordStore, Notifier,
    RecordStore, SilentNotifier, Settings,
};
use numguess::model::GameEngineEvent;
use numguess::ui::terminal::{self, Input};

fn init_logging() {
    env_logger::init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();

    let settings = Settings::load();
    let records_dir = settings.records_dir();
    let record_store: Box<dyn RecordStore> = match JsonRecordStore::new(&records_dir) {
        Ok(store) => {
            info!("Records directory: {:?}", records_dir);
            Box::new(store)
        }
        Err(e) => {
            warn!("Cannot use {:?} ({}); records last for this session only", records_dir, e);
            Box::new(MemoryRecordStore::default())
        }
    };
    let notifier: Box<dyn Notifier> = if settings.notifications_enabled {
        Box::new(DesktopNotifier::new(true))
    } else {
        Box::new(SilentNotifier)
    };

    let engine = GameEngine::new(record_store, notifier, Settings::seed_from_env());

    let (command_tx, mut command_rx) = mpsc::unbounded_channel();
    let (event_emitter, event_observer) = Channel::new();
    let _renderer = event_observer.subscribe(|event: &GameEngineEvent| {
        if let Some(line) = terminal::render_event(event) {
            println!("{}", line);
        }
    });
    let mut session = GameSession::new(engine, command_tx, event_emitter);

    println!("{}", terminal::menu());
    println!("{}", terminal::render_records(session.engine().records()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => match terminal::parse_input(&line) {
                    Input::Command(command) => {
                        session.handle_command(command);
                    }
                    Input::ShowRecords => {
                        println!("{}", terminal::render_records(session.engine().records()))
                    }
                    Input::Help => println!("{}", terminal::menu()),
                    Input::Quit => break,
                },
                Ok(None) => break,
                Err(e) => {
                    error!("Failed to read input: {}", e);
                    break;
                }
            },
            Some(command) = command_rx.recv() => {
                session.handle_command(command);
            }
        }
    }
}
