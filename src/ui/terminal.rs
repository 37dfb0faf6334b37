//! Line-oriented front end. Holds no game rules: it turns typed lines into
//! commands and prints what the session publishes.

use crate::model::{BestRecords, GameEngineCommand, GameEngineEvent, GameMode, RoundState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(GameEngineCommand),
    ShowRecords,
    Help,
    Quit,
}

/// Anything that is not a keyword is treated as a guess, so the engine can
/// answer malformed numbers with its own hint.
pub fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "quit" | "q" => Input::Quit,
        "help" | "h" | "?" => Input::Help,
        "records" | "r" => Input::ShowRecords,
        "reset" | "again" => Input::Command(GameEngineCommand::ResetRound),
        "exit" | "menu" => Input::Command(GameEngineCommand::ExitRound),
        _ => match trimmed.parse::<GameMode>() {
            Ok(mode) => Input::Command(GameEngineCommand::StartRound(mode)),
            Err(_) => Input::Command(GameEngineCommand::SubmitGuess(trimmed.to_string())),
        },
    }
}

pub fn menu() -> String {
    let mut out = String::from("Number Guessing Game\n");
    let keys = ["classic", "time", "survival"];
    for (key, mode) in keys.iter().zip(GameMode::all()) {
        out.push_str(&format!(
            "  {:<9} {} - {}\n",
            key,
            mode.title(),
            mode.description()
        ));
    }
    out.push_str("  reset     play the same mode again\n");
    out.push_str("  exit      back to mode selection\n");
    out.push_str("  records   show best results\n");
    out.push_str("  quit      leave the game\n");
    out
}

pub fn render_records(records: &BestRecords) -> String {
    format!(
        "Best: classic {} | time attack {} | survival streak {} (current {})",
        records.display_best(GameMode::Classic),
        records.display_best(GameMode::TimeAttack),
        records.display_best(GameMode::Survival),
        records.current_streak
    )
}

pub fn render_round(state: &RoundState) -> String {
    let Some(mode) = state.mode else {
        return state.hint.clone();
    };
    let status = match mode {
        GameMode::Classic => format!("guesses: {}", state.guess_count),
        GameMode::TimeAttack => format!("time left: {}s", state.time_remaining),
        GameMode::Survival => format!("tries left: {}", state.tries_remaining),
    };
    let mut out = format!(
        "[{}] {} ({}, best {})",
        mode.title(),
        state.hint,
        status,
        state.records.display_best(mode)
    );
    if state.is_over() {
        out.push_str("\nType 'reset' to play again or 'exit' for the menu.");
    }
    out
}

/// Text for one published event; `None` when the event is not worth a line.
pub fn render_event(event: &GameEngineEvent) -> Option<String> {
    match event {
        GameEngineEvent::RoundUpdated(state) => Some(render_round(state)),
        GameEngineEvent::TimeRemainingChanged(seconds) => {
            if *seconds > 0 && (*seconds <= 5 || seconds % 10 == 0) {
                Some(format!("{}s left", seconds))
            } else {
                None
            }
        }
        GameEngineEvent::NewBestRecord { mode, value } => {
            Some(format!("New {} record: {}!", mode.title(), value))
        }
        GameEngineEvent::RoundFinished { .. } => None,
    }
}
