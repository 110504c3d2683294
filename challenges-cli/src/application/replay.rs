use crate::infrastructure::{CliError, Result};
use challenges_core::{Challenge, ChallengeCommand, ChallengeEvent, ChallengeEventLoop};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

/// Outcome of running a command script through a fresh board
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub events: Vec<ChallengeEvent>,
    pub active: Vec<Challenge>,
    pub completed: Vec<Challenge>,
    pub failed: Vec<Challenge>,
}

impl ReplayReport {
    fn from_board(board: &ChallengeEventLoop, events: Vec<ChallengeEvent>) -> Self {
        let partition = board.partition();
        let owned = |list: &[&Challenge]| list.iter().map(|c| (*c).clone()).collect();

        Self {
            events,
            active: owned(partition.active()),
            completed: owned(partition.completed()),
            failed: owned(partition.failed()),
        }
    }

    /// Number of commands that were rejected
    pub fn failures(&self) -> usize {
        self.events.iter().filter(|e| e.is_failure()).count()
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for (title, list) in [
            ("Active", &self.active),
            ("Completed", &self.completed),
            ("Failed", &self.failed),
        ] {
            let _ = writeln!(out, "{} ({})", title, list.len());
            for challenge in list {
                let _ = writeln!(
                    out,
                    "  - {} (until {})",
                    challenge.title(),
                    challenge.deadline().formatted()
                );
            }
        }

        let _ = writeln!(
            out,
            "{} commands, {} rejected",
            self.events.len(),
            self.failures()
        );
        out
    }
}

/// Parse a JSON array of commands
pub fn parse_script(json: &str) -> Result<Vec<ChallengeCommand>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a script file
pub fn load_script(path: &Path) -> Result<Vec<ChallengeCommand>> {
    if !path.is_file() {
        return Err(CliError::script_not_found(path.to_path_buf()));
    }
    let json = std::fs::read_to_string(path)?;
    parse_script(&json)
}

/// Run every command in order, logging each event
pub fn replay(commands: impl IntoIterator<Item = ChallengeCommand>) -> ReplayReport {
    let mut board = ChallengeEventLoop::new();
    let mut events = Vec::new();

    for command in commands {
        let event = board.handle_command(command);
        tracing::info!(event = ?event, "Replayed command");
        events.push(event);
    }

    ReplayReport::from_board(&board, events)
}
