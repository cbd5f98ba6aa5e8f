use tictactoe_engine::tictactoe::{BOARD_SIZE, Difficulty};

use crate::config::OpponentType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index.
    Place(usize),
    Restart,
    Mode(OpponentType),
    Difficulty(Difficulty),
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9                          place your mark (cells are numbered left to right, top to bottom)
  restart | r                  start a new game
  mode human|ai                choose the opponent (restarts the game)
  difficulty easy|medium|hard  choose the AI difficulty (restarts the game)
  help | h                     show this help
  quit | q                     leave";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Empty command, type 'help' for the list of commands".to_string());
    };
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(format!("Too many arguments: {}", line.trim()));
    }

    match (head.to_ascii_lowercase().as_str(), arg) {
        ("restart" | "r", None) => Ok(Command::Restart),
        ("help" | "h" | "?", None) => Ok(Command::Help),
        ("quit" | "q" | "exit", None) => Ok(Command::Quit),
        ("mode", Some(value)) => match value.to_ascii_lowercase().as_str() {
            "human" => Ok(Command::Mode(OpponentType::Human)),
            "ai" => Ok(Command::Mode(OpponentType::Ai)),
            other => Err(format!("Unknown mode: {}", other)),
        },
        ("difficulty", Some(value)) => value.parse().map(Command::Difficulty),
        (cell, None) => parse_cell(cell),
        _ => Err(format!("Unknown command: {}", line.trim())),
    }
}

fn parse_cell(cell: &str) -> Result<Command, String> {
    let number: usize = cell
        .parse()
        .map_err(|_| format!("Unknown command: {}", cell))?;
    if !(1..=BOARD_SIZE).contains(&number) {
        return Err(format!("Cell must be between 1 and {}", BOARD_SIZE));
    }
    Ok(Command::Place(number - 1))
}
