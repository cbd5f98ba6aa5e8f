use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn mark(&self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn player(&self) -> Option<Player> {
        match self {
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
            Mark::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

/// Three cell indices that win the game when they hold the same mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WinningLine([usize; 3]);

impl WinningLine {
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self([a, b, c])
    }

    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

pub const WINNING_LINES: [WinningLine; 8] = [
    // rows
    WinningLine::new(0, 1, 2),
    WinningLine::new(3, 4, 5),
    WinningLine::new(6, 7, 8),
    // columns
    WinningLine::new(0, 3, 6),
    WinningLine::new(1, 4, 7),
    WinningLine::new(2, 5, 8),
    // diagonals
    WinningLine::new(0, 4, 8),
    WinningLine::new(2, 4, 6),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Player::X.opponent().opponent(), Player::X);
    }

    #[test]
    fn test_mark_round_trips_player() {
        for player in [Player::X, Player::O] {
            assert_eq!(player.mark().player(), Some(player));
        }
        assert_eq!(Mark::Empty.player(), None);
    }

    #[test]
    fn test_winning_lines_cover_every_cell() {
        for index in 0..9 {
            assert!(WINNING_LINES.iter().any(|line| line.contains(index)));
        }
        let through_center = WINNING_LINES.iter().filter(|line| line.contains(4)).count();
        assert_eq!(through_center, 4);
    }

    #[test]
    fn test_status_helpers() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Draw.is_terminal());
        assert!(GameStatus::Won(Player::O).is_terminal());
        assert_eq!(GameStatus::Won(Player::O).winner(), Some(Player::O));
        assert_eq!(GameStatus::Draw.winner(), None);
    }
}
