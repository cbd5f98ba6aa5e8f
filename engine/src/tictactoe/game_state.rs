use thiserror::Error;

use super::board::{BOARD_SIZE, Board};
use super::types::{GameStatus, Mark, Player, WinningLine};
use super::win_detector::{check_draw, check_win, check_win_with_lines};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("game is already over")]
    GameOver,
    #[error("cell {0} is out of range")]
    OutOfRange(usize),
    #[error("it is player {expected}'s turn, not {actual}'s")]
    NotYourTurn { expected: Player, actual: Player },
    #[error("cell {0} is already marked")]
    Occupied(usize),
}

/// Canonical state of one game. Status and winning lines are always derived from the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winning_lines: Vec<WinningLine>,
    last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            winning_lines: Vec::new(),
            last_move: None,
        }
    }

    /// Builds a state from a snapshot. X moves next when both players have the same number
    /// of marks, O otherwise.
    pub fn from_board(board: Board) -> Self {
        let current_player = if board.count(Mark::X) > board.count(Mark::O) {
            Player::O
        } else {
            Player::X
        };
        let mut state = Self {
            board,
            current_player,
            status: GameStatus::InProgress,
            winning_lines: Vec::new(),
            last_move: None,
        };
        state.check_game_over();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Every line completed by the winner; empty unless the game is won.
    pub fn winning_lines(&self) -> &[WinningLine] {
        &self.winning_lines
    }

    /// Union of the winning lines' cells in ascending order.
    pub fn winning_cells(&self) -> Vec<usize> {
        let mut cells: Vec<usize> = self
            .winning_lines
            .iter()
            .flat_map(|line| line.indices())
            .collect();
        cells.sort_unstable();
        cells.dedup();
        cells
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<GameStatus, InvalidMove> {
        if self.status.is_terminal() {
            return Err(InvalidMove::GameOver);
        }

        if index >= BOARD_SIZE {
            return Err(InvalidMove::OutOfRange(index));
        }

        if player != self.current_player {
            return Err(InvalidMove::NotYourTurn {
                expected: self.current_player,
                actual: player,
            });
        }

        if !self.board.is_valid_move(index) {
            return Err(InvalidMove::Occupied(index));
        }

        self.board.set(index, player.mark());
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.current_player = self.current_player.opponent();
        }

        Ok(self.status)
    }

    pub fn place_mark(&mut self, index: usize) -> Result<GameStatus, InvalidMove> {
        self.apply_move(index, self.current_player)
    }

    pub fn check_win(&self, player: Player) -> bool {
        check_win(&self.board, player)
    }

    pub fn check_draw(&self) -> bool {
        check_draw(&self.board)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn check_game_over(&mut self) {
        if let Some((winner, lines)) = check_win_with_lines(&self.board) {
            self.status = GameStatus::Won(winner);
            self.winning_lines = lines;
            return;
        }

        self.winning_lines.clear();
        self.status = if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
    }
}
