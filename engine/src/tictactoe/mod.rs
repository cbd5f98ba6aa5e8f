mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use bot_controller::{
    BotInput, BotSettings, Difficulty, calculate_minimax_move, calculate_random_move,
    select_ai_move,
};
pub use game_state::{InvalidMove, TicTacToeGameState};
pub use types::{GameStatus, Mark, Player, WINNING_LINES, WinningLine};
pub use win_detector::{check_draw, check_win, check_win_with_lines};
