use super::board::Board;
use super::types::{Player, WINNING_LINES, WinningLine};

fn line_complete(board: &Board, line: &WinningLine, player: Player) -> bool {
    let mark = player.mark();
    line.indices()
        .iter()
        .all(|&index| board.get(index) == Some(mark))
}

pub fn check_win(board: &Board, player: Player) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line_complete(board, line, player))
}

/// A full board only counts as a draw when nobody completed a line.
pub fn check_draw(board: &Board) -> bool {
    board.is_full() && !check_win(board, Player::X) && !check_win(board, Player::O)
}

/// Returns the winner with every line it completed, in table order.
pub fn check_win_with_lines(board: &Board) -> Option<(Player, Vec<WinningLine>)> {
    [Player::X, Player::O].into_iter().find_map(|player| {
        let lines: Vec<WinningLine> = WINNING_LINES
            .iter()
            .filter(|line| line_complete(board, line, player))
            .copied()
            .collect();
        (!lines.is_empty()).then_some((player, lines))
    })
}
