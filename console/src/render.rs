use tictactoe_engine::tictactoe::{GameStatus, Mark, TicTacToeGameState};

pub fn status_text(state: &TicTacToeGameState) -> String {
    match state.status() {
        GameStatus::InProgress => format!("Player {}'s turn", state.current_player()),
        GameStatus::Won(player) => format!("Player {} wins!", player),
        GameStatus::Draw => "Game ended in a draw!".to_string(),
    }
}

/// Draws the grid. Empty cells show their 1-based number, winning cells are bracketed.
pub fn render_board(state: &TicTacToeGameState) -> String {
    let winning_cells = state.winning_cells();
    let cells: Vec<String> = state
        .board()
        .cells()
        .iter()
        .enumerate()
        .map(|(index, mark)| {
            let symbol = match mark {
                Mark::Empty => (index + 1).to_string(),
                Mark::X => "X".to_string(),
                Mark::O => "O".to_string(),
            };
            if winning_cells.contains(&index) {
                format!("[{}]", symbol)
            } else {
                format!(" {} ", symbol)
            }
        })
        .collect();

    cells
        .chunks(3)
        .map(|row| row.join("|"))
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}
