use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SessionRng;
use crate::config::Validate;
use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::types::Player;
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "normal" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BotSettings {
    /// Chance that a medium bot plays the minimax move instead of a random one.
    pub medium_minimax_probability: f64,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            medium_minimax_probability: 0.5,
        }
    }
}

impl Validate for BotSettings {
    fn validate(&self) -> Result<(), String> {
        let p = self.medium_minimax_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(format!(
                "medium_minimax_probability must be between 0 and 1, got {}",
                p
            ));
        }
        Ok(())
    }
}

/// Snapshot handed to the bot. The search mutates only this copy of the board.
#[derive(Clone, Copy, Debug)]
pub struct BotInput {
    pub board: Board,
    pub bot_player: Player,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            bot_player: state.current_player(),
        }
    }
}

/// Picks a cell for the bot, or `None` when the board is full.
pub fn select_ai_move(
    input: &BotInput,
    difficulty: Difficulty,
    settings: &BotSettings,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(input, rng),
        Difficulty::Hard => calculate_minimax_move(input),
        Difficulty::Medium => {
            if rng.chance(settings.medium_minimax_probability) {
                calculate_minimax_move(input)
            } else {
                calculate_random_move(input, rng)
            }
        }
    }
}

pub fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = input.board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Full-depth minimax. Ties resolve to the lowest cell index.
pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let bot_player = input.bot_player;
    let available_moves = input.board.available_moves();

    if available_moves.is_empty() {
        return None;
    }

    let mut board = input.board;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in available_moves {
        board.set(index, bot_player.mark());

        let score = minimax(&mut board, 0, false, bot_player, i32::MIN, i32::MAX);

        board.clear(index);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_player: Player,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if check_win(board, bot_player) {
        return WIN_SCORE - depth;
    }
    if check_win(board, bot_player.opponent()) {
        return depth - WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in board.available_moves() {
            board.set(index, bot_player.mark());
            let eval = minimax(board, depth + 1, false, bot_player, alpha, beta);
            board.clear(index);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let opponent_mark = bot_player.opponent().mark();
        let mut min_eval = i32::MAX;
        for index in board.available_moves() {
            board.set(index, opponent_mark);
            let eval = minimax(board, depth + 1, true, bot_player, alpha, beta);
            board.clear(index);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{GameStatus, Mark};

    fn input(s: &str, bot_player: Player) -> BotInput {
        BotInput {
            board: Board::parse(s).unwrap(),
            bot_player,
        }
    }

    /// Plain minimax without pruning, scored for O.
    fn reference_score(board: &mut Board, depth: i32, o_to_move: bool) -> i32 {
        if check_win(board, Player::O) {
            return WIN_SCORE - depth;
        }
        if check_win(board, Player::X) {
            return depth - WIN_SCORE;
        }
        if board.is_full() {
            return 0;
        }
        let mark = if o_to_move { Mark::O } else { Mark::X };
        let scores = board.available_moves().into_iter().map(|index| {
            board.set(index, mark);
            let score = reference_score(board, depth + 1, !o_to_move);
            board.clear(index);
            score
        });
        let scores: Vec<i32> = scores.collect();
        if o_to_move {
            scores.into_iter().max().unwrap()
        } else {
            scores.into_iter().min().unwrap()
        }
    }

    #[test]
    fn test_hard_answers_center_with_corner() {
        let input = input("....X....", Player::O);
        let mv = calculate_minimax_move(&input).unwrap();
        assert!([0, 2, 6, 8].contains(&mv), "got {}", mv);
        assert_eq!(mv, 0);
    }

    #[test]
    fn test_hard_takes_immediate_win() {
        let input = input("OO.XX.X..", Player::O);
        assert_eq!(calculate_minimax_move(&input), Some(2));
    }

    #[test]
    fn test_hard_blocks_threat() {
        let input = input("XX..O....", Player::O);
        assert_eq!(calculate_minimax_move(&input), Some(2));
    }

    #[test]
    fn test_hard_works_for_x_too() {
        let input = input("XX.OO....", Player::X);
        assert_eq!(calculate_minimax_move(&input), Some(2));
    }

    #[test]
    fn test_pruned_search_matches_plain_minimax() {
        for s in ["....X....", "X...O....", "XX..O....", "X.O.X....", "X........"] {
            let input = input(s, Player::O);
            let mut board = input.board;
            let mv = calculate_minimax_move(&input).unwrap();

            let mut best: Option<(usize, i32)> = None;
            for index in board.available_moves() {
                board.set(index, Mark::O);
                let score = reference_score(&mut board, 0, false);
                board.clear(index);
                if best.is_none_or(|(_, b)| score > b) {
                    best = Some((index, score));
                }
            }

            assert_eq!(Some(mv), best.map(|(index, _)| index), "board {}", s);
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let input = input("XOXOXOOXO", Player::O);
        let mut rng = SessionRng::new(1);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(
                select_ai_move(&input, difficulty, &BotSettings::default(), &mut rng),
                None
            );
        }
    }

    #[test]
    fn test_easy_with_single_empty_cell() {
        let input = input("XOXOX.OXO", Player::O);
        for seed in 0..64 {
            let mut rng = SessionRng::new(seed);
            assert_eq!(calculate_random_move(&input, &mut rng), Some(5));
        }
    }

    #[test]
    fn test_easy_picks_only_empty_cells() {
        let input = input("X.O.X.O..", Player::X);
        let mut seen = std::collections::HashSet::new();
        let mut rng = SessionRng::new(99);
        for _ in 0..200 {
            let mv = select_ai_move(&input, Difficulty::Easy, &BotSettings::default(), &mut rng)
                .unwrap();
            assert!(input.board.is_valid_move(mv));
            seen.insert(mv);
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_medium_always_minimax_when_probability_is_one() {
        let settings = BotSettings {
            medium_minimax_probability: 1.0,
        };
        let input = input("XX..O....", Player::O);
        for seed in 0..16 {
            let mut rng = SessionRng::new(seed);
            assert_eq!(
                select_ai_move(&input, Difficulty::Medium, &settings, &mut rng),
                Some(2)
            );
        }
    }

    #[test]
    fn test_medium_always_random_when_probability_is_zero() {
        let settings = BotSettings {
            medium_minimax_probability: 0.0,
        };
        let input = input("XX..O....", Player::O);
        let mut seen = std::collections::HashSet::new();
        for seed in 0..64 {
            let mut rng = SessionRng::new(seed);
            let mv = select_ai_move(&input, Difficulty::Medium, &settings, &mut rng).unwrap();
            assert!(input.board.is_valid_move(mv));
            seen.insert(mv);
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_selector_does_not_touch_game_state() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(4).unwrap();
        let before = state.clone();

        let input = BotInput::from_game_state(&state);
        assert_eq!(input.bot_player, Player::O);
        let mut rng = SessionRng::new(3);
        select_ai_move(&input, Difficulty::Hard, &BotSettings::default(), &mut rng);

        assert_eq!(state, before);
    }

    #[test]
    fn test_hard_vs_hard_is_draw() {
        let mut state = TicTacToeGameState::new();
        while !state.status().is_terminal() {
            let mv = calculate_minimax_move(&BotInput::from_game_state(&state)).unwrap();
            state.place_mark(mv).unwrap();
        }
        assert_eq!(state.status(), GameStatus::Draw);
    }

    fn assert_o_never_loses(state: &TicTacToeGameState) {
        match state.status() {
            GameStatus::Won(winner) => {
                assert_eq!(winner, Player::O, "X won on {}", state.board());
                return;
            }
            GameStatus::Draw => return,
            GameStatus::InProgress => {}
        }

        for index in state.board().available_moves() {
            let mut next = state.clone();
            next.apply_move(index, Player::X).unwrap();
            if !next.status().is_terminal() {
                let reply = calculate_minimax_move(&BotInput::from_game_state(&next)).unwrap();
                next.apply_move(reply, Player::O).unwrap();
            }
            assert_o_never_loses(&next);
        }
    }

    #[test]
    fn test_hard_never_loses_as_o() {
        assert_o_never_loses(&TicTacToeGameState::new());
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("normal".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("expert".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn test_bot_settings_validation() {
        assert!(BotSettings::default().validate().is_ok());
        let bad = BotSettings {
            medium_minimax_probability: 1.5,
        };
        assert!(bad.validate().is_err());
    }
}
