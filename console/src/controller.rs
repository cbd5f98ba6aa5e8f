use tictactoe_engine::SessionRng;
use tictactoe_engine::tictactoe::{
    BotInput, BotSettings, Difficulty, GameStatus, InvalidMove, Player, TicTacToeGameState,
    select_ai_move,
};

use crate::config::OpponentType;

pub const AI_PLAYER: Player = Player::O;

/// One game session: board state plus the settings that decide who plays O.
pub struct GameController {
    state: TicTacToeGameState,
    opponent: OpponentType,
    difficulty: Difficulty,
    bot_settings: BotSettings,
    rng: SessionRng,
}

impl GameController {
    pub fn new(
        opponent: OpponentType,
        difficulty: Difficulty,
        bot_settings: BotSettings,
        rng: SessionRng,
    ) -> Self {
        Self {
            state: TicTacToeGameState::new(),
            opponent,
            difficulty,
            bot_settings,
            rng,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn opponent(&self) -> OpponentType {
        self.opponent
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Applies a human move. Against the AI the human always plays X.
    pub fn handle_cell(&mut self, index: usize) -> Result<GameStatus, InvalidMove> {
        match self.opponent {
            OpponentType::Ai => self.state.apply_move(index, AI_PLAYER.opponent()),
            OpponentType::Human => self.state.place_mark(index),
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        self.opponent == OpponentType::Ai
            && self.state.status() == GameStatus::InProgress
            && self.state.current_player() == AI_PLAYER
    }

    /// Plays one AI move. `Ok(None)` when it is not the AI's turn or no cell is free.
    pub fn play_ai_turn(&mut self) -> Result<Option<(usize, GameStatus)>, InvalidMove> {
        if !self.is_ai_turn() {
            return Ok(None);
        }

        let input = BotInput::from_game_state(&self.state);
        let Some(index) =
            select_ai_move(&input, self.difficulty, &self.bot_settings, &mut self.rng)
        else {
            return Ok(None);
        };
        let status = self.apply_ai_move(index)?;
        Ok(Some((index, status)))
    }

    pub fn apply_ai_move(&mut self, index: usize) -> Result<GameStatus, InvalidMove> {
        self.state.apply_move(index, AI_PLAYER)
    }

    pub fn restart(&mut self) {
        self.state.reset();
    }

    pub fn set_opponent(&mut self, opponent: OpponentType) {
        self.opponent = opponent;
        self.restart();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.restart();
    }
}
