use crate::{SessionRng, log};
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::TicTacToeGameState;
use super::score::ScoreTally;
use super::types::{
    AI_MARK, CELL_COUNT, Difficulty, GameOutcome, GamePhase, HUMAN_MARK, Mark, MoveResult, Side,
    TurnState,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameStart {
    pub first_mover: Side,
    pub turn_state: TurnState,
}

/// A human playing a run of games against the computer.
///
/// The session owns the board, the turn order, the random source and the
/// score tally. Every call is synchronous and returns immediately, so a
/// presentation layer can invoke it directly or from its own timers (for
/// example to reveal the AI reply after a short pause).
pub struct TicTacToeSession {
    session_id: String,
    rng: SessionRng,
    difficulty: Option<Difficulty>,
    game: Option<TicTacToeGameState>,
    score: ScoreTally,
}

impl TicTacToeSession {
    pub fn new(session_id: impl Into<String>, rng: SessionRng) -> Self {
        Self {
            session_id: session_id.into(),
            rng,
            difficulty: None,
            game: None,
            score: ScoreTally::default(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new("local", SessionRng::new(seed))
    }

    pub fn from_random() -> Self {
        Self::new("local", SessionRng::from_random())
    }

    /// Selects a difficulty and begins a game with a random first mover.
    pub fn start_game(&mut self, difficulty: Difficulty) -> GameStart {
        let game = TicTacToeGameState::new(difficulty, &mut self.rng);
        self.begin(difficulty, game)
    }

    /// Begins another game at the current difficulty with a fresh random
    /// first mover. Fails while no difficulty has been chosen.
    pub fn play_again(&mut self) -> Result<GameStart, String> {
        let Some(difficulty) = self.difficulty else {
            return Err("No difficulty selected".to_string());
        };
        Ok(self.start_game(difficulty))
    }

    pub fn restart(&mut self) -> Result<GameStart, String> {
        self.play_again()
    }

    /// Abandons the current game and returns to difficulty selection.
    pub fn change_difficulty(&mut self) {
        if self
            .game
            .as_ref()
            .is_some_and(|game| game.turn_state().game_active)
        {
            log!("[session:{}] Game abandoned for difficulty change", self.session_id);
        }
        self.difficulty = None;
        self.game = None;
    }

    fn begin(&mut self, difficulty: Difficulty, game: TicTacToeGameState) -> GameStart {
        let start = GameStart {
            first_mover: game.first_mover(),
            turn_state: game.turn_state(),
        };
        log!(
            "[session:{}] New game: difficulty={}, first mover={}, seed={}",
            self.session_id,
            difficulty,
            start.first_mover,
            self.rng.seed()
        );
        self.difficulty = Some(difficulty);
        self.game = Some(game);
        start
    }

    /// Plays the human mark at `index`.
    ///
    /// Moves out of turn, onto an occupied cell, or outside a running game
    /// are ignored and come back with `applied: None`. An index outside the
    /// board is a caller bug and is reported as an error.
    pub fn attempt_move(&mut self, index: usize) -> Result<MoveResult, String> {
        if index >= CELL_COUNT {
            return Err(format!(
                "Cell index {} out of range 0..{}",
                index, CELL_COUNT
            ));
        }
        Ok(self.apply_move(HUMAN_MARK, index))
    }

    /// Lets the computer choose and play its move at the current difficulty.
    /// Does nothing unless a game is running and it is the computer's turn.
    pub fn request_ai_move(&mut self) -> MoveResult {
        let Some(game) = self.game.as_ref() else {
            return MoveResult::rejected(Board::new());
        };

        if !self.is_ai_turn() {
            return MoveResult::rejected(*game.board());
        }

        let input = BotInput::from_game_state(game);
        let Some(index) = calculate_move(game.difficulty(), &input, &mut self.rng) else {
            log!("[session:{}] AI found no legal move", self.session_id);
            return MoveResult::rejected(*game.board());
        };

        log!(
            "[session:{}] AI ({}) plays cell {}",
            self.session_id,
            game.difficulty(),
            index
        );
        self.apply_move(AI_MARK, index)
    }

    fn apply_move(&mut self, mark: Mark, index: usize) -> MoveResult {
        let Some(game) = self.game.as_mut() else {
            return MoveResult::rejected(Board::new());
        };

        if let Err(e) = game.place_mark(mark, index) {
            log!(
                "[session:{}] Rejected {} at cell {}: {}",
                self.session_id,
                mark,
                index,
                e
            );
            return MoveResult::rejected(*game.board());
        }

        let outcome = game.outcome();
        let mut result = MoveResult {
            applied: Some(index),
            board: *game.board(),
            outcome: None,
            winning_line: None,
        };

        if outcome.is_terminal() {
            result.outcome = Some(outcome);
            result.winning_line = game.winning_line();
            self.score.record(outcome);
            log!(
                "[session:{}] Game over: {:?}, line={:?}, score: {}",
                self.session_id,
                outcome,
                result.winning_line,
                self.score
            );
        }

        result
    }

    pub fn phase(&self) -> GamePhase {
        match &self.game {
            None => GamePhase::Setup,
            Some(game) if game.turn_state().game_active => GamePhase::InProgress,
            Some(_) => GamePhase::Terminal,
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        self.game.as_ref().is_some_and(|game| {
            let turn = game.turn_state();
            turn.game_active && turn.active_player.side() == Some(Side::Ai)
        })
    }

    pub fn current_outcome(&self) -> Option<GameOutcome> {
        self.game.as_ref().map(|game| game.outcome())
    }

    pub fn current_turn_state(&self) -> Option<TurnState> {
        self.game.as_ref().map(|game| game.turn_state())
    }

    pub fn board(&self) -> Board {
        self.game
            .as_ref()
            .map(|game| *game.board())
            .unwrap_or_default()
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn score_tally(&self) -> ScoreTally {
        self.score
    }

    pub fn reset_score(&mut self) {
        self.score = ScoreTally::default();
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
