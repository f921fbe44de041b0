use crate::SessionRng;
use super::board::Board;
use super::types::{CELL_COUNT, Difficulty, GameOutcome, Mark, Side, TurnState, WinLine};
use super::win_detector::{check_win_with_line, evaluate};

/// One game from the first move to a win or tie.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    difficulty: Difficulty,
    first_mover: Side,
    turn_state: TurnState,
    outcome: GameOutcome,
    winning_line: Option<WinLine>,
}

impl TicTacToeGameState {
    pub fn new(difficulty: Difficulty, rng: &mut SessionRng) -> Self {
        let first_mover = if rng.random_bool() {
            Side::Human
        } else {
            Side::Ai
        };
        Self::with_first_mover(difficulty, first_mover)
    }

    pub fn with_first_mover(difficulty: Difficulty, first_mover: Side) -> Self {
        Self {
            board: Board::new(),
            difficulty,
            first_mover,
            turn_state: TurnState {
                active_player: first_mover.mark(),
                game_active: true,
            },
            outcome: GameOutcome::InProgress,
            winning_line: None,
        }
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<(), String> {
        if !self.turn_state.game_active {
            return Err("Game is already over".to_string());
        }

        if mark != self.turn_state.active_player {
            return Err("Not your turn".to_string());
        }

        if index >= CELL_COUNT {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.is_empty(index) {
            return Err("Cell is already marked".to_string());
        }

        self.board.place(index, mark)?;

        self.check_game_over();

        if self.turn_state.game_active {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.turn_state.active_player.opponent() {
            self.turn_state.active_player = next;
        }
    }

    fn check_game_over(&mut self) {
        self.winning_line = check_win_with_line(&self.board).map(|(_, line)| line);
        self.outcome = evaluate(&self.board);

        if self.outcome.is_terminal() {
            self.turn_state.game_active = false;
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn first_mover(&self) -> Side {
        self.first_mover
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn_state
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::types::{AI_MARK, HUMAN_MARK};

    #[test]
    fn test_first_mover_owns_first_turn() {
        let human_first = TicTacToeGameState::with_first_mover(Difficulty::Easy, Side::Human);
        assert_eq!(human_first.turn_state().active_player, HUMAN_MARK);

        let ai_first = TicTacToeGameState::with_first_mover(Difficulty::Easy, Side::Ai);
        assert_eq!(ai_first.turn_state().active_player, AI_MARK);
        assert!(ai_first.turn_state().game_active);
    }

    #[test]
    fn test_random_first_mover_hits_both_sides() {
        let mut rng = SessionRng::new(11);
        let mut sides = Vec::new();
        for _ in 0..64 {
            sides.push(TicTacToeGameState::new(Difficulty::Hard, &mut rng).first_mover());
        }
        assert!(sides.contains(&Side::Human));
        assert!(sides.contains(&Side::Ai));
    }

    #[test]
    fn test_place_mark_switches_turn() {
        let mut state = TicTacToeGameState::with_first_mover(Difficulty::Medium, Side::Human);

        state.place_mark(Mark::X, 4).unwrap();

        assert_eq!(state.turn_state().active_player, Mark::O);
        assert_eq!(state.board().get(4), Mark::X);
        assert_eq!(state.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn test_place_mark_rejects_wrong_turn_and_occupied_cell() {
        let mut state = TicTacToeGameState::with_first_mover(Difficulty::Medium, Side::Human);

        assert_eq!(state.place_mark(Mark::O, 0), Err("Not your turn".to_string()));
        state.place_mark(Mark::X, 0).unwrap();
        assert_eq!(
            state.place_mark(Mark::O, 0),
            Err("Cell is already marked".to_string())
        );
        assert_eq!(
            state.place_mark(Mark::O, 12),
            Err("Position out of bounds".to_string())
        );
        assert_eq!(state.turn_state().active_player, Mark::O);
    }

    #[test]
    fn test_win_ends_game_and_keeps_turn() {
        let mut state = TicTacToeGameState::with_first_mover(Difficulty::Easy, Side::Human);
        for (mark, index) in [(Mark::X, 0), (Mark::O, 3), (Mark::X, 1), (Mark::O, 4), (Mark::X, 2)] {
            state.place_mark(mark, index).unwrap();
        }

        assert_eq!(state.outcome(), GameOutcome::Win(Mark::X));
        assert_eq!(state.winning_line(), Some(WinLine([0, 1, 2])));
        assert!(!state.turn_state().game_active);
        assert_eq!(state.turn_state().active_player, Mark::X);
        assert_eq!(
            state.place_mark(Mark::X, 8),
            Err("Game is already over".to_string())
        );
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let mut state = TicTacToeGameState::with_first_mover(Difficulty::Easy, Side::Human);
        // X O X / X O O / O X X
        for (mark, index) in [
            (Mark::X, 0),
            (Mark::O, 1),
            (Mark::X, 2),
            (Mark::O, 4),
            (Mark::X, 3),
            (Mark::O, 5),
            (Mark::X, 7),
            (Mark::O, 6),
            (Mark::X, 8),
        ] {
            state.place_mark(mark, index).unwrap();
        }

        assert_eq!(state.outcome(), GameOutcome::Tie);
        assert_eq!(state.winning_line(), None);
        assert!(!state.turn_state().game_active);
    }
}
