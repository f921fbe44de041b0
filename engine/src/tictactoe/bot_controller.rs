use crate::SessionRng;
use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::minimax::{SearchMode, find_best_move};
use super::types::{Difficulty, Mark};
use super::win_detector::check_win;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            current_mark: state.turn_state().active_player,
        }
    }
}

/// Chooses a cell for `input.current_mark` at the given difficulty. `None`
/// means the board has no empty cell left.
pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(input, rng),
        Difficulty::Medium => calculate_medium_move(input, rng),
        Difficulty::Hard => calculate_minimax_move(input),
    }
}

pub fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = input.board.available_moves();
    rng.choose(&available_moves)
}

/// Wins if it can, otherwise blocks an immediate loss, otherwise plays at
/// random. Forks are not seen coming.
pub fn calculate_medium_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let bot_mark = input.current_mark;
    let opponent_mark = bot_mark.opponent()?;
    let available_moves = input.board.available_moves();

    if available_moves.is_empty() {
        return None;
    }

    let mut board = input.board;

    if let Some(index) = find_winning_move(&mut board, bot_mark, &available_moves) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(&mut board, opponent_mark, &available_moves) {
        return Some(index);
    }

    calculate_random_move(input, rng)
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    find_best_move(&input.board, input.current_mark, SearchMode::AlphaBeta)
}

fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &index in moves {
        board.set(index, mark);
        let winner = check_win(board);
        board.clear(index);

        if winner == Some(mark) {
            return Some(index);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(cells: &str, current_mark: Mark) -> BotInput {
        BotInput {
            board: cells.parse().unwrap(),
            current_mark,
        }
    }

    #[test]
    fn test_easy_always_picks_empty_cell() {
        let bot_input = input("XO.X.O.X.", Mark::O);
        for seed in 0..200 {
            let mut rng = SessionRng::new(seed);
            let index = calculate_move(Difficulty::Easy, &bot_input, &mut rng).unwrap();
            assert!(bot_input.board.is_empty(index));
        }
    }

    #[test]
    fn test_easy_reaches_every_empty_cell() {
        let bot_input = input("X...O....", Mark::O);
        let mut rng = SessionRng::new(3);
        let mut hits = [false; 9];
        for _ in 0..500 {
            hits[calculate_random_move(&bot_input, &mut rng).unwrap()] = true;
        }
        for index in bot_input.board.available_moves() {
            assert!(hits[index], "cell {} never chosen", index);
        }
        assert!(!hits[0] && !hits[4]);
    }

    #[test]
    fn test_medium_prefers_win_over_block() {
        let bot_input = input("XX.OO....", Mark::O);
        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            assert_eq!(
                calculate_move(Difficulty::Medium, &bot_input, &mut rng),
                Some(5)
            );
        }
    }

    #[test]
    fn test_medium_blocks_opponent() {
        let bot_input = input("XX.O.....", Mark::O);
        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            assert_eq!(
                calculate_move(Difficulty::Medium, &bot_input, &mut rng),
                Some(2)
            );
        }
    }

    #[test]
    fn test_medium_falls_back_to_random_empty_cell() {
        let bot_input = input("X...O....", Mark::O);
        for seed in 0..50 {
            let mut rng = SessionRng::new(seed);
            let index = calculate_move(Difficulty::Medium, &bot_input, &mut rng).unwrap();
            assert!(bot_input.board.is_empty(index));
        }
    }

    #[test]
    fn test_medium_leaves_board_untouched() {
        let bot_input = input("XX.OO....", Mark::O);
        let before = bot_input.board;
        let mut rng = SessionRng::new(1);
        calculate_medium_move(&bot_input, &mut rng);
        assert_eq!(bot_input.board, before);
    }

    #[test]
    fn test_hard_opens_in_corner_or_center() {
        let bot_input = input(".........", Mark::O);
        let mut rng = SessionRng::new(0);
        let index = calculate_move(Difficulty::Hard, &bot_input, &mut rng);
        assert!(matches!(index, Some(0 | 2 | 4 | 6 | 8)));
    }

    #[test]
    fn test_full_board_has_no_move_at_any_difficulty() {
        let bot_input = input("XOXXOOOXX", Mark::O);
        let mut rng = SessionRng::new(9);
        for difficulty in Difficulty::ALL {
            assert_eq!(calculate_move(difficulty, &bot_input, &mut rng), None);
        }
    }

    fn assert_hard_never_loses(board: &mut Board, to_move: Mark, games: &mut usize) {
        match check_win(board) {
            Some(winner) => {
                assert_ne!(winner, Mark::X, "hard bot lost on\n{}", board);
                *games += 1;
                return;
            }
            None if board.is_full() => {
                *games += 1;
                return;
            }
            None => {}
        }

        if to_move == Mark::O {
            let bot_input = BotInput {
                board: *board,
                current_mark: Mark::O,
            };
            let index = calculate_minimax_move(&bot_input).unwrap();
            board.set(index, Mark::O);
            assert_hard_never_loses(board, Mark::X, games);
            board.clear(index);
        } else {
            for index in board.available_moves() {
                board.set(index, Mark::X);
                assert_hard_never_loses(board, Mark::O, games);
                board.clear(index);
            }
        }
    }

    #[test]
    fn test_hard_never_loses_to_any_human_sequence() {
        let mut games = 0;
        assert_hard_never_loses(&mut Board::new(), Mark::X, &mut games);
        assert_hard_never_loses(&mut Board::new(), Mark::O, &mut games);
        assert!(games > 100);
    }
}
