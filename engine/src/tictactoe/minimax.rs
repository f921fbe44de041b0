use super::board::Board;
use super::types::{CELL_COUNT, GameOutcome, Mark};
use super::win_detector::evaluate;

pub const WIN_SCORE: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// Plain minimax over the whole remaining tree.
    Exhaustive,
    /// Same search with alpha-beta cutoffs. Picks the same move as
    /// `Exhaustive` for every position.
    AlphaBeta,
}

/// Picks the move with the strictly greatest minimax score for `bot_mark`,
/// scanning cells from index 0 so the earliest of equally good moves wins.
///
/// Returns `None` when the board has no empty cell or `bot_mark` is empty.
pub fn find_best_move(board: &Board, bot_mark: Mark, mode: SearchMode) -> Option<usize> {
    bot_mark.opponent()?;

    let mut board = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in 0..CELL_COUNT {
        if !board.is_empty(index) {
            continue;
        }

        board.set(index, bot_mark);
        let score = match mode {
            SearchMode::Exhaustive => minimax(&mut board, 0, false, bot_mark),
            SearchMode::AlphaBeta => {
                minimax_pruned(&mut board, 0, false, bot_mark, best_score, i32::MAX)
            }
        };
        board.clear(index);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Score of a finished position from `bot_mark`'s point of view, or `None`
/// while the game is still open. Faster wins and slower losses score higher.
fn terminal_score(board: &Board, depth: i32, bot_mark: Mark) -> Option<i32> {
    match evaluate(board) {
        GameOutcome::Win(winner) if winner == bot_mark => Some(WIN_SCORE - depth),
        GameOutcome::Win(_) => Some(depth - WIN_SCORE),
        GameOutcome::Tie => Some(0),
        GameOutcome::InProgress => None,
    }
}

pub fn minimax(board: &mut Board, depth: i32, is_maximizing: bool, bot_mark: Mark) -> i32 {
    if let Some(score) = terminal_score(board, depth, bot_mark) {
        return score;
    }

    let Some(opponent_mark) = bot_mark.opponent() else {
        return 0;
    };

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in 0..CELL_COUNT {
            if !board.is_empty(index) {
                continue;
            }

            board.set(index, bot_mark);
            let eval = minimax(board, depth + 1, false, bot_mark);
            board.clear(index);

            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in 0..CELL_COUNT {
            if !board.is_empty(index) {
                continue;
            }

            board.set(index, opponent_mark);
            let eval = minimax(board, depth + 1, true, bot_mark);
            board.clear(index);

            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}

/// Fail-soft: a node that falls outside `alpha..beta` returns the best score it
/// found rather than the window bound.
pub fn minimax_pruned(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(score) = terminal_score(board, depth, bot_mark) {
        return score;
    }

    let Some(opponent_mark) = bot_mark.opponent() else {
        return 0;
    };

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in 0..CELL_COUNT {
            if !board.is_empty(index) {
                continue;
            }

            board.set(index, bot_mark);
            let eval = minimax_pruned(board, depth + 1, false, bot_mark, alpha, beta);
            board.clear(index);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                return max_eval;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in 0..CELL_COUNT {
            if !board.is_empty(index) {
                continue;
            }

            board.set(index, opponent_mark);
            let eval = minimax_pruned(board, depth + 1, true, bot_mark, alpha, beta);
            board.clear(index);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                return min_eval;
            }
        }
        min_eval
    }
}
