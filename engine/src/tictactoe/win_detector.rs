use super::board::Board;
use super::types::{GameOutcome, Mark, WIN_LINES, WinLine};

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

/// First completed line in enumeration order, with the mark that filled it.
pub fn check_win_with_line(board: &Board) -> Option<(Mark, WinLine)> {
    WIN_LINES.iter().find_map(|line| {
        let [a, b, c] = line.cells();
        let mark = board.get(a);
        if mark != Mark::Empty && mark == board.get(b) && mark == board.get(c) {
            Some((mark, *line))
        } else {
            None
        }
    })
}

pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(mark) = check_win(board) {
        GameOutcome::Win(mark)
    } else if board.is_full() {
        GameOutcome::Tie
    } else {
        GameOutcome::InProgress
    }
}
