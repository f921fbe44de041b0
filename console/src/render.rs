use tictactoe_engine::tictactoe::BOARD_SIZE;
use tictactoe_engine::{AI_MARK, Board, GameOutcome, HUMAN_MARK, Mark, ScoreTally, WinLine};

/// Draws the board with 1-based numbers in free cells and the winning line,
/// if any, wrapped in brackets.
pub fn render_board(board: &Board, winning_line: Option<WinLine>) -> String {
    let mut rows = Vec::with_capacity(BOARD_SIZE);
    for row in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| {
                let index = row * BOARD_SIZE + col;
                let symbol = match board.get(index) {
                    Mark::Empty => (index + 1).to_string(),
                    mark => mark.to_string(),
                };
                if winning_line.is_some_and(|line| line.contains(index)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }
    rows.join("\n---+---+---\n")
}

pub fn outcome_message(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::Win(mark) if mark == HUMAN_MARK => "You win!",
        GameOutcome::Win(mark) if mark == AI_MARK => "AI wins!",
        GameOutcome::Tie => "It's a tie!",
        _ => "Game in progress",
    }
}

pub fn score_line(score: &ScoreTally) -> String {
    format!(
        "Score: you {} | AI {} | ties {}",
        score.player_wins, score.ai_wins, score.ties
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board_shows_cell_numbers() {
        let rendered = render_board(&Board::new(), None);
        assert_eq!(
            rendered,
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_render_highlights_winning_line() {
        let board: Board = "XXXOO....".parse().unwrap();
        let rendered = render_board(&board, Some(WinLine([0, 1, 2])));
        assert!(rendered.starts_with("[X]|[X]|[X]\n"));
        assert!(rendered.contains(" O | O | 6 "));
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(outcome_message(GameOutcome::Win(Mark::X)), "You win!");
        assert_eq!(outcome_message(GameOutcome::Win(Mark::O)), "AI wins!");
        assert_eq!(outcome_message(GameOutcome::Tie), "It's a tie!");
    }
}
