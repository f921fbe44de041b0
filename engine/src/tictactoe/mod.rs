mod board;
mod bot_controller;
mod game_state;
mod minimax;
mod score;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotInput, calculate_medium_move, calculate_minimax_move, calculate_move,
    calculate_random_move,
};
pub use game_state::TicTacToeGameState;
pub use minimax::{SearchMode, WIN_SCORE, find_best_move, minimax, minimax_pruned};
pub use score::ScoreTally;
pub use session::{GameStart, TicTacToeSession};
pub use types::{
    AI_MARK, BOARD_SIZE, CELL_COUNT, Difficulty, GameOutcome, GamePhase, HUMAN_MARK, Mark,
    MoveResult, Side, TurnState, WIN_LINES, WinLine,
};
pub use win_detector::{check_win, check_win_with_line, evaluate};
