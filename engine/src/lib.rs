pub mod config;
pub mod logger;
mod session_rng;
pub mod tictactoe;

pub use session_rng::SessionRng;
pub use tictactoe::{
    AI_MARK, Board, Difficulty, GameOutcome, GamePhase, GameStart, HUMAN_MARK, Mark, MoveResult,
    ScoreTally, Side, TicTacToeSession, TurnState, WinLine,
};
