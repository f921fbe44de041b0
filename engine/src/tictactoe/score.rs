use std::fmt;

use super::types::{AI_MARK, GameOutcome, HUMAN_MARK};

/// Results across every game played in a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreTally {
    pub player_wins: u32,
    pub ai_wins: u32,
    pub ties: u32,
}

impl ScoreTally {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(mark) if mark == HUMAN_MARK => self.player_wins += 1,
            GameOutcome::Win(mark) if mark == AI_MARK => self.ai_wins += 1,
            GameOutcome::Tie => self.ties += 1,
            _ => {}
        }
    }
}

impl fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "you {} / AI {} / ties {}",
            self.player_wins, self.ai_wins, self.ties
        )
    }
}
