use tictactoe_engine::Difficulty;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    PlayAgain,
    ChangeDifficulty,
    Score,
    Help,
    Quit,
}

/// Parses one line of player input. Cells are typed 1-9 and come back as
/// 0-based indices.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim().to_ascii_lowercase();
    match trimmed.as_str() {
        "r" | "again" | "restart" => Some(Command::PlayAgain),
        "d" | "difficulty" => Some(Command::ChangeDifficulty),
        "s" | "score" => Some(Command::Score),
        "h" | "help" | "?" => Some(Command::Help),
        "q" | "quit" | "exit" => Some(Command::Quit),
        other => match other.parse::<usize>() {
            Ok(cell @ 1..=9) => Some(Command::Place(cell - 1)),
            _ => None,
        },
    }
}

pub fn parse_difficulty(line: &str) -> Result<Difficulty, String> {
    match line.trim() {
        "1" => Ok(Difficulty::Easy),
        "2" => Ok(Difficulty::Medium),
        "3" => Ok(Difficulty::Hard),
        other => other.parse(),
    }
}

pub const HELP: &str = "Commands: 1-9 place a mark, r play again, d change difficulty, s score, q quit";
