use std::time::Duration;

use tictactoe_engine::{GamePhase, MoveResult, Side, TicTacToeSession, log};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::command::{Command, HELP, parse_command, parse_difficulty};
use crate::config::GameConfig;
use crate::render::{outcome_message, render_board, score_line};

pub struct ConsoleRunner {
    session: TicTacToeSession,
    config: GameConfig,
    input: Lines<BufReader<Stdin>>,
}

impl ConsoleRunner {
    pub fn new(session: TicTacToeSession, config: GameConfig) -> Self {
        Self {
            session,
            config,
            input: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    pub async fn run(mut self) -> std::io::Result<()> {
        println!("Tic-tac-toe: you play X, the computer plays O.");
        println!("{}", HELP);

        if let Some(difficulty) = self.config.default_difficulty {
            let start = self.session.start_game(difficulty);
            self.begin_game(start.first_mover).await;
        }

        loop {
            if self.session.phase() == GamePhase::Setup {
                println!("Choose difficulty: 1) easy  2) medium  3) hard  (q to quit)");
                let Some(line) = self.input.next_line().await? else {
                    break;
                };
                if parse_command(&line) == Some(Command::Quit) {
                    break;
                }
                match parse_difficulty(&line) {
                    Ok(difficulty) => {
                        let start = self.session.start_game(difficulty);
                        self.begin_game(start.first_mover).await;
                    }
                    Err(e) => println!("{}", e),
                }
                continue;
            }

            if self.session.phase() == GamePhase::InProgress {
                println!("Your move (1-9):");
            } else {
                println!("r to play again, d to change difficulty, q to quit");
            }

            let Some(line) = self.input.next_line().await? else {
                break;
            };

            match parse_command(&line) {
                Some(Command::Place(index)) => self.human_move(index).await,
                Some(Command::PlayAgain) => match self.session.play_again() {
                    Ok(start) => self.begin_game(start.first_mover).await,
                    Err(e) => println!("{}", e),
                },
                Some(Command::ChangeDifficulty) => self.session.change_difficulty(),
                Some(Command::Score) => println!("{}", score_line(&self.session.score_tally())),
                Some(Command::Help) => println!("{}", HELP),
                Some(Command::Quit) => break,
                None => println!("Unknown command. {}", HELP),
            }
        }

        println!("{}", score_line(&self.session.score_tally()));
        Ok(())
    }

    async fn begin_game(&mut self, first_mover: Side) {
        let difficulty = self
            .session
            .difficulty()
            .map(|d| d.to_string())
            .unwrap_or_default();
        match first_mover {
            Side::Human => println!("You go first ({}).", difficulty),
            Side::Ai => println!("AI goes first ({}).", difficulty),
        }
        println!("{}", render_board(&self.session.board(), None));

        if self.session.is_ai_turn() {
            self.ai_move(self.config.ai_first_move_delay_ms).await;
        }
    }

    async fn human_move(&mut self, index: usize) {
        let result = match self.session.attempt_move(index) {
            Ok(result) => result,
            Err(e) => {
                log!("Invalid move request: {}", e);
                println!("{}", e);
                return;
            }
        };

        if !result.is_accepted() {
            if self.session.phase() == GamePhase::InProgress {
                println!("Cell {} is taken.", index + 1);
            }
            return;
        }

        if self.show(&result).await {
            return;
        }

        if self.session.is_ai_turn() {
            self.ai_move(self.config.ai_reply_delay_ms).await;
        }
    }

    async fn ai_move(&mut self, delay_ms: u64) {
        println!("AI thinking...");
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        let result = self.session.request_ai_move();
        if let Some(index) = result.applied {
            println!("AI plays {}.", index + 1);
        }
        self.show(&result).await;
    }

    /// Prints the board after a move and, once the game is over, the result
    /// after the configured pause. Returns whether the game ended.
    async fn show(&self, result: &MoveResult) -> bool {
        println!("{}", render_board(&result.board, result.winning_line));

        let Some(outcome) = result.outcome else {
            return false;
        };

        tokio::time::sleep(Duration::from_millis(self.config.result_delay_ms)).await;
        println!("{}", outcome_message(outcome));
        println!("{}", score_line(&self.session.score_tally()));
        true
    }
}
