use serde::{Deserialize, Serialize};
use tictactoe_engine::Difficulty;
use tictactoe_engine::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};

pub const CONFIG_FILE: &str = "tictactoe_console_config.yaml";
const MAX_DELAY_MS: u64 = 10_000;

pub fn get_config_manager(
    file_path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path.unwrap_or(CONFIG_FILE))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameConfig,
    pub log_prefix: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if self.log_prefix.as_deref().is_some_and(str::is_empty) {
            return Err("log_prefix must not be empty when set".to_string());
        }
        Ok(())
    }
}

/// Pacing of the console game. The engine itself never waits; these delays
/// only decide when the console asks it for the next step.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub default_difficulty: Option<Difficulty>,
    pub ai_reply_delay_ms: u64,
    pub ai_first_move_delay_ms: u64,
    pub result_delay_ms: u64,
    pub seed: Option<u64>,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("ai_reply_delay_ms", self.ai_reply_delay_ms),
            ("ai_first_move_delay_ms", self.ai_first_move_delay_ms),
            ("result_delay_ms", self.result_delay_ms),
        ] {
            if value > MAX_DELAY_MS {
                return Err(format!("{} must not exceed {}", name, MAX_DELAY_MS));
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_difficulty: None,
            ai_reply_delay_ms: 500,
            ai_first_move_delay_ms: 1000,
            result_delay_ms: 1000,
            seed: None,
        }
    }
}
