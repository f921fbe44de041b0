use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to write config as YAML: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        if content.trim().is_empty() {
            return Err("Config file is empty".to_string());
        }
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to parse YAML config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Difficulty;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Pacing {
        difficulty: Difficulty,
        reply_delay_ms: u64,
    }

    #[test]
    fn test_difficulty_is_written_in_lowercase() {
        let pacing = Pacing {
            difficulty: Difficulty::Hard,
            reply_delay_ms: 500,
        };

        let yaml = YamlConfigSerializer::new().serialize(&pacing).unwrap();

        assert!(yaml.contains("difficulty: hard"));
        assert_eq!(YamlConfigSerializer::new().deserialize(&yaml), Ok(pacing));
    }

    #[test]
    fn test_blank_content_is_rejected() {
        let result: Result<Pacing, String> = YamlConfigSerializer::new().deserialize("  \n");
        assert_eq!(result, Err("Config file is empty".to_string()));
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let result: Result<Pacing, String> =
            YamlConfigSerializer::new().deserialize("difficulty: [unterminated");
        assert!(result.unwrap_err().starts_with("Failed to parse YAML config"));
    }
}
