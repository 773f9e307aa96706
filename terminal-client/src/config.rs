use serde::{Deserialize, Serialize};
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_common::games::tictactoe::FirstPlayerMode;

pub const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
const MAX_AI_DELAY_MS: u64 = 10_000;

pub fn get_default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(path: &str) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

/// `Ask` prompts before the game starts, the rest map onto [`FirstPlayerMode`].
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerChoice {
    Ask,
    Human,
    Ai,
    Random,
}

impl FirstPlayerChoice {
    pub fn to_mode(self) -> Option<FirstPlayerMode> {
        match self {
            FirstPlayerChoice::Ask => None,
            FirstPlayerChoice::Human => Some(FirstPlayerMode::Human),
            FirstPlayerChoice::Ai => Some(FirstPlayerMode::Ai),
            FirstPlayerChoice::Random => Some(FirstPlayerMode::Random),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub first_player: FirstPlayerChoice,
    pub ai_delay_ms: u64,
    #[serde(default = "default_auto_play_forced_move")]
    pub auto_play_forced_move: bool,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_auto_play_forced_move() -> bool {
    true
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.ai_delay_ms > MAX_AI_DELAY_MS {
            return Err(format!("ai_delay_ms must not exceed {}", MAX_AI_DELAY_MS));
        }
        self.logging.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_player: FirstPlayerChoice::Ask,
            ai_delay_ms: 500,
            auto_play_forced_move: true,
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub prefix: Option<String>,
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.prefix
            && prefix.trim().is_empty()
        {
            return Err("logging prefix must not be blank".to_string());
        }
        Ok(())
    }
}
