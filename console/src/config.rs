use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_engine::tictactoe::{BotSettings, Difficulty};

const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";
const LOG_FILE_NAME: &str = "tictactoe_console.log";
const MAX_AI_DELAY_MS: u64 = 10_000;

fn path_next_to_executable(file_name: &str) -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(file_name).to_string_lossy().into_owned();
    }
    file_name.to_string()
}

fn get_config_path() -> String {
    path_next_to_executable(CONFIG_FILE_NAME)
}

pub fn get_config_manager()
-> ConfigManager<FileContentConfigProvider, ConsoleConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(&get_config_path())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OpponentType {
    Human,
    Ai,
}

/// Missing fields fall back to `ConsoleConfig::default()`. `log_file: null` logs to stderr.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ConsoleConfig {
    pub opponent: OpponentType,
    pub difficulty: Difficulty,
    pub bot: BotSettings,
    pub ai_delay_ms: u64,
    pub log_file: Option<String>,
}

impl Validate for ConsoleConfig {
    fn validate(&self) -> Result<(), String> {
        self.bot.validate()?;
        if self.ai_delay_ms > MAX_AI_DELAY_MS {
            return Err(format!(
                "ai_delay_ms must not exceed {} (got {})",
                MAX_AI_DELAY_MS, self.ai_delay_ms
            ));
        }
        if let Some(log_file) = &self.log_file
            && log_file.trim().is_empty()
        {
            return Err("log_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            opponent: OpponentType::Ai,
            difficulty: Difficulty::Hard,
            bot: BotSettings::default(),
            ai_delay_ms: 500,
            log_file: Some(path_next_to_executable(LOG_FILE_NAME)),
        }
    }
}
