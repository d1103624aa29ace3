use crate::commands::{CmdMessage, CmdResult};
use crate::config::{TableConfig, CONFIG_KEYS};
use crate::error::{Result, StatdexError};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = TableConfig::load(config_dir)?;
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => result.add_message(unknown_key(&key)),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            match config.set(&key, &value) {
                Ok(()) => {}
                Err(StatdexError::Config(reason)) => {
                    let mut result = CmdResult::default();
                    result.add_message(CmdMessage::error(reason));
                    return Ok(result);
                }
                Err(e) => return Err(e),
            }
            config.save(config_dir)?;

            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            Ok(result)
        }
    }
}

fn unknown_key(key: &str) -> CmdMessage {
    CmdMessage::error(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
