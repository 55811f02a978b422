use common::Difficulty;
use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub log_prefix: Option<String>,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.log_prefix
            && prefix.trim().is_empty()
        {
            return Err("log_prefix must not be empty when set".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_console_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    fn sample_config() -> ClientConfig {
        ClientConfig {
            difficulty: Some(Difficulty::Impossible),
            seed: Some(1234),
            log_prefix: Some("Console".to_string()),
        }
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let serializer = YamlConfigSerializer::new();
        let text = serializer.serialize(&ClientConfig::default()).unwrap();
        let parsed: ClientConfig = serializer.deserialize(&text).unwrap();
        assert_eq!(parsed, ClientConfig::default());
    }

    #[test]
    fn test_config_round_trips_through_file() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.as_str()));
        manager.set_config(&sample_config()).unwrap();

        let provider = FileContentConfigProvider::new(file_path.clone());
        let stored = provider.get_config_content().unwrap().unwrap();
        assert!(stored.contains("difficulty: impossible"));

        let reloaded = get_config_manager(Some(file_path.as_str())).get_config().unwrap();
        assert_eq!(reloaded, sample_config());

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_missing_file_gives_default() {
        let manager = get_config_manager(Some(get_temp_file_path().as_str()));
        assert_eq!(manager.get_config().unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let serializer = YamlConfigSerializer::new();
        let parsed: ClientConfig = serializer.deserialize("difficulty: easy\n").unwrap();
        assert_eq!(parsed.difficulty, Some(Difficulty::Easy));
        assert_eq!(parsed.seed, None);
        assert_eq!(parsed.log_prefix, None);
    }

    #[test]
    fn test_blank_log_prefix_is_invalid() {
        let config = ClientConfig {
            log_prefix: Some("  ".to_string()),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(sample_config().validate().is_ok());
    }
}
