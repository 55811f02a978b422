use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config value, falling back to
/// `TConfig::default()` when nothing is stored.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InMemoryConfigProvider;
    use crate::games::tictactoe::Difficulty;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        difficulty: Difficulty,
        label: String,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                difficulty: Difficulty::Medium,
                label: "default".to_string(),
            }
        }
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.label.is_empty() {
                return Err("label must not be empty".to_string());
            }
            Ok(())
        }
    }

    fn manager(
        content: Option<&str>,
    ) -> ConfigManager<InMemoryConfigProvider, TestConfig, YamlConfigSerializer> {
        ConfigManager::new(
            InMemoryConfigProvider::new(content.map(str::to_string)),
            YamlConfigSerializer::new(),
        )
    }

    #[test]
    fn test_missing_content_gives_default() {
        assert_eq!(manager(None).get_config().unwrap(), TestConfig::default());
    }

    #[test]
    fn test_reads_lowercase_difficulty() {
        let config = manager(Some("difficulty: impossible\nlabel: night\n"))
            .get_config()
            .unwrap();
        assert_eq!(config.difficulty, Difficulty::Impossible);
        assert_eq!(config.label, "night");
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let result = manager(Some("difficulty: impossible\nlabel: \"\"\n")).get_config();
        assert!(result.unwrap_err().contains("validation"));

        let result = manager(Some("difficulty: hard\nlabel: x\n")).get_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_set_config_round_trips() {
        let manager = manager(None);
        let config = TestConfig {
            difficulty: Difficulty::Easy,
            label: "saved".to_string(),
        };
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_set_config_rejects_invalid_value() {
        let manager = manager(None);
        let invalid = TestConfig {
            difficulty: Difficulty::Easy,
            label: String::new(),
        };
        assert!(manager.set_config(&invalid).is_err());
        assert_eq!(manager.get_config().unwrap(), TestConfig::default());
    }
}
