use crate::error::{Result, SoilSurveyError};
use serde::{Deserialize, Serialize};
use soil_survey_common::Language;
use std::path::PathBuf;

/// 参照画像フォルダを上書きする環境変数
pub const REFERENCE_DIR_ENV: &str = "SOIL_SURVEY_REFERENCE_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub language: Language,
    pub reference_dir: PathBuf,
    pub records_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::Es,
            reference_dir: PathBuf::from("referencias"),
            records_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SoilSurveyError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("soil-survey").join("config.json"))
    }

    /// 参照画像フォルダ（環境変数を優先）
    pub fn reference_dir(&self) -> PathBuf {
        match std::env::var(REFERENCE_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => self.reference_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.language, Language::Es);
        assert_eq!(config.reference_dir, PathBuf::from("referencias"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "language": "pt" }"#).unwrap();
        assert_eq!(config.language, Language::Pt);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_roundtrip_json() {
        let config = Config {
            language: Language::Pt,
            reference_dir: PathBuf::from("/data/referencias"),
            records_dir: PathBuf::from("/data/registros"),
            output_dir: PathBuf::from("/data/reportes"),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
