use serde::Deserialize;
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

use crate::models::Theme;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub splash_millis: u64,
    pub data_file: String,
    pub assets_dir: String,
    pub logo: String,
    pub splash_logo: String,
    pub category: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            splash_millis: 2000,
            data_file: "data_G.txt".to_string(),
            assets_dir: ".".to_string(),
            logo: "logo1.jpg".to_string(),
            splash_logo: "images/logo.png".to_string(),
            category: "GAMES_IN_FULL_CONTACT_SPORTS".to_string(),
        }
    }
}

impl Settings {
    /// Reads `settings.json` from `config_dir`. A missing or unreadable file means defaults.
    pub async fn load(config_dir: &Path) -> Self {
        let path = config_dir.join(SETTINGS_FILE);
        match fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "invalid settings, using defaults");
                Self::default()
            }),
            Err(_) => {
                debug!(path = %path.display(), "no settings file, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(Settings::load(dir.path()).await, Settings::default());
    }

    #[tokio::test]
    async fn partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{ "theme": "Dark", "splash_millis": 0 }"#,
        )
        .unwrap();
        let settings = Settings::load(dir.path()).await;
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.splash_millis, 0);
        assert_eq!(settings.data_file, "data_G.txt");
    }

    #[tokio::test]
    async fn garbage_gives_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "not json").unwrap();
        assert_eq!(Settings::load(dir.path()).await, Settings::default());
    }
}
