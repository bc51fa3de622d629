// config.rs - Resolved paths and startup loading

use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::catalog::Catalog;
use crate::error::DataLoadError;
use crate::models::Theme;
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub assets_dir: PathBuf,
    pub logo: String,
    pub splash_logo: String,
    pub category: String,
    pub splash_duration: Duration,
    pub theme: Theme,
}

impl AppConfig {
    /// Resolves relative settings paths against `base_dir`.
    pub fn from_settings(base_dir: &Path, settings: &Settings) -> Self {
        Self {
            data_path: base_dir.join(&settings.data_file),
            assets_dir: base_dir.join(&settings.assets_dir),
            logo: settings.logo.clone(),
            splash_logo: settings.splash_logo.clone(),
            category: settings.category.clone(),
            splash_duration: Duration::from_millis(settings.splash_millis),
            theme: settings.theme,
        }
    }

    pub async fn load(base_dir: &Path) -> Self {
        let settings = Settings::load(base_dir).await;
        let config = Self::from_settings(base_dir, &settings);
        info!(data = %config.data_path.display(), theme = %config.theme, "configuration ready");
        config
    }
}

/// Log filter from a `RUST_LOG`-style directive string, `info` when unset or invalid.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Everything the UI needs before the first frame.
#[derive(Debug, Clone)]
pub struct Startup {
    pub config: AppConfig,
    pub catalog: Catalog,
}

impl Startup {
    pub async fn load(base_dir: &Path) -> Result<Self, DataLoadError> {
        let config = AppConfig::load(base_dir).await;
        let catalog = Catalog::load(&config.data_path).await?;
        Ok(Self { config, catalog })
    }
}
