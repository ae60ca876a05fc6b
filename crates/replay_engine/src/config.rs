use std::fs;
use std::path::{Path, PathBuf};

use replay_core::{
    AppState, EngineRegistry, PacingConfig, PageSettings, UnknownEngine, DEFAULT_ENGINE_ID,
    DEFAULT_PAGE_URL,
};
use replay_logging::replay_info;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid page url `{url}`: {source}")]
    InvalidPageUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error(transparent)]
    UnknownDefaultEngine(#[from] UnknownEngine),
}

/// Page configuration, stored as RON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Address the page is served from; share links point back here.
    pub page_url: String,
    pub default_engine: String,
    pub pacing: PacingConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_PAGE_URL.to_string(),
            default_engine: DEFAULT_ENGINE_ID.to_string(),
            pacing: PacingConfig::default(),
        }
    }
}

impl PageConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        replay_info!("Loaded page config from {:?}", path);
        Ok(config)
    }

    /// Like [`PageConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new())
    }

    pub fn settings(&self) -> Result<PageSettings, ConfigError> {
        let page_url = Url::parse(&self.page_url).map_err(|source| ConfigError::InvalidPageUrl {
            url: self.page_url.clone(),
            source,
        })?;
        let registry = EngineRegistry::builtin().with_default(&self.default_engine)?;
        Ok(PageSettings {
            page_url,
            registry,
            pacing: self.pacing,
        })
    }

    /// Fresh page state for this configuration.
    pub fn initial_state(&self) -> Result<AppState, ConfigError> {
        Ok(AppState::with_settings(self.settings()?))
    }
}
