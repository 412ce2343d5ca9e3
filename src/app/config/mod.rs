use std::fs;
use std::path::{Path, PathBuf};

pub mod user;

pub use user::{RemoteConfig, RemoteOverrides, RemoteSection, UserConfig};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("missing `{0}`: set it in config.toml or pass it on the command line")]
    Missing(&'static str),
}

pub struct AppConfig;

impl AppConfig {
    pub fn get_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("audremote")
    }

    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.toml")
    }

    /// Load the default config file; a missing file yields defaults.
    pub fn load() -> Result<UserConfig, ConfigError> {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Result<UserConfig, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(UserConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn template() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&UserConfig::template())?)
    }
}
