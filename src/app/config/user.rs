use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::ConfigError;
use crate::player::{Backend, VOLUME_INCREMENT};

/// User-editable configuration
/// stored in `config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub backend: Backend,
    #[serde(default = "default_volume_step")]
    pub volume_step: i64,
    /// Write logs here instead of stderr
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    #[serde(default)]
    pub remote: RemoteSection,
}

/// The `[remote]` table. Host and user have no sensible default and must
/// come from the file or the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_file: Option<PathBuf>,
    #[serde(default = "default_ssh_program")]
    pub ssh_program: String,
    #[serde(default)]
    pub strict_host_key_checking: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,
}

fn default_volume_step() -> i64 {
    VOLUME_INCREMENT
}

fn default_ssh_program() -> String {
    "ssh".to_string()
}

fn default_identity_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".ssh")
        .join("id_rsa")
}

impl Default for RemoteSection {
    fn default() -> Self {
        Self {
            host: None,
            user: None,
            identity_file: None,
            ssh_program: default_ssh_program(),
            strict_host_key_checking: false,
            connect_timeout_secs: None,
        }
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            volume_step: default_volume_step(),
            log_file: None,
            remote: RemoteSection::default(),
        }
    }
}

/// Values given on the command line; they win over the file.
#[derive(Debug, Clone, Default)]
pub struct RemoteOverrides {
    pub host: Option<String>,
    pub user: Option<String>,
    pub identity_file: Option<PathBuf>,
}

/// Fully resolved connection settings handed to the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub host: String,
    pub user: String,
    pub identity_file: PathBuf,
    pub ssh_program: String,
    pub strict_host_key_checking: bool,
    pub connect_timeout_secs: Option<u64>,
}

impl RemoteConfig {
    /// `user@host`
    pub fn destination(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }
}

impl UserConfig {
    /// Example config printed by `--generate-config`.
    pub fn template() -> Self {
        Self {
            remote: RemoteSection {
                host: Some("192.168.1.10".to_string()),
                user: Some("audacious".to_string()),
                identity_file: Some(default_identity_file()),
                connect_timeout_secs: Some(5),
                ..RemoteSection::default()
            },
            ..Self::default()
        }
    }

    pub fn resolve_remote(&self, overrides: &RemoteOverrides) -> Result<RemoteConfig, ConfigError> {
        let host = overrides
            .host
            .clone()
            .or_else(|| self.remote.host.clone())
            .ok_or(ConfigError::Missing("remote.host"))?;
        let user = overrides
            .user
            .clone()
            .or_else(|| self.remote.user.clone())
            .ok_or(ConfigError::Missing("remote.user"))?;
        let identity_file = overrides
            .identity_file
            .clone()
            .or_else(|| self.remote.identity_file.clone())
            .unwrap_or_else(default_identity_file);

        Ok(RemoteConfig {
            host,
            user,
            identity_file,
            ssh_program: self.remote.ssh_program.clone(),
            strict_host_key_checking: self.remote.strict_host_key_checking,
            connect_timeout_secs: self.remote.connect_timeout_secs,
        })
    }
}
