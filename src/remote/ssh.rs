use super::{CommandExecutor, CommandOutput, RemoteError};
use crate::app::config::RemoteConfig;
use std::process::Command;
use tracing::{debug, error};

/// Executes commands on the configured host through the `ssh` client.
///
/// Authentication is left entirely to ssh: the identity file must already
/// be listed in the remote user's `authorized_keys`.
#[derive(Debug, Clone)]
pub struct SshExecutor {
    config: RemoteConfig,
}

impl SshExecutor {
    pub fn new(config: RemoteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Arguments passed to the ssh program, before the remote command.
    pub fn ssh_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(8);
        args.push("-o".to_string());
        args.push(format!(
            "StrictHostKeyChecking={}",
            if self.config.strict_host_key_checking { "yes" } else { "no" }
        ));
        if let Some(secs) = self.config.connect_timeout_secs {
            args.push("-o".to_string());
            args.push(format!("ConnectTimeout={secs}"));
        }
        args.push("-i".to_string());
        args.push(self.config.identity_file.to_string_lossy().into_owned());
        args.push(self.config.destination());
        args
    }
}

impl CommandExecutor for SshExecutor {
    fn run(&self, args: &[String]) -> Result<CommandOutput, RemoteError> {
        let program = &self.config.ssh_program;
        debug!(host = %self.config.host, ?args, "running remote command");

        let output = Command::new(program)
            .args(self.ssh_args())
            .args(args)
            .output()
            .map_err(|source| {
                error!(%program, %source, "could not start ssh");
                RemoteError::Spawn {
                    program: program.clone(),
                    source,
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!(
                host = %self.config.host,
                ?args,
                code = ?output.status.code(),
                %stderr,
                "remote command failed"
            );
            return Err(RemoteError::NonZeroExit {
                code: output.status.code(),
                stderr,
            });
        }

        Ok(CommandOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            code: output.status.code().unwrap_or(0),
        })
    }
}
