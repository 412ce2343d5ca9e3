//! Running commands on the host where the player lives.
//!
//! Backends never spawn processes themselves; they hand an argument vector
//! to a [`CommandExecutor`] and parse whatever comes back on stdout.

pub mod ssh;

#[cfg(test)]
pub(crate) mod scripted;

pub use ssh::SshExecutor;

/// Failures while running a remote command.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("remote command exited with {}: {stderr}", describe_exit(.code))]
    NonZeroExit { code: Option<i32>, stderr: String },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {c}"),
        None => "a signal".to_string(),
    }
}

/// Captured result of a successful remote command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub code: i32,
}

impl CommandOutput {
    pub fn new(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: Vec::new(),
            code: 0,
        }
    }

    /// Stdout decoded as UTF-8, invalid sequences replaced.
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }
}

/// Runs an argument vector somewhere and reports what it printed.
///
/// Implementations must return `RemoteError::NonZeroExit` when the command
/// fails instead of handing back its partial output.
pub trait CommandExecutor: Send + Sync {
    fn run(&self, args: &[String]) -> Result<CommandOutput, RemoteError>;
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for Box<E> {
    fn run(&self, args: &[String]) -> Result<CommandOutput, RemoteError> {
        (**self).run(args)
    }
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for &E {
    fn run(&self, args: &[String]) -> Result<CommandOutput, RemoteError> {
        (**self).run(args)
    }
}
