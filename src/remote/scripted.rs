use super::{CommandExecutor, CommandOutput, RemoteError};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays canned replies in order and records every argv it was given.
#[derive(Default)]
pub(crate) struct ScriptedExecutor {
    replies: Mutex<VecDeque<Result<String, i32>>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedExecutor {
    pub(crate) fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(|s| Ok(s.into())).collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a reply that fails with the given exit code.
    pub(crate) fn fail_next(self, code: i32) -> Self {
        self.replies.lock().unwrap().push_back(Err(code));
        self
    }

    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn joined_calls(&self) -> Vec<String> {
        self.calls().iter().map(|c| c.join(" ")).collect()
    }
}

impl CommandExecutor for ScriptedExecutor {
    fn run(&self, args: &[String]) -> Result<CommandOutput, RemoteError> {
        self.calls.lock().unwrap().push(args.to_vec());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(stdout)) => Ok(CommandOutput::new(stdout)),
            Some(Err(code)) => Err(RemoteError::NonZeroExit {
                code: Some(code),
                stderr: "audtool: not running".to_string(),
            }),
            None => panic!("unexpected command: {}", args.join(" ")),
        }
    }
}
