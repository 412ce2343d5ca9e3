//! Several `audtool` subcommands in one ssh round trip.
//!
//! The subcommands run in order inside a single `bash -c`, so their output
//! arrives as one stream. Each step declares how many lines it prints and
//! the stream is cut back into per-step replies by those counts. A stream
//! with the wrong number of lines is rejected rather than realigned.

use crate::player::error::{PlayerError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    command: String,
    arity: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    steps: Vec<Step>,
}

/// Lines printed by one step of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply<'a> {
    pub command: &'a str,
    pub lines: Vec<&'a str>,
}

impl<'a> Reply<'a> {
    /// The single line of a one-line reply, which may be empty.
    pub fn text(&self) -> &'a str {
        self.lines.first().copied().unwrap_or("")
    }

    /// Like [`Reply::text`] but a blank line is a format error.
    pub fn value(&self) -> Result<&'a str> {
        let line = self.text();
        if line.trim().is_empty() {
            return Err(PlayerError::Format(format!(
                "`{}` printed an empty line",
                self.command
            )));
        }
        Ok(line)
    }
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    /// A subcommand that prints exactly one line.
    pub fn query(self, command: impl Into<String>) -> Self {
        self.step(command, 1)
    }

    /// A subcommand that prints nothing.
    pub fn action(self, command: impl Into<String>) -> Self {
        self.step(command, 0)
    }

    pub fn step(mut self, command: impl Into<String>, arity: usize) -> Self {
        self.steps.push(Step {
            command: command.into(),
            arity,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn expected_lines(&self) -> usize {
        self.steps.iter().map(|s| s.arity).sum()
    }

    /// The whole batch as a single remote argument:
    /// `bash -c "audtool a; audtool b;"`.
    pub fn to_remote_args(&self, program: &str) -> Vec<String> {
        let script = self
            .steps
            .iter()
            .map(|s| format!("{program} {};", s.command))
            .collect::<Vec<_>>()
            .join(" ");
        vec![format!("bash -c \"{script}\"")]
    }

    /// Split combined stdout into one reply per step, in order.
    pub fn demux<'a>(&'a self, stdout: &'a str) -> Result<Vec<Reply<'a>>> {
        let lines = split_lines(stdout);
        if lines.len() != self.expected_lines() {
            return Err(PlayerError::Format(format!(
                "batch of {} commands printed {} lines, expected {}",
                self.steps.len(),
                lines.len(),
                self.expected_lines()
            )));
        }

        let mut rest = lines.as_slice();
        let mut replies = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            let (taken, tail) = rest.split_at(step.arity);
            replies.push(Reply {
                command: &step.command,
                lines: taken.to_vec(),
            });
            rest = tail;
        }
        Ok(replies)
    }
}

/// Lines of `output`, minus the one empty entry left by a final newline.
pub fn split_lines(output: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = output.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}
