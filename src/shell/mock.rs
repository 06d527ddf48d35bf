//! Scripted command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning processes.
//! Responses are registered against a command-line prefix; every call is
//! recorded for later assertion.
//!
//! # Example
//!
//! ```
//! use takeout_installer::shell::{CommandOptions, CommandRunner, MockRunner};
//!
//! let runner = MockRunner::new();
//! runner.respond_ok("php --version", "PHP 8.2.1 (cli)");
//!
//! let result = runner
//!     .run("php", &["--version".to_string()], &CommandOptions::captured())
//!     .unwrap();
//! assert!(result.stdout.contains("8.2.1"));
//! assert!(runner.was_called("php --version"));
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{InstallerError, Result};

use super::command::{display_command, CommandOptions, CommandResult, CommandRunner};

/// A command observed by [`MockRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    /// Full command line, program first.
    pub line: String,
    /// Working directory the command was given.
    pub cwd: Option<PathBuf>,
}

type Responder = Box<dyn Fn(&RecordedCommand) -> CommandResult>;

enum Response {
    Queue(VecDeque<CommandResult>),
    Dynamic(Responder),
}

/// Command runner that returns scripted results.
///
/// When several prefixes match, the longest wins. Queued responses are
/// consumed in order and the last one repeats. Commands with no match
/// behave like a program that is not installed.
#[derive(Default)]
pub struct MockRunner {
    responses: RefCell<Vec<(String, Response)>>,
    calls: RefCell<Vec<RecordedCommand>>,
}

impl MockRunner {
    /// Create a runner with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a result for commands starting with `prefix`.
    pub fn respond(&self, prefix: &str, result: CommandResult) {
        let mut responses = self.responses.borrow_mut();
        if let Some((_, Response::Queue(queue))) =
            responses.iter_mut().find(|(p, _)| p == prefix)
        {
            queue.push_back(result);
            return;
        }
        responses.push((prefix.to_string(), Response::Queue(VecDeque::from([result]))));
    }

    /// Queue a successful result with the given stdout.
    pub fn respond_ok(&self, prefix: &str, stdout: &str) {
        self.respond(
            prefix,
            CommandResult::success(stdout.to_string(), String::new(), Duration::ZERO),
        );
    }

    /// Queue a failing result with the given exit code and stderr.
    pub fn respond_fail(&self, prefix: &str, code: i32, stderr: &str) {
        self.respond(
            prefix,
            CommandResult::failure(Some(code), String::new(), stderr.to_string(), Duration::ZERO),
        );
    }

    /// Compute the result from the recorded command, e.g. to create files
    /// a real tool would leave behind.
    pub fn respond_with<F>(&self, prefix: &str, responder: F)
    where
        F: Fn(&RecordedCommand) -> CommandResult + 'static,
    {
        self.responses
            .borrow_mut()
            .push((prefix.to_string(), Response::Dynamic(Box::new(responder))));
    }

    /// All commands run so far, in order.
    pub fn calls(&self) -> Vec<RecordedCommand> {
        self.calls.borrow().clone()
    }

    /// Command lines run so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.line.clone()).collect()
    }

    /// Whether any command starting with `prefix` was run.
    pub fn was_called(&self, prefix: &str) -> bool {
        self.calls.borrow().iter().any(|c| c.line.starts_with(prefix))
    }

    /// How many commands starting with `prefix` were run.
    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.line.starts_with(prefix))
            .count()
    }
}

impl CommandRunner for MockRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        options: &CommandOptions,
    ) -> Result<CommandResult> {
        let recorded = RecordedCommand {
            line: display_command(program, args),
            cwd: options.cwd.clone(),
        };
        self.calls.borrow_mut().push(recorded.clone());

        let mut responses = self.responses.borrow_mut();
        let matched = responses
            .iter_mut()
            .filter(|(prefix, _)| recorded.line.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len());

        match matched {
            Some((_, Response::Queue(queue))) => {
                let result = if queue.len() > 1 {
                    queue.pop_front()
                } else {
                    queue.front().cloned()
                };
                result.ok_or_else(|| InstallerError::CommandFailed {
                    command: recorded.line.clone(),
                    code: None,
                })
            }
            Some((_, Response::Dynamic(responder))) => Ok(responder(&recorded)),
            None => Err(InstallerError::CommandFailed {
                command: recorded.line,
                code: None,
            }),
        }
    }
}
