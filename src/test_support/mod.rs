//! Test utilities and mocks for unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use osqp_build::test_support::RecordingRunner;
//!
//! #[test]
//! fn test_example() {
//!     let mut runner = RecordingRunner::new().with_statuses([0, 1]);
//!     // Hand `&mut runner` to an `ExternalBuild`, then inspect `runner.calls()`.
//! }
//! ```

use std::collections::VecDeque;
use std::io;

use crate::builder::errors::PhaseStatus;
use crate::builder::invoker::CommandRunner;
use crate::util::process::ProcessBuilder;

/// Mock process runner that records every invocation.
///
/// Exit codes are handed out in order; once the queue is empty every
/// process succeeds.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    statuses: VecDeque<i32>,
    calls: Vec<ProcessBuilder>,
    fail_spawn: bool,
}

impl RecordingRunner {
    /// Create a runner where every process succeeds.
    pub fn new() -> Self {
        RecordingRunner::default()
    }

    /// Queue exit codes for the next invocations.
    pub fn with_statuses(mut self, codes: impl IntoIterator<Item = i32>) -> Self {
        self.statuses.extend(codes);
        self
    }

    /// Make every invocation fail to spawn.
    pub fn failing_spawn(mut self) -> Self {
        self.fail_spawn = true;
        self
    }

    /// Get all processes that were run.
    pub fn calls(&self) -> &[ProcessBuilder] {
        &self.calls
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, process: &ProcessBuilder) -> io::Result<PhaseStatus> {
        self.calls.push(process.clone());

        if self.fail_spawn {
            return Err(io::Error::new(io::ErrorKind::NotFound, "program not found"));
        }

        let code = self.statuses.pop_front().unwrap_or(0);
        Ok(PhaseStatus::from_code(code))
    }
}
