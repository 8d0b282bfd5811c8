// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process invocation descriptions and outcomes.
//!
//! ```text
//! CommandSpec   args (program + args), cwd?, env overrides?
//! RunHandle     id (monotonic), Arc<CommandSpec>, started_at_ms
//! CommandResult exit_code, stdout bytes, stderr bytes, duration_ms
//! ```

use bon::Builder;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

/// Process-wide anchor for monotonic millisecond timestamps.
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Milliseconds elapsed on the monotonic clock since the first call.
#[must_use]
pub fn monotonic_ms() -> u64 {
    let epoch = EPOCH.get_or_init(Instant::now);
    u64::try_from(epoch.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Immutable description of a process invocation.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct CommandSpec {
    /// Program followed by its arguments.
    #[builder(into)]
    args: Vec<String>,
    /// Working directory.
    #[builder(into)]
    cwd: Option<PathBuf>,
    /// Environment variable overrides, merged over the inherited environment.
    env: Option<BTreeMap<String, String>>,
}

impl CommandSpec {
    /// Creates a spec with no working directory and no overrides.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
            env: None,
        }
    }

    /// Full argument vector, program first.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Program to launch, if any.
    #[must_use]
    pub fn program(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Arguments after the program.
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        self.args.get(1..).unwrap_or_default()
    }

    #[must_use]
    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    #[must_use]
    pub const fn env(&self) -> Option<&BTreeMap<String, String>> {
        self.env.as_ref()
    }

    /// Whether there is nothing to launch.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// The command line as a single string (for logging).
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut cmd = String::new();
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                cmd.push(' ');
            }
            if arg.contains(' ') || arg.is_empty() {
                let _ = write!(cmd, "\"{arg}\"");
            } else {
                cmd.push_str(arg);
            }
        }
        cmd
    }
}

/// Correlation token for one launched command.
///
/// Cheap to clone; the spec is shared. Invalid once its `Finished` event has
/// been processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunHandle {
    id: u64,
    spec: Arc<CommandSpec>,
    started_at_ms: u64,
}

impl RunHandle {
    #[must_use]
    pub const fn new(id: u64, spec: Arc<CommandSpec>, started_at_ms: u64) -> Self {
        Self {
            id,
            spec,
            started_at_ms,
        }
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    #[must_use]
    pub const fn started_at_ms(&self) -> u64 {
        self.started_at_ms
    }
}

/// Outcome of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    exit_code: i32,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
    duration_ms: u64,
}

impl CommandResult {
    #[must_use]
    pub const fn new(exit_code: i32, stdout: Vec<u8>, stderr: Vec<u8>, duration_ms: u64) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration_ms,
        }
    }

    /// Returns the process exit code (0 = success, -1 = killed or never started).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    #[must_use]
    pub fn stdout(&self) -> &[u8] {
        &self.stdout
    }

    #[must_use]
    pub fn stderr(&self) -> &[u8] {
        &self.stderr
    }

    #[must_use]
    pub const fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Returns true if the process exited successfully (code 0).
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Splits the result into its captured streams.
    #[must_use]
    pub fn into_output(self) -> (Vec<u8>, Vec<u8>) {
        (self.stdout, self.stderr)
    }
}
