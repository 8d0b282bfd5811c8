// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Launches git through a [`CommandRunner`] with a deterministic environment.
//!
//! ```text
//! env = { GIT_PAGER=cat, GIT_TERMINAL_PROMPT=0, LANG=C.UTF-8 }
//!       <- [git.env] from config
//!       <- per-call overrides
//! argv = [executable, args...]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::process::{CommandRunner, CommandSpec, RunHandle};
use crate::error::ProcessError;

/// Variables set on every git invocation unless overridden.
pub const DEFAULT_ENV: [(&str, &str); 3] = [
    ("GIT_PAGER", "cat"),
    ("GIT_TERMINAL_PROMPT", "0"),
    ("LANG", "C.UTF-8"),
];

#[derive(Clone)]
pub struct GitRunner {
    runner: Arc<dyn CommandRunner>,
    executable: String,
    env: BTreeMap<String, String>,
}

impl std::fmt::Debug for GitRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRunner")
            .field("executable", &self.executable)
            .field("env", &self.env)
            .finish_non_exhaustive()
    }
}

impl GitRunner {
    pub fn new(runner: Arc<dyn CommandRunner>, executable: impl Into<String>) -> Self {
        let env = DEFAULT_ENV
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Self {
            runner,
            executable: executable.into(),
            env,
        }
    }

    /// Layers extra variables over the defaults.
    #[must_use]
    pub fn with_env(mut self, env: &BTreeMap<String, String>) -> Self {
        self.env
            .extend(env.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    #[must_use]
    pub fn executable(&self) -> &str {
        &self.executable
    }

    #[must_use]
    pub const fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    /// The underlying runner, for cancel and kill.
    #[must_use]
    pub fn runner(&self) -> &Arc<dyn CommandRunner> {
        &self.runner
    }

    /// Builds the spec for `git ARGS` without launching it.
    #[must_use]
    pub fn spec(
        &self,
        args: Vec<String>,
        cwd: Option<&Path>,
        overrides: Option<&BTreeMap<String, String>>,
    ) -> CommandSpec {
        let mut env = self.env.clone();
        if let Some(overrides) = overrides {
            env.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(self.executable.clone());
        argv.extend(args);
        CommandSpec::builder()
            .args(argv)
            .maybe_cwd(cwd.map(Path::to_path_buf))
            .env(env)
            .build()
    }

    /// Launches `git ARGS`.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::EmptyCommand`] if `args` is empty.
    pub fn run(
        &self,
        args: Vec<String>,
        cwd: Option<&Path>,
        overrides: Option<&BTreeMap<String, String>>,
    ) -> Result<RunHandle, ProcessError> {
        if args.is_empty() {
            return Err(ProcessError::EmptyCommand);
        }
        self.runner.run(self.spec(args, cwd, overrides))
    }
}

/// Resolves `name` on `PATH` (or checks it, if it is already a path).
///
/// # Errors
///
/// Returns [`ProcessError::ExecutableNotFound`] if it cannot be found.
pub fn resolve_executable(name: &str) -> Result<PathBuf, ProcessError> {
    which::which(name).map_err(|_| ProcessError::ExecutableNotFound {
        name: name.to_string(),
    })
}
