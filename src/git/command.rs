// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Argument vectors for every git operation, without the program name.
//!
//! ```text
//! status    status --porcelain=v2 -b -z
//! log       log --date=iso-strict --pretty=format:<LOG_FORMAT> -n <limit>
//! stashes   stash list --date=iso-strict --pretty=format:<STASH_FORMAT>
//! branches  branch --format=<BRANCH_FORMAT>
//! ```
//!
//! Everything here is pure. Only [`push`] can fail, on a local precondition.

use crate::error::RepoError;

/// `oid \x1f parents \x1f author \x1f email \x1f date \x1f subject \x1e`
pub const LOG_FORMAT: &str = "%H%x1f%P%x1f%an%x1f%ae%x1f%ad%x1f%s%x1e";
/// `oid \x1f selector \x1f summary \x1f date \x1e`
///
/// `--date` also turns `%gd` into `stash@{<date>}`; the parser rebuilds the
/// index form.
pub const STASH_FORMAT: &str = "%H%x1f%gd%x1f%gs%x1f%ad%x1e";
/// `name|HEAD marker|upstream|tracking`
pub const BRANCH_FORMAT: &str = "%(refname:short)|%(HEAD)|%(upstream:short)|%(upstream:track)";

pub const DEFAULT_LOG_LIMIT: usize = 300;
pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_FROM_REF: &str = "HEAD";

fn argv<const N: usize>(args: [&str; N]) -> Vec<String> {
    args.into_iter().map(str::to_string).collect()
}

fn with_paths(mut args: Vec<String>, paths: &[String]) -> Vec<String> {
    args.push("--".to_string());
    args.extend(paths.iter().cloned());
    args
}

fn with_optional(mut args: Vec<String>, extra: Option<&str>) -> Vec<String> {
    args.extend(extra.filter(|e| !e.is_empty()).map(str::to_string));
    args
}

// --- Inspection ---

#[must_use]
pub fn status() -> Vec<String> {
    argv(["status", "--porcelain=v2", "-b", "-z"])
}

/// Diff of one path; `staged` compares the index with HEAD.
#[must_use]
pub fn diff_file(path: &str, staged: bool) -> Vec<String> {
    let mut args = argv(["diff", "--no-color"]);
    if staged {
        args.push("--cached".to_string());
    }
    with_paths(args, &[path.to_string()])
}

#[must_use]
pub fn log(limit: usize) -> Vec<String> {
    let mut args = argv(["log", "--date=iso-strict"]);
    args.push(format!("--pretty=format:{LOG_FORMAT}"));
    args.push("-n".to_string());
    args.push(limit.to_string());
    args
}

#[must_use]
pub fn branches() -> Vec<String> {
    vec!["branch".to_string(), format!("--format={BRANCH_FORMAT}")]
}

#[must_use]
pub fn remote_branches() -> Vec<String> {
    argv(["branch", "-r", "--format=%(refname:short)"])
}

#[must_use]
pub fn conflicts() -> Vec<String> {
    argv(["diff", "--name-only", "--diff-filter=U"])
}

#[must_use]
pub fn stash_list() -> Vec<String> {
    let mut args = argv(["stash", "list", "--date=iso-strict"]);
    args.push(format!("--pretty=format:{STASH_FORMAT}"));
    args
}

#[must_use]
pub fn tags() -> Vec<String> {
    argv(["tag", "--list"])
}

#[must_use]
pub fn remotes() -> Vec<String> {
    argv(["remote", "-v"])
}

#[must_use]
pub fn is_inside_work_tree() -> Vec<String> {
    argv(["rev-parse", "--is-inside-work-tree"])
}

#[must_use]
pub fn version() -> Vec<String> {
    argv(["--version"])
}

// --- Working tree and commits ---

#[must_use]
pub fn stage(paths: &[String]) -> Vec<String> {
    with_paths(argv(["add"]), paths)
}

#[must_use]
pub fn unstage(paths: &[String]) -> Vec<String> {
    with_paths(argv(["restore", "--staged"]), paths)
}

/// Drops worktree changes of `paths`.
#[must_use]
pub fn discard(paths: &[String]) -> Vec<String> {
    with_paths(argv(["restore"]), paths)
}

#[must_use]
pub fn commit(message: &str, amend: bool) -> Vec<String> {
    let mut args = argv(["commit"]);
    if amend {
        args.push("--amend".to_string());
    }
    args.push("-m".to_string());
    args.push(message.to_string());
    args
}

// --- Remote sync ---

#[must_use]
pub fn fetch() -> Vec<String> {
    argv(["fetch"])
}

#[must_use]
pub fn pull_ff_only() -> Vec<String> {
    argv(["pull", "--ff-only"])
}

/// Plain `push`, or `push -u REMOTE BRANCH` when setting the upstream.
///
/// # Errors
///
/// Returns [`RepoError::Precondition`] if `set_upstream` is set without both
/// a remote and a branch.
pub fn push(
    set_upstream: bool,
    remote: Option<&str>,
    branch: Option<&str>,
) -> Result<Vec<String>, RepoError> {
    let mut args = argv(["push"]);
    if set_upstream {
        let (Some(remote), Some(branch)) = (
            remote.filter(|r| !r.is_empty()),
            branch.filter(|b| !b.is_empty()),
        ) else {
            return Err(RepoError::precondition(
                "remote and branch are required when setting the upstream",
            ));
        };
        args.extend([
            "-u".to_string(),
            remote.to_string(),
            branch.to_string(),
        ]);
    }
    Ok(args)
}

// --- Stashes ---

#[must_use]
pub fn stash_save(message: Option<&str>, include_untracked: bool) -> Vec<String> {
    let mut args = argv(["stash", "push"]);
    if include_untracked {
        args.push("-u".to_string());
    }
    if let Some(message) = message.filter(|m| !m.is_empty()) {
        args.push("-m".to_string());
        args.push(message.to_string());
    }
    args
}

#[must_use]
pub fn stash_apply(selector: Option<&str>) -> Vec<String> {
    with_optional(argv(["stash", "apply"]), selector)
}

#[must_use]
pub fn stash_pop(selector: Option<&str>) -> Vec<String> {
    with_optional(argv(["stash", "pop"]), selector)
}

#[must_use]
pub fn stash_drop(selector: Option<&str>) -> Vec<String> {
    with_optional(argv(["stash", "drop"]), selector)
}

// --- Tags ---

/// Lightweight tag at `target` (HEAD when absent).
#[must_use]
pub fn create_tag(name: &str, target: Option<&str>) -> Vec<String> {
    with_optional(argv(["tag", name]), target)
}

#[must_use]
pub fn delete_tag(name: &str) -> Vec<String> {
    argv(["tag", "-d", name])
}

#[must_use]
pub fn push_tag(remote: &str, name: &str) -> Vec<String> {
    argv(["push", remote, name])
}

#[must_use]
pub fn push_all_tags(remote: &str) -> Vec<String> {
    argv(["push", remote, "--tags"])
}

// --- Remotes ---

#[must_use]
pub fn add_remote(name: &str, url: &str) -> Vec<String> {
    argv(["remote", "add", name, url])
}

#[must_use]
pub fn remove_remote(name: &str) -> Vec<String> {
    argv(["remote", "remove", name])
}

#[must_use]
pub fn set_remote_url(name: &str, url: &str) -> Vec<String> {
    argv(["remote", "set-url", name, url])
}

// --- Branches ---

/// Tracks `upstream` from `branch` (the current branch when absent).
#[must_use]
pub fn set_upstream(upstream: &str, branch: Option<&str>) -> Vec<String> {
    with_optional(argv(["branch", "--set-upstream-to", upstream]), branch)
}

#[must_use]
pub fn switch_branch(name: &str) -> Vec<String> {
    argv(["switch", name])
}

/// Creates `name` from `from_ref` and switches to it.
#[must_use]
pub fn create_branch(name: &str, from_ref: &str) -> Vec<String> {
    argv(["switch", "-c", name, from_ref])
}

#[must_use]
pub fn delete_branch(name: &str, force: bool) -> Vec<String> {
    argv(["branch", if force { "-D" } else { "-d" }, name])
}

#[must_use]
pub fn delete_remote_branch(remote: &str, name: &str) -> Vec<String> {
    argv(["push", remote, "--delete", name])
}
