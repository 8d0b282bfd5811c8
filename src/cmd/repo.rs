// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository commands: open, dispatch one intent, render.

use anyhow::bail;
use serde_json::json;

use crate::cli::Command;
use crate::cli::branch::BranchSubcommand;
use crate::cli::global::GlobalOptions;
use crate::cli::remote::RemoteSubcommand;
use crate::cli::repo::LogArgs;
use crate::cli::stash::StashSubcommand;
use crate::cli::tag::TagSubcommand;
use crate::cmd::render::{self, Output};
use crate::cmd::session::Session;
use crate::config::Config;
use crate::controller::RepoController;
use crate::error::Result;

/// Main handler for every command that talks to git.
///
/// # Errors
///
/// Returns an error if git cannot be found, the repository cannot be
/// opened, or the command leaves a last error behind.
pub async fn run_repo_command(command: &Command, config: &Config, global: &GlobalOptions) -> Result<()> {
    let output = Output::new(global.json);
    let mut git = config.git.clone();
    if let Command::Log(LogArgs { limit: Some(n) }) = command {
        git.log_limit = *n as usize;
    }
    let mut session = Session::new(&git)?;

    if matches!(command, Command::GitVersion) {
        session.run(RepoController::check_git_version).await?;
        let Some(version) = session.state().git_version() else {
            bail!("git did not report a version");
        };
        return output.emit(&version, render::git_version);
    }

    session.open(&global.repo).await?;
    run_in_repo(command, &mut session, output).await
}

async fn run_in_repo(command: &Command, session: &mut Session, output: Output) -> Result<()> {
    match command {
        // open already refreshed status
        Command::Status => {}
        Command::Log(_) => session.run(RepoController::refresh_log).await?,
        Command::Branches(args) if args.remote => {
            session.run(RepoController::refresh_remote_branches).await?;
        }
        Command::Branches(_) => session.run(RepoController::refresh_branches).await?,
        Command::Stashes => session.run(RepoController::refresh_stashes).await?,
        Command::Tags => session.run(RepoController::refresh_tags).await?,
        Command::Remotes => session.run(RepoController::refresh_remotes).await?,
        Command::Conflicts => session.run(RepoController::refresh_conflicts).await?,
        Command::Diff(args) => {
            session
                .run(|c| c.request_diff(args.path.clone(), args.staged))
                .await?;
        }
        Command::Push(args) => {
            session.controller_mut().push(
                args.set_upstream,
                args.remote.clone(),
                args.branch.clone(),
            )?;
            session.settle().await?;
        }
        _ => session.run(|c| submit_mutation(command, c)).await?,
    }
    render_result(command, session, output)
}

fn submit_mutation(command: &Command, c: &mut RepoController) {
    match command {
        Command::Stage(args) => c.stage(args.paths.clone()),
        Command::Unstage(args) => c.unstage(args.paths.clone()),
        Command::Discard(args) => c.discard(args.paths.clone()),
        Command::Commit(args) => c.commit(args.message.clone(), args.amend),
        Command::Fetch => c.fetch(),
        Command::Pull => c.pull_ff_only(),
        Command::Switch(args) => c.switch_branch(args.name.clone()),
        Command::Branch(args) => match &args.subcommand {
            BranchSubcommand::Create(a) => c.create_branch(a.name.clone(), a.from_ref.clone()),
            BranchSubcommand::Delete(a) => c.delete_branch(a.name.clone(), a.force),
            BranchSubcommand::DeleteRemote(a) => {
                c.delete_remote_branch(a.remote.clone(), a.name.clone());
            }
            BranchSubcommand::SetUpstream(a) => {
                c.set_upstream(a.upstream.clone(), a.branch.clone());
            }
        },
        Command::Stash(args) => match &args.subcommand {
            StashSubcommand::Save(a) => c.stash_save(a.message.clone(), a.include_untracked),
            StashSubcommand::Apply(a) => c.stash_apply(a.selector.clone()),
            StashSubcommand::Pop(a) => c.stash_pop(a.selector.clone()),
            StashSubcommand::Drop(a) => c.stash_drop(a.selector.clone()),
        },
        Command::Tag(args) => match &args.subcommand {
            TagSubcommand::Create { name, target } => c.create_tag(name.clone(), target.clone()),
            TagSubcommand::Delete { name } => c.delete_tag(name.clone()),
            TagSubcommand::Push { name, remote } => c.push_tag(name.clone(), remote.clone()),
            TagSubcommand::PushAll { remote } => c.push_tags(remote.clone()),
        },
        Command::Remote(args) => match &args.subcommand {
            RemoteSubcommand::Add { name, url } => c.add_remote(name.clone(), url.clone()),
            RemoteSubcommand::Remove { name } => c.remove_remote(name.clone()),
            RemoteSubcommand::SetUrl { name, url } => c.set_remote_url(name.clone(), url.clone()),
        },
        _ => {}
    }
}

/// Prints whatever view the command loaded. Mutations print nothing.
fn render_result(command: &Command, session: &Session, output: Output) -> Result<()> {
    let state = session.state();
    match command {
        Command::Status => {
            let status = state.status().cloned().unwrap_or_default();
            output.emit(&status, render::status)
        }
        Command::Log(_) => output.emit(state.log().unwrap_or_default(), render::log),
        Command::Branches(args) if args.remote => output.emit(
            state.remote_branches().unwrap_or_default(),
            render::remote_branches,
        ),
        Command::Branches(_) => output.emit(state.branches().unwrap_or_default(), render::branches),
        Command::Stashes => output.emit(state.stashes().unwrap_or_default(), render::stashes),
        Command::Tags => output.emit(state.tags().unwrap_or_default(), render::tags),
        Command::Remotes => output.emit(state.remotes().unwrap_or_default(), render::remotes),
        Command::Conflicts => output.emit(state.conflicts().unwrap_or_default(), render::paths),
        Command::Diff(args) => {
            let text = state.diff_text().unwrap_or_default();
            if output.is_json() {
                output.emit(
                    &json!({ "path": args.path, "staged": args.staged, "diff": text }),
                    |_| String::new(),
                )
            } else {
                output.emit(text, render::diff)
            }
        }
        _ => Ok(()),
    }
}
