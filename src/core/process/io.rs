// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Child supervision and output streaming.
//!
//! ```text
//! drive(handle)
//!   spawn child --(fails)--> Finished(-1, stderr = os error)
//!   stdout/stderr pump tasks
//!     read 8 KiB --> Stdout/Stderr event + append to per-run buffer
//!   select! { wait | kill | terminate (SIGTERM, then wait or kill) }
//!   join pumps --> full buffers
//!   remove from active table
//!   Finished(CommandResult)
//! ```

use std::io;
use std::process::{ExitStatus, Stdio};
use std::sync::PoisonError;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use super::runner::{ActiveRun, ActiveRuns, RunnerEvent};
use super::spec::{CommandResult, CommandSpec, RunHandle, monotonic_ms};

const CHUNK_SIZE: usize = 8 * 1024;

type Wrap = fn(RunHandle, Vec<u8>) -> RunnerEvent;

/// Runs one command to completion and emits its `Finished` event.
pub(super) async fn drive(
    handle: RunHandle,
    control: ActiveRun,
    events: flume::Sender<RunnerEvent>,
    active: ActiveRuns,
) {
    let (exit_code, stdout, stderr) = match spawn_child(handle.spec()) {
        Ok(child) => supervise(&handle, child, &control, &events).await,
        Err(e) => {
            warn!(
                run = handle.id(),
                cmd = %handle.spec().command_line(),
                error = %e,
                "failed to spawn process"
            );
            (-1, Vec::new(), e.to_string().into_bytes())
        }
    };

    active
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(&handle.id());

    let duration_ms = monotonic_ms().saturating_sub(handle.started_at_ms());
    debug!(run = handle.id(), exit_code, duration_ms, "finished");
    let result = CommandResult::new(exit_code, stdout, stderr, duration_ms);
    let _ = events.send(RunnerEvent::Finished(handle, result));
}

fn spawn_child(spec: &CommandSpec) -> io::Result<Child> {
    let Some(program) = spec.program() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "empty argument vector",
        ));
    };

    let mut cmd = Command::new(program);
    cmd.args(spec.arguments())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if let Some(cwd) = spec.cwd() {
        cmd.current_dir(cwd);
    }
    if let Some(env) = spec.env() {
        cmd.envs(env);
    }
    cmd.spawn()
}

async fn supervise(
    handle: &RunHandle,
    mut child: Child,
    control: &ActiveRun,
    events: &flume::Sender<RunnerEvent>,
) -> (i32, Vec<u8>, Vec<u8>) {
    let stdout = child
        .stdout
        .take()
        .map(|out| spawn_pump(out, handle, events, RunnerEvent::Stdout));
    let stderr = child
        .stderr
        .take()
        .map(|err| spawn_pump(err, handle, events, RunnerEvent::Stderr));

    let status = tokio::select! {
        status = child.wait() => status,
        () = control.kill.cancelled() => force_kill(&mut child).await,
        () = control.terminate.cancelled() => terminate(&mut child, &control.kill).await,
    };

    let exit_code = match status {
        Ok(status) => exit_code_of(status),
        Err(e) => {
            warn!(run = handle.id(), error = %e, "failed waiting for process");
            -1
        }
    };

    (exit_code, join_pump(stdout).await, join_pump(stderr).await)
}

fn spawn_pump<R>(
    reader: R,
    handle: &RunHandle,
    events: &flume::Sender<RunnerEvent>,
    wrap: Wrap,
) -> JoinHandle<Vec<u8>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(pump(reader, handle.clone(), events.clone(), wrap))
}

/// Streams a pipe until EOF, forwarding each chunk and keeping a copy.
async fn pump<R>(
    mut reader: R,
    handle: RunHandle,
    events: flume::Sender<RunnerEvent>,
    wrap: Wrap,
) -> Vec<u8>
where
    R: AsyncRead + Unpin,
{
    let mut captured = Vec::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        match reader.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => {
                let chunk = buf[..n].to_vec();
                trace!(run = handle.id(), bytes = n, "output chunk");
                captured.extend_from_slice(&chunk);
                let _ = events.send(wrap(handle.clone(), chunk));
            }
            Err(e) => {
                warn!(run = handle.id(), error = %e, "error reading stream");
                break;
            }
        }
    }
    captured
}

async fn join_pump(pump: Option<JoinHandle<Vec<u8>>>) -> Vec<u8> {
    match pump {
        Some(task) => task.await.unwrap_or_default(),
        None => Vec::new(),
    }
}

async fn force_kill(child: &mut Child) -> io::Result<ExitStatus> {
    if let Err(e) = child.start_kill() {
        debug!(error = %e, "kill failed, process already gone");
    }
    child.wait().await
}

/// Asks the child to exit, escalating if a kill is requested meanwhile.
async fn terminate(child: &mut Child, kill: &CancellationToken) -> io::Result<ExitStatus> {
    send_terminate(child);
    tokio::select! {
        status = child.wait() => status,
        () = kill.cancelled() => force_kill(child).await,
    }
}

#[cfg(unix)]
fn send_terminate(child: &mut Child) {
    use nix::sys::signal::{Signal, kill};
    use nix::unistd::Pid;

    let Some(pid) = child.id().and_then(|pid| i32::try_from(pid).ok()) else {
        return;
    };
    if let Err(e) = kill(Pid::from_raw(pid), Signal::SIGTERM) {
        debug!(pid, error = %e, "SIGTERM failed, will force kill");
        let _ = child.start_kill();
    }
}

#[cfg(not(unix))]
fn send_terminate(child: &mut Child) {
    let _ = child.start_kill();
}

/// Exit code, or -1 when the process died from a signal.
fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
