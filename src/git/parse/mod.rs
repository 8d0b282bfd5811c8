// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pure decoders from raw git output to [`model`](super::model) records.
//!
//! ```text
//! status    NUL records, "# branch.*" headers, 1/2/u/? entries
//! log       \x1e records, \x1f fields (6)
//! stash     \x1e records, \x1f fields (4)
//! branches  name|HEAD|upstream|[track]
//! remote    remote/branch lines
//! remotes   name url (fetch|push)
//! tags      one name per line
//! conflicts one path per line
//! diff      lossy text
//! ```
//!
//! None of these fail. Invalid UTF-8 is replaced, short records are padded
//! with empty fields and unknown record types are skipped.

mod branches;
mod conflicts;
mod diff;
mod log;
mod remote_branches;
mod remotes;
mod stash;
mod status;
mod tags;

pub use branches::parse_branches;
pub use conflicts::parse_conflicts;
pub use diff::parse_diff;
pub use log::parse_log;
pub use remote_branches::parse_remote_branches;
pub use remotes::parse_remotes;
pub use stash::parse_stashes;
pub use status::parse_status;
pub use tags::parse_tags;

/// Separates fields inside a log or stash record.
pub const FIELD_SEP: char = '\x1f';
/// Terminates a log or stash record.
pub const RECORD_SEP: char = '\x1e';

/// Splits `record` on [`FIELD_SEP`] into exactly `N` fields, padding with "".
fn fields<const N: usize>(record: &str) -> [&str; N] {
    let mut out = [""; N];
    for (slot, field) in out.iter_mut().zip(record.split(FIELD_SEP)) {
        *slot = field;
    }
    out
}

/// Non-empty trimmed lines.
fn trimmed_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

#[cfg(test)]
mod tests;
