// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::trimmed_lines;
use crate::git::model::RemoteBranch;

/// Decodes `git branch -r --format=%(refname:short)`.
///
/// Drops `origin/HEAD -> origin/main` aliases, bare `origin` symbolic refs and
/// `remote/HEAD` pointers.
#[must_use]
pub fn parse_remote_branches(payload: &[u8]) -> Vec<RemoteBranch> {
    let text = String::from_utf8_lossy(payload);
    trimmed_lines(&text)
        .filter(|line| !line.contains("->"))
        .filter_map(|line| {
            let (remote, name) = line.split_once('/')?;
            if remote.is_empty() || name.is_empty() || name == "HEAD" {
                return None;
            }
            Some(RemoteBranch {
                remote: remote.to_string(),
                name: name.to_string(),
                full_name: line.to_string(),
            })
        })
        .collect()
}
