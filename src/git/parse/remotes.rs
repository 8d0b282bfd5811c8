// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::git::model::Remote;

/// Decodes `git remote -v`, merging the fetch and push lines of each remote.
///
/// Remotes keep the order in which their name first appears.
#[must_use]
pub fn parse_remotes(payload: &[u8]) -> Vec<Remote> {
    let text = String::from_utf8_lossy(payload);
    let mut remotes: Vec<Remote> = Vec::new();

    for line in text.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let [name, url @ .., kind] = parts.as_slice() else {
            continue;
        };
        if url.is_empty() {
            continue;
        }
        let url = url.join(" ");
        let kind = kind.trim_matches(|c| c == '(' || c == ')').to_lowercase();
        if kind != "fetch" && kind != "push" {
            continue;
        }

        let index = match remotes.iter().position(|r| r.name == *name) {
            Some(index) => index,
            None => {
                remotes.push(Remote {
                    name: (*name).to_string(),
                    fetch_url: None,
                    push_url: None,
                });
                remotes.len() - 1
            }
        };
        let remote = &mut remotes[index];
        if kind == "fetch" {
            remote.fetch_url = Some(url);
        } else {
            remote.push_url = Some(url);
        }
    }

    remotes
}
