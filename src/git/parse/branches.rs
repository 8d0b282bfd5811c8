// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git branch --format=%(refname:short)|%(HEAD)|%(upstream:short)|%(upstream:track)`
//!
//! Tracking examples: `[ahead 1, behind 2]`, `[gone]`, `ahead 3`, empty.

use crate::git::model::Branch;

/// Count after `ahead `/`behind `; anything unreadable is 0.
fn count(token: &str) -> u32 {
    token
        .split_whitespace()
        .nth(1)
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

#[must_use]
pub fn parse_branches(payload: &[u8]) -> Vec<Branch> {
    let text = String::from_utf8_lossy(payload);
    let mut branches = Vec::new();

    for line in text.lines().filter(|line| !line.is_empty()) {
        let mut parts = line.split('|');
        let name = parts.next().unwrap_or("");
        let head = parts.next().unwrap_or("");
        let upstream = parts.next().unwrap_or("");
        let track = parts.next().unwrap_or("").trim();

        let track = track
            .strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
            .unwrap_or(track);

        let mut branch = Branch {
            name: name.to_string(),
            is_current: head.trim() == "*",
            upstream: (!upstream.is_empty()).then(|| upstream.to_string()),
            gone: track.contains("gone"),
            ..Branch::default()
        };
        for token in track.split(',').map(str::trim) {
            if token.starts_with("ahead ") {
                branch.ahead = count(token);
            } else if token.starts_with("behind ") {
                branch.behind = count(token);
            }
        }
        branches.push(branch);
    }

    branches
}
