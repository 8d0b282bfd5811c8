// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::trimmed_lines;
use crate::git::model::Tag;

/// Decodes `git tag --list`.
#[must_use]
pub fn parse_tags(payload: &[u8]) -> Vec<Tag> {
    let text = String::from_utf8_lossy(payload);
    trimmed_lines(&text)
        .map(|name| Tag {
            name: name.to_string(),
        })
        .collect()
}
