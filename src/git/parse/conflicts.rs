// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::trimmed_lines;

/// Decodes `git diff --name-only --diff-filter=U`.
#[must_use]
pub fn parse_conflicts(payload: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(payload);
    trimmed_lines(&text).map(str::to_string).collect()
}
