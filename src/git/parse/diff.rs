// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

/// Diff output as display text; invalid UTF-8 is replaced.
#[must_use]
pub fn parse_diff(payload: &[u8]) -> String {
    String::from_utf8_lossy(payload).into_owned()
}
