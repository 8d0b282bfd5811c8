// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{RECORD_SEP, fields};
use crate::git::model::StashEntry;

/// Whether `selector` is `stash@{N}`.
fn is_indexed(selector: &str) -> bool {
    selector
        .strip_prefix("stash@{")
        .and_then(|rest| rest.strip_suffix('}'))
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

/// Decodes `oid \x1f selector \x1f summary \x1f date \x1e` records.
///
/// Records come newest first. Under `--date` git prints the selector in
/// reflog date form, so anything but `stash@{N}` is replaced by
/// `stash@{position}`.
#[must_use]
pub fn parse_stashes(payload: &[u8]) -> Vec<StashEntry> {
    let text = String::from_utf8_lossy(payload);
    text.split(RECORD_SEP)
        .map(|record| record.strip_prefix('\n').unwrap_or(record))
        .filter(|record| !record.is_empty())
        .enumerate()
        .map(|(position, record)| {
            let [oid, selector, summary, date] = fields(record);
            let selector = if is_indexed(selector) {
                selector.to_string()
            } else {
                format!("stash@{{{position}}}")
            };
            StashEntry {
                oid: oid.to_string(),
                selector,
                summary: summary.to_string(),
                date: date.to_string(),
            }
        })
        .collect()
}
