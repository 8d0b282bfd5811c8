// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{RECORD_SEP, fields};
use crate::git::model::Commit;

/// Decodes `oid \x1f parents \x1f name \x1f email \x1f date \x1f subject \x1e` records.
#[must_use]
pub fn parse_log(payload: &[u8]) -> Vec<Commit> {
    let text = String::from_utf8_lossy(payload);
    text.split(RECORD_SEP)
        .map(|record| record.strip_prefix('\n').unwrap_or(record))
        .filter(|record| !record.is_empty())
        .map(|record| {
            let [oid, parents, author_name, author_email, author_date, subject] = fields(record);
            Commit {
                oid: oid.to_string(),
                parents: parents.split_whitespace().map(str::to_string).collect(),
                author_name: author_name.to_string(),
                author_email: author_email.to_string(),
                author_date: author_date.to_string(),
                subject: subject.to_string(),
            }
        })
        .collect()
}
