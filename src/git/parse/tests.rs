// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;
use crate::git::model::{Branch, BranchInfo, Remote};

// --- status ---

#[test]
fn test_status_branch_staged_and_untracked() {
    let payload = b"# branch.head main\x00# branch.ab +1 -2\x00\
        1 M. N... 100644 100644 100644 abcdef1 abcdef2 src/app.py\x00? new.txt\x00";
    let status = parse_status(payload);

    let branch = status.branch.expect("branch header");
    assert_eq!(branch.name.as_deref(), Some("main"));
    assert_eq!((branch.ahead, branch.behind), (1, 2));

    assert_eq!(status.staged.len(), 1);
    assert_eq!(status.staged[0].path, "src/app.py");
    assert_eq!(status.staged[0].staged_status, "M");
    assert_eq!(status.staged[0].unstaged_status, ".");
    assert!(status.unstaged.is_empty());

    assert_eq!(status.untracked.len(), 1);
    assert_eq!(status.untracked[0].path, "new.txt");
    assert_eq!(status.untracked[0].staged_status, "?");
}

#[test]
fn test_status_rename_consumes_next_record() {
    let payload = b"2 R. N... 100644 100644 100644 aaa bbb R100 new name.rs\x00old name.rs\x00\
        1 .M N... 100644 100644 100644 ccc ccc other.rs\x00";
    let status = parse_status(payload);

    assert_eq!(status.staged.len(), 1);
    let rename = &status.staged[0];
    assert_eq!(rename.path, "new name.rs");
    assert_eq!(rename.orig_path.as_deref(), Some("old name.rs"));

    // the orig path record is not re-read as an entry
    assert_eq!(status.unstaged.len(), 1);
    assert_eq!(status.unstaged[0].path, "other.rs");
}

#[test]
fn test_status_rename_at_end_has_no_orig_path() {
    let status = parse_status(b"2 RM N... 100644 100644 100644 aaa bbb R90 moved.txt\x00");
    assert_eq!(status.staged[0].orig_path, None);
    assert_eq!(status.unstaged[0].path, "moved.txt");
}

#[test]
fn test_status_change_in_both_lists() {
    let status = parse_status(b"1 MM N... 100644 100644 100644 a b both.txt\x00");
    assert_eq!(status.staged, status.unstaged);
    assert_eq!(status.staged[0].path, "both.txt");
}

#[test]
fn test_status_conflicts_and_ignored() {
    let payload = b"u UU N... 100644 100644 100644 100644 a b c clash.txt\x00\
        u .. N... 100644 100644 100644 100644 a b c odd.txt\x00\
        ! target/\x00\
        x unknown record\x00";
    let status = parse_status(payload);
    let paths: Vec<_> = status.conflicted.iter().map(|c| c.path.as_str()).collect();
    assert_eq!(paths, ["clash.txt", "odd.txt"]);
    assert!(status.staged.is_empty() && status.unstaged.is_empty());
    assert!(status.untracked.is_empty());
}

#[test]
fn test_status_sentinels_are_absent() {
    let payload = b"# branch.oid (initial)\x00# branch.head (detached)\x00";
    assert_eq!(parse_status(payload).branch, Some(BranchInfo::default()));

    let payload = b"# branch.oid 0123abc\x00# branch.upstream origin/main\x00# branch.ab +x -3\x00";
    let branch = parse_status(payload).branch.unwrap();
    assert_eq!(branch.head_oid.as_deref(), Some("0123abc"));
    assert_eq!(branch.upstream.as_deref(), Some("origin/main"));
    assert_eq!((branch.ahead, branch.behind), (0, 3));
}

#[test]
fn test_status_unknown_sentinel_is_absent() {
    let branch = parse_status(b"# branch.oid (unknown)\x00# branch.head (unknown)\x00")
        .branch
        .unwrap();
    assert_eq!(branch.head_oid, None);
    assert_eq!(branch.name, None);
    assert_eq!(branch, BranchInfo::default());
}

#[test]
fn test_status_without_headers_has_no_branch() {
    let status = parse_status(b"? a\x00");
    assert!(status.branch.is_none());
    assert!(parse_status(b"").is_clean());
    // a bare "# " header still counts as seen
    assert!(parse_status(b"# x\x00").branch.is_some());
}

#[test]
fn test_status_short_records_pad() {
    let status = parse_status(b"1 M.\x001\x00?\x00");
    assert_eq!(status.staged.len(), 1);
    assert_eq!(status.staged[0].path, "");
    assert_eq!(status.untracked[0].path, "");
}

// --- log / stash ---

#[test]
fn test_log_single_root_commit() {
    let commits = parse_log(b"aaa\x1f\x1fAlice\x1falice@x\x1f2024-01-01T00:00:00+00:00\x1fInitial\x1e");
    assert_eq!(commits.len(), 1);
    let commit = &commits[0];
    assert!(commit.parents.is_empty());
    assert_eq!(commit.author_name, "Alice");
    assert_eq!(commit.subject, "Initial");
}

#[test]
fn test_log_merge_and_padding() {
    let commits = parse_log(
        b"m1\x1fp1 p2\x1fBob\x1fbob@x\x1f2024-02-02T10:00:00+01:00\x1fMerge\x1e\nshort\x1fp3\x1e",
    );
    assert_eq!(commits.len(), 2);
    assert_eq!(commits[0].parents, ["p1", "p2"]);
    // git separates format: records with a newline
    assert_eq!(commits[1].oid, "short");
    assert_eq!(commits[1].parents, ["p3"]);
    assert_eq!(commits[1].subject, "");
}

#[test]
fn test_log_subject_keeps_extra_separators_out() {
    let commits = parse_log(b"a\x1f\x1fn\x1fe\x1fd\x1fsubj\x1fextra\x1e");
    assert_eq!(commits[0].subject, "subj");
}

#[test]
fn test_stash_records() {
    let stashes = parse_stashes(
        b"s1\x1fstash@{0}\x1fWIP on main: abc\x1f2024-03-03T00:00:00Z\x1es2\x1fstash@{1}\x1e",
    );
    assert_eq!(stashes.len(), 2);
    assert_eq!(stashes[0].selector, "stash@{0}");
    assert_eq!(stashes[0].summary, "WIP on main: abc");
    assert_eq!(stashes[1].summary, "");
    assert_eq!(stashes[1].date, "");
}

#[test]
fn test_stash_date_selectors_become_indexes() {
    let stashes = parse_stashes(
        b"s1\x1fstash@{2026-10-18T03:32:46+00:00}\x1fOn main: b\x1f2026-10-18T03:32:46+00:00\x1e\n\
          s2\x1fstash@{2026-10-18T03:32:46+00:00}\x1fOn main: a\x1f2026-10-18T03:32:46+00:00\x1e",
    );
    let selectors: Vec<&str> = stashes.iter().map(|s| s.selector.as_str()).collect();
    assert_eq!(selectors, ["stash@{0}", "stash@{1}"]);
    assert_eq!(stashes[1].oid, "s2");
    assert_eq!(stashes[1].date, "2026-10-18T03:32:46+00:00");
}

// --- branches ---

#[test]
fn test_branches_tracking() {
    let payload = b"main|*|origin/main|[ahead 1, behind 2]\n\
        feature| |origin/feature|[gone]\n\
        local| ||\n\
        bare| |origin/bare|ahead 3\n";
    let branches = parse_branches(payload);
    assert_eq!(
        branches,
        vec![
            Branch {
                name: "main".into(),
                is_current: true,
                upstream: Some("origin/main".into()),
                ahead: 1,
                behind: 2,
                gone: false,
            },
            Branch {
                name: "feature".into(),
                upstream: Some("origin/feature".into()),
                gone: true,
                ..Branch::default()
            },
            Branch {
                name: "local".into(),
                ..Branch::default()
            },
            Branch {
                name: "bare".into(),
                upstream: Some("origin/bare".into()),
                ahead: 3,
                ..Branch::default()
            },
        ]
    );
}

#[test]
fn test_branches_non_numeric_counts_default_to_zero() {
    let branches = parse_branches(b"x| |o/x|[ahead many, behind]\nonly-name\n");
    assert_eq!((branches[0].ahead, branches[0].behind), (0, 0));
    assert_eq!(branches[1].name, "only-name");
    assert!(!branches[1].is_current);
    assert_eq!(branches[1].upstream, None);
}

// --- remote branches / remotes ---

#[test]
fn test_remote_branches_filters_symbolic_refs() {
    let payload = b"origin/HEAD -> origin/main\norigin\norigin/HEAD\norigin/main\n\
        upstream/feature/deep\n/bad\nbad/\n";
    let branches = parse_remote_branches(payload);
    let names: Vec<_> = branches
        .iter()
        .map(|b| (b.remote.as_str(), b.name.as_str(), b.full_name.as_str()))
        .collect();
    assert_eq!(
        names,
        [
            ("origin", "main", "origin/main"),
            ("upstream", "feature/deep", "upstream/feature/deep"),
        ]
    );
}

#[test]
fn test_remotes_merge_fetch_and_push() {
    let payload = b"origin\thttps://example.com/a.git (fetch)\n\
        origin\tgit@example.com:a.git (push)\n\
        mirror\t/srv/with space/a.git (fetch)\n\
        weird\turl (mirror)\n\
        short (fetch)\n\
        \n";
    let remotes = parse_remotes(payload);
    assert_eq!(
        remotes,
        vec![
            Remote {
                name: "origin".into(),
                fetch_url: Some("https://example.com/a.git".into()),
                push_url: Some("git@example.com:a.git".into()),
            },
            Remote {
                name: "mirror".into(),
                fetch_url: Some("/srv/with space/a.git".into()),
                push_url: None,
            },
        ]
    );
}

#[test]
fn test_remotes_kind_is_case_insensitive() {
    let remotes = parse_remotes(b"o u (PUSH)\n");
    assert_eq!(remotes[0].push_url.as_deref(), Some("u"));
}

// --- tags / conflicts / diff ---

#[test]
fn test_tags_and_conflicts_skip_blank_lines() {
    let tags = parse_tags(b"v1.0\n\n  v1.1  \n");
    let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["v1.0", "v1.1"]);
    assert_eq!(parse_conflicts(b"a.txt\r\n\nb/c.txt\n"), ["a.txt", "b/c.txt"]);
}

#[test]
fn test_diff_replaces_invalid_utf8() {
    assert_eq!(parse_diff(b"+ok \xff\xfe line\n"), "+ok \u{FFFD}\u{FFFD} line\n");
}

// --- robustness ---

/// Deterministic xorshift64 byte generator.
struct Bytes(u64);

impl Bytes {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Payload biased toward the separators the parsers split on.
    fn payload(&mut self) -> Vec<u8> {
        const ALPHABET: &[u8] = b"\x00\x1e\x1f|/ \n\t#12u?!.MAR()[],+-abc*";
        let len = (self.next_u64() % 256) as usize;
        (0..len)
            .map(|_| {
                let r = self.next_u64();
                if r % 3 == 0 {
                    (r >> 8) as u8
                } else {
                    ALPHABET[(r >> 8) as usize % ALPHABET.len()]
                }
            })
            .collect()
    }
}

#[test]
fn test_parsers_accept_arbitrary_bytes() {
    let mut rng = Bytes(0x9E37_79B9_7F4A_7C15);
    for _ in 0..5_000 {
        let payload = rng.payload();
        let _ = parse_status(&payload);
        let _ = parse_log(&payload);
        let _ = parse_stashes(&payload);
        let _ = parse_branches(&payload);
        let _ = parse_remote_branches(&payload);
        let _ = parse_remotes(&payload);
        let _ = parse_tags(&payload);
        let _ = parse_conflicts(&payload);
        let _ = parse_diff(&payload);
    }
}

#[test]
fn test_parsers_are_idempotent() {
    let mut rng = Bytes(42);
    for _ in 0..500 {
        let payload = rng.payload();
        assert_eq!(parse_status(&payload), parse_status(&payload));
        assert_eq!(parse_log(&payload), parse_log(&payload));
        assert_eq!(parse_stashes(&payload), parse_stashes(&payload));
        assert_eq!(parse_branches(&payload), parse_branches(&payload));
        assert_eq!(parse_remote_branches(&payload), parse_remote_branches(&payload));
        assert_eq!(parse_remotes(&payload), parse_remotes(&payload));
        assert_eq!(parse_tags(&payload), parse_tags(&payload));
        assert_eq!(parse_conflicts(&payload), parse_conflicts(&payload));
        assert_eq!(parse_diff(&payload), parse_diff(&payload));
    }
}
