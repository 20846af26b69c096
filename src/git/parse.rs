//! git::parse
//!
//! Parsers for the text git prints.
//!
//! These functions are pure: they take captured stdout and return records.
//! They never spawn anything, which keeps them easy to test against
//! canned output.
//!
//! # Log Format
//!
//! `git log` is asked for a delimited format rather than anything that
//! needs a generic decoder. Fields are separated by NUL and each record
//! ends with a newline. git refuses NUL in commit messages and idents, and
//! `%s` folds the subject paragraph onto one line, so neither byte occurs
//! inside a field. Any other control byte (`0x1e`, `0x1f`) may appear in
//! a subject verbatim. The subject is the last field and is split off with
//! the remainder, so even stray separators there stay in the subject.

use crate::core::types::{Branch, Commit, Remote};

/// Separator between fields of a log record.
pub const FIELD_SEPARATOR: char = '\0';

/// Terminator of a log record.
pub const RECORD_SEPARATOR: char = '\n';

/// Placeholders requested from `git log`, in [`Commit`] field order.
const LOG_PLACEHOLDERS: [&str; 13] = [
    "%H", "%h", "%T", "%t", "%P", "%p", "%an", "%ae", "%aI", "%cn", "%ce", "%cI", "%s",
];

/// Build the `--pretty=tformat:` argument for `git log`.
///
/// `tformat` terminates every record, including the last, with a newline.
///
/// # Example
///
/// ```
/// use gitfacade::git::log_format_arg;
///
/// let arg = log_format_arg();
/// assert!(arg.starts_with("--pretty=tformat:%H%x00%h"));
/// assert!(arg.ends_with("%x00%s"));
/// ```
pub fn log_format_arg() -> String {
    format!("--pretty=tformat:{}", LOG_PLACEHOLDERS.join("%x00"))
}

/// A log record that did not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    /// Zero-based index of the record in the output
    pub index: usize,
    /// Number of fields actually found
    pub fields: usize,
}

/// Parse `git remote -v` output.
///
/// Each line looks like `origin\tgit@example.com:org/repo.git (fetch)`.
/// Lines that do not split into exactly two tab-separated halves, or whose
/// second half is not exactly `url (action)`, are skipped.
///
/// # Example
///
/// ```
/// use gitfacade::git::parse_remotes;
///
/// let remotes = parse_remotes("origin\tgit@example.com (fetch)\norigin\tgit@example.com (push)\n");
/// assert_eq!(remotes.len(), 1);
/// assert!(remotes[0].can_fetch() && remotes[0].can_push());
/// ```
pub fn parse_remotes(output: &str) -> Vec<Remote> {
    let mut remotes: Vec<Remote> = Vec::new();

    for line in output.trim().split('\n') {
        let parts: Vec<&str> = line.split('\t').collect();
        let [name, target] = parts.as_slice() else {
            continue;
        };
        let halves: Vec<&str> = target.split(' ').collect();
        let [url, action] = halves.as_slice() else {
            continue;
        };

        let action = action.replace(['(', ')'], "");
        match remotes.iter_mut().find(|r| r.name == *name) {
            Some(remote) => {
                remote.actions.insert(action);
            }
            None => {
                let mut remote = Remote::new(*name, *url);
                remote.actions.insert(action);
                remotes.push(remote);
            }
        }
    }

    remotes
}

/// Parse `git branch --no-color -a` output.
///
/// Blank lines are skipped. A leading `*` marks the current branch.
pub fn parse_branches(output: &str) -> Vec<Branch> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.strip_prefix('*') {
            Some(rest) => Branch {
                name: rest.trim().to_string(),
                is_current: true,
            },
            None => Branch {
                name: line.to_string(),
                is_current: false,
            },
        })
        .collect()
}

/// Parse `git tag --list` output: one tag per non-blank line.
pub fn parse_tags(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `git log` output produced with [`log_format_arg`].
///
/// # Errors
///
/// Returns [`MalformedRecord`] for the first record with fewer fields than
/// placeholders.
pub fn parse_commits(output: &str) -> Result<Vec<Commit>, MalformedRecord> {
    output
        .split(RECORD_SEPARATOR)
        .filter(|record| !record.is_empty())
        .enumerate()
        .map(|(index, record)| parse_commit(index, record))
        .collect()
}

fn parse_commit(index: usize, record: &str) -> Result<Commit, MalformedRecord> {
    let fields: Vec<&str> = record.splitn(LOG_PLACEHOLDERS.len(), FIELD_SEPARATOR).collect();
    let [hash, short_hash, tree_hash, short_tree_hash, parents, short_parents, author_name, author_email, author_date, committer_name, committer_email, committer_date, subject] =
        fields.as_slice()
    else {
        return Err(MalformedRecord {
            index,
            fields: fields.len(),
        });
    };

    Ok(Commit {
        hash: hash.to_string(),
        short_hash: short_hash.to_string(),
        tree_hash: tree_hash.to_string(),
        short_tree_hash: short_tree_hash.to_string(),
        parent_hashes: split_hashes(parents),
        short_parent_hashes: split_hashes(short_parents),
        author_name: author_name.to_string(),
        author_email: author_email.to_string(),
        author_date: author_date.to_string(),
        committer_name: committer_name.to_string(),
        committer_email: committer_email.to_string(),
        committer_date: committer_date.to_string(),
        subject: subject.to_string(),
    })
}

/// Split a space-separated hash list. A root commit has an empty list.
fn split_hashes(field: &str) -> Vec<String> {
    field.split_whitespace().map(str::to_string).collect()
}
