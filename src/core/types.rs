//! core::types
//!
//! Records parsed from git's textual output.
//!
//! # Types
//!
//! - [`Remote`] - A named remote with its url and fetch/push actions
//! - [`Branch`] - A local or remote-tracking branch
//! - [`Commit`] - One entry of the commit log
//! - [`PullStatus`] - Outcome of a successful pull
//!
//! Every record is a fresh snapshot: nothing here is mutated after the
//! parser hands it back.

use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// A named remote.
///
/// `git remote -v` prints one line per (remote, action) pair, so a single
/// remote usually shows up twice. Those lines are folded into one record.
///
/// # Example
///
/// ```
/// use gitfacade::core::types::Remote;
///
/// let mut remote = Remote::new("origin", "git@example.com:org/repo.git");
/// remote.actions.insert("fetch".to_string());
/// assert!(remote.can_fetch());
/// assert!(!remote.can_push());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Remote {
    /// Remote name (e.g. "origin")
    pub name: String,
    /// Url from the first line seen for this remote
    pub url: String,
    /// Action qualifiers with the parentheses stripped ("fetch", "push")
    pub actions: BTreeSet<String>,
}

impl Remote {
    /// Create a remote with no actions yet.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            actions: BTreeSet::new(),
        }
    }

    /// Whether the remote was listed with a `(fetch)` line.
    pub fn can_fetch(&self) -> bool {
        self.actions.contains("fetch")
    }

    /// Whether the remote was listed with a `(push)` line.
    pub fn can_push(&self) -> bool {
        self.actions.contains("push")
    }
}

/// A branch from `git branch -a`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Branch {
    /// Branch name as printed by git, marker removed
    pub name: String,
    /// True for the branch checked out in the working tree
    pub is_current: bool,
}

impl Branch {
    /// Whether this is a remote-tracking branch (`remotes/<remote>/...`).
    ///
    /// # Example
    ///
    /// ```
    /// use gitfacade::core::types::Branch;
    ///
    /// let branch = Branch { name: "remotes/origin/main".into(), is_current: false };
    /// assert!(branch.is_remote());
    /// ```
    pub fn is_remote(&self) -> bool {
        self.name.starts_with("remotes/")
    }
}

/// A commit from `git log`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    pub hash: String,
    pub short_hash: String,
    pub tree_hash: String,
    pub short_tree_hash: String,
    /// Parent hashes in git's order; empty for a root commit
    pub parent_hashes: Vec<String>,
    pub short_parent_hashes: Vec<String>,
    pub author_name: String,
    pub author_email: String,
    /// Strict ISO-8601 author date
    pub author_date: String,
    pub committer_name: String,
    pub committer_email: String,
    /// Strict ISO-8601 committer date
    pub committer_date: String,
    /// First line of the commit message
    pub subject: String,
}

impl Commit {
    /// Check whether this commit has more than one parent.
    pub fn is_merge(&self) -> bool {
        self.parent_hashes.len() > 1
    }

    /// Check whether this commit has no parents.
    pub fn is_root(&self) -> bool {
        self.parent_hashes.is_empty()
    }

    /// Parse the author date.
    ///
    /// Returns `None` if git printed something that is not RFC 3339.
    pub fn author_time(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.author_date).ok()
    }

    /// Parse the committer date.
    pub fn committer_time(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.committer_date).ok()
    }
}

/// Outcome of a successful `git pull`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PullStatus {
    /// The local branch was already at the remote tip.
    UpToDate,
    /// Any other output, including the unhyphenated message of git 2.16
    /// and later.
    Unknown,
}

impl PullStatus {
    /// The exact message recognized as "nothing to pull".
    pub const UP_TO_DATE_MESSAGE: &'static str = "Already up-to-date.";

    /// Classify the stdout of a successful pull.
    ///
    /// Only the trimmed output matching [`Self::UP_TO_DATE_MESSAGE`] counts
    /// as up to date. Newer git prints "Already up to date." without
    /// hyphens, which classifies as [`PullStatus::Unknown`].
    ///
    /// # Example
    ///
    /// ```
    /// use gitfacade::core::types::PullStatus;
    ///
    /// assert_eq!(PullStatus::from_output("Already up-to-date.\n"), PullStatus::UpToDate);
    /// assert_eq!(PullStatus::from_output("Fast-forward\n"), PullStatus::Unknown);
    /// ```
    pub fn from_output(stdout: &str) -> Self {
        if stdout.trim() == Self::UP_TO_DATE_MESSAGE {
            PullStatus::UpToDate
        } else {
            PullStatus::Unknown
        }
    }

    /// Short description used by the CLI.
    pub fn description(&self) -> &'static str {
        match self {
            PullStatus::UpToDate => "up to date",
            PullStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for PullStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit_with_parents(parents: &[&str]) -> Commit {
        Commit {
            hash: "a".repeat(40),
            short_hash: "aaaaaaa".into(),
            tree_hash: "b".repeat(40),
            short_tree_hash: "bbbbbbb".into(),
            parent_hashes: parents.iter().map(|p| p.to_string()).collect(),
            short_parent_hashes: parents.iter().map(|p| p[..7].to_string()).collect(),
            author_name: "Test User".into(),
            author_email: "test@example.com".into(),
            author_date: "2024-03-01T12:30:00+02:00".into(),
            committer_name: "Test User".into(),
            committer_email: "test@example.com".into(),
            committer_date: "not a date".into(),
            subject: "Initial commit".into(),
        }
    }

    mod pull_status {
        use super::*;

        #[test]
        fn hyphenated_message_is_up_to_date() {
            assert_eq!(
                PullStatus::from_output("  Already up-to-date.  \n"),
                PullStatus::UpToDate
            );
        }

        #[test]
        fn unhyphenated_message_is_unknown() {
            assert_eq!(
                PullStatus::from_output("Already up to date.\n"),
                PullStatus::Unknown
            );
        }

        #[test]
        fn other_output_is_unknown() {
            assert_eq!(
                PullStatus::from_output("Updating 1a2b3c..4d5e6f\nFast-forward\n"),
                PullStatus::Unknown
            );
            assert_eq!(PullStatus::from_output(""), PullStatus::Unknown);
            assert_eq!(
                PullStatus::from_output("Already up-to-date. Yeeah!"),
                PullStatus::Unknown
            );
        }
    }

    mod commit {
        use super::*;

        #[test]
        fn root_and_merge_detection() {
            let root = commit_with_parents(&[]);
            assert!(root.is_root());
            assert!(!root.is_merge());

            let merge = commit_with_parents(&[&"c".repeat(40), &"d".repeat(40)]);
            assert!(!merge.is_root());
            assert!(merge.is_merge());
        }

        #[test]
        fn date_parsing() {
            let commit = commit_with_parents(&[]);
            let author = commit.author_time().expect("author date should parse");
            assert_eq!(author.offset().local_minus_utc(), 2 * 3600);
            assert!(commit.committer_time().is_none());
        }
    }

    #[test]
    fn remote_actions() {
        let mut remote = Remote::new("origin", "https://example.com/repo.git");
        assert!(!remote.can_fetch());
        remote.actions.insert("push".into());
        assert!(remote.can_push());
        assert!(!remote.can_fetch());
    }

    #[test]
    fn local_branch_is_not_remote() {
        let branch = Branch {
            name: "main".into(),
            is_current: true,
        };
        assert!(!branch.is_remote());
    }

    #[test]
    fn records_serialize() {
        let json = serde_json::to_value(PullStatus::UpToDate).unwrap();
        assert_eq!(json, serde_json::json!("up_to_date"));

        let branch = Branch {
            name: "main".into(),
            is_current: true,
        };
        let json = serde_json::to_value(&branch).unwrap();
        assert_eq!(json["name"], "main");
        assert_eq!(json["is_current"], true);
    }
}
