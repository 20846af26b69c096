//! git::interface
//!
//! The repository handle and its error taxonomy.
//!
//! [`Repository`] binds a local path to a git executable. Each method runs
//! exactly one git subcommand through [`runner::run`], checks the exit
//! status, and hands the captured text to [`super::parse`].
//!
//! # Error Handling
//!
//! A nonzero exit becomes [`GitError::CommandFailed`], carrying the
//! captured stderr and an [`ErrorKind`] naming the operation that failed.
//! [`GitError::kind`] exposes the numeric taxonomy for callers that need
//! a stable code.
//!
//! # Example
//!
//! ```no_run
//! use gitfacade::git::Repository;
//!
//! let repo = Repository::new("/srv/checkout")?;
//! repo.init()?;
//! for branch in repo.list_branches()? {
//!     println!("{}{}", if branch.is_current { "* " } else { "  " }, branch.name);
//! }
//! # Ok::<(), gitfacade::git::GitError>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::parse::{self, MalformedRecord};
use super::runner::{self, CommandOutput};
use crate::core::types::{Branch, Commit, PullStatus, Remote};

/// Executable used when nothing else is configured.
pub const DEFAULT_EXECUTABLE: &str = "git";

/// Numeric error categories.
///
/// The discriminants are stable and double as process-level error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorKind {
    InstallationNotFound = 1,
    Init = 2,
    RemotesList = 3,
    LogList = 4,
    BranchList = 5,
    TagList = 6,
    Fetch = 7,
    Pull = 8,
    Push = 10,
}

impl ErrorKind {
    /// The numeric code for this kind.
    ///
    /// # Example
    ///
    /// ```
    /// use gitfacade::git::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::InstallationNotFound.code(), 1);
    /// assert_eq!(ErrorKind::Push.code(), 10);
    /// ```
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Name of the git operation this kind reports on.
    pub fn operation(self) -> &'static str {
        match self {
            ErrorKind::InstallationNotFound => "locate git",
            ErrorKind::Init => "init",
            ErrorKind::RemotesList => "remote -v",
            ErrorKind::LogList => "log",
            ErrorKind::BranchList => "branch",
            ErrorKind::TagList => "tag",
            ErrorKind::Fetch => "fetch",
            ErrorKind::Pull => "pull",
            ErrorKind::Push => "push",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.operation())
    }
}

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// The local path cannot back a repository.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },

    /// The configured git executable could not be located.
    #[error("git not found: {executable}")]
    InstallationNotFound {
        /// The executable that was looked up
        executable: PathBuf,
    },

    /// git ran and exited nonzero.
    #[error("git {kind} failed: {}", .output.trim())]
    CommandFailed {
        /// Which operation failed
        kind: ErrorKind,
        /// Captured stderr
        output: String,
    },

    /// The process could not be spawned at all.
    #[error("failed to run git {command}: {source}")]
    Spawn {
        /// The subcommand that was attempted
        command: String,
        source: std::io::Error,
    },

    /// The local path did not exist and could not be created.
    #[error("failed to create '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// `git log` printed a record with the wrong number of fields.
    #[error("malformed log record #{index}: expected 13 fields, found {fields}")]
    MalformedLog {
        /// Zero-based record index
        index: usize,
        /// Number of fields found
        fields: usize,
    },
}

impl GitError {
    /// The numeric kind, if this error belongs to the taxonomy.
    ///
    /// Argument, spawn and filesystem errors have no kind. A malformed log
    /// reports as [`ErrorKind::LogList`].
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            GitError::InstallationNotFound { .. } => Some(ErrorKind::InstallationNotFound),
            GitError::CommandFailed { kind, .. } => Some(*kind),
            GitError::MalformedLog { .. } => Some(ErrorKind::LogList),
            GitError::InvalidArgument { .. }
            | GitError::Spawn { .. }
            | GitError::CreateDir { .. } => None,
        }
    }

    /// The captured git output for command failures.
    pub fn output(&self) -> Option<&str> {
        match self {
            GitError::CommandFailed { output, .. } => Some(output),
            _ => None,
        }
    }
}

impl From<MalformedRecord> for GitError {
    fn from(err: MalformedRecord) -> Self {
        GitError::MalformedLog {
            index: err.index,
            fields: err.fields,
        }
    }
}

/// A handle on a local repository path.
///
/// Construction validates eagerly: the executable must resolve and the
/// path, if it exists, must be writable. The handle is immutable after
/// that. Calls are synchronous and each spawns one git process; nothing
/// is cached between calls.
#[derive(Debug, Clone)]
pub struct Repository {
    local_path: PathBuf,
    executable_path: PathBuf,
}

impl Repository {
    /// Bind to `local_path` using `git` from `PATH`.
    ///
    /// # Errors
    ///
    /// See [`Repository::with_executable`].
    pub fn new(local_path: impl AsRef<Path>) -> Result<Self, GitError> {
        Self::with_executable(local_path, DEFAULT_EXECUTABLE)
    }

    /// Bind to `local_path` using a specific executable.
    ///
    /// `executable` may be a bare name (searched on `PATH`) or a path.
    ///
    /// # Errors
    ///
    /// - [`GitError::InstallationNotFound`] if the executable cannot be found
    /// - [`GitError::InvalidArgument`] if `local_path` is empty, or is an
    ///   existing directory the calling process cannot write to
    pub fn with_executable(
        local_path: impl AsRef<Path>,
        executable: impl AsRef<Path>,
    ) -> Result<Self, GitError> {
        let executable_path = locate_executable(executable.as_ref())?;

        let local_path = local_path.as_ref();
        if local_path.as_os_str().is_empty() {
            return Err(GitError::InvalidArgument {
                message: "local path must not be empty".to_string(),
            });
        }
        if local_path.is_dir() && !is_writable(local_path) {
            return Err(GitError::InvalidArgument {
                message: format!("{} must be writable", local_path.display()),
            });
        }

        debug!(
            local_path = %local_path.display(),
            executable = %executable_path.display(),
            "bound repository handle"
        );

        Ok(Self {
            local_path: local_path.to_path_buf(),
            executable_path,
        })
    }

    /// The path this handle is bound to.
    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    /// The resolved git executable.
    pub fn executable_path(&self) -> &Path {
        &self.executable_path
    }

    // =========================================================================
    // Setup
    // =========================================================================

    /// Check whether `git status` succeeds in the bound path.
    ///
    /// A path that does not exist yet is simply not initialized.
    pub fn is_initialized(&self) -> Result<bool, GitError> {
        if !self.local_path.is_dir() {
            return Ok(false);
        }
        Ok(self.run(&["status"])?.success())
    }

    /// Create the directory if needed and run `git init` unless the path is
    /// already a repository.
    ///
    /// # Errors
    ///
    /// [`GitError::CreateDir`] if the directory cannot be created, or a
    /// [`ErrorKind::Init`] failure if git refuses.
    pub fn init(&self) -> Result<(), GitError> {
        if !self.local_path.is_dir() {
            fs::create_dir_all(&self.local_path).map_err(|source| GitError::CreateDir {
                path: self.local_path.clone(),
                source,
            })?;
        }

        if self.is_initialized()? {
            debug!("already initialized, skipping git init");
            return Ok(());
        }

        self.run_checked(&["init"], ErrorKind::Init)?;
        info!(path = %self.local_path.display(), "initialized repository");
        Ok(())
    }

    // =========================================================================
    // Network
    // =========================================================================

    /// Run `git fetch` and return what it printed.
    pub fn fetch(&self) -> Result<String, GitError> {
        self.run_checked(&["fetch"], ErrorKind::Fetch)
    }

    /// Run `git pull`.
    pub fn pull(&self) -> Result<PullStatus, GitError> {
        let stdout = self.run_checked(&["pull"], ErrorKind::Pull)?;
        Ok(PullStatus::from_output(&stdout))
    }

    /// Push the current branch.
    ///
    /// Known defect kept for compatibility: this runs `git pull`, not
    /// `git push`, and failures report [`ErrorKind::Pull`]. Callers that
    /// depend on the old behavior keep working until it is corrected
    /// deliberately.
    pub fn push(&self) -> Result<(), GitError> {
        self.run_checked(&["pull"], ErrorKind::Pull)?;
        Ok(())
    }

    // =========================================================================
    // Listings
    // =========================================================================

    /// List remotes from `git remote -v`.
    pub fn list_remotes(&self) -> Result<Vec<Remote>, GitError> {
        let stdout = self.run_checked(&["remote", "-v"], ErrorKind::RemotesList)?;
        Ok(parse::parse_remotes(&stdout))
    }

    /// List local and remote-tracking branches.
    pub fn list_branches(&self) -> Result<Vec<Branch>, GitError> {
        let stdout = self.run_checked(&["branch", "--no-color", "-a"], ErrorKind::BranchList)?;
        Ok(parse::parse_branches(&stdout))
    }

    /// List commits reachable from HEAD, newest first.
    ///
    /// # Errors
    ///
    /// Besides [`ErrorKind::LogList`] command failures (git refuses to log
    /// a branch with no commits), a record with an unexpected shape yields
    /// [`GitError::MalformedLog`].
    pub fn list_commits(&self) -> Result<Vec<Commit>, GitError> {
        let format = parse::log_format_arg();
        let stdout = self.run_checked(&["log", &format], ErrorKind::LogList)?;
        Ok(parse::parse_commits(&stdout)?)
    }

    /// List tag names.
    pub fn list_tags(&self) -> Result<Vec<String>, GitError> {
        let stdout = self.run_checked(&["tag", "--list"], ErrorKind::TagList)?;
        Ok(parse::parse_tags(&stdout))
    }

    // =========================================================================
    // Execution
    // =========================================================================

    fn run(&self, args: &[&str]) -> Result<CommandOutput, GitError> {
        runner::run(&self.executable_path, &self.local_path, args).map_err(|source| {
            GitError::Spawn {
                command: args.join(" "),
                source,
            }
        })
    }

    /// Run and return stdout, or fail with `kind` carrying stderr.
    fn run_checked(&self, args: &[&str], kind: ErrorKind) -> Result<String, GitError> {
        let output = self.run(args)?;
        if output.success() {
            Ok(output.into_text())
        } else {
            Err(GitError::CommandFailed {
                kind,
                output: output.into_text(),
            })
        }
    }
}

/// Resolve the executable, searching `PATH` for bare names.
fn locate_executable(executable: &Path) -> Result<PathBuf, GitError> {
    which::which(executable).map_err(|_| GitError::InstallationNotFound {
        executable: executable.to_path_buf(),
    })
}

/// Whether the calling process may write to `path`.
///
/// Asks the kernel through access(2), so ownership, root and ACLs all count.
#[cfg(unix)]
fn is_writable(path: &Path) -> bool {
    rustix::fs::access(path, rustix::fs::Access::WRITE_OK).is_ok()
}

#[cfg(not(unix))]
fn is_writable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| !meta.permissions().readonly())
        .unwrap_or(false)
}
