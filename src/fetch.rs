//! Template fetching functionality.
//! Retrieves the template tree into the target project directory, either by
//! cloning a git repository (keeping its history) or by copying a local
//! directory used for development and tests.

use crate::constants::FETCH_TIMEOUT_SECS;
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use url::Url;
use walkdir::WalkDir;

/// Represents the source location of a template.
#[derive(Debug)]
pub enum TemplateSource {
    /// Git repository URL (HTTPS or SSH)
    Git(String),
    /// Local filesystem template path
    FileSystem(PathBuf),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Git(repo) => write!(f, "git repository '{}'", repo),
            TemplateSource::FileSystem(path) => {
                write!(f, "local path '{}'", path.display())
            }
        }
    }
}

impl TemplateSource {
    /// Creates a TemplateSource from a string path or URL.
    ///
    /// # Arguments
    /// * `s` - String containing path or git URL
    pub fn from_string(s: &str) -> Self {
        // First try to parse as URL
        if let Ok(url) = Url::parse(s) {
            if url.scheme() == "https" || url.scheme() == "git" {
                return Self::Git(s.to_string());
            }
        }

        // Check for SSH git URL format
        if s.starts_with("git@") {
            return Self::Git(s.to_string());
        }

        // Treat as filesystem path
        Self::FileSystem(PathBuf::from(s))
    }
}

/// Trait for retrieving a template tree into a target directory.
pub trait TemplateFetcher {
    /// Materializes the full template tree at `target`.
    ///
    /// The caller guarantees `target` does not exist yet; on success it
    /// contains the complete, unmodified template tree.
    fn fetch(&self, target: &Path) -> Result<()>;
}

/// Fetcher that clones a git repository.
pub struct GitFetcher<S: AsRef<str>> {
    repo: S,
    timeout: Duration,
}

/// Fetcher that copies a template from the local filesystem.
pub struct LocalFetcher<P: AsRef<Path>> {
    path: P,
}

impl<S: AsRef<str>> GitFetcher<S> {
    pub fn new(repo: S, timeout: Duration) -> Self {
        Self { repo, timeout }
    }
}

impl<S: AsRef<str>> TemplateFetcher for GitFetcher<S> {
    /// Clones the repository, including its version-control history.
    ///
    /// The transfer is aborted once the configured deadline passes so a dead
    /// remote cannot block the run indefinitely.
    fn fetch(&self, target: &Path) -> Result<()> {
        let repo_url = self.repo.as_ref();

        debug!("cloning '{}' into '{}'", repo_url, target.display());

        // Set up authentication callbacks
        let deadline = Instant::now() + self.timeout;
        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, _allowed_types| {
            let home = std::env::var("HOME").unwrap_or_default();
            git2::Cred::ssh_key(
                username_from_url.unwrap_or("git"),
                None,
                std::path::Path::new(&format!("{}/.ssh/id_rsa", home)),
                None,
            )
        });
        callbacks.transfer_progress(move |_progress| Instant::now() < deadline);

        // Configure fetch options with callbacks
        let mut fetch_opts = git2::FetchOptions::new();
        fetch_opts.remote_callbacks(callbacks);

        // Set up and perform clone
        let mut builder = git2::build::RepoBuilder::new();
        builder.fetch_options(fetch_opts);

        match builder.clone(repo_url, target) {
            Ok(_) => Ok(()),
            Err(e) => Err(Error::Git2Error(e)),
        }
    }
}

impl<P: AsRef<Path>> LocalFetcher<P> {
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> TemplateFetcher for LocalFetcher<P> {
    /// Copies the template tree file by file, hidden entries included, so a
    /// checked-out template behaves like a fresh clone.
    fn fetch(&self, target: &Path) -> Result<()> {
        let source = self.path.as_ref();
        if !source.is_dir() {
            return Err(Error::IoError(io::Error::new(
                io::ErrorKind::NotFound,
                format!("template path '{}' does not exist", source.display()),
            )));
        }

        for entry in WalkDir::new(source) {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            let relative = entry
                .path()
                .strip_prefix(source)
                .map_err(|e| Error::IoError(io::Error::other(e)))?;
            if relative.as_os_str().is_empty() {
                continue;
            }

            let dest = target.join(relative);
            if entry.file_type().is_dir() {
                fs::create_dir_all(&dest).map_err(Error::IoError)?;
            } else {
                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent).map_err(Error::IoError)?;
                }
                fs::copy(entry.path(), &dest).map_err(Error::IoError)?;
            }
        }

        Ok(())
    }
}

/// Fetches the template described by `source` into `target`.
///
/// Any underlying failure is wrapped into a single fetch error carrying the
/// source description and the cause; nothing is retried.
pub fn fetch_template(source: &TemplateSource, target: &Path) -> Result<()> {
    debug!("fetching template from the {}", source);

    let result = match source {
        TemplateSource::Git(repo) => {
            GitFetcher::new(repo, Duration::from_secs(FETCH_TIMEOUT_SECS)).fetch(target)
        }
        TemplateSource::FileSystem(path) => LocalFetcher::new(path).fetch(target),
    };

    result.map_err(|e| Error::FetchError {
        source_desc: source.to_string(),
        cause: Box::new(e),
    })
}
