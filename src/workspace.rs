//! Output-directory owner for rendered artifacts.
//!
//! Every chart, HTML table, and JSON summary produced by an analysis is
//! written under a single workspace directory. The workspace also keeps a
//! registry of everything written so far, so callers can list the artifacts
//! produced by a run.

use crate::config;
use crate::error::Result;
use serde::Serialize;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Manages the artifact output directory for a `Shopstat` instance.
///
/// Creates the directory on construction and records the file name of every
/// artifact written through it.
pub struct Workspace {
    /// Directory where charts and reports are written.
    pub out_dir: PathBuf,
    artifacts: RefCell<Vec<String>>,
}

impl Workspace {
    /// Create a new workspace.
    ///
    /// If `out_dir` is `None`, uses the platform-appropriate default data
    /// directory. Creates the directory if it does not exist.
    pub fn new(out_dir: Option<PathBuf>) -> Result<Self> {
        let dir = out_dir.unwrap_or_else(config::default_output_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self {
            out_dir: dir,
            artifacts: RefCell::new(Vec::new()),
        })
    }

    /// Resolve the full path for an artifact file name inside the workspace.
    pub fn path(&self, file_name: &str) -> PathBuf {
        self.out_dir.join(file_name)
    }

    /// Record an artifact that was rendered directly to `path` (e.g. by a
    /// chart backend) and return the path unchanged.
    pub fn record(&self, path: PathBuf) -> PathBuf {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            self.artifacts.borrow_mut().push(name.to_string());
        }
        debug!(path = %path.display(), "artifact rendered");
        path
    }

    /// Write a text artifact (e.g. an HTML table) into the workspace.
    pub fn write_text(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.path(file_name);
        fs::write(&path, contents)?;
        Ok(self.record(path))
    }

    /// Serialize a value as pretty JSON into the workspace.
    pub fn write_json<T: Serialize>(&self, file_name: &str, value: &T) -> Result<PathBuf> {
        let path = self.path(file_name);
        fs::write(&path, serde_json::to_string_pretty(value)?)?;
        Ok(self.record(path))
    }

    /// Return the file names of all artifacts written so far, in order.
    pub fn artifacts(&self) -> Vec<String> {
        self.artifacts.borrow().clone()
    }

    /// Remove every previously written artifact from disk.
    pub fn clear(&self) -> Result<()> {
        for name in self.artifacts.borrow().iter() {
            let path = self.out_dir.join(name);
            if Path::new(&path).exists() {
                fs::remove_file(&path)?;
            }
        }
        self.artifacts.borrow_mut().clear();
        Ok(())
    }
}
