//! Log file location and retention.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use directories::ProjectDirs;

const LATEST: &str = "latest.log";
const FALLBACK: &str = "trellis-stories.log";

/// Archived logs kept after rotation.
pub const KEEP_LOGS: usize = 10;

/// A directory holding `latest.log` and timestamped archives of earlier runs.
#[derive(Debug, Clone)]
pub struct LogDir {
    root: PathBuf,
}

impl LogDir {
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The per-user cache directory, created if missing.
    pub fn locate() -> Option<Self> {
        let dirs = ProjectDirs::from("dev", "trellis", "trellis-stories")?;
        let root = dirs.cache_dir();
        fs::create_dir_all(root).ok()?;
        Some(Self::at(root))
    }

    pub fn latest(&self) -> PathBuf {
        self.root.join(LATEST)
    }

    /// Archive `latest.log` under its modification time, then drop all but
    /// the `keep` newest archives.
    pub fn rotate(&self, keep: usize) -> io::Result<()> {
        let latest = self.latest();
        if latest.exists() {
            let written: DateTime<Local> = fs::metadata(&latest)?.modified()?.into();
            let name = format!("{}.log", written.format("%Y%m%d-%H%M%S"));
            fs::rename(&latest, self.root.join(name))?;
        }

        let archives = self.archives()?;
        let excess = archives.len().saturating_sub(keep);
        for path in &archives[..excess] {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Archived logs, oldest first. Timestamped names sort chronologically.
    fn archives(&self) -> io::Result<Vec<PathBuf>> {
        let mut logs: Vec<PathBuf> = fs::read_dir(&self.root)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| is_archive(path))
            .collect();
        logs.sort();
        Ok(logs)
    }
}

fn is_archive(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "log")
        && path.file_name().is_some_and(|name| name != LATEST)
}

/// Rotate the cache log directory and return the file to log into. Falls back
/// to the working directory when no cache directory is available.
pub fn prepare_log_file() -> PathBuf {
    let Some(dir) = LogDir::locate() else {
        return PathBuf::from(FALLBACK);
    };
    if let Err(e) = dir.rotate(KEEP_LOGS) {
        eprintln!("Warning: could not rotate logs in {}: {}", dir.root.display(), e);
    }
    dir.latest()
}
