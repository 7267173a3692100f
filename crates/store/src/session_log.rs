//! Per-file session event log
//!
//! Events for `dir/name.ext` go to `dir/.name.ext.log`. The first line
//! written for a file in each session is `session start at <timestamp>`;
//! every event after that is `<timestamp> <event>`.

use crate::{Result, StoreError};
use chrono::Local;
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y%m%d %H:%M:%S";

fn now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Log file path for a document path
pub fn log_path(source: &Path) -> PathBuf {
    let name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!(".{name}.log"))
}

/// Appends timestamped events to the log file next to each document
#[derive(Debug, Clone)]
pub struct SessionLog {
    session_start: String,
    /// Files that already got their session header
    started: HashSet<PathBuf>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self {
            session_start: now(),
            started: HashSet::new(),
        }
    }

    /// Record one event for `source`. Failures are logged and swallowed so
    /// that logging never breaks editing.
    pub fn append(&mut self, source: &Path, event: &str) {
        let mut content = String::new();
        let first = !self.started.contains(source);
        if first {
            content.push_str(&format!("session start at {}\n", self.session_start));
        }
        content.push_str(&format!("{} {}\n", now(), event));

        let path = log_path(source);
        match write_all(&path, &content) {
            Ok(()) => {
                if first {
                    self.started.insert(source.to_path_buf());
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to write session log");
            }
        }
    }

    /// Full log content for `source`
    pub fn show(&self, source: &Path) -> Result<String> {
        let path = log_path(source);
        if !path.exists() {
            return Err(StoreError::FileNotFound(path.display().to_string()));
        }
        Ok(std::fs::read_to_string(path)?)
    }
}

impl Default for SessionLog {
    fn default() -> Self {
        Self::new()
    }
}

fn write_all(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_path() {
        assert_eq!(log_path(Path::new("dir/notes.txt")), PathBuf::from("dir/.notes.txt.log"));
        assert_eq!(log_path(Path::new("a.xml")), PathBuf::from(".a.xml.log"));
    }

    #[test]
    fn test_session_header_written_once_per_file() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        let mut log = SessionLog::new();

        log.append(&a, "load a.txt");
        log.append(&a, "append \"x\"");
        log.append(&b, "close");

        let content = log.show(&a).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("session start at "));
        assert!(lines[1].ends_with(" load a.txt"));
        assert!(lines[2].ends_with(" append \"x\""));
        // "YYYYMMDD HH:MM:SS " prefix
        assert_eq!(lines[1].len(), "20250101 00:00:00 load a.txt".len());

        let content = log.show(&b).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_new_session_appends() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        SessionLog::new().append(&a, "save");
        SessionLog::new().append(&a, "close");

        let content = SessionLog::new().show(&a).unwrap();
        let headers = content.lines().filter(|l| l.starts_with("session start at")).count();
        assert_eq!(headers, 2);
    }

    #[test]
    fn test_show_missing_log() {
        let dir = TempDir::new().unwrap();
        let err = SessionLog::new().show(&dir.path().join("x.txt")).unwrap_err();
        assert!(matches!(err, StoreError::FileNotFound(_)));
    }

    #[test]
    fn test_unwritable_location_is_swallowed() {
        let dir = TempDir::new().unwrap();
        let mut log = SessionLog::new();
        log.append(&dir.path().join("missing").join("a.txt"), "save");
        assert!(log.show(&dir.path().join("missing").join("a.txt")).is_err());
    }
}
