//! Project backup
//!
//! Copies the top-level entries of a project directory into
//! `<backup_root>/backup_<YYYYmmdd_HHMMSS>`. Hidden and excluded names are
//! skipped, as is any entry holding the backup root itself; a failed entry
//! is reported and the rest still get copied.

use crate::config::BackupConfig;
use crate::{Result, RoundtableError};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Kind of a copied top-level entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// A top-level entry that made it into the backup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopiedEntry {
    pub name: String,
    pub kind: EntryKind,
}

/// A top-level entry that could not be copied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedEntry {
    pub name: String,
    pub reason: String,
}

/// Outcome of a backup run
#[derive(Debug, Clone, Serialize)]
pub struct BackupReport {
    pub location: PathBuf,
    pub copied: Vec<CopiedEntry>,
    pub failed: Vec<FailedEntry>,
}

/// Check whether a top-level name is left out of the backup
///
/// Hidden names are always skipped. A pattern starting with `*` matches by
/// suffix; any other pattern matches as a substring.
pub fn should_exclude(name: &str, patterns: &[String]) -> bool {
    if name.starts_with('.') {
        return true;
    }

    patterns.iter().any(|pattern| match pattern.strip_prefix('*') {
        Some(suffix) => name.ends_with(suffix),
        None => name.contains(pattern.as_str()),
    })
}

/// Create a backup stamped with the current local time
pub fn make_backup(config: &BackupConfig) -> Result<BackupReport> {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    make_backup_at(config, &timestamp)
}

/// Create a backup in `backup_<timestamp>`
pub fn make_backup_at(config: &BackupConfig, timestamp: &str) -> Result<BackupReport> {
    if !config.project_dir.is_dir() {
        return Err(RoundtableError::backup(format!(
            "project directory not found: {}",
            config.project_dir.display()
        )));
    }

    let backup_dir = config.backup_root.join(format!("backup_{}", timestamp));
    fs::create_dir_all(&backup_dir)?;
    tracing::info!(location = %backup_dir.display(), "creating backup");

    // Resolved after creation so relative roots and symlinks compare equal
    let backup_root = fs::canonicalize(&config.backup_root)?;

    let mut names: Vec<String> = fs::read_dir(&config.project_dir)?
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| !should_exclude(name, &config.exclude))
        .filter(|name| {
            let holds_root = contains_path(&config.project_dir.join(name), &backup_root);
            if holds_root {
                tracing::debug!(%name, "skipping entry that holds the backup root");
            }
            !holds_root
        })
        .collect();
    names.sort();

    let mut report = BackupReport {
        location: backup_dir.clone(),
        copied: Vec::new(),
        failed: Vec::new(),
    };

    for name in names {
        let src = config.project_dir.join(&name);
        let dst = backup_dir.join(&name);

        let result = if src.is_dir() {
            copy_dir_recursive(&src, &dst).map(|_| EntryKind::Directory)
        } else {
            fs::copy(&src, &dst).map(|_| EntryKind::File)
        };

        match result {
            Ok(kind) => {
                tracing::debug!(%name, ?kind, "copied");
                report.copied.push(CopiedEntry { name, kind });
            }
            Err(e) => {
                tracing::warn!(%name, error = %e, "could not copy");
                report.failed.push(FailedEntry {
                    name,
                    reason: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        copied = report.copied.len(),
        failed = report.failed.len(),
        "backup complete"
    );
    Ok(report)
}

/// Whether `entry` is `target` or one of its ancestors
fn contains_path(entry: &Path, target: &Path) -> bool {
    fs::canonicalize(entry)
        .map(|entry| target.starts_with(entry))
        .unwrap_or(false)
}

/// Copy a directory tree; nested entries are copied without filtering
fn copy_dir_recursive(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        let target = dst.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&path, &target)?;
        } else {
            fs::copy(&path, &target)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn patterns() -> Vec<String> {
        BackupConfig::default().exclude
    }

    #[test]
    fn test_should_exclude() {
        let patterns = patterns();
        assert!(should_exclude(".env", &patterns));
        assert!(should_exclude("venv", &patterns));
        assert!(should_exclude("my_backups_old", &patterns));
        assert!(should_exclude("module.pyc", &patterns));
        assert!(!should_exclude("api.py", &patterns));
        assert!(!should_exclude("static", &patterns));
    }

    #[test]
    fn test_backup_copies_files_and_directories() {
        let project = TempDir::new().unwrap();
        let root = project.path();
        fs::write(root.join("api.py"), "print('hi')").unwrap();
        fs::write(root.join(".env"), "SECRET=1").unwrap();
        fs::create_dir_all(root.join("static/img")).unwrap();
        fs::write(root.join("static/script.js"), "// js").unwrap();
        fs::write(root.join("static/img/logo.svg"), "<svg/>").unwrap();
        fs::create_dir_all(root.join("venv/lib")).unwrap();
        fs::write(root.join("venv/lib/site.py"), "").unwrap();

        let config = BackupConfig {
            project_dir: root.to_path_buf(),
            backup_root: root.join("backups"),
            exclude: patterns(),
        };
        let report = make_backup_at(&config, "20240101_120000").unwrap();

        let location = root.join("backups/backup_20240101_120000");
        assert_eq!(report.location, location);
        assert_eq!(
            report.copied,
            vec![
                CopiedEntry {
                    name: "api.py".to_string(),
                    kind: EntryKind::File
                },
                CopiedEntry {
                    name: "static".to_string(),
                    kind: EntryKind::Directory
                },
            ]
        );
        assert!(report.failed.is_empty());

        assert_eq!(fs::read_to_string(location.join("api.py")).unwrap(), "print('hi')");
        assert_eq!(
            fs::read_to_string(location.join("static/img/logo.svg")).unwrap(),
            "<svg/>"
        );
        assert!(!location.join(".env").exists());
        assert!(!location.join("venv").exists());
        assert!(!location.join("backups").exists());
    }

    #[test]
    fn test_backup_root_inside_project_is_skipped() {
        let project = TempDir::new().unwrap();
        let root = project.path();
        fs::write(root.join("api.py"), "print('hi')").unwrap();
        fs::create_dir_all(root.join("static")).unwrap();
        fs::write(root.join("static/script.js"), "// js").unwrap();

        let config = BackupConfig {
            project_dir: root.to_path_buf(),
            backup_root: root.join("snapshots"),
            exclude: patterns(),
        };
        assert!(!should_exclude("snapshots", &config.exclude));

        let first = make_backup_at(&config, "20240101_120000").unwrap();
        let second = make_backup_at(&config, "20240101_130000").unwrap();

        for report in [&first, &second] {
            let names: Vec<&str> = report.copied.iter().map(|e| e.name.as_str()).collect();
            assert_eq!(names, vec!["api.py", "static"]);
            assert!(report.failed.is_empty());
            assert!(!report.location.join("snapshots").exists());
        }
        assert_eq!(fs::read_dir(root.join("snapshots")).unwrap().count(), 2);
    }

    #[test]
    fn test_backup_root_nested_deeper_skips_its_parent() {
        let project = TempDir::new().unwrap();
        let root = project.path();
        fs::write(root.join("api.py"), "").unwrap();
        fs::create_dir_all(root.join("data/raw")).unwrap();
        fs::write(root.join("data/raw/rows.csv"), "a,b").unwrap();

        let config = BackupConfig {
            project_dir: root.to_path_buf(),
            backup_root: root.join("data/snaps"),
            exclude: Vec::new(),
        };
        let report = make_backup_at(&config, "t").unwrap();

        let names: Vec<&str> = report.copied.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["api.py"]);
        assert!(!report.location.join("data").exists());
    }

    #[test]
    fn test_missing_project_dir() {
        let temp = TempDir::new().unwrap();
        let config = BackupConfig {
            project_dir: temp.path().join("nope"),
            backup_root: temp.path().join("backups"),
            exclude: Vec::new(),
        };
        assert!(matches!(
            make_backup_at(&config, "x"),
            Err(RoundtableError::Backup(_))
        ));
    }
}
