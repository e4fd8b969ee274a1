//! File and folder enumeration under a vault root.
//!
//! Paths handed out are vault-relative and `/`-separated; the root directory
//! itself is `""`. Entries whose name starts with `.` (e.g. `.git`, editor
//! state folders) are skipped along with everything under them.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::VaultError;

const ROOT_LABEL: &str = "<root>";

/// A file in the vault.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TemplateFile {
    /// Vault-relative path, e.g. `templates/daily.md`.
    pub path: String,
    /// File name, e.g. `daily.md`.
    pub name: String,
}

impl TemplateFile {
    /// Vault-relative path of the containing directory (`""` for the root).
    pub fn parent(&self) -> &str {
        self.path.rsplit_once('/').map_or("", |(dir, _)| dir)
    }

    /// File name without its final extension.
    pub fn stem(&self) -> &str {
        match self.name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => &self.name,
        }
    }
}

/// A directory that holds at least one file, as offered for folder selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDir {
    /// Vault-relative path (`""` for the root).
    pub path: String,
    /// Display name: `<root>/` followed by the directory's own name.
    pub name: String,
}

impl SourceDir {
    fn from_path(path: &str) -> Self {
        let leaf = path.rsplit('/').next().unwrap_or_default();
        Self {
            path: path.to_string(),
            name: format!("{ROOT_LABEL}/{leaf}"),
        }
    }
}

/// A directory of notes and templates.
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
}

impl Vault {
    /// Open a vault rooted at an existing directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, VaultError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(VaultError::NotADirectory(root));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a vault-relative path.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .filter(|seg| !seg.is_empty())
            .fold(self.root.clone(), |acc, seg| acc.join(seg))
    }

    /// Every file in the vault, sorted by path.
    pub fn files(&self) -> Result<Vec<TemplateFile>, VaultError> {
        let mut files = Vec::new();
        walk(&self.root, "", &mut files)?;
        files.sort();
        tracing::debug!(root = ?self.root, count = files.len(), "Listed vault files");
        Ok(files)
    }

    /// Directories that directly contain files, one entry per directory, sorted by path.
    pub fn source_dirs(&self) -> Result<Vec<SourceDir>, VaultError> {
        let dirs: BTreeMap<String, SourceDir> = self
            .files()?
            .iter()
            .map(|file| {
                let parent = file.parent();
                (parent.to_string(), SourceDir::from_path(parent))
            })
            .collect();
        Ok(dirs.into_values().collect())
    }

    /// Files whose parent directory is exactly `dir`.
    pub fn templates_in(&self, dir: &str) -> Result<Vec<TemplateFile>, VaultError> {
        let dir = normalize_dir(dir);
        Ok(self
            .files()?
            .into_iter()
            .filter(|file| file.parent() == dir)
            .collect())
    }

    /// Look up a template in `dir` by file name, or by stem when no file name matches.
    pub fn find_template(&self, dir: &str, name: &str) -> Result<TemplateFile, VaultError> {
        let mut templates = self.templates_in(dir)?;
        let idx = templates
            .iter()
            .position(|t| t.name == name)
            .or_else(|| templates.iter().position(|t| t.stem() == name))
            .ok_or_else(|| VaultError::TemplateNotFound {
                name: name.to_string(),
                dir: normalize_dir(dir).to_string(),
            })?;
        Ok(templates.swap_remove(idx))
    }

    /// Read a file's text.
    pub async fn read(&self, file: &TemplateFile) -> Result<String, VaultError> {
        let path = self.resolve(&file.path);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| VaultError::Io { path, source })
    }
}

fn normalize_dir(dir: &str) -> &str {
    dir.trim().trim_matches('/')
}

fn walk(dir: &Path, relative: &str, out: &mut Vec<TemplateFile>) -> Result<(), VaultError> {
    let io_err = |source: std::io::Error| VaultError::Io {
        path: dir.to_path_buf(),
        source,
    };

    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let path = if relative.is_empty() {
            name.clone()
        } else {
            format!("{relative}/{name}")
        };

        let file_type = entry.file_type().map_err(io_err)?;
        if file_type.is_dir() {
            walk(&entry.path(), &path, out)?;
        } else if file_type.is_file() {
            out.push(TemplateFile { path, name });
        }
    }
    Ok(())
}
