//! Read-only filesystem view used by the finder.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheDirEntry {
    /// File name; `None` when it is not valid UTF-8.
    pub name: Option<String>,
    pub is_dir: bool,
}

/// Directory listing and stat, relative to some root.
pub trait CacheFs {
    /// Lists immediate children of `rel`.
    fn read_dir(&self, rel: &Path) -> io::Result<Vec<CacheDirEntry>>;

    /// Succeeds if `rel` exists and can be stat'ed.
    fn stat(&self, rel: &Path) -> io::Result<()>;
}

/// [`CacheFs`] over a real directory on disk.
#[derive(Debug, Clone)]
pub struct DiskFs {
    root: PathBuf,
}

impl DiskFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CacheFs for DiskFs {
    fn read_dir(&self, rel: &Path) -> io::Result<Vec<CacheDirEntry>> {
        let mut out = Vec::new();
        for entry in fs::read_dir(self.root.join(rel))? {
            let entry = entry?;
            // Follow symlinks so a linked version directory still counts.
            let is_dir = entry.path().is_dir();
            out.push(CacheDirEntry {
                name: entry.file_name().into_string().ok(),
                is_dir,
            });
        }
        Ok(out)
    }

    fn stat(&self, rel: &Path) -> io::Result<()> {
        fs::metadata(self.root.join(rel)).map(|_| ())
    }
}
