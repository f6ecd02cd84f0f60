//! Error taxonomy for locating and reading the web cache.
//!
//! Only filesystem problems surface here. The URL scanner and the gacha
//! selector never fail; noisy input is filtered out silently.

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Root path was not supplied or is blank.
    #[error("root path cannot be empty")]
    EmptyRoot,

    /// The `webCaches` directory is missing, not a directory, or unreadable.
    #[error("read webCaches dir {}: {source}", path.display())]
    ReadWebCaches {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No subdirectory of `webCaches` is named like `a.b.c.d`.
    #[error("no version directories found in {}", path.display())]
    NoVersionsFound { path: PathBuf },

    /// The newest version directory has no `data_2` file.
    #[error("data_2 not found in latest version {version}")]
    DataFileMissing { version: String },

    /// `data_2` exists (or might) but could not be stat'ed.
    #[error("stat {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
