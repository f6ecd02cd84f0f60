//! Locate the newest `data_2` web cache file of a game install.
//!
//! Layout under the game directory:
//!
//! ```text
//! GenshinImpact_Data/webCaches/<a.b.c.d>/Cache/Cache_Data/data_2
//! ```
//!
//! The `<a.b.c.d>` directory with the highest version wins; anything in
//! `webCaches` not named like a version is ignored.

mod fs;
mod version;

pub use fs::{CacheDirEntry, CacheFs, DiskFs};
pub use version::{CacheVersion, ParseVersionError};

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Name of the install directory expected under the user-supplied root.
pub const GAME_DIR_NAME: &str = "Genshin Impact";
/// Data directory directly under the game directory.
pub const DATA_DIR_NAME: &str = "GenshinImpact_Data";

const WEB_CACHES: &str = "webCaches";
const DATA_FILE_SUBPATH: [&str; 3] = ["Cache", "Cache_Data", "data_2"];

/// Resolves the game directory for a user-supplied root.
///
/// `root` is normally the directory that contains `Genshin Impact`; when it
/// already is the install directory (has `GenshinImpact_Data`), it is used as is.
pub fn game_dir(root: &Path) -> Result<PathBuf> {
    if root.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(Error::EmptyRoot);
    }
    let nested = root.join(GAME_DIR_NAME);
    if nested.join(DATA_DIR_NAME).is_dir() {
        Ok(nested)
    } else {
        Ok(root.to_path_buf())
    }
}

/// Finds `data_2` for the install under `root` and returns it as an absolute path.
pub fn find_data2(root: &Path) -> Result<PathBuf> {
    let game = game_dir(root)?;
    let rel = find_data2_in(&DiskFs::new(&game))?;
    let candidate = game.join(rel);
    Ok(std::path::absolute(&candidate).unwrap_or(candidate))
}

/// Finds `data_2` in a filesystem view rooted at the game directory.
///
/// Returns the path relative to that root.
pub fn find_data2_in<F: CacheFs + ?Sized>(fs: &F) -> Result<PathBuf> {
    let web_caches = Path::new(DATA_DIR_NAME).join(WEB_CACHES);
    let entries = fs.read_dir(&web_caches).map_err(|source| Error::ReadWebCaches {
        path: web_caches.clone(),
        source,
    })?;

    let latest = latest_version(&entries).ok_or_else(|| Error::NoVersionsFound {
        path: web_caches.clone(),
    })?;
    tracing::debug!(version = %latest.1, dir = latest.0, "selected latest web cache");

    let mut candidate = web_caches.join(latest.0);
    candidate.extend(DATA_FILE_SUBPATH);
    match fs.stat(&candidate) {
        Ok(()) => Ok(candidate),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::DataFileMissing {
            version: latest.0.to_string(),
        }),
        Err(source) => Err(Error::Stat {
            path: candidate,
            source,
        }),
    }
}

/// Highest-versioned directory among `entries`, with its parsed version.
///
/// Files and non-version names are skipped. On equal versions the first one listed wins.
fn latest_version(entries: &[CacheDirEntry]) -> Option<(&str, CacheVersion)> {
    let mut best: Option<(&str, CacheVersion)> = None;
    for entry in entries.iter().filter(|e| e.is_dir) {
        let Some(name) = entry.name.as_deref() else {
            continue;
        };
        let Ok(version) = name.parse::<CacheVersion>() else {
            continue;
        };
        if best.map_or(true, |(_, v)| version > v) {
            best = Some((name, version));
        }
    }
    best
}
