//! Four-part cache version identifiers (`a.b.c.d`).

use std::fmt;
use std::str::FromStr;

/// Version of a `webCaches/<version>` directory.
///
/// Ordering is lexicographic over the four numeric components, so
/// `9.0.0.0 > 2.44.1.0` even though the strings compare the other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CacheVersion([u64; 4]);

impl CacheVersion {
    pub fn new(major: u64, minor: u64, patch: u64, build: u64) -> Self {
        Self([major, minor, patch, build])
    }
}

/// Directory name is not exactly four dot-separated non-negative integers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid version format: {0}")]
pub struct ParseVersionError(String);

impl FromStr for CacheVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseVersionError(s.to_string());
        let mut parts = [0u64; 4];
        let mut segments = s.split('.');
        for part in parts.iter_mut() {
            let seg = segments.next().ok_or_else(invalid)?;
            *part = seg.parse().map_err(|_| invalid())?;
        }
        if segments.next().is_some() {
            return Err(invalid());
        }
        Ok(Self(parts))
    }
}

impl fmt::Display for CacheVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}
