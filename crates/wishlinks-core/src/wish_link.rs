//! End-to-end lookup: install root → `data_2` → URLs → one wish link.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::extract::extract_urls_from_reader;
use crate::finder::find_data2;
use crate::gacha::{one_per_type_with_end_id_zero, GachaSelection};

/// The URL picked for output, with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishLink {
    pub gacha_type: String,
    pub url: String,
    pub data_file: PathBuf,
}

/// Scans the newest web cache under `root` and returns the wish history URL
/// for the first gacha type in display order.
///
/// Only URLs containing `url_filter` are considered; an empty filter keeps all.
/// Returns `Ok(None)` when nothing survives filtering and selection.
pub fn find_wish_link(root: &Path, url_filter: &str) -> Result<Option<WishLink>> {
    let data_file = find_data2(root)?;
    tracing::info!(path = %data_file.display(), "located web cache");

    let selection = select_from_file(&data_file, url_filter)?;
    Ok(selection.first().map(|(gacha_type, url)| WishLink {
        gacha_type: gacha_type.to_string(),
        url: url.to_string(),
        data_file: data_file.clone(),
    }))
}

/// Reads `data_file`, keeps URLs containing `url_filter`, and selects one per gacha type.
pub fn select_from_file(data_file: &Path, url_filter: &str) -> Result<GachaSelection> {
    let file = File::open(data_file).map_err(|source| Error::FileOpen {
        path: data_file.to_path_buf(),
        source,
    })?;
    let urls = extract_urls_from_reader(file).map_err(|source| Error::FileRead {
        path: data_file.to_path_buf(),
        source,
    })?;
    let total = urls.len();

    let matching: Vec<String> = urls
        .into_iter()
        .filter(|u| u.contains(url_filter))
        .collect();
    let selection = one_per_type_with_end_id_zero(&matching);
    tracing::debug!(
        total,
        matching = matching.len(),
        gacha_types = selection.len(),
        "scanned web cache"
    );
    Ok(selection)
}
