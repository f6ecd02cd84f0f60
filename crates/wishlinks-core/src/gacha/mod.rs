//! Pick one wish history URL per gacha type.
//!
//! Only first-page URLs (`end_id=0`) are useful as a starting point for
//! paging through history, so everything else is dropped. When several
//! URLs share a gacha type, the last one in cache order wins.

mod order;

pub use order::{compare_gacha_types, GachaTypeKey};

use std::collections::HashMap;
use url::Url;

/// Category used when a URL carries no `gacha_type`.
pub const UNKNOWN_GACHA_TYPE: &str = "unknown";

/// One representative URL per gacha type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GachaSelection {
    by_type: HashMap<String, String>,
}

impl GachaSelection {
    pub fn get(&self, gacha_type: &str) -> Option<&str> {
        self.by_type.get(gacha_type).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }

    /// Gacha types in display order: numeric ascending, named, then `unknown`.
    pub fn types_in_order(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.by_type.keys().map(String::as_str).collect();
        keys.sort_by(|a, b| compare_gacha_types(a, b));
        keys
    }

    /// Entry for the first gacha type in display order.
    pub fn first(&self) -> Option<(&str, &str)> {
        self.by_type
            .iter()
            .min_by(|(a, _), (b, _)| compare_gacha_types(a, b))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_map(self) -> HashMap<String, String> {
        self.by_type
    }
}

/// Groups `urls` by `gacha_type`, keeping the last URL with `end_id=0` per type.
///
/// Unparseable URLs and URLs whose `end_id` is absent or not `"0"` are skipped.
/// `page` is never checked.
pub fn one_per_type_with_end_id_zero<I, S>(urls: I) -> GachaSelection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut by_type = HashMap::new();
    for raw in urls {
        let raw = raw.as_ref();
        let Ok(parsed) = Url::parse(raw) else {
            continue;
        };
        if query_param(&parsed, "end_id").as_deref() != Some("0") {
            continue;
        }
        let gacha_type = query_param(&parsed, "gacha_type")
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNKNOWN_GACHA_TYPE.to_string());
        by_type.insert(gacha_type, raw.to_string());
    }
    GachaSelection { by_type }
}

/// First value of query parameter `name`, percent-decoded.
fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}
