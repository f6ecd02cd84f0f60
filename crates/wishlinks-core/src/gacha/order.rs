//! Deterministic ordering of gacha type keys.

use std::cmp::Ordering;

use super::UNKNOWN_GACHA_TYPE;

/// Sort key for a gacha type: numeric types first, then named, then `unknown`.
///
/// Variant order is the rank; the derived `Ord` compares within a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GachaTypeKey<'a> {
    Numeric(i64),
    Named(&'a str),
    Unknown,
}

impl<'a> GachaTypeKey<'a> {
    pub fn new(gacha_type: &'a str) -> Self {
        if gacha_type == UNKNOWN_GACHA_TYPE {
            return GachaTypeKey::Unknown;
        }
        match gacha_type.parse::<i64>() {
            Ok(n) => GachaTypeKey::Numeric(n),
            Err(_) => GachaTypeKey::Named(gacha_type),
        }
    }
}

/// Total order over gacha type strings.
///
/// Numeric ties (`"1"` vs `"01"`) fall back to plain string order.
pub fn compare_gacha_types(a: &str, b: &str) -> Ordering {
    GachaTypeKey::new(a)
        .cmp(&GachaTypeKey::new(b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut keys: Vec<&str>) -> Vec<&str> {
        keys.sort_by(|a, b| compare_gacha_types(a, b));
        keys
    }

    #[test]
    fn numeric_ascending_then_unknown() {
        assert_eq!(sorted(vec!["unknown", "11", "1"]), vec!["1", "11", "unknown"]);
    }

    #[test]
    fn numeric_compares_by_value() {
        assert_eq!(
            sorted(vec!["302", "100", "11", "2", "301"]),
            vec!["2", "11", "100", "301", "302"]
        );
    }

    #[test]
    fn named_after_numeric_and_before_unknown() {
        assert_eq!(
            sorted(vec!["zeta", "unknown", "alpha", "200", "v"]),
            vec!["200", "alpha", "v", "zeta", "unknown"]
        );
    }

    #[test]
    fn unknown_is_last_even_after_later_letters() {
        assert_eq!(sorted(vec!["zzz", "unknown"]), vec!["zzz", "unknown"]);
    }

    #[test]
    fn numeric_ties_are_deterministic() {
        assert_eq!(sorted(vec!["01", "1"]), vec!["01", "1"]);
        assert_eq!(compare_gacha_types("1", "1"), Ordering::Equal);
    }

    #[test]
    fn key_classification() {
        assert_eq!(GachaTypeKey::new("301"), GachaTypeKey::Numeric(301));
        assert_eq!(GachaTypeKey::new("-5"), GachaTypeKey::Numeric(-5));
        assert_eq!(GachaTypeKey::new("char"), GachaTypeKey::Named("char"));
        assert_eq!(GachaTypeKey::new("unknown"), GachaTypeKey::Unknown);
    }
}
