//! Product Ordering

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sort criteria offered by the sort selectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Original page order.
    #[default]
    Default,
    Name,
    PriceLow,
    PriceHigh,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Default, SortKey::Name, SortKey::PriceLow, SortKey::PriceHigh];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::Name => "name",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Default => "Default",
            SortKey::Name => "Name (A-Z)",
            SortKey::PriceLow => "Price (Low to High)",
            SortKey::PriceHigh => "Price (High to Low)",
        }
    }

    /// Compare two `(title, price)` entries.
    pub fn compare(&self, a: (&str, f64), b: (&str, f64)) -> Ordering {
        match self {
            SortKey::Default => Ordering::Equal,
            SortKey::Name => name_key(a.0)
                .cmp(&name_key(b.0))
                .then_with(|| a.0.to_lowercase().cmp(&b.0.to_lowercase())),
            SortKey::PriceLow => a.1.total_cmp(&b.1),
            SortKey::PriceHigh => b.1.total_cmp(&a.1),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown sort key: {s}"))
    }
}

/// Case- and accent-folded title, so "Écharpe" sorts with the e's.
fn name_key(title: &str) -> String {
    title.chars().flat_map(char::to_lowercase).map(fold_accent).collect()
}

/// Base letter of a lowercase Latin letter with a diacritic.
fn fold_accent(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' | 'ŧ' => 't',
        'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

/// Stable ordering of `entries` (title, price) under `key`, as indices.
pub fn order_by(key: SortKey, entries: &[(String, f64)]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| {
        key.compare((&entries[a].0, entries[a].1), (&entries[b].0, entries[b].1))
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<(String, f64)> {
        vec![
            ("Yamaha FZ".to_string(), 250000.0),
            ("apple watch".to_string(), 45000.0),
            ("MacBook Pro".to_string(), 210000.0),
            ("Honda Shine".to_string(), 150000.0),
        ]
    }

    #[test]
    fn test_price_low_and_high_are_reversed() {
        let low = order_by(SortKey::PriceLow, &entries());
        let mut high = order_by(SortKey::PriceHigh, &entries());
        assert_eq!(low, vec![1, 3, 2, 0]);
        high.reverse();
        assert_eq!(low, high);
    }

    #[test]
    fn test_name_ignores_case() {
        assert_eq!(order_by(SortKey::Name, &entries()), vec![1, 3, 2, 0]);
    }

    #[test]
    fn test_name_folds_accents() {
        let titles = vec![("Zebra Shirt".to_string(), 900.0), ("Écharpe".to_string(), 1200.0)];
        assert_eq!(order_by(SortKey::Name, &titles), vec![1, 0]);

        let titles = vec![("Fête".to_string(), 0.0), ("Feta".to_string(), 0.0), ("Fets".to_string(), 0.0)];
        assert_eq!(order_by(SortKey::Name, &titles), vec![1, 0, 2]);
    }

    #[test]
    fn test_default_keeps_order() {
        assert_eq!(order_by(SortKey::Default, &entries()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_parse_roundtrip() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
        assert!("popularity".parse::<SortKey>().is_err());
    }
}
