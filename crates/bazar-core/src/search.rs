//! Product Search
//!
//! Plain substring matching over the title and the displayed price text.

use crate::notice::NoticeKind;

/// Trim and lowercase raw input. Blank input yields `None`.
pub fn normalize_query(raw: &str) -> Option<String> {
    let query = raw.trim().to_lowercase();
    if query.is_empty() {
        None
    } else {
        Some(query)
    }
}

/// `query` must already be normalized.
pub fn matches_query(query: &str, title: &str, price_text: &str) -> bool {
    title.to_lowercase().contains(query) || price_text.to_lowercase().contains(query)
}

/// What a search run produced, for user feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    EmptyQuery,
    NoMatches { query: String },
    Found { count: usize },
}

impl SearchOutcome {
    /// Run a search against the search box value. `apply` shows the cards
    /// matching the normalized query and returns how many it showed.
    /// Without a search box there is nothing to report.
    pub fn run(search_box: Option<&str>, apply: impl FnOnce(&str) -> usize) -> Option<Self> {
        let raw = search_box?;
        Some(match normalize_query(raw) {
            None => SearchOutcome::EmptyQuery,
            Some(query) => {
                let count = apply(&query);
                SearchOutcome::from_count(&query, count)
            }
        })
    }

    pub fn from_count(query: &str, count: usize) -> Self {
        if count == 0 {
            SearchOutcome::NoMatches { query: query.to_string() }
        } else {
            SearchOutcome::Found { count }
        }
    }

    pub fn message(&self) -> (String, NoticeKind) {
        match self {
            SearchOutcome::EmptyQuery => ("Please enter a search term".to_string(), NoticeKind::Error),
            SearchOutcome::NoMatches { query } => {
                (format!("No products found for \"{query}\""), NoticeKind::Info)
            }
            SearchOutcome::Found { count } => (format!("Found {count} product(s)"), NoticeKind::Success),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: &[(&str, &str)] = &[
        ("iPhone 14 Pro", "৳ 1,40,000"),
        ("MacBook Air M2", "৳ 1,35,000"),
        ("Yamaha R15 V4", "৳ 5,25,000"),
        ("Apple Watch SE", "Out of Stock"),
    ];

    fn run(raw: &str) -> (Vec<bool>, SearchOutcome) {
        let Some(query) = normalize_query(raw) else {
            return (vec![true; CARDS.len()], SearchOutcome::EmptyQuery);
        };
        let shown: Vec<bool> = CARDS.iter().map(|(t, p)| matches_query(&query, t, p)).collect();
        let count = shown.iter().filter(|s| **s).count();
        (shown, SearchOutcome::from_count(&query, count))
    }

    #[test]
    fn test_single_title_match() {
        let (shown, outcome) = run("  YAMAHA ");
        assert_eq!(shown, vec![false, false, true, false]);
        assert_eq!(outcome, SearchOutcome::Found { count: 1 });
        assert_eq!(outcome.message().0, "Found 1 product(s)");
    }

    #[test]
    fn test_matches_price_text() {
        let (shown, _) = run("out of stock");
        assert_eq!(shown, vec![false, false, false, true]);

        let (shown, _) = run("1,3");
        assert_eq!(shown, vec![false, true, false, false]);
    }

    #[test]
    fn test_no_matches_message() {
        let (_, outcome) = run("Suzuki");
        assert_eq!(
            outcome.message(),
            ("No products found for \"suzuki\"".to_string(), NoticeKind::Info)
        );
    }

    #[test]
    fn test_missing_search_box_is_silent() {
        let mut applied = false;
        let outcome = SearchOutcome::run(None, |_| {
            applied = true;
            0
        });
        assert_eq!(outcome, None);
        assert!(!applied);
    }

    #[test]
    fn test_run_reports_count() {
        let outcome = SearchOutcome::run(Some(" Watch "), |query| {
            assert_eq!(query, "watch");
            1
        });
        assert_eq!(outcome, Some(SearchOutcome::Found { count: 1 }));
        assert_eq!(SearchOutcome::run(Some(""), |_| 0), Some(SearchOutcome::EmptyQuery));
    }

    #[test]
    fn test_blank_query() {
        let (shown, outcome) = run("   ");
        assert!(shown.iter().all(|s| *s));
        assert_eq!(outcome.message().1, NoticeKind::Error);
    }
}
