//! Price Text Parsing
//!
//! Product cards only carry display text ("৳ 1,20,000", "Out of Stock").
//! Two parsers exist because the search bar and the product manager read
//! prices differently; both fall back to 0.

/// Drop every character except ASCII digits and `.`, then read the longest
/// leading decimal number.
pub fn parse_display_price(text: &str) -> f64 {
    let cleaned: String = text.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    leading_number(&cleaned).unwrap_or(0.0)
}

/// Take the first run of digits and commas, drop the commas and parse it.
pub fn extract_price(text: &str) -> f64 {
    let run: String = text
        .chars()
        .skip_while(|c| !(c.is_ascii_digit() || *c == ','))
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(|c| *c != ',')
        .collect();
    run.parse().unwrap_or(0.0)
}

/// Whether the price text marks the product as unavailable.
pub fn is_out_of_stock(price_text: &str) -> bool {
    price_text.to_lowercase().contains("out of stock")
}

fn leading_number(s: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, c) in s.char_indices() {
        match c {
            '0'..='9' => {
                seen_digit = true;
                end = i + 1;
            }
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    s[..end].trim_end_matches('.').parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_price_strips_currency_and_commas() {
        assert_eq!(parse_display_price("৳ 1,20,000"), 120000.0);
        assert_eq!(parse_display_price("$49.99"), 49.99);
    }

    #[test]
    fn test_display_price_stops_at_second_dot() {
        assert_eq!(parse_display_price("1.2.3"), 1.2);
    }

    #[test]
    fn test_display_price_defaults_to_zero() {
        assert_eq!(parse_display_price("Out of Stock"), 0.0);
        assert_eq!(parse_display_price(""), 0.0);
    }

    #[test]
    fn test_extract_price_first_run_only() {
        assert_eq!(extract_price("Tk 1,50,000 (was 2,00,000)"), 150000.0);
        assert_eq!(extract_price("৳ 850"), 850.0);
    }

    #[test]
    fn test_extract_price_without_digits() {
        assert_eq!(extract_price("Out of Stock"), 0.0);
        assert_eq!(extract_price("Call, for price"), 0.0);
    }

    #[test]
    fn test_out_of_stock_is_case_insensitive() {
        assert!(is_out_of_stock("OUT OF STOCK"));
        assert!(is_out_of_stock("৳ 500 - Out of stock"));
        assert!(!is_out_of_stock("৳ 500"));
    }
}
