//! Character-class filters used to clean individual street segments.
//!
//! Every filter removes all characters outside its allowed set. They never
//! fail and applying one twice yields the same result as applying it once.

use regex::Regex;
use std::sync::LazyLock;

/// Anything that is not an ASCII letter.
static NOT_LETTERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z]+").expect("valid regex"));

/// Anything that is not an ASCII letter or digit.
static NOT_ALPHANUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("valid regex"));

static NOT_ALPHANUMERIC_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9 ]+").expect("valid regex"));

static NOT_ALPHANUMERIC_SPACE_DOTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9. ]+").expect("valid regex"));

static NOT_ALPHANUMERIC_SPACE_DASHES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\- ]+").expect("valid regex"));

/// Street numbers keep hyphens and slashes so that ranges ("111-222"),
/// fractions ("1/2") and grid numbers ("N6W23001") survive cleaning.
static NOT_STREET_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\-/]+").expect("valid regex"));

/// Five-digit zip or a ten character zip+4 run.
static ZIP_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{5}|[0-9\-]{10}").expect("valid regex"));

fn strip(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

/// Keeps ASCII letters only.
#[must_use]
pub fn letters_only(s: &str) -> String {
    strip(&NOT_LETTERS_RE, s)
}

/// Keeps ASCII letters and digits.
#[must_use]
pub fn alphanumeric(s: &str) -> String {
    strip(&NOT_ALPHANUMERIC_RE, s)
}

/// Keeps ASCII letters, digits and spaces.
#[must_use]
pub fn alphanumeric_space(s: &str) -> String {
    strip(&NOT_ALPHANUMERIC_SPACE_RE, s)
}

/// Keeps ASCII letters, digits, spaces and periods.
///
/// Used for street names, where grid-style names such as `RD 39.4` carry a
/// decimal point.
#[must_use]
pub fn alphanumeric_space_dots(s: &str) -> String {
    strip(&NOT_ALPHANUMERIC_SPACE_DOTS_RE, s)
}

/// Keeps ASCII letters, digits, spaces and hyphens.
#[must_use]
pub fn alphanumeric_space_dashes(s: &str) -> String {
    strip(&NOT_ALPHANUMERIC_SPACE_DASHES_RE, s)
}

/// Keeps the characters allowed in a street number: ASCII letters, digits,
/// `-` and `/`.
#[must_use]
pub fn street_number_chars(s: &str) -> String {
    strip(&NOT_STREET_NUMBER_RE, s)
}

/// Returns true when `s` contains something shaped like a US zip code.
///
/// The parse pipeline does not consult this; it is meant for callers that
/// strip the city/state/zip tail before handing a line over.
#[must_use]
pub fn is_zip_code(s: &str) -> bool {
    ZIP_CODE_RE.is_match(s)
}

/// Returns true when the token holds exactly one ASCII hyphen or exactly one
/// en-dash, i.e. a hyphenated street number such as `111-222`.
///
/// See USPS Publication 28, appendix E3.
#[must_use]
pub fn is_hyphenated(token: &str) -> bool {
    token.matches('-').count() == 1 || token.matches('–').count() == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_letters_only() {
        assert_eq!(letters_only("E."), "E");
        assert_eq!(letters_only("(N6W)"), "NW");
        assert_eq!(letters_only("123"), "");
    }

    #[test]
    fn test_alphanumeric() {
        assert_eq!(alphanumeric("St."), "St");
        assert_eq!(alphanumeric("39.4"), "394");
        assert_eq!(alphanumeric("Box)"), "Box");
    }

    #[test]
    fn test_alphanumeric_space() {
        assert_eq!(alphanumeric_space("(PO"), "PO");
        assert_eq!(alphanumeric_space("P.O. Box"), "PO Box");
    }

    #[test]
    fn test_alphanumeric_space_dots() {
        assert_eq!(alphanumeric_space_dots("Rd 39.4"), "Rd 39.4");
        assert_eq!(alphanumeric_space_dots("(PO Box)"), "PO Box");
        assert_eq!(alphanumeric_space_dots("O'Hare #2"), "OHare 2");
    }

    #[test]
    fn test_alphanumeric_space_dashes() {
        assert_eq!(alphanumeric_space_dashes("Winston-Salem, NC"), "Winston-Salem NC");
    }

    #[test]
    fn test_street_number_chars() {
        assert_eq!(street_number_chars("123,"), "123");
        assert_eq!(street_number_chars("N6W23001"), "N6W23001");
        assert_eq!(street_number_chars("1/2"), "1/2");
        assert_eq!(street_number_chars("#12-B"), "12-B");
        assert_eq!(street_number_chars("12 34"), "1234");
    }

    #[test]
    fn test_is_zip_code() {
        assert!(is_zip_code("60601"));
        assert!(is_zip_code("60601-1234"));
        assert!(is_zip_code("IL 60601"));
        assert!(!is_zip_code("6060"));
        assert!(!is_zip_code("RANDOLPH"));
    }

    #[test]
    fn test_is_hyphenated() {
        assert!(is_hyphenated("111-222"));
        assert!(is_hyphenated("111–222"));
        assert!(is_hyphenated("12-B"));
        assert!(!is_hyphenated("111"));
        assert!(!is_hyphenated("1-2-3"));
    }

    #[test]
    fn test_filters_leave_non_ascii_out() {
        assert_eq!(letters_only("Peñalosa"), "Pealosa");
        assert_eq!(alphanumeric_space_dots("Ñ"), "");
    }

    proptest! {
        #[test]
        fn filters_are_idempotent(s in ".*") {
            for filter in [
                letters_only,
                alphanumeric,
                alphanumeric_space,
                alphanumeric_space_dots,
                alphanumeric_space_dashes,
                street_number_chars,
            ] {
                let once = filter(&s);
                prop_assert_eq!(filter(&once), once);
            }
        }

        #[test]
        fn single_hyphen_tokens_are_hyphenated(
            left in "[0-9A-Za-z]{0,6}",
            right in "[0-9A-Za-z]{1,6}",
        ) {
            let token = format!("{left}-{right}");
            prop_assert!(is_hyphenated(&token));
        }
    }
}
