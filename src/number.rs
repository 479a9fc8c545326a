//! Street number extraction.
//!
//! The number is taken from the front of the segment list. Depending on the
//! shape of the first two segments it spans one or two of them.

use crate::filters;

/// The shape of the street number found at the front of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberKind {
    /// A single hyphen marks a range or compound lot, e.g. `111-222`
    Hyphenated,
    /// A number followed by a fraction segment, e.g. `123 1/2`
    Fractional,
    /// A number followed by a PO box marker, e.g. `12341 (PO Box)`
    PoBox,
    /// Anything else, including grid numbers like `N6W23001`
    Regular,
}

impl NumberKind {
    /// Number of segments the street number occupies.
    pub fn segments_consumed(&self) -> usize {
        match self {
            NumberKind::Fractional => 2,
            // The PO marker is left in place and becomes part of the name.
            NumberKind::Hyphenated | NumberKind::PoBox | NumberKind::Regular => 1,
        }
    }
}

/// Classify the number at the front of `segments`.
///
/// Checks run in a fixed order: hyphenated, fractional, PO box, regular.
/// Returns `None` for an empty list.
pub fn classify(segments: &[&str]) -> Option<NumberKind> {
    let (first, rest) = segments.split_first()?;

    if filters::is_hyphenated(first) {
        return Some(NumberKind::Hyphenated);
    }

    let kind = match rest.first() {
        Some(next) if is_fraction(next) => NumberKind::Fractional,
        Some(next) if is_po_box_marker(next) => NumberKind::PoBox,
        _ => NumberKind::Regular,
    };
    Some(kind)
}

/// Extract the street number and return it with the segments that remain.
///
/// Hyphenated numbers are kept verbatim. Every other form is cleaned down to
/// letters, digits, `-` and `/`; a fraction is appended as `<number>-<fraction>`.
pub fn extract_number<'s, 'a>(segments: &'s [&'a str]) -> (String, &'s [&'a str]) {
    let Some(kind) = classify(segments) else {
        return (String::new(), segments);
    };

    let number = match kind {
        NumberKind::Hyphenated => segments[0].to_string(),
        NumberKind::Fractional => format!(
            "{}-{}",
            filters::street_number_chars(segments[0]),
            filters::street_number_chars(segments[1])
        ),
        NumberKind::PoBox | NumberKind::Regular => filters::street_number_chars(segments[0]),
    };

    log::trace!("street number {number:?} ({kind:?})");
    (number, &segments[kind.segments_consumed()..])
}

/// Three characters with a slash, e.g. `1/2`.
fn is_fraction(segment: &str) -> bool {
    segment.chars().count() == 3 && segment.contains('/')
}

fn is_po_box_marker(segment: &str) -> bool {
    filters::alphanumeric_space(segment).to_ascii_uppercase() == "PO"
}
