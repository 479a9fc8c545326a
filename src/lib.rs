//! # street-address-rs
//!
//! Deterministic parsing of a single street line into its components.
//!
//! A line such as `"201 E Randolph St"` is split into a street number, a
//! leading direction, a street name and a canonical USPS street suffix. The
//! parser is a best-effort heuristic: it never fails on odd input, it only
//! refuses lines too short to hold a number and a name.
//!
//! ## Features
//!
//! - **Street Numbers**: plain, hyphenated (`111-222`), fractional
//!   (`123 1/2`) and grid-style (`N6W23001`) numbers
//! - **Directions**: the eight directions in abbreviated, English and
//!   Spanish spellings
//! - **Suffixes**: the USPS Publication 28 suffix table with abbreviations,
//!   plus common Spanish suffixes
//! - **Thread Safe**: all lookup data is immutable and shared
//!
//! ## Quick Start
//!
//! ```rust
//! use street_address_rs::parse_street;
//!
//! let street = parse_street("123 1/2 BLUEMOUND RD").unwrap();
//! assert_eq!(street.number, "123-1/2");
//! assert_eq!(street.name, "BLUEMOUND");
//! assert_eq!(street.suffix, "ROAD");
//! ```
//!
//! City, state, zip and unit designators are expected to be removed before a
//! line is handed to the parser; anything left over ends up in the name.

#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod filters;
pub mod number;
pub mod parser;
pub mod suffix;
pub mod types;

use std::sync::LazyLock;

// Re-export main API
pub use error::{Error, Result};
pub use number::NumberKind;
pub use parser::{ParseOptions, ParsedStreet, StreetParser};
pub use suffix::{SuffixCollision, SuffixEntry, SuffixTable};
pub use types::*;

static DEFAULT_PARSER: LazyLock<StreetParser> = LazyLock::new(StreetParser::new);

/// Parse a street line with the default parser.
///
/// Returns `None` when the line has fewer than two space separated segments.
///
/// # Examples
///
/// ```rust
/// use street_address_rs::parse_street;
///
/// let street = parse_street("111-222 E Randolph St").unwrap();
/// assert_eq!(street.number, "111-222");
/// assert_eq!(street.direction, "E");
///
/// assert!(parse_street("Randolph").is_none());
/// ```
pub fn parse_street(line: &str) -> Option<ParsedStreet> {
    DEFAULT_PARSER.parse(line)
}
