//! Street line parsing.
//!
//! A line goes through five steps, each taking segments off the front or the
//! back of what is left:
//!
//! 1. split into segments
//! 2. street number (front, one or two segments)
//! 3. direction (front, optional)
//! 4. suffix (back, optional)
//! 5. everything left becomes the name

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::filters;
use crate::number;
use crate::suffix::SuffixTable;
use crate::types::Direction;

/// Options controlling how a line is split.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Drop the empty segments produced by repeated spaces
    pub collapse_whitespace: bool,
}

/// Street line parser.
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct StreetParser {
    options: ParseOptions,
    suffixes: Arc<SuffixTable>,
}

impl StreetParser {
    /// Create a new parser with default options and the USPS suffix table.
    pub fn new() -> Self {
        Self {
            options: ParseOptions::default(),
            suffixes: SuffixTable::usps(),
        }
    }

    /// Set whether repeated spaces are collapsed before parsing.
    ///
    /// Off by default: `"1  MAIN ST"` then yields an empty segment which ends
    /// up as a leading space in the name.
    pub fn with_collapse_whitespace(mut self, enabled: bool) -> Self {
        self.options.collapse_whitespace = enabled;
        self
    }

    /// Use a custom suffix table.
    pub fn with_suffix_table(mut self, suffixes: Arc<SuffixTable>) -> Self {
        self.suffixes = suffixes;
        self
    }

    /// Get the options used by this parser.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Get the suffix table used by this parser.
    pub fn suffix_table(&self) -> &SuffixTable {
        &self.suffixes
    }

    /// Parse a street line into its components.
    ///
    /// Returns `None` when the line has fewer than two segments.
    ///
    /// # Example
    ///
    /// ```rust
    /// use street_address_rs::StreetParser;
    ///
    /// let parser = StreetParser::new();
    /// let street = parser.parse("201 E Randolph St").unwrap();
    /// assert_eq!(street.number, "201");
    /// assert_eq!(street.direction, "E");
    /// assert_eq!(street.name, "RANDOLPH");
    /// assert_eq!(street.suffix, "STREET");
    /// ```
    pub fn parse(&self, line: &str) -> Option<ParsedStreet> {
        self.try_parse(line).ok()
    }

    /// Parse a street line, reporting why it could not be parsed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientSegments`] when the line has fewer than
    /// two segments.
    pub fn try_parse(&self, line: &str) -> Result<ParsedStreet> {
        let segments = self.split(line);
        if segments.len() < 2 {
            log::trace!("{line:?}: {} segment(s), need at least 2", segments.len());
            return Err(Error::insufficient_segments(segments.len()));
        }

        let (number, rest) = number::extract_number(&segments);
        let (direction, rest) = extract_direction(rest);
        let (suffix, rest) = self.extract_suffix(rest);
        let name = assemble_name(rest);

        let parsed = ParsedStreet {
            number,
            direction,
            name,
            suffix,
        };
        log::trace!("{line:?} -> {parsed:?}");
        Ok(parsed)
    }

    /// Parse multiple lines, keeping input order.
    pub fn parse_batch(&self, lines: &[&str]) -> Vec<Option<ParsedStreet>> {
        lines.iter().map(|line| self.parse(line)).collect()
    }

    /// Parse multiple lines in parallel using multiple threads.
    ///
    /// Results come back in input order. The suffix table is shared between
    /// threads without locking since nothing writes to it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use street_address_rs::StreetParser;
    ///
    /// let parser = StreetParser::new();
    /// let results = parser.parse_batch_parallel(&["201 E Randolph St", "oops"]);
    /// assert!(results[0].is_some());
    /// assert!(results[1].is_none());
    /// ```
    #[cfg(feature = "parallel")]
    pub fn parse_batch_parallel(&self, lines: &[&str]) -> Vec<Option<ParsedStreet>> {
        use rayon::prelude::*;

        lines.par_iter().map(|line| self.parse(line)).collect()
    }

    fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let segments = line.split(' ');
        if self.options.collapse_whitespace {
            segments.filter(|s| !s.is_empty()).collect()
        } else {
            segments.collect()
        }
    }

    fn extract_suffix<'s, 'a>(&self, segments: &'s [&'a str]) -> (String, &'s [&'a str]) {
        match segments.split_last() {
            Some((last, rest)) => match self.suffixes.lookup(last) {
                Some(canonical) => (canonical.to_string(), rest),
                None => (String::new(), segments),
            },
            None => (String::new(), segments),
        }
    }
}

impl Default for StreetParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Take a leading direction off the segment list.
fn extract_direction<'s, 'a>(segments: &'s [&'a str]) -> (String, &'s [&'a str]) {
    let Some((first, rest)) = segments.split_first() else {
        return (String::new(), segments);
    };

    let cleaned = filters::letters_only(first).to_ascii_uppercase();
    if Direction::from_token(&cleaned).is_some() {
        (cleaned, rest)
    } else {
        (String::new(), segments)
    }
}

/// Join what is left into an upper-cased name, keeping letters, digits,
/// periods and spaces.
fn assemble_name(segments: &[&str]) -> String {
    filters::alphanumeric_space_dots(&segments.join(" ")).to_ascii_uppercase()
}

/// Components of a parsed street line.
///
/// Every field is upper-case, and empty when the component was not found.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedStreet {
    /// Street number (e.g., "201", "111-222", "123-1/2", "N6W23001")
    pub number: String,
    /// Direction as written (e.g., "E", "NORTH", "OESTE")
    pub direction: String,
    /// Street name (e.g., "RANDOLPH", "RD 39.4")
    pub name: String,
    /// Canonical suffix (e.g., "STREET", "ROAD")
    pub suffix: String,
}

impl ParsedStreet {
    /// The direction as an enum, if one was found.
    pub fn direction(&self) -> Option<Direction> {
        Direction::from_token(&self.direction)
    }

    /// Get all non-empty components as a map.
    pub fn components(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();

        macro_rules! add_component {
            ($field:expr, $name:expr) => {
                if !$field.is_empty() {
                    map.insert($name.to_string(), $field.clone());
                }
            };
        }

        add_component!(self.number, "number");
        add_component!(self.direction, "direction");
        add_component!(self.name, "name");
        add_component!(self.suffix, "suffix");

        map
    }

    /// Check if every component is empty.
    pub fn is_empty(&self) -> bool {
        self.number.is_empty()
            && self.direction.is_empty()
            && self.name.is_empty()
            && self.suffix.is_empty()
    }
}

impl fmt::Display for ParsedStreet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [&self.number, &self.direction, &self.name, &self.suffix];
        let mut first = true;
        for part in parts.into_iter().filter(|p| !p.is_empty()) {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(part)?;
            first = false;
        }
        Ok(())
    }
}
