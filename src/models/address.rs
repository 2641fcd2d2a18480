//! Dotted device addresses and compacted address ranges.
//!
//! Provides [`Address`] for `<panel>.<position>` strings as found in the export,
//! and [`AddressRange`] for the single/`start-end` notation of the report.

use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;

lazy_static! {
    static ref ADDRESS_RE: Regex =
        Regex::new(r"^([^.\s]+)\.(\d+)$").expect("Invalid Regex?");
}

/// A parsed device address. Keeps the raw text for output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    /// Address exactly as written in the export (trimmed).
    pub raw: String,
    /// First dotted segment.
    pub panel: String,
    /// Second dotted segment, used for contiguity.
    pub position: u32,
}

impl Address {
    /// Parse a `<panel>.<position>` string, `None` if the shape or number is wrong.
    ///
    /// # Examples
    /// ```
    /// use zone_summary::models::Address;
    /// let a = Address::parse("1.23").unwrap();
    /// assert_eq!(a.panel, "1");
    /// assert_eq!(a.position, 23);
    /// assert!(Address::parse("1.x").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Address> {
        let raw = raw.trim();
        let caps = ADDRESS_RE.captures(raw)?;
        let position: u32 = caps[2].parse().ok()?;
        Some(Address {
            raw: raw.to_string(),
            panel: caps[1].to_string(),
            position,
        })
    }

    /// Build an address from its segments.
    pub fn new(panel: &str, position: u32) -> Address {
        Address {
            raw: format!("{panel}.{position}"),
            panel: panel.to_string(),
            position,
        }
    }

    /// True if `next` directly follows `self` on the same panel.
    pub fn is_followed_by(&self, next: &Address) -> bool {
        self.panel == next.panel && self.position.checked_add(1) == Some(next.position)
    }
}

/// Report order: numeric position first, ties by the full string.
impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        self.position
            .cmp(&other.position)
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// One entry of a compacted address list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressRange {
    Single(Address),
    /// Every position from `start` to `end` inclusive, same panel.
    Span { start: Address, end: Address },
}

impl AddressRange {
    /// All addresses covered by this range, in ascending order.
    pub fn expand(&self) -> Vec<Address> {
        match self {
            AddressRange::Single(a) => vec![a.clone()],
            AddressRange::Span { start, end } => (start.position..=end.position)
                .map(|p| Address::new(&start.panel, p))
                .collect(),
        }
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddressRange::Single(a) => write!(f, "{a}"),
            AddressRange::Span { start, end } => write!(f, "{start}-{end}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        let a = Address::parse(" 2.07 ").unwrap();
        assert_eq!(a.raw, "2.07");
        assert_eq!(a.panel, "2");
        assert_eq!(a.position, 7);
    }

    #[test]
    fn test_parse_address_invalid() {
        assert!(Address::parse("2").is_none());
        assert!(Address::parse("2.").is_none());
        assert!(Address::parse("2.x").is_none());
        assert!(Address::parse("2.1.3").is_none());
        assert!(Address::parse("2.99999999999").is_none());
        assert!(Address::parse("").is_none());
    }

    #[test]
    fn test_address_order_is_numeric() {
        let a9 = Address::parse("1.9").unwrap();
        let a10 = Address::parse("1.10").unwrap();
        assert!(a9 < a10);
        // same position, tie broken by the full string
        let b9 = Address::parse("2.9").unwrap();
        assert!(a9 < b9);
        assert!(b9 < a10);
    }

    #[test]
    fn test_is_followed_by() {
        let a = Address::parse("1.4").unwrap();
        assert!(a.is_followed_by(&Address::parse("1.5").unwrap()));
        assert!(!a.is_followed_by(&Address::parse("1.6").unwrap()));
        assert!(!a.is_followed_by(&Address::parse("2.5").unwrap()));
        assert!(!a.is_followed_by(&a));
    }

    #[test]
    fn test_range_display_and_expand() {
        let single = AddressRange::Single(Address::parse("3.5").unwrap());
        assert_eq!(single.to_string(), "3.5");

        let span = AddressRange::Span {
            start: Address::parse("3.1").unwrap(),
            end: Address::parse("3.3").unwrap(),
        };
        assert_eq!(span.to_string(), "3.1-3.3");
        let expanded: Vec<String> = span.expand().iter().map(|a| a.to_string()).collect();
        assert_eq!(expanded, vec!["3.1", "3.2", "3.3"]);
    }
}
