//!  Tripmate Travel Planner
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! # Currency Codec
//!
//! Side-effect free parsing and formatting of rupee price labels.
//!
//! Catalog offers carry their prices as display labels (`"₹12,500"`).
//! Zero-cost offers use the `"₹free"` sentinel, which is matched by exact
//! string equality and never parsed as a number.

use std::fmt;
use thiserror::Error;

pub const RUPEE: char = '₹';
pub const FREE_LABEL: &str = "₹free";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid price label: '{label}'")]
pub struct PriceParseError {
    pub label: String,
}

/// A decoded price label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Price {
    Amount(u64),
    Free,
}

impl Price {
    /// Decodes a label such as `"₹8,500"` or `"₹free"`.
    ///
    /// The currency glyph is optional and comma grouping is ignored,
    /// so `"₹1,200"`, `"1200"` and `"₹12,00"` all decode to 1200.
    pub fn parse(label: &str) -> Result<Self, PriceParseError> {
        if label == FREE_LABEL {
            return Ok(Price::Free);
        }
        let trimmed = label.trim();
        let digits: String = trimmed
            .strip_prefix(RUPEE)
            .unwrap_or(trimmed)
            .chars()
            .filter(|&c| c != ',')
            .collect();
        digits
            .trim()
            .parse::<u64>()
            .map(Price::Amount)
            .map_err(|_| PriceParseError {
                label: label.to_string(),
            })
    }

    /// Numeric value, with `Free` counting as zero.
    pub fn amount(&self) -> u64 {
        match self {
            Price::Amount(v) => *v,
            Price::Free => 0,
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, Price::Free)
    }

    /// Whether this price passes a `max_price` ceiling.
    pub fn within(&self, ceiling: u64) -> bool {
        match self {
            Price::Free => true,
            Price::Amount(v) => *v <= ceiling,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(v) => f.write_str(&format_rupees(*v)),
            Price::Free => f.write_str(FREE_LABEL),
        }
    }
}

/// Formats an amount with the rupee glyph and comma thousands-grouping.
pub fn format_rupees(amount: u64) -> String {
    format!("{}{}", RUPEE, group_thousands(amount))
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_grouped_amount() {
        assert_eq!(Price::parse("₹8,500"), Ok(Price::Amount(8500)));
        assert_eq!(Price::parse("₹1,20,000"), Ok(Price::Amount(120000)));
        assert_eq!(Price::parse("₹800"), Ok(Price::Amount(800)));
        assert_eq!(Price::parse("1200"), Ok(Price::Amount(1200)));
    }

    #[test]
    fn parse_free_sentinel_is_exact() {
        assert_eq!(Price::parse("₹free"), Ok(Price::Free));
        assert!(Price::parse("free").is_err());
        assert!(Price::parse("₹Free").is_err());
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = Price::parse("₹on request").unwrap_err();
        assert_eq!(err.label, "₹on request");
        assert!(Price::parse("").is_err());
        assert!(Price::parse("₹-500").is_err());
    }

    #[test]
    fn format_groups_thousands() {
        assert_eq!(format_rupees(0), "₹0");
        assert_eq!(format_rupees(999), "₹999");
        assert_eq!(format_rupees(12000), "₹12,000");
        assert_eq!(format_rupees(14700), "₹14,700");
        assert_eq!(format_rupees(1234567), "₹1,234,567");
    }

    #[test]
    fn display_matches_labels() {
        assert_eq!(Price::Amount(25000).to_string(), "₹25,000");
        assert_eq!(Price::Free.to_string(), FREE_LABEL);
    }

    #[test]
    fn free_passes_any_ceiling() {
        assert!(Price::Free.within(0));
        assert!(Price::Amount(5000).within(5000));
        assert!(!Price::Amount(5001).within(5000));
    }
}
