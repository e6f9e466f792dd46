//! # Amount Module
//!
//! Parses the decimal monetary strings on a receipt (`total`, item `price`)
//! and answers the questions the points rules ask about them.
//!
//! ## Why Binary Floating Point Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SCORING ARITHMETIC IS PART OF THE RULE SET                             │
//! │                                                                         │
//! │  The rules were defined on IEEE-754 doubles:                            │
//! │    round dollar   total == floor(total)                                 │
//! │    quarter        fmod(total * 100, 25) == 0                            │
//! │    description    ceil(price * 0.2)                                     │
//! │                                                                         │
//! │  For two-decimal amounts, doubles and exact decimals agree.             │
//! │  For longer inputs they do not:                                         │
//! │    "1.0000000000000001" parses to exactly 1.0  → round dollar           │
//! │    "5.0000000000000001" × 0.2 == 1.0           → ceil gives 1, not 2    │
//! │                                                                         │
//! │  The rules are evaluated with that same double arithmetic.             │
//! │  Amounts are never summed or stored; they only feed these predicates.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rewards_core::amount::Amount;
//!
//! let total = Amount::parse("9.00").unwrap();
//! assert!(total.is_round_dollar());
//!
//! let price = Amount::parse("12.25").unwrap();
//! assert_eq!(price.ceil_fraction(0.2), 3); // 2.45 → 3
//!
//! assert!(Amount::parse("twelve").is_none());
//! ```

use std::fmt;

/// Fraction of an item's price awarded by the description rule.
pub const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;

/// A parsed, finite monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    /// Parses a decimal string such as `"35.35"`.
    ///
    /// Returns `None` for anything that is not a decimal number (hex floats
    /// such as `0x1p-2` included), and for `inf` / `NaN` which the float
    /// parser would otherwise accept. Surrounding whitespace is not trimmed.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Amount)
    }

    /// Returns the raw value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// True when the amount has no fractional cents (`9.00`, `100`).
    #[inline]
    pub fn is_round_dollar(&self) -> bool {
        self.0 == self.0.floor()
    }

    /// True when the amount in cents is an exact multiple of 25.
    ///
    /// Computed as `(value * 100) % 25 == 0`; a residue that is merely close
    /// to zero does not count.
    ///
    /// ```rust
    /// use rewards_core::amount::Amount;
    ///
    /// assert!(Amount::parse("10.75").unwrap().is_quarter_multiple());
    /// assert!(!Amount::parse("0.29").unwrap().is_quarter_multiple()); // 28.999999999999996
    /// ```
    #[inline]
    pub fn is_quarter_multiple(&self) -> bool {
        (self.0 * 100.0) % 25.0 == 0.0
    }

    /// `ceil(value * fraction)` as an integer.
    ///
    /// Negative results are returned as-is; callers decide whether to clamp.
    pub fn ceil_fraction(&self, fraction: f64) -> i64 {
        // Finite inputs keep this well inside i64 for any realistic price;
        // `as` saturates otherwise.
        (self.0 * fraction).ceil() as i64
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
