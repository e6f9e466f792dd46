//! # Points Module
//!
//! The rewards rule set. Every rule is independent and additive; a rule whose
//! input does not parse contributes zero and the rest still apply.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                 Input             Award                           │
//! │  ──────────────────   ───────────────   ─────────────────────────────   │
//! │  retailer name        retailer          +1 per Unicode letter / number  │
//! │  round dollar         total             +50 if no cents                 │
//! │  quarter multiple     total             +25 if cents % 25 == 0          │
//! │                                         (only when not round dollar)    │
//! │  item pairs           items             +5 per two items                │
//! │  item description     items             +ceil(price × 0.2) when the     │
//! │                                         trimmed description length      │
//! │                                         is a multiple of 3              │
//! │  odd day              purchase_date     +6 if day of month is odd       │
//! │  afternoon            purchase_time     +10 if hour == 15               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rewards_core::{Item, PointsBreakdown, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     total: "35.35".to_string(),
//!     items: vec![
//!         Item::new("Mountain Dew 12PK", "6.49"),
//!         Item::new("Emils Cheese Pizza", "12.25"),
//!         Item::new("Knorr Creamy Chicken", "1.26"),
//!         Item::new("Doritos Nacho Cheese", "3.35"),
//!         Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
//!     ],
//! };
//!
//! let breakdown = PointsBreakdown::for_receipt(&receipt);
//! assert_eq!(breakdown.retailer_name, 6);
//! assert_eq!(breakdown.item_descriptions, 6);
//! assert_eq!(breakdown.total(), 28);
//! ```

use chrono::{Datelike, Timelike};
use serde::Serialize;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::amount::{Amount, DESCRIPTION_PRICE_MULTIPLIER};
use crate::types::{Item, Receipt};

// =============================================================================
// Rule Constants
// =============================================================================

pub const ROUND_DOLLAR_POINTS: u64 = 50;
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
pub const ITEM_PAIR_POINTS: u64 = 5;
pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_POINTS: u64 = 10;

/// Trimmed description lengths divisible by this earn the price bonus.
pub const DESCRIPTION_LENGTH_DIVISOR: usize = 3;

/// Exclusive hour bounds of the afternoon window. Only 15:00-15:59 qualifies.
const AFTERNOON_AFTER_HOUR: u32 = 14;
const AFTERNOON_BEFORE_HOUR: u32 = 16;

// =============================================================================
// Breakdown
// =============================================================================

/// Points awarded by each rule for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Applies every rule to `receipt`.
    pub fn for_receipt(receipt: &Receipt) -> Self {
        let total = Amount::parse(&receipt.total);
        let round_dollar = total.is_some_and(|t| t.is_round_dollar());
        let quarter_multiple = !round_dollar && total.is_some_and(|t| t.is_quarter_multiple());

        PointsBreakdown {
            retailer_name: retailer_name_points(&receipt.retailer),
            round_dollar: if round_dollar { ROUND_DOLLAR_POINTS } else { 0 },
            quarter_multiple: if quarter_multiple { QUARTER_MULTIPLE_POINTS } else { 0 },
            item_pairs: item_pair_points(receipt.items.len()),
            item_descriptions: receipt.items.iter().map(item_description_points).sum(),
            odd_day: match receipt.purchase_date() {
                Some(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
                _ => 0,
            },
            afternoon: match receipt.purchase_time() {
                Some(time) if is_afternoon_hour(time.hour()) => AFTERNOON_POINTS,
                _ => 0,
            },
        }
    }

    /// Sum of all rules.
    pub fn total(&self) -> u64 {
        self.retailer_name
            + self.round_dollar
            + self.quarter_multiple
            + self.item_pairs
            + self.item_descriptions
            + self.odd_day
            + self.afternoon
    }
}

/// Scores a receipt.
///
/// Pure and deterministic: the same receipt always yields the same score.
pub fn calculate_points(receipt: &Receipt) -> u64 {
    PointsBreakdown::for_receipt(receipt).total()
}

// =============================================================================
// Individual Rules
// =============================================================================

/// One point per character in a Letter or Number general category.
///
/// Punctuation, symbols, spaces and combining marks score nothing.
pub fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(|&c| is_letter_or_number(c)).count() as u64
}

fn is_letter_or_number(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

/// `ceil(price × 0.2)` when the trimmed description length is a multiple of 3.
///
/// An empty description (length 0) qualifies. A price that does not parse,
/// or one low enough to round to a negative award, contributes 0.
pub fn item_description_points(item: &Item) -> u64 {
    let length = item.short_description.trim().chars().count();
    if length % DESCRIPTION_LENGTH_DIVISOR != 0 {
        return 0;
    }

    Amount::parse(&item.price)
        .map(|price| price.ceil_fraction(DESCRIPTION_PRICE_MULTIPLIER).max(0) as u64)
        .unwrap_or(0)
}

#[inline]
fn is_afternoon_hour(hour: u32) -> bool {
    hour > AFTERNOON_AFTER_HOUR && hour < AFTERNOON_BEFORE_HOUR
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(retailer: &str, date: &str, time: &str, total: &str, items: Vec<Item>) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: date.to_string(),
            purchase_time: time.to_string(),
            total: total.to_string(),
            items,
        }
    }

    /// A receipt on which every rule except the one under test scores 0.
    fn neutral() -> Receipt {
        receipt("&", "2022-01-02", "10:00", "1.01", vec![])
    }

    fn target_receipt() -> Receipt {
        receipt(
            "Target",
            "2022-01-01",
            "13:01",
            "35.35",
            vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
                Item::new("Knorr Creamy Chicken", "1.26"),
                Item::new("Doritos Nacho Cheese", "3.35"),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
        )
    }

    fn corner_market_receipt() -> Receipt {
        receipt(
            "M&M Corner Market",
            "2022-03-20",
            "14:33",
            "9.00",
            vec![Item::new("Gatorade", "2.25"); 4],
        )
    }

    #[test]
    fn test_neutral_receipt_scores_zero() {
        assert_eq!(calculate_points(&neutral()), 0);
    }

    #[test]
    fn test_target_example() {
        let breakdown = PointsBreakdown::for_receipt(&target_receipt());
        assert_eq!(
            breakdown,
            PointsBreakdown {
                retailer_name: 6,
                round_dollar: 0,
                quarter_multiple: 0,
                item_pairs: 10,
                item_descriptions: 6,
                odd_day: 6,
                afternoon: 0,
            }
        );
        assert_eq!(calculate_points(&target_receipt()), 28);
    }

    /// 14 (name) + 50 (round dollar) + 10 (two pairs). The quarter bonus is
    /// excluded by the round dollar and 14:33 is outside the 15:xx window.
    #[test]
    fn test_corner_market_example() {
        let breakdown = PointsBreakdown::for_receipt(&corner_market_receipt());
        assert_eq!(breakdown.retailer_name, 14);
        assert_eq!(breakdown.round_dollar, 50);
        assert_eq!(breakdown.quarter_multiple, 0);
        assert_eq!(breakdown.item_pairs, 10);
        assert_eq!(breakdown.item_descriptions, 0);
        assert_eq!(breakdown.odd_day, 0);
        assert_eq!(breakdown.afternoon, 0);
        assert_eq!(calculate_points(&corner_market_receipt()), 74);
    }

    #[test]
    fn test_calculation_is_deterministic() {
        let receipt = target_receipt();
        let first = calculate_points(&receipt);
        for _ in 0..10 {
            assert_eq!(calculate_points(&receipt), first);
        }
    }

    // -------------------------------------------------------------------------
    // Retailer name
    // -------------------------------------------------------------------------

    #[test]
    fn test_retailer_counts_letters_and_digits_only() {
        assert_eq!(retailer_name_points("M&M Corner Market"), 14);
        assert_eq!(retailer_name_points("7-Eleven"), 7);
        assert_eq!(retailer_name_points("  ---  "), 0);
        assert_eq!(retailer_name_points(""), 0);
    }

    #[test]
    fn test_retailer_counts_non_latin_scripts() {
        assert_eq!(retailer_name_points("Café"), 4);
        assert_eq!(retailer_name_points("東京ストア"), 5);
        assert_eq!(retailer_name_points("Магазин №1"), 8);
        // Arabic-Indic digits are decimal numbers
        assert_eq!(retailer_name_points("٣٤٥"), 3);
    }

    #[test]
    fn test_retailer_uses_general_category_not_alphabetic_property() {
        // न म स त are letters; the virama and vowel sign are combining marks
        assert_eq!(retailer_name_points("नमस्ते"), 4);
        // Superscript two and vulgar half are Other_Number
        assert_eq!(retailer_name_points("x²½"), 3);
    }

    // -------------------------------------------------------------------------
    // Total
    // -------------------------------------------------------------------------

    #[test]
    fn test_round_dollar_excludes_quarter() {
        let mut r = neutral();
        r.total = "100.00".to_string();
        let breakdown = PointsBreakdown::for_receipt(&r);
        assert_eq!(breakdown.round_dollar, 50);
        assert_eq!(breakdown.quarter_multiple, 0);
        assert_eq!(breakdown.total(), 50);
    }

    #[test]
    fn test_quarter_multiple_without_round_dollar() {
        let mut r = neutral();
        r.total = "10.75".to_string();
        assert_eq!(calculate_points(&r), 25);
    }

    #[test]
    fn test_unparseable_total_scores_nothing() {
        for total in ["", "abc", "9.OO", "inf", "NaN"] {
            let mut r = neutral();
            r.total = total.to_string();
            assert_eq!(calculate_points(&r), 0, "{total}");
        }
    }

    #[test]
    fn test_total_float_edges() {
        let mut r = neutral();
        r.total = "1.0000000000000001".to_string();
        assert_eq!(calculate_points(&r), 50);

        r.total = "0.29".to_string();
        assert_eq!(calculate_points(&r), 0);
    }

    // -------------------------------------------------------------------------
    // Items
    // -------------------------------------------------------------------------

    #[test]
    fn test_item_pairs() {
        assert_eq!(item_pair_points(0), 0);
        assert_eq!(item_pair_points(1), 0);
        assert_eq!(item_pair_points(2), 5);
        assert_eq!(item_pair_points(5), 10);
    }

    #[test]
    fn test_description_length_multiple_of_three() {
        assert_eq!(item_description_points(&Item::new("abc", "10.00")), 2);
        assert_eq!(item_description_points(&Item::new("  abc  ", "10.01")), 3);
        assert_eq!(item_description_points(&Item::new("abcd", "10.00")), 0);
    }

    #[test]
    fn test_description_length_counts_characters_not_bytes() {
        // 3 characters, 6 bytes
        assert_eq!(item_description_points(&Item::new("äöü", "5.00")), 1);
        // 2 characters, 3 bytes
        assert_eq!(item_description_points(&Item::new("äb", "5.00")), 0);
    }

    #[test]
    fn test_empty_description_receives_bonus() {
        // A zero-length trimmed description is a multiple of 3
        assert_eq!(item_description_points(&Item::new("", "10.00")), 2);
        assert_eq!(item_description_points(&Item::new("    ", "12.25")), 3);
    }

    #[test]
    fn test_description_unparseable_price_scores_nothing() {
        assert_eq!(item_description_points(&Item::new("abc", "free")), 0);
        assert_eq!(item_description_points(&Item::new("abc", "")), 0);
    }

    #[test]
    fn test_description_negative_price_is_clamped() {
        assert_eq!(item_description_points(&Item::new("abc", "-6.00")), 0);
    }

    #[test]
    fn test_description_float_edge() {
        assert_eq!(
            item_description_points(&Item::new("abc", "5.0000000000000001")),
            1
        );
    }

    // -------------------------------------------------------------------------
    // Date and time
    // -------------------------------------------------------------------------

    #[test]
    fn test_odd_day() {
        let mut r = neutral();
        r.purchase_date = "2022-01-31".to_string();
        assert_eq!(calculate_points(&r), 6);

        r.purchase_date = "2022-01-30".to_string();
        assert_eq!(calculate_points(&r), 0);
    }

    #[test]
    fn test_malformed_date_scores_nothing() {
        for date in ["2022-1-1", "01/01/2022", "2022-02-31", "yesterday"] {
            let mut r = neutral();
            r.purchase_date = date.to_string();
            assert_eq!(calculate_points(&r), 0, "{date}");
        }
    }

    #[test]
    fn test_afternoon_window_boundaries() {
        let points_at = |time: &str| {
            let mut r = neutral();
            r.purchase_time = time.to_string();
            calculate_points(&r)
        };

        assert_eq!(points_at("14:00"), 0);
        assert_eq!(points_at("14:59"), 0);
        assert_eq!(points_at("15:00"), 10);
        assert_eq!(points_at("15:59"), 10);
        assert_eq!(points_at("16:00"), 0);
    }

    #[test]
    fn test_malformed_time_scores_nothing() {
        for time in ["3pm", "15", "15:5", "25:00", ""] {
            let mut r = neutral();
            r.purchase_time = time.to_string();
            assert_eq!(calculate_points(&r), 0, "{time}");
        }
    }

    #[test]
    fn test_bad_fields_do_not_cancel_other_rules() {
        let mut r = target_receipt();
        r.total = "n/a".to_string();
        r.purchase_time = "noon".to_string();
        r.items[1].price = "twelve".to_string();
        // 6 (name) + 10 (pairs) + 3 (Klarbrunn) + 6 (odd day)
        assert_eq!(calculate_points(&r), 25);
    }
}
