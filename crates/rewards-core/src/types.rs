//! # Domain Types
//!
//! Core domain types used throughout the rewards service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Receipt      │   │      Item       │   │   ReceiptId     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  retailer       │   │  short_desc     │   │  UUID v4        │       │
//! │  │  purchase_date  │──►│  price          │   │  assigned once  │       │
//! │  │  purchase_time  │   └─────────────────┘   │  at storage     │       │
//! │  │  total          │                         └─────────────────┘       │
//! │  │  items[]        │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Raw Field Pattern
//! Dates, times and amounts are kept exactly as submitted. Each points rule
//! parses the field it needs and skips itself when parsing fails, so one bad
//! field never costs the points earned by the others.
//!
//! ## Lenient Decoding
//! A missing or `null` field decodes as its empty value (`""`, `[]`), and a
//! `null` item decodes as an item with empty fields. Only the JSON shape can
//! make a submission undecodable; strict mode adds field checks on top.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

// =============================================================================
// Receipt Id
// =============================================================================

/// Identifier assigned to a receipt when it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Generates a fresh random (v4) identifier.
    pub fn generate() -> Self {
        ReceiptId(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[inline]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ReceiptId {
    type Err = CoreError;

    /// Accepts only the form produced by `Display`: lowercase and hyphenated.
    /// Braced, URN, simple and uppercase spellings are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .ok()
            .map(ReceiptId)
            .filter(|id| id.to_string() == s)
            .ok_or_else(|| CoreError::InvalidReceiptId(s.to_string()))
    }
}

// =============================================================================
// Item
// =============================================================================

/// A line item on a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    /// Short product description, as printed.
    #[serde(deserialize_with = "null_as_default")]
    pub short_description: String,
    /// Price as a decimal string, e.g. `"6.49"`.
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A submitted purchase receipt.
///
/// Immutable once accepted: the store hands out shared snapshots and never
/// exposes a mutable reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name.
    #[serde(deserialize_with = "null_as_default")]
    pub retailer: String,
    /// Purchase date, `YYYY-MM-DD`.
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_date: String,
    /// Purchase time, 24-hour `HH:MM`.
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_time: String,
    /// Total amount paid as a decimal string.
    #[serde(deserialize_with = "null_as_default")]
    pub total: String,
    /// Line items in printed order.
    #[serde(deserialize_with = "items_or_default")]
    pub items: Vec<Item>,
}

impl Receipt {
    /// Parsed purchase date, or `None` when the field is malformed.
    pub fn purchase_date(&self) -> Option<NaiveDate> {
        parse_purchase_date(&self.purchase_date)
    }

    /// Parsed purchase time, or `None` when the field is malformed.
    pub fn purchase_time(&self) -> Option<NaiveTime> {
        parse_purchase_time(&self.purchase_time)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `null` list → no items; `null` entry → empty item.
fn items_or_default<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Option<Item>>>::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

// =============================================================================
// Calendar Parsing
// =============================================================================

/// Parses a `YYYY-MM-DD` date.
///
/// The year must be exactly four digits and month and day exactly two. The
/// result must also be a real calendar day (`2023-02-29` is rejected).
///
/// ```rust
/// use rewards_core::types::parse_purchase_date;
///
/// assert!(parse_purchase_date("2022-01-01").is_some());
/// assert!(parse_purchase_date("2022-1-01").is_none());
/// assert!(parse_purchase_date("2023-02-29").is_none());
/// ```
pub fn parse_purchase_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let year = fixed_digits(&raw[0..4])?;
    let month = fixed_digits(&raw[5..7])?;
    let day = fixed_digits(&raw[8..10])?;

    NaiveDate::from_ymd_opt(year as i32, month, day)
}

/// Parses a 24-hour `H:MM` or `HH:MM` time.
///
/// The hour may be one or two digits; the minute is always two.
///
/// ```rust
/// use rewards_core::types::parse_purchase_time;
///
/// assert!(parse_purchase_time("15:01").is_some());
/// assert!(parse_purchase_time("9:30").is_some());
/// assert!(parse_purchase_time("15:1").is_none());
/// assert!(parse_purchase_time("24:00").is_none());
/// ```
pub fn parse_purchase_time(raw: &str) -> Option<NaiveTime> {
    let (hour, minute) = raw.split_once(':')?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return None;
    }

    NaiveTime::from_hms_opt(fixed_digits(hour)?, fixed_digits(minute)?, 0)
}

/// Reads an all-ASCII-digit string. Signs and whitespace are rejected.
fn fixed_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_receipt_deserializes_camel_case() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "total": "35.35",
            "items": [{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}]
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.items[0], Item::new("Mountain Dew 12PK", "6.49"));
    }

    #[test]
    fn test_receipt_missing_fields_default_to_empty() {
        let json = r#"{"retailer": "Target", "purchaseDate": "2022-01-01"}"#;
        let receipt: Receipt = serde_json::from_str(json).unwrap();

        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_time, "");
        assert_eq!(receipt.total, "");
        assert!(receipt.items.is_empty());

        let empty: Receipt = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Receipt::default());
    }

    #[test]
    fn test_receipt_null_fields_default_to_empty() {
        let json = r#"{
            "retailer": null,
            "purchaseDate": "2022-01-01",
            "purchaseTime": null,
            "total": "1.00",
            "items": null
        }"#;
        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "");
        assert_eq!(receipt.purchase_time, "");
        assert!(receipt.items.is_empty());

        let json = r#"{"items": [null, {"shortDescription": null, "price": "2.00"}]}"#;
        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.items, vec![Item::default(), Item::new("", "2.00")]);
    }

    #[test]
    fn test_receipt_wrong_field_type_is_rejected() {
        assert!(serde_json::from_str::<Receipt>(r#"{"total": 35.35}"#).is_err());
        assert!(serde_json::from_str::<Receipt>(r#"{"items": {}}"#).is_err());
        assert!(serde_json::from_str::<Receipt>(r#""Target""#).is_err());
        assert!(serde_json::from_str::<Receipt>("42").is_err());
    }

    #[test]
    fn test_receipt_id_display_and_parse() {
        let id = ReceiptId::generate();
        let text = id.to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(text.parse::<ReceiptId>().unwrap(), id);
        assert!("not-a-receipt".parse::<ReceiptId>().is_err());
    }

    #[test]
    fn test_receipt_id_rejects_alternate_spellings() {
        let id = ReceiptId::generate();
        let simple = id.as_uuid().simple().to_string();

        assert!(simple.parse::<ReceiptId>().is_err());
        assert!("550e8400-e29b-41d4-a716-446655440000".parse::<ReceiptId>().is_ok());
        assert!("550E8400-E29B-41D4-A716-446655440000".parse::<ReceiptId>().is_err());
        assert!(format!("{{{id}}}").parse::<ReceiptId>().is_err());
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        assert_ne!(ReceiptId::generate(), ReceiptId::generate());
    }

    #[test]
    fn test_parse_purchase_date() {
        let date = parse_purchase_date("2022-03-20").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2022, 3, 20));

        assert!(parse_purchase_date("2024-02-29").is_some());
        assert!(parse_purchase_date("2023-02-29").is_none());
        assert!(parse_purchase_date("22-03-20").is_none());
        assert!(parse_purchase_date("2022-13-01").is_none());
        assert!(parse_purchase_date("2022/03/20").is_none());
        assert!(parse_purchase_date("2022-03-2x").is_none());
        assert!(parse_purchase_date("").is_none());
    }

    #[test]
    fn test_parse_purchase_time() {
        assert_eq!(parse_purchase_time("15:00").unwrap().hour(), 15);
        assert_eq!(parse_purchase_time("00:00").unwrap().hour(), 0);
        assert_eq!(parse_purchase_time("7:05").unwrap().minute(), 5);

        assert!(parse_purchase_time("24:00").is_none());
        assert!(parse_purchase_time("12:60").is_none());
        assert!(parse_purchase_time("123:00").is_none());
        assert!(parse_purchase_time("3pm").is_none());
        assert!(parse_purchase_time("15:00:00").is_none());
        assert!(parse_purchase_time("+1:00").is_none());
    }

    #[test]
    fn test_date_with_multibyte_chars_does_not_panic() {
        // 10 bytes with dashes in place, but the year is not all digits
        assert!(parse_purchase_date("2é2-03-20").is_none());
    }
}
