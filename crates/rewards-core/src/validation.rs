//! # Validation Module
//!
//! Strict field-format checks for submitted receipts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: JSON extraction (rewards-api)                                │
//! │  ├── Payload must be JSON                                              │
//! │  └── Every field present with the right type                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (only when STRICT_VALIDATION=true)               │
//! │  ├── Amounts look like 12.34                                           │
//! │  ├── Dates and times are real                                          │
//! │  └── Names and descriptions use the allowed characters                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Points rules                                                 │
//! │  └── Anything still malformed scores 0 for that rule                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rewards_core::validation::{validate_amount, validate_receipt};
//! use rewards_core::{Item, Receipt};
//!
//! assert!(validate_amount("total", "35.35").is_ok());
//! assert!(validate_amount("total", "35.3").is_err());
//!
//! let receipt = Receipt {
//!     retailer: "Walgreens".to_string(),
//!     purchase_date: "2022-01-02".to_string(),
//!     purchase_time: "08:13".to_string(),
//!     total: "2.65".to_string(),
//!     items: vec![Item::new("Pepsi - 12-oz", "1.25")],
//! };
//! assert!(validate_receipt(&receipt).is_ok());
//! ```

use crate::error::ValidationError;
use crate::types::{parse_purchase_date, parse_purchase_time, Item, Receipt};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Receipt
// =============================================================================

/// Runs every field check, stopping at the first failure.
pub fn validate_receipt(receipt: &Receipt) -> ValidationResult<()> {
    validate_retailer(&receipt.retailer)?;
    validate_purchase_date(&receipt.purchase_date)?;
    validate_purchase_time(&receipt.purchase_time)?;
    validate_amount("total", &receipt.total)?;

    if receipt.items.is_empty() {
        return Err(ValidationError::TooFew {
            field: "items".to_string(),
            min: 1,
        });
    }

    receipt.items.iter().try_for_each(validate_item)
}

fn validate_item(item: &Item) -> ValidationResult<()> {
    validate_short_description(&item.short_description)?;
    validate_amount("price", &item.price)
}

// =============================================================================
// String Validators
// =============================================================================

/// Word characters, whitespace, `-` and `&`; not blank.
pub fn validate_retailer(retailer: &str) -> ValidationResult<()> {
    validate_text("retailer", retailer, &['-', '&'])
}

/// Word characters, whitespace and `-`; not blank.
pub fn validate_short_description(description: &str) -> ValidationResult<()> {
    validate_text("shortDescription", description, &['-'])
}

fn validate_text(field: &str, value: &str, extra: &[char]) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let allowed = |c: char| c.is_alphanumeric() || c == '_' || c.is_whitespace() || extra.contains(&c);
    if let Some(bad) = value.chars().find(|&c| !allowed(c)) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("unexpected character {bad:?}"),
        });
    }

    Ok(())
}

// =============================================================================
// Calendar Validators
// =============================================================================

pub fn validate_purchase_date(date: &str) -> ValidationResult<()> {
    parse_purchase_date(date)
        .map(|_| ())
        .ok_or_else(|| ValidationError::InvalidFormat {
            field: "purchaseDate".to_string(),
            reason: "must be a calendar date in YYYY-MM-DD form".to_string(),
        })
}

/// Stricter than scoring: the hour must be two digits.
pub fn validate_purchase_time(time: &str) -> ValidationResult<()> {
    let two_digit_hour = time.find(':') == Some(2);
    match parse_purchase_time(time) {
        Some(_) if two_digit_hour => Ok(()),
        _ => Err(ValidationError::InvalidFormat {
            field: "purchaseTime".to_string(),
            reason: "must be a 24-hour time in HH:MM form".to_string(),
        }),
    }
}

// =============================================================================
// Amount Validators
// =============================================================================

/// Digits, a dot, then exactly two digits (`^\d+\.\d{2}$`).
pub fn validate_amount(field: &str, amount: &str) -> ValidationResult<()> {
    let well_formed = amount.split_once('.').is_some_and(|(whole, cents)| {
        !whole.is_empty()
            && whole.bytes().all(|b| b.is_ascii_digit())
            && cents.len() == 2
            && cents.bytes().all(|b| b.is_ascii_digit())
    });

    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a decimal amount with two fraction digits".to_string(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
