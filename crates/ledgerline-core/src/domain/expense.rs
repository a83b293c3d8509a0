//! Expense domain entity
//!
//! This module defines the `Expense` entity and its supporting types. An
//! expense lives in two stores at once: the remote database (authoritative
//! when reachable) and the local cache (always available). Records created
//! while offline carry a locally-minted placeholder identifier until the
//! sync engine pushes them to the remote store.
//!
//! ## Identifier Lifecycle
//!
//! ```text
//!     offline create          push succeeds           remote row
//!     ┌─────────────┐   insert without id   ┌──────────────────────┐
//!     │ Local("17…")│ ────────────────────► │ Remote("a1b2-…uuid") │
//!     │ (pending)   │                       │ (synced)             │
//!     └─────────────┘                       └──────────────────────┘
//! ```
//!
//! On the wire (cache JSON and remote rows) both variants are plain strings;
//! a purely-numeric string is a placeholder minted from epoch milliseconds,
//! anything else is a remote identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::errors::DomainError;

// ============================================================================
// ExpenseId
// ============================================================================

/// Identifier of an expense record
///
/// `Local` ids are placeholders minted from epoch milliseconds when a create
/// could not reach the remote store. `Remote` ids are assigned by the remote
/// database. The distinction is carried in the type so that pending-record
/// detection is a variant check rather than a string-pattern test at every
/// call site; the string form only matters at the storage boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExpenseId {
    /// Placeholder id for a record not yet pushed to the remote store
    Local(String),
    /// Identifier assigned by the remote database
    Remote(String),
}

impl ExpenseId {
    /// Classifies a wire-format string into the appropriate variant.
    ///
    /// A non-empty, purely-numeric string is a locally-minted placeholder;
    /// everything else is a remote identifier.
    pub fn from_wire(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            ExpenseId::Local(raw)
        } else {
            ExpenseId::Remote(raw)
        }
    }

    /// Mints a placeholder id from a millisecond timestamp.
    pub fn local_from_millis(millis: i64) -> Self {
        ExpenseId::Local(millis.to_string())
    }

    /// Returns true if this record has not been pushed to the remote store
    pub fn is_pending(&self) -> bool {
        matches!(self, ExpenseId::Local(_))
    }

    /// Returns the wire-format string form
    pub fn as_str(&self) -> &str {
        match self {
            ExpenseId::Local(s) | ExpenseId::Remote(s) => s,
        }
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Both variants serialize to the bare string so cached JSON written before
// and after a push round-trips unchanged.
impl Serialize for ExpenseId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ExpenseId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ExpenseId::from_wire(raw))
    }
}

// ============================================================================
// Category
// ============================================================================

/// Fixed set of expense categories
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Health,
    Bills,
    #[default]
    Other,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Entertainment,
        Category::Health,
        Category::Bills,
        Category::Other,
    ];

    /// Returns the category name as shown to users and stored on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Bills => "Bills",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}

// ============================================================================
// Receipt
// ============================================================================

/// Receipt image attached to an expense
///
/// Stored in the single `receipt_url` field both remotely and in the cache.
/// When the image upload succeeds the field holds the public object URL;
/// when upload fails on an offline create the image is inlined as a base64
/// data URL so the record stays self-contained until it can be pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Receipt {
    /// Public URL of an uploaded receipt image
    Url(String),
    /// Inline `data:` URL carrying the image itself
    Inline(String),
}

impl Receipt {
    /// Classifies a wire-format string: `data:` prefix means inline.
    pub fn from_wire(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.starts_with("data:") {
            Receipt::Inline(raw)
        } else {
            Receipt::Url(raw)
        }
    }

    /// Returns true if the image is carried inline rather than uploaded
    pub fn is_inline(&self) -> bool {
        matches!(self, Receipt::Inline(_))
    }

    /// Returns the wire-format string form
    pub fn as_str(&self) -> &str {
        match self {
            Receipt::Url(s) | Receipt::Inline(s) => s,
        }
    }
}

impl Serialize for Receipt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Receipt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Receipt::from_wire(raw))
    }
}

// ============================================================================
// Expense
// ============================================================================

/// An expense record as held in the cache and the remote table
///
/// This type matches the wire format of both stores field for field, so a
/// cached collection and a remote result set deserialize into the same shape.
/// Timestamps are optional because offline-created records only gain
/// authoritative `created_at`/`updated_at` values from the remote database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub title: String,
    pub amount: f64,
    pub category: Category,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<Receipt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Expense {
    /// Returns true if this record is awaiting a push to the remote store
    pub fn is_pending(&self) -> bool {
        self.id.is_pending()
    }
}

// ============================================================================
// ExpenseDraft
// ============================================================================

/// Validated user input for creating or updating an expense
///
/// Validation happens before either store is touched: an invalid draft is
/// rejected outright and never written locally or remotely.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: f64,
    pub category: Category,
    pub date: DateTime<Utc>,
    pub receipt_url: Option<Receipt>,
}

impl ExpenseDraft {
    /// Checks the draft against the domain rules.
    ///
    /// # Errors
    /// - [`DomainError::EmptyTitle`] if the title is empty or whitespace-only
    /// - [`DomainError::InvalidAmount`] if the amount is not a positive finite number
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(DomainError::InvalidAmount(self.amount));
        }
        Ok(())
    }

    /// Builds the expense stored on the local fallback path, stamping the
    /// placeholder id and local timestamps.
    pub fn into_local_expense(self, id: ExpenseId, now: DateTime<Utc>) -> Expense {
        Expense {
            id,
            title: self.title,
            amount: self.amount,
            category: self.category,
            date: self.date,
            receipt_url: self.receipt_url,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft() -> ExpenseDraft {
        ExpenseDraft {
            title: "Groceries".to_string(),
            amount: 42.50,
            category: Category::Food,
            date: Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap(),
            receipt_url: None,
        }
    }

    mod expense_id {
        use super::*;

        #[test]
        fn numeric_string_classifies_as_local() {
            let id = ExpenseId::from_wire("1757843200123");
            assert_eq!(id, ExpenseId::Local("1757843200123".to_string()));
            assert!(id.is_pending());
        }

        #[test]
        fn uuid_string_classifies_as_remote() {
            let id = ExpenseId::from_wire("f47ac10b-58cc-4372-a567-0e02b2c3d479");
            assert!(!id.is_pending());
            assert_eq!(id.as_str(), "f47ac10b-58cc-4372-a567-0e02b2c3d479");
        }

        #[test]
        fn empty_string_classifies_as_remote() {
            assert!(!ExpenseId::from_wire("").is_pending());
        }

        #[test]
        fn mixed_alphanumeric_classifies_as_remote() {
            assert!(!ExpenseId::from_wire("123abc").is_pending());
        }

        #[test]
        fn local_from_millis_round_trips() {
            let id = ExpenseId::local_from_millis(1757843200123);
            assert!(id.is_pending());
            assert_eq!(id.as_str(), "1757843200123");
        }

        #[test]
        fn serializes_as_bare_string() {
            let id = ExpenseId::Local("1700000000000".to_string());
            assert_eq!(serde_json::to_string(&id).unwrap(), "\"1700000000000\"");
        }

        #[test]
        fn deserialization_reclassifies() {
            let id: ExpenseId = serde_json::from_str("\"1700000000000\"").unwrap();
            assert!(id.is_pending());
            let id: ExpenseId = serde_json::from_str("\"abc-123\"").unwrap();
            assert!(!id.is_pending());
        }
    }

    mod category {
        use super::*;

        #[test]
        fn parses_case_insensitively() {
            assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
            assert_eq!("BILLS".parse::<Category>().unwrap(), Category::Bills);
        }

        #[test]
        fn rejects_unknown_names() {
            let err = "Gadgets".parse::<Category>().unwrap_err();
            assert_eq!(err, DomainError::UnknownCategory("Gadgets".to_string()));
        }

        #[test]
        fn serializes_to_display_name() {
            assert_eq!(
                serde_json::to_string(&Category::Entertainment).unwrap(),
                "\"Entertainment\""
            );
        }

        #[test]
        fn all_lists_every_variant_once() {
            assert_eq!(Category::ALL.len(), 7);
            for c in Category::ALL {
                assert!(Category::ALL.iter().filter(|x| **x == c).count() == 1);
            }
        }
    }

    mod receipt {
        use super::*;

        #[test]
        fn data_url_classifies_as_inline() {
            let r = Receipt::from_wire("data:image/jpeg;base64,AAAA");
            assert!(r.is_inline());
        }

        #[test]
        fn http_url_classifies_as_url() {
            let r = Receipt::from_wire("https://cdn.example.com/receipts/receipt_1.jpg");
            assert!(!r.is_inline());
        }
    }

    mod draft_validation {
        use super::*;

        #[test]
        fn valid_draft_passes() {
            assert!(draft().validate().is_ok());
        }

        #[test]
        fn blank_title_rejected() {
            let mut d = draft();
            d.title = "   ".to_string();
            assert_eq!(d.validate().unwrap_err(), DomainError::EmptyTitle);
        }

        #[test]
        fn zero_amount_rejected() {
            let mut d = draft();
            d.amount = 0.0;
            assert_eq!(d.validate().unwrap_err(), DomainError::InvalidAmount(0.0));
        }

        #[test]
        fn nan_amount_rejected() {
            let mut d = draft();
            d.amount = f64::NAN;
            assert!(matches!(
                d.validate().unwrap_err(),
                DomainError::InvalidAmount(_)
            ));
        }

        #[test]
        fn negative_amount_rejected() {
            let mut d = draft();
            d.amount = -1.0;
            assert!(d.validate().is_err());
        }

        #[test]
        fn into_local_expense_stamps_id_and_timestamps() {
            let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 30, 0).unwrap();
            let e = draft().into_local_expense(ExpenseId::local_from_millis(1700000000000), now);
            assert!(e.is_pending());
            assert_eq!(e.created_at, Some(now));
            assert_eq!(e.updated_at, Some(now));
        }
    }

    mod wire_format {
        use super::*;

        #[test]
        fn expense_round_trips_through_json() {
            let e = Expense {
                id: ExpenseId::Remote("abc-123".to_string()),
                title: "Bus ticket".to_string(),
                amount: 2.75,
                category: Category::Transport,
                date: Utc.with_ymd_and_hms(2026, 1, 2, 8, 0, 0).unwrap(),
                receipt_url: Some(Receipt::Url("https://x.test/r.jpg".to_string())),
                created_at: None,
                updated_at: None,
            };
            let json = serde_json::to_string(&e).unwrap();
            let back: Expense = serde_json::from_str(&json).unwrap();
            assert_eq!(back, e);
        }

        #[test]
        fn absent_optional_fields_deserialize_as_none() {
            let json = r#"{
                "id": "1700000000000",
                "title": "Coffee",
                "amount": 3.2,
                "category": "Food",
                "date": "2026-01-02T08:00:00Z"
            }"#;
            let e: Expense = serde_json::from_str(json).unwrap();
            assert!(e.is_pending());
            assert!(e.receipt_url.is_none());
            assert!(e.created_at.is_none());
        }
    }
}
