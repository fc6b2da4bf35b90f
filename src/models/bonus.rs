//! Bonus models.
//!
//! Line-item DTOs for the bonus calculation service: a [`BonusEntry`] is one
//! awarded bonus, a [`BonusStatement`] collects a user's entries for payout.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// One awarded bonus line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusEntry {
    /// Storage identity of this entry.
    pub id: Uuid,
    /// The login name of the user the bonus was awarded to.
    pub username: String,
    /// The date the bonus was awarded.
    pub awarded_on: NaiveDate,
    /// Human-readable reason for the bonus.
    pub description: String,
    /// Base bonus amount before the multiplier.
    pub base_amount: Decimal,
    /// Multiplier applied to the base amount (e.g. 1.5 for holiday work).
    pub multiplier: Decimal,
}

impl BonusEntry {
    /// Creates a validated bonus entry.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEntry`] if the username is empty, the
    /// base amount is negative, or the multiplier is not positive.
    pub fn new(
        id: Uuid,
        username: impl Into<String>,
        awarded_on: NaiveDate,
        description: impl Into<String>,
        base_amount: Decimal,
        multiplier: Decimal,
    ) -> EngineResult<Self> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(EngineError::InvalidEntry {
                field: "username".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if base_amount < Decimal::ZERO {
            return Err(EngineError::InvalidEntry {
                field: "base_amount".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if multiplier <= Decimal::ZERO {
            return Err(EngineError::InvalidEntry {
                field: "multiplier".to_string(),
                message: "must be positive".to_string(),
            });
        }
        Ok(Self {
            id,
            username,
            awarded_on,
            description: description.into(),
            base_amount,
            multiplier,
        })
    }

    /// Returns the payable amount (base amount times multiplier).
    pub fn total(&self) -> Decimal {
        self.base_amount * self.multiplier
    }
}

/// A user's bonus entries collected for payout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusStatement {
    /// The login name of the user the statement belongs to.
    pub username: String,
    /// The entries included in this statement.
    #[serde(default)]
    pub entries: Vec<BonusEntry>,
}

impl BonusStatement {
    /// Returns the sum of all entry totals.
    pub fn grand_total(&self) -> Decimal {
        self.entries.iter().map(BonusEntry::total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn entry(base: &str, multiplier: &str) -> BonusEntry {
        BonusEntry::new(
            Uuid::new_v4(),
            "amaier",
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            "Holiday shift",
            dec(base),
            dec(multiplier),
        )
        .unwrap()
    }

    #[test]
    fn test_total_applies_multiplier() {
        assert_eq!(entry("100.00", "1.5").total(), dec("150.00"));
        assert_eq!(entry("80.00", "1").total(), dec("80.00"));
    }

    #[test]
    fn test_zero_base_amount_is_allowed() {
        assert_eq!(entry("0", "2").total(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_base_amount_rejected() {
        let result = BonusEntry::new(
            Uuid::new_v4(),
            "amaier",
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            "Holiday shift",
            dec("-1"),
            dec("1"),
        );
        assert!(matches!(
            result,
            Err(EngineError::InvalidEntry { ref field, .. }) if field == "base_amount"
        ));
    }

    #[test]
    fn test_non_positive_multiplier_rejected() {
        for multiplier in ["0", "-0.5"] {
            let result = BonusEntry::new(
                Uuid::new_v4(),
                "amaier",
                NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
                "Holiday shift",
                dec("100"),
                dec(multiplier),
            );
            assert!(matches!(
                result,
                Err(EngineError::InvalidEntry { ref field, .. }) if field == "multiplier"
            ));
        }
    }

    #[test]
    fn test_statement_grand_total_sums_entries() {
        let statement = BonusStatement {
            username: "amaier".to_string(),
            entries: vec![entry("100.00", "1.5"), entry("50.00", "2")],
        };
        assert_eq!(statement.grand_total(), dec("250.00"));
    }

    #[test]
    fn test_empty_statement_totals_zero() {
        let statement = BonusStatement {
            username: "amaier".to_string(),
            entries: vec![],
        };
        assert_eq!(statement.grand_total(), Decimal::ZERO);
    }

    #[test]
    fn test_bonus_entry_serialization_round_trip() {
        let original = entry("123.45", "1.25");
        let json = serde_json::to_string(&original).unwrap();
        let deserialized: BonusEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(original, deserialized);
    }
}
