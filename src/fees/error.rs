use super::{Currency, OperationType, UserType, UserId};

use std::fmt;
use thiserror::Error;

/// Which currency-keyed table of a rule a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    /// Cash-in fee cap.
    MaxFee,
    /// Natural cash-out weekly free allowance.
    WeekLimit,
    /// Juridical cash-out fee floor.
    MinFee,
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MaxFee => "max fee",
            Self::WeekLimit => "week limit",
            Self::MinFee => "min fee",
        })
    }
}

/// Every failure is a deterministic configuration or validation issue:
/// retrying the same operation gives the same error.
#[derive(Debug, Error, PartialEq)]
pub enum FeeError {
    /// No rule is configured at all for this (operation type, user type) pair.
    #[error("No rule found for {operation_type} operations of {user_type} users")]
    MissingRule {
        operation_type: OperationType,
        user_type: UserType,
    },

    /// The rule exists, but its currency table has no entry for this currency.
    #[error("No {limit} for this currency ({currency})")]
    MissingCurrencyLimit { limit: LimitKind, currency: Currency },

    /// The percentage maths doesn't fit in a decimal.
    #[error("Fee calculation overflowed")]
    Overflow,

    #[error("No such user type")]
    UnsupportedUserType,

    #[error("No such operation type")]
    UnsupportedOperationType,

    /// The user's current week was opened in another currency. There is no
    /// conversion between currencies, so the remaining allowance can't be used.
    #[error("User {user_id} has a weekly allowance tracked in {tracked}, got a cash out in {got}")]
    AllowanceCurrencyMismatch {
        user_id: UserId,
        tracked: Currency,
        got: Currency,
    },
}
