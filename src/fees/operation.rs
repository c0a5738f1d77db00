use super::{Amount, UserId};

use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    CashIn,  // Deposit, increases the user's funds.
    CashOut, // Withdrawal, decreases the user's funds.

    /// Anything else found in the input. Kept so the failure is reported for
    /// that operation only, instead of rejecting the whole batch.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Natural,   // Individual person.
    Juridical, // Company.

    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Usd,
    Jpy,
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CashIn => "cash_in",
            Self::CashOut => "cash_out",
            Self::Other => "unknown",
        })
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Natural => "natural",
            Self::Juridical => "juridical",
            Self::Other => "unknown",
        })
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Jpy => "JPY",
        })
    }
}

/// A single cash-in or cash-out, as read from the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub date: NaiveDate,
    pub user_id: UserId,
    pub user_type: UserType,
    pub op_type: OperationType,
    pub amount: Amount,
    pub currency: Currency,
}

impl Operation {
    pub fn new(
        date: NaiveDate,
        user_id: UserId,
        user_type: UserType,
        op_type: OperationType,
        amount: Amount,
        currency: Currency,
    ) -> Self {
        Self {
            date,
            user_id,
            user_type,
            op_type,
            amount,
            currency,
        }
    }
}
