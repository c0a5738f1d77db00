//! Fixed fee rules, for each (operation type, user type) combination.
//!
//! The schedule is built once and only ever read afterwards. Alternate
//! schedules (e.g. to exercise a misconfiguration) are built with the
//! `with_*` / `without_*` methods, never by mutating a shared instance.

use super::error::{FeeError, LimitKind};
use super::{Amount, Currency};

use rust_decimal_macros::dec;
use std::collections::HashMap;

/// Amounts keyed by currency. A missing currency is a configuration error,
/// there is no default amount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyLimits(HashMap<Currency, Amount>);

impl CurrencyLimits {
    pub fn get(&self, currency: Currency) -> Option<Amount> {
        self.0.get(&currency).copied()
    }
}

impl<const N: usize> From<[(Currency, Amount); N]> for CurrencyLimits {
    fn from(limits: [(Currency, Amount); N]) -> Self {
        Self(HashMap::from(limits))
    }
}

/// Cash-in: a percentage of the amount, capped per currency.
#[derive(Debug, Clone, PartialEq)]
pub struct CashInRule {
    pub percents: Amount,
    pub max: CurrencyLimits,
}

impl CashInRule {
    pub fn max_fee(&self, currency: Currency) -> Result<Amount, FeeError> {
        self.max.get(currency).ok_or(FeeError::MissingCurrencyLimit {
            limit: LimitKind::MaxFee,
            currency,
        })
    }
}

/// Natural cash-out: a percentage of whatever exceeds the weekly free allowance.
#[derive(Debug, Clone, PartialEq)]
pub struct NaturalCashOutRule {
    pub percents: Amount,
    pub week_limit: CurrencyLimits,
}

impl NaturalCashOutRule {
    pub fn week_limit(&self, currency: Currency) -> Result<Amount, FeeError> {
        self.week_limit
            .get(currency)
            .ok_or(FeeError::MissingCurrencyLimit {
                limit: LimitKind::WeekLimit,
                currency,
            })
    }
}

/// Juridical cash-out: a percentage of the amount, with a per-currency floor.
#[derive(Debug, Clone, PartialEq)]
pub struct JuridicalCashOutRule {
    pub percents: Amount,
    pub min: CurrencyLimits,
}

impl JuridicalCashOutRule {
    pub fn min_fee(&self, currency: Currency) -> Result<Amount, FeeError> {
        self.min.get(currency).ok_or(FeeError::MissingCurrencyLimit {
            limit: LimitKind::MinFee,
            currency,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeeSchedule {
    cash_in: Option<CashInRule>,
    cash_out_natural: Option<NaturalCashOutRule>,
    cash_out_juridical: Option<JuridicalCashOutRule>,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            cash_in: Some(CashInRule {
                percents: dec!(0.03),
                max: CurrencyLimits::from([(Currency::Eur, dec!(5))]),
            }),
            cash_out_natural: Some(NaturalCashOutRule {
                percents: dec!(0.3),
                week_limit: CurrencyLimits::from([(Currency::Eur, dec!(1000))]),
            }),
            cash_out_juridical: Some(JuridicalCashOutRule {
                percents: dec!(0.3),
                min: CurrencyLimits::from([(Currency::Eur, dec!(0.5))]),
            }),
        }
    }
}

impl FeeSchedule {
    /// A schedule with no rule configured at all.
    pub fn empty() -> Self {
        Self {
            cash_in: None,
            cash_out_natural: None,
            cash_out_juridical: None,
        }
    }

    pub fn cash_in(&self) -> Option<&CashInRule> {
        self.cash_in.as_ref()
    }

    pub fn cash_out_natural(&self) -> Option<&NaturalCashOutRule> {
        self.cash_out_natural.as_ref()
    }

    pub fn cash_out_juridical(&self) -> Option<&JuridicalCashOutRule> {
        self.cash_out_juridical.as_ref()
    }

    pub fn with_cash_in(mut self, rule: CashInRule) -> Self {
        self.cash_in = Some(rule);
        self
    }

    pub fn with_cash_out_natural(mut self, rule: NaturalCashOutRule) -> Self {
        self.cash_out_natural = Some(rule);
        self
    }

    pub fn with_cash_out_juridical(mut self, rule: JuridicalCashOutRule) -> Self {
        self.cash_out_juridical = Some(rule);
        self
    }

    pub fn without_cash_in(mut self) -> Self {
        self.cash_in = None;
        self
    }

    pub fn without_cash_out_natural(mut self) -> Self {
        self.cash_out_natural = None;
        self
    }

    pub fn without_cash_out_juridical(mut self) -> Self {
        self.cash_out_juridical = None;
        self
    }
}
