mod cash_in;
mod cash_out;

use super::{Amount, FeeError, FeeSchedule, Operation, OperationType, WeeklyAllowanceTracker};

/// Calculates the commission fee of operations, one at a time.
///
/// The calculator owns the weekly allowance tracker of natural users, so it
/// keeps state between calls: one calculator per batch, fed in ascending date
/// order. Two calculators never share anything.
pub struct Calculator {
    schedule: FeeSchedule,
    tracker: WeeklyAllowanceTracker,
}

impl Calculator {
    pub fn new(schedule: FeeSchedule) -> Self {
        Self {
            schedule,
            tracker: WeeklyAllowanceTracker::new(),
        }
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    pub fn tracker(&self) -> &WeeklyAllowanceTracker {
        &self.tracker
    }

    /// Either the full commission is returned, or an error and the tracker
    /// is left untouched.
    pub fn apply(&mut self, op: &Operation) -> Result<Amount, FeeError> {
        match op.op_type {
            OperationType::CashIn => self.cash_in_fee(op),
            OperationType::CashOut => self.cash_out_fee(op),
            OperationType::Other => Err(FeeError::UnsupportedOperationType),
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(FeeSchedule::default())
    }
}

// amount * percents / 100, without any rounding.
fn percentage(amount: Amount, percents: Amount) -> Result<Amount, FeeError> {
    amount
        .checked_mul(percents)
        .and_then(|fee| fee.checked_div(Amount::ONE_HUNDRED))
        .ok_or(FeeError::Overflow)
}
