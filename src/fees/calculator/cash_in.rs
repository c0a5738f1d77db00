use super::{percentage, Calculator};
use crate::fees::{Amount, FeeError, Operation, OperationType};

impl Calculator {
    // The user type plays no part in cash-in fees.
    pub(super) fn cash_in_fee(&self, op: &Operation) -> Result<Amount, FeeError> {
        let rule = self.schedule.cash_in().ok_or(FeeError::MissingRule {
            operation_type: OperationType::CashIn,
            user_type: op.user_type,
        })?;

        let fee = percentage(op.amount, rule.percents)?;
        let max_fee = rule.max_fee(op.currency)?;

        Ok(fee.min(max_fee))
    }
}
