use super::{percentage, Calculator};
use crate::fees::{Amount, FeeError, Operation, OperationType, UserType};

impl Calculator {
    pub(super) fn cash_out_fee(&mut self, op: &Operation) -> Result<Amount, FeeError> {
        match op.user_type {
            UserType::Natural => self.cash_out_natural_fee(op),
            UserType::Juridical => self.cash_out_juridical_fee(op),
            UserType::Other => Err(FeeError::UnsupportedUserType),
        }
    }

    // Only the part of the amount above the weekly free allowance is charged.
    fn cash_out_natural_fee(&mut self, op: &Operation) -> Result<Amount, FeeError> {
        let rule = self
            .schedule
            .cash_out_natural()
            .ok_or(FeeError::MissingRule {
                operation_type: OperationType::CashOut,
                user_type: UserType::Natural,
            })?;

        let reservation = self
            .tracker
            .reserve(rule, op.user_id, op.date, op.amount, op.currency)?;
        let fee = percentage(reservation.exceeded, rule.percents)?;

        // The allowance is only used up once the fee is known.
        self.tracker.commit(reservation);

        Ok(fee)
    }

    fn cash_out_juridical_fee(&self, op: &Operation) -> Result<Amount, FeeError> {
        let rule = self
            .schedule
            .cash_out_juridical()
            .ok_or(FeeError::MissingRule {
                operation_type: OperationType::CashOut,
                user_type: UserType::Juridical,
            })?;

        let fee = percentage(op.amount, rule.percents)?;
        let min_fee = rule.min_fee(op.currency)?;

        Ok(fee.max(min_fee))
    }
}
