use super::schedule::NaturalCashOutRule;
use super::{Amount, Currency, FeeError, UserId};

use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

/// Free cash-out allowance left for one natural user in the current week.
///
/// The week isn't a calendar week: it starts on the date of the cash-out
/// that opened it, and lasts until a full week has elapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct AllowanceEntry {
    pub week_start: NaiveDate,
    pub remaining: Amount,
    pub currency: Currency,
}

impl AllowanceEntry {
    fn open(week_start: NaiveDate, currency: Currency, week_limit: Amount) -> Self {
        Self {
            week_start,
            remaining: week_limit,
            currency,
        }
    }

    // On the 7th day we're still in the same week, the window only rolls
    // forward once strictly more than a week has elapsed.
    fn week_elapsed(&self, date: NaiveDate) -> bool {
        date.signed_duration_since(self.week_start) > Duration::weeks(1)
    }

    // Use up to `amount` of the remaining allowance, and return the part of
    // `amount` that isn't covered by it.
    fn consume(&mut self, amount: Amount) -> Amount {
        let exceeded = (amount - self.remaining).max(Amount::ZERO);
        self.remaining = (self.remaining - amount).max(Amount::ZERO);
        exceeded
    }
}

/// The allowance of one user after a cash-out, not recorded yet.
#[derive(Debug, PartialEq)]
pub struct Reservation {
    user_id: UserId,
    entry: AllowanceEntry,
    /// Part of the cash-out amount not covered by the free allowance.
    pub exceeded: Amount,
}

/// Keeps track of the weekly free allowance of every natural user who has
/// cashed out at least once. Entries are never removed.
///
/// Results depend on the order of calls for a given user, so operations must
/// be fed in ascending date order.
#[derive(Debug, Default)]
pub struct WeeklyAllowanceTracker {
    entries: HashMap<UserId, AllowanceEntry>,
}

impl WeeklyAllowanceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cash-out of `amount` for the user, and return how much of it
    /// exceeds the user's free allowance for the week.
    ///
    /// Nothing is recorded when an error is returned.
    pub fn consume(
        &mut self,
        rule: &NaturalCashOutRule,
        user_id: UserId,
        date: NaiveDate,
        amount: Amount,
        currency: Currency,
    ) -> Result<Amount, FeeError> {
        let reservation = self.reserve(rule, user_id, date, amount, currency)?;
        let exceeded = reservation.exceeded;
        self.commit(reservation);

        Ok(exceeded)
    }

    /// Work out what a cash-out would do to the user's allowance, without
    /// recording anything. The result only takes effect once committed.
    pub fn reserve(
        &self,
        rule: &NaturalCashOutRule,
        user_id: UserId,
        date: NaiveDate,
        amount: Amount,
        currency: Currency,
    ) -> Result<Reservation, FeeError> {
        let week_limit = rule.week_limit(currency)?;

        let mut entry = match self.entries.get(&user_id) {
            Some(entry) if !entry.week_elapsed(date) => {
                if entry.currency != currency {
                    return Err(FeeError::AllowanceCurrencyMismatch {
                        user_id,
                        tracked: entry.currency,
                        got: currency,
                    });
                }
                entry.clone()
            }
            _ => AllowanceEntry::open(date, currency, week_limit),
        };
        let exceeded = entry.consume(amount);

        Ok(Reservation {
            user_id,
            entry,
            exceeded,
        })
    }

    pub fn commit(&mut self, reservation: Reservation) {
        self.entries.insert(reservation.user_id, reservation.entry);
    }

    pub fn get(&self, user_id: UserId) -> Option<&AllowanceEntry> {
        self.entries.get(&user_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{AllowanceEntry, WeeklyAllowanceTracker};
    use crate::fees::{error::LimitKind, Currency, FeeError, FeeSchedule};

    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(raw: &str) -> NaiveDate {
        raw.parse().unwrap()
    }

    #[test]
    fn test_first_cash_out() {
        let schedule = FeeSchedule::default();
        let rule = schedule.cash_out_natural().unwrap();

        for (amount, want_exceeded, want_remaining) in vec![
            (dec!(200), dec!(0), dec!(800)),
            (dec!(1000), dec!(0), dec!(0)),
            (dec!(1500.5), dec!(500.5), dec!(0)),
            (dec!(0), dec!(0), dec!(1000)),
        ] {
            let mut tracker = WeeklyAllowanceTracker::new();
            let got = tracker.consume(rule, 1, date("2021-08-01"), amount, Currency::Eur);
            assert_eq!(Ok(want_exceeded), got);
            assert_eq!(
                Some(&AllowanceEntry {
                    week_start: date("2021-08-01"),
                    remaining: want_remaining,
                    currency: Currency::Eur,
                }),
                tracker.get(1)
            );
        }
    }

    #[test]
    fn test_same_week() {
        let schedule = FeeSchedule::default();
        let rule = schedule.cash_out_natural().unwrap();
        let mut tracker = WeeklyAllowanceTracker::new();

        for (raw_date, amount, want_exceeded, want_remaining) in vec![
            ("2021-08-01", dec!(300), dec!(0), dec!(700)),
            ("2021-08-03", dec!(600), dec!(0), dec!(100)),
            ("2021-08-05", dec!(250), dec!(150), dec!(0)),
            ("2021-08-08", dec!(100), dec!(100), dec!(0)), // 7th day, same week.
        ] {
            let got = tracker.consume(rule, 7, date(raw_date), amount, Currency::Eur);
            assert_eq!(Ok(want_exceeded), got, "{}", raw_date);

            let entry = tracker.get(7).unwrap();
            assert_eq!(want_remaining, entry.remaining);
            assert_eq!(date("2021-08-01"), entry.week_start);
        }
    }

    #[test]
    fn test_week_reset() {
        let schedule = FeeSchedule::default();
        let rule = schedule.cash_out_natural().unwrap();
        let mut tracker = WeeklyAllowanceTracker::new();

        assert_eq!(
            Ok(dec!(500)),
            tracker.consume(rule, 1, date("2021-08-01"), dec!(1500), Currency::Eur)
        );

        // 8 days later, the allowance is fully available again.
        assert_eq!(
            Ok(dec!(0)),
            tracker.consume(rule, 1, date("2021-08-09"), dec!(400), Currency::Eur)
        );
        let entry = tracker.get(1).unwrap();
        assert_eq!(date("2021-08-09"), entry.week_start);
        assert_eq!(dec!(600), entry.remaining);
    }

    #[test]
    fn test_users_are_tracked_separately() {
        let schedule = FeeSchedule::default();
        let rule = schedule.cash_out_natural().unwrap();
        let mut tracker = WeeklyAllowanceTracker::new();

        for user_id in 1..=3 {
            let got = tracker.consume(
                rule,
                user_id,
                date("2021-08-01"),
                dec!(1000),
                Currency::Eur,
            );
            assert_eq!(Ok(dec!(0)), got);
        }
        assert_eq!(3, tracker.len());
    }

    #[test]
    fn test_missing_week_limit_does_not_record_anything() {
        let schedule = FeeSchedule::default();
        let rule = schedule.cash_out_natural().unwrap();
        let mut tracker = WeeklyAllowanceTracker::new();

        let got = tracker.consume(rule, 1, date("2021-08-01"), dec!(1000), Currency::Usd);
        assert_eq!(
            Err(FeeError::MissingCurrencyLimit {
                limit: LimitKind::WeekLimit,
                currency: Currency::Usd,
            }),
            got
        );
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_currency_mismatch_within_week() {
        let schedule = FeeSchedule::default();
        let mut rule = schedule.cash_out_natural().unwrap().clone();
        rule.week_limit = [(Currency::Eur, dec!(1000)), (Currency::Usd, dec!(1200))].into();

        let mut tracker = WeeklyAllowanceTracker::new();
        tracker
            .consume(&rule, 1, date("2021-08-01"), dec!(100), Currency::Eur)
            .unwrap();

        let got = tracker.consume(&rule, 1, date("2021-08-02"), dec!(100), Currency::Usd);
        assert_eq!(
            Err(FeeError::AllowanceCurrencyMismatch {
                user_id: 1,
                tracked: Currency::Eur,
                got: Currency::Usd,
            }),
            got
        );
        assert_eq!(dec!(900), tracker.get(1).unwrap().remaining);

        // Once the week is over, the new currency opens a new week.
        let got = tracker.consume(&rule, 1, date("2021-08-10"), dec!(1300), Currency::Usd);
        assert_eq!(Ok(dec!(100)), got);
        assert_eq!(Currency::Usd, tracker.get(1).unwrap().currency);
    }

    #[test]
    // Nothing changes until the reservation is committed.
    fn test_reserve_then_commit() {
        let schedule = FeeSchedule::default();
        let rule = schedule.cash_out_natural().unwrap();
        let mut tracker = WeeklyAllowanceTracker::new();

        let reservation = tracker
            .reserve(rule, 1, date("2021-08-01"), dec!(1200), Currency::Eur)
            .unwrap();
        assert_eq!(dec!(200), reservation.exceeded);
        assert!(tracker.is_empty());

        let reservation = tracker
            .reserve(rule, 1, date("2021-08-01"), dec!(300), Currency::Eur)
            .unwrap();
        tracker.commit(reservation);
        assert_eq!(dec!(700), tracker.get(1).unwrap().remaining);

        let reservation = tracker
            .reserve(rule, 1, date("2021-08-02"), dec!(900), Currency::Eur)
            .unwrap();
        assert_eq!(dec!(200), reservation.exceeded);
        assert_eq!(dec!(700), tracker.get(1).unwrap().remaining);
    }
}
