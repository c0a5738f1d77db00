pub mod calculator;
pub mod error;
pub mod operation;
pub mod schedule;
pub mod tracker;

pub use calculator::Calculator;
pub use error::FeeError;
pub use operation::{Currency, Operation, OperationType, UserType};
pub use schedule::FeeSchedule;
pub use tracker::WeeklyAllowanceTracker;

// Named types don't give any compiler help, but they make signatures such as
// HashMap<UserId, AllowanceEntry> self-explanatory, and changing the id
// representation later is trivial.
pub type UserId = u64;

// Fee comparisons (fee > cap, fee < floor) are precision-sensitive, so money
// is a decimal: 28 significant digits, no rounding applied anywhere.
pub type Amount = rust_decimal::Decimal;
