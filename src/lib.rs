//! Calculates the commission fee of cash-in and cash-out operations.
//!
//! Operations are read from a file, sorted by date, then each of them goes
//! through the fee rules for its operation type and user type. Natural users
//! get a weekly free cash-out allowance, which is why the order matters.

pub mod error;
pub mod fees;
pub mod input;
pub mod output;
pub mod run;

pub use error::Error;
