use crate::{
    fees::{Amount, Calculator, FeeError, FeeSchedule, Operation},
    input::{self, Format},
    output, Error,
};

use log::{debug, info, warn};

/// The fee calculated for one operation, or why it couldn't be.
#[derive(Debug, PartialEq)]
pub struct Outcome {
    pub operation: Operation,
    pub fee: Result<Amount, FeeError>,
}

#[derive(Debug, Default, PartialEq)]
pub struct Summary {
    /// Records that couldn't be read as an operation.
    pub skipped: usize,
    /// Operations with a calculated fee.
    pub calculated: usize,
    /// Operations whose fee couldn't be calculated.
    pub failed: usize,
}

/// Calculate the fee of every operation, in ascending date order.
///
/// All operations of the batch share one weekly allowance tracker, that's
/// dropped at the end. A failing operation doesn't stop the batch.
pub fn calculate(mut operations: Vec<Operation>, schedule: FeeSchedule) -> Vec<Outcome> {
    // The sort is stable: operations on the same date keep their input order.
    operations.sort_by_key(|op| op.date);

    let mut calculator = Calculator::new(schedule);

    operations
        .into_iter()
        .map(|operation| {
            let fee = calculator.apply(&operation);
            match &fee {
                Ok(fee) => debug!("fee for {:?}: {}", operation, fee),
                Err(err) => debug!("no fee for {:?}: {}", operation, err),
            }

            Outcome { operation, fee }
        })
        .collect()
}

/// Read operations from the input stream, and write the fee of each of them
/// to the output stream, with the default fee schedule.
pub fn run(
    input_stream: impl std::io::Read,
    format: Format,
    output_stream: impl std::io::Write,
) -> Result<Summary, Error> {
    let mut summary = Summary::default();
    let mut operations = Vec::new();

    for (index, record) in input::parse(input_stream, format)?.into_iter().enumerate() {
        match record {
            Ok(operation) => operations.push(operation),
            Err(err) => {
                warn!("skipping record #{}: {}", index + 1, err);
                summary.skipped += 1;
            }
        }
    }

    let outcomes = calculate(operations, FeeSchedule::default());
    for outcome in &outcomes {
        match outcome.fee {
            Ok(_) => summary.calculated += 1,
            Err(_) => summary.failed += 1,
        }
    }

    output::write(output_stream, &outcomes)?;

    info!(
        "{} fees calculated, {} operations failed, {} records skipped",
        summary.calculated, summary.failed, summary.skipped
    );

    Ok(summary)
}
