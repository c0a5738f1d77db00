use crate::run::Outcome;

// Writes one line per outcome to the given stream, in the order received.
// Fees are written without trailing zeros.
pub fn write(mut output_stream: impl std::io::Write, outcomes: &[Outcome]) -> std::io::Result<()> {
    for outcome in outcomes {
        match &outcome.fee {
            Ok(fee) => writeln!(output_stream, "SUCCESS {}", fee.normalize())?,
            Err(err) => writeln!(output_stream, "ERROR {}", err)?,
        }
    }

    output_stream.flush()
}
