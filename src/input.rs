use crate::fees::{Amount, Currency, Operation, OperationType, UserId, UserType};

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    #[error("malformed JSON: {0}")]
    Json(String),

    #[error("malformed CSV: {0}")]
    Csv(String),

    #[error("invalid operation: {0}")]
    Format(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<&'static str> for Error {
    fn from(err: &'static str) -> Self {
        Self::Format(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Json,
    Csv,
}

impl Format {
    /// `.csv` files are read as CSV, anything else as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

// Only an unreadable input as a whole is an Err. A bad record is returned
// in place, so it can be reported while the other records are processed.
pub fn parse(
    input_stream: impl std::io::Read,
    format: Format,
) -> Result<Vec<Result<Operation, Error>>, Error> {
    match format {
        Format::Json => parse_json(input_stream),
        Format::Csv => Ok(parse_csv(input_stream)),
    }
}

fn parse_json(input_stream: impl std::io::Read) -> Result<Vec<Result<Operation, Error>>, Error> {
    let buffered = std::io::BufReader::new(input_stream);

    // Decoding each element on its own lets one bad element be skipped.
    // Numbers stay exact in a Value thanks to serde_json's arbitrary_precision.
    let values: Vec<serde_json::Value> = serde_json::from_reader(buffered)?;

    Ok(values.into_iter().map(convert_json).collect())
}

fn parse_csv(input_stream: impl std::io::Read) -> Vec<Result<Operation, Error>> {
    let buffered = std::io::BufReader::new(input_stream);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(buffered);

    reader
        .deserialize::<CsvOperationRecord>()
        .map(convert_csv)
        .collect()
}

// Convert a single JSON element into an operation result.
fn convert_json(value: serde_json::Value) -> Result<Operation, Error> {
    Ok(serde_json::from_value::<JsonOperationRecord>(value)?.try_into()?)
}

// Convert from a csv deserialise result into an operation result.
fn convert_csv(record: Result<CsvOperationRecord, csv::Error>) -> Result<Operation, Error> {
    Ok(record?.try_into()?)
}

// The records can't be deserialised straight into the domain type: the JSON
// shape nests the amount, and both formats need validating first. Operation
// makes no assumption on how the input is formatted.
#[derive(Debug, Deserialize)]
pub struct JsonOperationRecord {
    date: NaiveDate,
    user_id: UserId,
    user_type: UserType,

    #[serde(rename = "type")]
    op_type: OperationType,

    operation: JsonAmountRecord,
}

#[derive(Debug, Deserialize)]
struct JsonAmountRecord {
    amount: Amount,
    currency: Currency,
}

#[derive(Debug, Deserialize)]
pub struct CsvOperationRecord {
    date: NaiveDate,
    user_id: UserId,
    user_type: UserType,

    #[serde(rename = "type")]
    op_type: OperationType,

    amount: Amount,
    currency: Currency,
}

fn validate_amount(amount: Amount) -> Result<Amount, &'static str> {
    if amount < Amount::ZERO {
        return Err("negative amount");
    }
    Ok(amount)
}

impl TryFrom<JsonOperationRecord> for Operation {
    type Error = &'static str;
    fn try_from(record: JsonOperationRecord) -> Result<Self, Self::Error> {
        Ok(Self::new(
            record.date,
            record.user_id,
            record.user_type,
            record.op_type,
            validate_amount(record.operation.amount)?,
            record.operation.currency,
        ))
    }
}

impl TryFrom<CsvOperationRecord> for Operation {
    type Error = &'static str;
    fn try_from(record: CsvOperationRecord) -> Result<Self, Self::Error> {
        Ok(Self::new(
            record.date,
            record.user_id,
            record.user_type,
            record.op_type,
            validate_amount(record.amount)?,
            record.currency,
        ))
    }
}
