use crate::error::{ChangeError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One row of a batch input: a currency code and an amount in minor units.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ChangeRequest {
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

/// Reads `currency,amount` change requests from a CSV source.
///
/// Rows are not validated here: an unknown currency code or a negative or
/// fractional amount passes through and is rejected by the calculator, so
/// batch output can report it per row. Only rows whose amount is not a
/// number fail to deserialize.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes requests; a malformed row yields an `Err` and the
    /// iterator moves on to the next one.
    pub fn requests(self) -> impl Iterator<Item = Result<ChangeRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(ChangeError::from))
    }
}
