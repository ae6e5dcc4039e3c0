use crate::domain::change::ChangeResult;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ChangeRow<'a> {
    currency: &'a str,
    amount: u64,
    change: &'a str,
}

/// Writes change results as `currency,amount,change` CSV rows.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(destination: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(destination),
        }
    }

    pub fn write_result(&mut self, result: &ChangeResult) -> Result<()> {
        self.writer.serialize(ChangeRow {
            currency: result.currency.as_str(),
            amount: result.amount.value(),
            change: result.description(),
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
