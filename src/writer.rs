use crate::error::Result;
use crate::request::QrRequest;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct ResultRow<'a> {
    phone: &'a str,
    amount: Option<Decimal>,
    payload: &'a str,
}

/// Writes encode results as `phone,amount,payload` CSV rows.
pub struct PayloadWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PayloadWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_result(&mut self, request: &QrRequest, payload: &str) -> Result<()> {
        self.writer.serialize(ResultRow {
            phone: &request.phone,
            amount: request.amount,
            payload,
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
