use crate::error::{PayloadError, Result};
use crate::request::QrRequest;
use std::io::Read;

/// Reads encode requests from a CSV source.
///
/// Wraps `csv::Reader` and provides an iterator over `Result<QrRequest>`,
/// trimming whitespace and tolerating flexible record lengths so rows
/// without an amount column still parse.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    pub fn requests(self) -> impl Iterator<Item = Result<QrRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PayloadError::from))
    }
}
