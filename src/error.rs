use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PayloadError>;

#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("phone '{digits}' does not match any PromptPay mobile pattern")]
    PhoneUnrecognized { digits: String },
    #[error("tag {id} value is {len} characters, the TLV length field caps out at 99")]
    TagValueTooLong { id: String, len: usize },
    #[error("amount {0} is negative")]
    NegativeAmount(Decimal),
}
