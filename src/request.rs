use rust_decimal::Decimal;
use serde::Deserialize;

/// One encode request: the merchant's phone number as entered, and an
/// optional amount in Baht. Requests without an amount produce an open
/// payload where the payer keys the amount in the wallet.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct QrRequest {
    pub phone: String,
    pub amount: Option<Decimal>,
}
