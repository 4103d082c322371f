use rust_decimal::{Decimal, RoundingStrategy};

use crate::crc;
use crate::error::{PayloadError, Result};
use crate::phone;
use crate::tlv;

/// EMVCo payload format indicator, version 01.
pub const PAYLOAD_FORMAT: &str = "01";
/// Point-of-initiation method; `12` marks a dynamic (per-transaction) code.
pub const POI_DYNAMIC: &str = "12";
/// PromptPay application identifier registered with EMVCo.
pub const PROMPTPAY_AID: &str = "A000000677010111";
/// ISO 4217 numeric code for Thai Baht.
pub const CURRENCY_THB: &str = "764";
pub const COUNTRY_TH: &str = "TH";

const TAG_PAYLOAD_FORMAT: &str = "00";
const TAG_POI_METHOD: &str = "01";
const TAG_MERCHANT_ACCOUNT: &str = "29";
const TAG_AID: &str = "00";
const TAG_PROXY: &str = "01";
const TAG_CURRENCY: &str = "53";
const TAG_AMOUNT: &str = "54";
const TAG_COUNTRY: &str = "58";
/// Checksum tag id plus its fixed `04` length. The CRC covers everything up
/// to and including these four characters, but not the checksum itself.
const CRC_HEADER: &str = "6304";

/// Builds the merchant-presented payload for a phone proxy and an optional
/// amount in Baht.
///
/// Tag order is fixed: payload format, point of initiation, merchant
/// account (nested AID + proxy), currency, country, amount when present and
/// positive, CRC trailer. An absent or zero amount produces an open payload
/// with no amount tag at all, leaving the payer to key the amount.
pub fn build(raw_phone: &str, amount: Option<Decimal>) -> Result<String> {
    let digits = phone::normalize(raw_phone)?;
    let amount_value = format_amount(amount)?;

    let merchant_account = {
        let aid = tlv::field(TAG_AID, PROMPTPAY_AID)?;
        let proxy = tlv::field(TAG_PROXY, &digits.proxy_value())?;
        tlv::field(TAG_MERCHANT_ACCOUNT, &format!("{aid}{proxy}"))?
    };

    let mut payload = String::with_capacity(128);
    payload.push_str(&tlv::field(TAG_PAYLOAD_FORMAT, PAYLOAD_FORMAT)?);
    payload.push_str(&tlv::field(TAG_POI_METHOD, POI_DYNAMIC)?);
    payload.push_str(&merchant_account);
    payload.push_str(&tlv::field(TAG_CURRENCY, CURRENCY_THB)?);
    payload.push_str(&tlv::field(TAG_COUNTRY, COUNTRY_TH)?);
    if let Some(value) = amount_value {
        payload.push_str(&tlv::field(TAG_AMOUNT, &value)?);
    }
    payload.push_str(CRC_HEADER);
    let trailer = crc::checksum(&payload);
    payload.push_str(&trailer);
    Ok(payload)
}

/// Checks that a payload ends in a well-formed CRC trailer that matches its
/// contents. The same check a scanning wallet performs before resolving the
/// proxy.
pub fn verify(payload: &str) -> bool {
    if payload.len() < CRC_HEADER.len() + 4 || !payload.is_ascii() {
        return false;
    }
    let (body, trailer) = payload.split_at(payload.len() - 4);
    body.ends_with(CRC_HEADER) && crc::checksum(body) == trailer
}

fn format_amount(amount: Option<Decimal>) -> Result<Option<String>> {
    match amount {
        None => Ok(None),
        Some(a) if a.is_zero() => Ok(None),
        Some(a) if a.is_sign_negative() => Err(PayloadError::NegativeAmount(a)),
        // Round half away from zero, then always render two fractional
        // digits, matching what wallets display for Baht amounts.
        Some(a) => Ok(Some(format!(
            "{:.2}",
            a.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_renders_two_decimals() {
        assert_eq!(format_amount(Some(dec!(100))).unwrap(), Some("100.00".into()));
        assert_eq!(format_amount(Some(dec!(375.5))).unwrap(), Some("375.50".into()));
    }

    #[test]
    fn test_amount_rounds_half_away_from_zero() {
        assert_eq!(format_amount(Some(dec!(12.345))).unwrap(), Some("12.35".into()));
        assert_eq!(format_amount(Some(dec!(12.344))).unwrap(), Some("12.34".into()));
    }

    #[test]
    fn test_zero_and_absent_amounts_are_omitted() {
        assert_eq!(format_amount(None).unwrap(), None);
        assert_eq!(format_amount(Some(dec!(0))).unwrap(), None);
        assert_eq!(format_amount(Some(dec!(0.00))).unwrap(), None);
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let err = format_amount(Some(dec!(-5))).unwrap_err();
        match err {
            PayloadError::NegativeAmount(a) => assert_eq!(a, dec!(-5)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_build_starts_with_format_and_poi_tags() {
        let encoded = build("0902748581", None).unwrap();
        assert!(encoded.starts_with("000201010212"));
    }

    #[test]
    fn test_build_rejects_unrecognized_phone() {
        assert!(build("555", None).is_err());
    }

    #[test]
    fn test_verify_accepts_build_output() {
        let encoded = build("0902748581", Some(dec!(49.75))).unwrap();
        assert!(verify(&encoded));
    }

    #[test]
    fn test_verify_rejects_corrupted_trailer() {
        let encoded = build("0902748581", None).unwrap();
        let bogus = if encoded.ends_with("0000") { "FFFF" } else { "0000" };
        let corrupted = format!("{}{bogus}", &encoded[..encoded.len() - 4]);
        assert!(!verify(&corrupted));
        assert!(!verify("too short"));
    }
}
