use crate::error::{PayloadError, Result};

/// Longest value a 2-digit TLV length field can describe.
pub const MAX_VALUE_LEN: usize = 99;

/// Encodes a single `id || length || value` field, where the length is the
/// value's character count zero-padded to two digits. Values that cannot be
/// described by two digits are rejected rather than truncated.
pub fn field(id: &str, value: &str) -> Result<String> {
    if value.len() > MAX_VALUE_LEN {
        return Err(PayloadError::TagValueTooLong {
            id: id.to_string(),
            len: value.len(),
        });
    }
    Ok(format!("{id}{:02}{value}", value.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_layout() {
        let encoded = field("00", "01").unwrap();
        assert_eq!(encoded, "000201");
    }

    #[test]
    fn test_length_is_zero_padded() {
        let encoded = field("29", "A").unwrap();
        assert_eq!(&encoded[2..4], "01");
    }

    #[test]
    fn test_field_length_property() {
        let value = "A000000677010111";
        let encoded = field("00", value).unwrap();
        assert_eq!(encoded.len(), 4 + value.len());
        assert_eq!(&encoded[2..4], format!("{:02}", value.len()));
    }

    #[test]
    fn test_ninety_nine_character_value_is_accepted() {
        let value = "9".repeat(99);
        let encoded = field("62", &value).unwrap();
        assert_eq!(&encoded[2..4], "99");
    }

    #[test]
    fn test_oversized_value_is_rejected() {
        let value = "9".repeat(100);
        let err = field("62", &value).unwrap_err();
        match err {
            PayloadError::TagValueTooLong { id, len } => {
                assert_eq!(id, "62");
                assert_eq!(len, 100);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
