//! Header parsing for CoreWriter payloads.
//!
//! Every payload opens with a 4-byte header: one version byte followed by
//! a 3-byte big-endian action-type tag. The remainder is the ABI-encoded
//! field data interpreted by the slot decoder.
use crate::errors::DecodeError;

/// Number of bytes occupied by the action header.
pub const HEADER_LEN: usize = 4;

/// Represents the fixed header of a CoreWriter payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionHeader {
    pub version: u8,
    /// The 24-bit action-type tag, widened to `u32`.
    pub action_type: u32,
}

/// Splits a raw payload into its header and the remaining field bytes.
///
/// # Arguments
///
/// * `raw` - The full decoded payload, header included.
///
/// # Returns
///
/// The parsed `ActionHeader` and a borrow of the bytes after it, or
/// `DecodeError::MalformedPayload` if fewer than 4 bytes are present.
pub fn parse_header(raw: &[u8]) -> Result<(ActionHeader, &[u8]), DecodeError> {
    if raw.len() < HEADER_LEN {
        return Err(DecodeError::MalformedPayload { actual: raw.len() });
    }

    let header = ActionHeader {
        version: raw[0],
        action_type: u32::from_be_bytes([0, raw[1], raw[2], raw[3]]),
    };
    Ok((header, &raw[HEADER_LEN..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_splits_version_tag_and_remainder() {
        let raw = [0x01, 0x00, 0x00, 0x0d, 0xaa, 0xbb];
        let (header, remainder) = parse_header(&raw).unwrap();
        assert_eq!(header.version, 1);
        assert_eq!(header.action_type, 13);
        assert_eq!(remainder, &[0xaa, 0xbb]);
    }

    #[test]
    fn test_parse_header_tag_is_big_endian_24_bit() {
        let raw = [0x02, 0xff, 0xff, 0xff];
        let (header, remainder) = parse_header(&raw).unwrap();
        assert_eq!(header.version, 2);
        assert_eq!(header.action_type, 0x00ff_ffff);
        assert!(remainder.is_empty());
    }

    #[test]
    fn test_parse_header_exact_four_bytes_leaves_empty_remainder() {
        let raw = [0x01, 0x00, 0x00, 0x04];
        let (header, remainder) = parse_header(&raw).unwrap();
        assert_eq!(header.action_type, 4);
        assert!(remainder.is_empty());
    }

    #[test]
    fn test_parse_header_rejects_short_payload() {
        for len in 0..HEADER_LEN {
            let raw = vec![0x01; len];
            let err = parse_header(&raw).unwrap_err();
            assert!(matches!(err, DecodeError::MalformedPayload { actual } if actual == len));
        }
    }
}
