//! CRC-32 frame integrity helpers.
//!
//! The checksum stored at header offset 28 covers bytes `[28..]` of the
//! whole frame, i.e. the range begins at the checksum field's own storage
//! location. Frame writers zero-fill the field before hashing and patch the
//! result in afterwards; the verifier makes no assumption about that and
//! simply hashes whatever is in the buffer.

use crate::frame_pipeline::codec::header::UltraHeader;

/// Byte offset at which checksum coverage starts.
pub const CRC_COVERAGE_OFFSET: usize = 28;

/// CRC-32 (standard polynomial) over `bytes`.
pub fn crc32(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

/// Verify the checksum of a complete frame buffer against `expected`.
///
/// Pure and deterministic; a buffer too short to contain a header yields
/// `false` rather than an error.
pub fn verify_checksum(bytes: &[u8], expected: u32) -> bool {
    if bytes.len() < UltraHeader::SIZE {
        return false;
    }

    crc32(&bytes[CRC_COVERAGE_OFFSET..]) == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let data = b"ultrasound frame payload";
        assert_eq!(crc32(data), crc32(data));
        assert_ne!(crc32(data), crc32(b"different payload"));
    }

    #[test]
    fn test_verify_matches_coverage() {
        let mut frame = vec![0u8; 64];
        for (i, b) in frame.iter_mut().enumerate() {
            *b = i as u8;
        }
        let expected = crc32(&frame[CRC_COVERAGE_OFFSET..]);
        assert!(verify_checksum(&frame, expected));
    }

    #[test]
    fn test_mismatch_returns_false() {
        let frame = vec![7u8; 64];
        let expected = crc32(&frame[CRC_COVERAGE_OFFSET..]);
        assert!(!verify_checksum(&frame, expected.wrapping_add(1)));
    }

    #[test]
    fn test_short_buffer_returns_false() {
        assert!(!verify_checksum(&[1, 2, 3], 0));
        assert!(!verify_checksum(&[], 0));
    }
}
