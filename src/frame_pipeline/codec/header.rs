//! `.ultra` frame header layout.

use crate::frame_pipeline::common::error::{FrameError, Result};

/// Fixed 32-byte metadata record preceding the pixel payload.
///
/// All integer fields are little-endian on the wire. The checksum field at
/// offset 28 is a CRC-32 covering bytes `[28..]` of the whole frame (see
/// [`checksum`](super::checksum)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UltraHeader {
    /// Magic identifier, 0x554C5452 ("ULTR")
    pub magic_id: u32,
    /// Image width in pixels
    pub width: u16,
    /// Image height in pixels
    pub height: u16,
    /// Volume depth; 1 for the 2D frames the format carries in practice
    pub depth: u16,
    /// Bytes per sample; 1 in practice
    pub bytes_per_sample: u16,
    /// Sequential frame number
    pub frame_number: u32,
    /// Capture timestamp in microseconds
    pub timestamp: u64,
    /// Reserved for future use
    pub reserved: u32,
    /// CRC-32 checksum
    pub crc: u32,
}

impl UltraHeader {
    /// "ULTR"
    pub const MAGIC_ID: u32 = 0x554C_5452;
    /// Serialized header length in bytes.
    pub const SIZE: usize = 32;

    /// A header is valid when the magic matches and every dimension field
    /// that sizes the payload is non-zero.
    pub fn is_valid(&self) -> bool {
        self.magic_id == Self::MAGIC_ID
            && self.width > 0
            && self.height > 0
            && self.bytes_per_sample > 0
    }

    /// Payload length in bytes declared by this header.
    pub fn frame_data_size(&self) -> usize {
        self.width as usize
            * self.height as usize
            * self.depth as usize
            * self.bytes_per_sample as usize
    }

    /// Deserialize a little-endian header from the front of `buf`.
    ///
    /// Field order must match [`to_le_bytes`](Self::to_le_bytes) exactly.
    pub fn parse_le(buf: &[u8]) -> Result<Self> {
        if buf.len() < Self::SIZE {
            return Err(FrameError::TruncatedBuffer {
                have: buf.len(),
                need: Self::SIZE,
            });
        }

        let mut i = 0usize;

        #[inline]
        fn get_u16(buf: &[u8], i: &mut usize) -> u16 {
            let v = u16::from_le_bytes(buf[*i..*i + 2].try_into().unwrap());
            *i += 2;
            v
        }
        #[inline]
        fn get_u32(buf: &[u8], i: &mut usize) -> u32 {
            let v = u32::from_le_bytes(buf[*i..*i + 4].try_into().unwrap());
            *i += 4;
            v
        }
        #[inline]
        fn get_u64(buf: &[u8], i: &mut usize) -> u64 {
            let v = u64::from_le_bytes(buf[*i..*i + 8].try_into().unwrap());
            *i += 8;
            v
        }

        let header = UltraHeader {
            magic_id: get_u32(buf, &mut i),         // 0..4
            width: get_u16(buf, &mut i),            // 4..6
            height: get_u16(buf, &mut i),           // 6..8
            depth: get_u16(buf, &mut i),            // 8..10
            bytes_per_sample: get_u16(buf, &mut i), // 10..12
            frame_number: get_u32(buf, &mut i),     // 12..16
            timestamp: get_u64(buf, &mut i),        // 16..24
            reserved: get_u32(buf, &mut i),         // 24..28
            crc: get_u32(buf, &mut i),              // 28..32
        };

        debug_assert_eq!(i, Self::SIZE);

        Ok(header)
    }

    /// Serialize the header little-endian.
    pub fn to_le_bytes(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[0..4].copy_from_slice(&self.magic_id.to_le_bytes());
        buf[4..6].copy_from_slice(&self.width.to_le_bytes());
        buf[6..8].copy_from_slice(&self.height.to_le_bytes());
        buf[8..10].copy_from_slice(&self.depth.to_le_bytes());
        buf[10..12].copy_from_slice(&self.bytes_per_sample.to_le_bytes());
        buf[12..16].copy_from_slice(&self.frame_number.to_le_bytes());
        buf[16..24].copy_from_slice(&self.timestamp.to_le_bytes());
        buf[24..28].copy_from_slice(&self.reserved.to_le_bytes());
        buf[28..32].copy_from_slice(&self.crc.to_le_bytes());
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header() -> UltraHeader {
        UltraHeader {
            magic_id: UltraHeader::MAGIC_ID,
            width: 128,
            height: 128,
            depth: 1,
            bytes_per_sample: 1,
            frame_number: 7,
            timestamp: 1000,
            reserved: 0,
            crc: 0xDEAD_BEEF,
        }
    }

    #[test]
    fn test_round_trip() {
        let header = sample_header();
        let bytes = header.to_le_bytes();
        let parsed = UltraHeader::parse_le(&bytes).unwrap();
        assert_eq!(parsed, header);
    }

    #[test]
    fn test_known_layout() {
        let bytes = sample_header().to_le_bytes();
        // "ULTR" little-endian: 52 54 4C 55
        assert_eq!(&bytes[0..4], &[0x52, 0x54, 0x4C, 0x55]);
        assert_eq!(&bytes[4..6], &128u16.to_le_bytes());
        assert_eq!(&bytes[12..16], &7u32.to_le_bytes());
        assert_eq!(&bytes[16..24], &1000u64.to_le_bytes());
        assert_eq!(&bytes[28..32], &0xDEAD_BEEFu32.to_le_bytes());
    }

    #[test]
    fn test_frame_data_size() {
        assert_eq!(sample_header().frame_data_size(), 128 * 128);

        let mut header = sample_header();
        header.depth = 2;
        header.bytes_per_sample = 2;
        assert_eq!(header.frame_data_size(), 128 * 128 * 4);
    }

    #[test]
    fn test_validity() {
        assert!(sample_header().is_valid());

        let mut header = sample_header();
        header.magic_id = 0;
        assert!(!header.is_valid());

        let mut header = sample_header();
        header.width = 0;
        assert!(!header.is_valid());

        let mut header = sample_header();
        header.bytes_per_sample = 0;
        assert!(!header.is_valid());
    }

    #[test]
    fn test_parse_short_buffer() {
        let result = UltraHeader::parse_le(&[0u8; 10]);
        assert!(matches!(
            result,
            Err(FrameError::TruncatedBuffer { have: 10, need: 32 })
        ));
    }
}
