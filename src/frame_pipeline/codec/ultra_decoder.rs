//! `.ultra` frame decoder implementation.
//!
//! Decoding is a pure function of the input bytes: header parse, structural
//! validation, checksum comparison, payload extraction. A checksum mismatch
//! is logged but does not reject the frame.

use tracing::{debug, warn};

use crate::frame_pipeline::codec::checksum;
use crate::frame_pipeline::codec::decoder::FrameDecoder;
use crate::frame_pipeline::codec::header::UltraHeader;
use crate::frame_pipeline::codec::types::{FrameBuffer, UltraFrame};
use crate::frame_pipeline::common::error::{FrameError, Result};

/// Decoder for the fixed-layout `.ultra` frame format.
pub struct UltraDecoder;

impl FrameDecoder for UltraDecoder {
    /// Decodes a complete frame from a byte buffer.
    ///
    /// # Returns
    ///
    /// * `Ok(UltraFrame)` - header plus extracted intensity matrix
    /// * `Err(FrameError::TruncatedBuffer)` - buffer shorter than a header
    /// * `Err(FrameError::InvalidHeader)` - magic mismatch or zero dimension
    /// * `Err(FrameError::SizeMismatch)` - declared payload exceeds the buffer
    fn decode_frame(&self, data: &[u8]) -> Result<UltraFrame> {
        debug!("Decoding frame, {} bytes", data.len());

        let header = UltraHeader::parse_le(data)?;

        if header.magic_id != UltraHeader::MAGIC_ID {
            return Err(FrameError::InvalidHeader(format!(
                "magic mismatch: 0x{:08X}",
                header.magic_id
            )));
        }
        if !header.is_valid() {
            return Err(FrameError::InvalidHeader(format!(
                "zero dimension field: {}x{}, {} bytes per sample",
                header.width, header.height, header.bytes_per_sample
            )));
        }

        let frame_size = header.frame_data_size();
        let expected_total = UltraHeader::SIZE + frame_size;
        if data.len() < expected_total {
            return Err(FrameError::SizeMismatch {
                expected: expected_total,
                actual: data.len(),
            });
        }

        // Integrity check is advisory: a mismatch is reported but the frame
        // is still decoded.
        if !checksum::verify_checksum(data, header.crc) {
            warn!(
                frame = header.frame_number,
                stored_crc = header.crc,
                "Frame checksum mismatch"
            );
        }

        let payload = data[UltraHeader::SIZE..expected_total].to_vec();
        let frame = FrameBuffer::new(header.width as usize, header.height as usize, payload);

        debug!(
            "Decoded frame {}: {}x{}",
            header.frame_number, header.width, header.height
        );

        Ok(UltraFrame { header, frame })
    }
}

/// Serialize a header and payload into a sealed `.ultra` frame.
///
/// The checksum field is zero-filled, the CRC-32 is computed over bytes
/// `[28..]` of the assembled frame, and the result is patched back into
/// offset 28. `decode_frame` round-trips the output exactly.
pub fn encode_frame(header: &UltraHeader, payload: &[u8]) -> Vec<u8> {
    let mut sealed = *header;
    sealed.crc = 0;

    let mut out = Vec::with_capacity(UltraHeader::SIZE + payload.len());
    out.extend_from_slice(&sealed.to_le_bytes());
    out.extend_from_slice(payload);

    let crc = checksum::crc32(&out[checksum::CRC_COVERAGE_OFFSET..]);
    out[28..32].copy_from_slice(&crc.to_le_bytes());

    out
}
