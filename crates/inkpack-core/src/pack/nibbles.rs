//! 4bpp layout: two pixels per byte, low nibble first.

use crate::pack::Encoding;
use crate::ConvertError;

/// Pack gray levels into bytes.
///
/// Pixels are paired in scan order and each pair becomes
/// `level(even) | level(odd) << 4`. A trailing unpaired pixel gets a zero
/// high nibble. Levels are masked to four bits.
pub fn pack_4bpp(levels: &[u8]) -> Vec<u8> {
    levels
        .chunks(2)
        .map(|pair| {
            let low = pair[0] & 0x0F;
            let high = pair.get(1).copied().unwrap_or(0) & 0x0F;
            low | (high << 4)
        })
        .collect()
}

/// Expand a 4bpp stream back into `pixel_count` levels.
///
/// # Errors
///
/// `InvalidStreamLength` if `bytes` is not exactly the packed length of
/// `pixel_count` pixels.
pub fn unpack_4bpp(bytes: &[u8], pixel_count: usize) -> Result<Vec<u8>, ConvertError> {
    let expected = Encoding::FourBit.packed_len(pixel_count);
    if bytes.len() != expected {
        return Err(ConvertError::InvalidStreamLength {
            expected,
            actual: bytes.len(),
        });
    }

    Ok(bytes
        .iter()
        .flat_map(|&byte| [byte & 0x0F, byte >> 4])
        .take(pixel_count)
        .collect())
}
