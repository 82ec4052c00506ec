//! 1bpp layout: eight pixels per byte, least significant bit first.

use crate::pack::Encoding;
use crate::ConvertError;

/// Pack dark/light decisions into bytes.
///
/// Pixels are taken in groups of eight in scan order; bit `b` of each byte is
/// set iff pixel `b` of the group is dark. A trailing partial group is padded
/// with light pixels.
///
/// ```ignore
/// // only the fourth pixel is dark
/// let dark = [false, false, false, true, false, false, false, false];
/// assert_eq!(pack_1bpp(&dark), vec![0x08]);
/// ```
pub fn pack_1bpp(dark: &[bool]) -> Vec<u8> {
    dark.chunks(8).map(pack_octet).collect()
}

#[inline]
fn pack_octet(group: &[bool]) -> u8 {
    group
        .iter()
        .enumerate()
        .fold(0u8, |byte, (bit, &is_dark)| byte | ((is_dark as u8) << bit))
}

/// Expand a 1bpp stream back into `pixel_count` decisions.
///
/// # Errors
///
/// `InvalidStreamLength` if `bytes` is not exactly the packed length of
/// `pixel_count` pixels.
pub fn unpack_1bpp(bytes: &[u8], pixel_count: usize) -> Result<Vec<bool>, ConvertError> {
    let expected = Encoding::OneBit.packed_len(pixel_count);
    if bytes.len() != expected {
        return Err(ConvertError::InvalidStreamLength {
            expected,
            actual: bytes.len(),
        });
    }

    Ok(bytes
        .iter()
        .flat_map(|&byte| (0..8).map(move |bit| byte & (1 << bit) != 0))
        .take(pixel_count)
        .collect())
}
