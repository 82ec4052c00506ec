//! Conversion bindings.
//!
//! All functions target the default 1200x825 panel. Each binding is a thin
//! wrapper over a native function returning `ConvertError`, which keeps the
//! logic testable off wasm32.
//!
//! ```typescript
//! import { convert_with_options, packed_len } from '@inkpack/wasm';
//!
//! const packed = convert_with_options(bytes, { encoding: '1bpp', dither: 'bayer' });
//! console.assert(packed.length === packed_len('1bpp'));
//! ```

use inkpack_core::{convert_bytes, render_preview, ConvertError, ConvertOptions, PanelConfig};
use wasm_bindgen::prelude::*;

use crate::types::{parse_mode, to_js_error, JsPreview};

/// Convert encoded image bytes (PNG, JPEG, BMP, GIF) into a packed stream.
///
/// `mode` is `"1bpp"` (Floyd-Steinberg dithered) or `"4bpp"`.
#[wasm_bindgen]
pub fn convert(bytes: &[u8], mode: &str) -> Result<Vec<u8>, JsValue> {
    convert_mode(bytes, mode).map_err(to_js_error)
}

/// Convert with an options object, e.g.
/// `{ encoding: "1bpp", dither: { threshold: 100 }, filter: "lanczos3" }`.
/// Missing fields take their defaults.
#[wasm_bindgen]
pub fn convert_with_options(bytes: &[u8], options: JsValue) -> Result<Vec<u8>, JsValue> {
    let options: ConvertOptions = if options.is_undefined() || options.is_null() {
        ConvertOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))?
    };
    convert_bytes(bytes, &PanelConfig::default(), &options).map_err(to_js_error)
}

/// Length in bytes of one packed frame in `mode`.
#[wasm_bindgen]
pub fn packed_len(mode: &str) -> Result<usize, JsValue> {
    frame_len(mode).map_err(to_js_error)
}

/// Render a packed frame back into grayscale pixels.
#[wasm_bindgen]
pub fn preview(packed: &[u8], mode: &str) -> Result<JsPreview, JsValue> {
    render(packed, mode).map_err(to_js_error)
}

fn convert_mode(bytes: &[u8], mode: &str) -> Result<Vec<u8>, ConvertError> {
    let options = ConvertOptions::new(parse_mode(mode)?);
    convert_bytes(bytes, &PanelConfig::default(), &options)
}

fn frame_len(mode: &str) -> Result<usize, ConvertError> {
    Ok(parse_mode(mode)?.packed_len(PanelConfig::default().pixel_count()))
}

fn render(packed: &[u8], mode: &str) -> Result<JsPreview, ConvertError> {
    let image = render_preview(packed, &PanelConfig::default(), parse_mode(mode)?)?;
    Ok(JsPreview::from_gray(image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkpack_core::{encode_preview_png, Encoding};

    /// A white 16x8 PNG, built through the preview path.
    fn white_png() -> Vec<u8> {
        let config = PanelConfig::new(16, 8);
        let image = render_preview(&[0u8; 16], &config, Encoding::OneBit).unwrap();
        encode_preview_png(&image).unwrap()
    }

    #[test]
    fn test_frame_len() {
        assert_eq!(frame_len("1bpp").unwrap(), 123_750);
        assert_eq!(frame_len("4bpp").unwrap(), 495_000);
        assert!(matches!(
            frame_len("24bpp"),
            Err(ConvertError::UnsupportedMode(_))
        ));
    }

    #[test]
    fn test_convert_white_png() {
        let one = convert_mode(&white_png(), "1bpp").unwrap();
        assert_eq!(one.len(), 123_750);
        assert!(one.iter().all(|&b| b == 0x00));

        let four = convert_mode(&white_png(), "4bpp").unwrap();
        assert_eq!(four.len(), 495_000);
        assert!(four.iter().all(|&b| b == 0x77));
    }

    #[test]
    fn test_convert_rejects_mode_before_decoding() {
        let err = convert_mode(b"not an image", "8bpp").unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedMode(_)));
    }

    #[test]
    fn test_convert_rejects_garbage() {
        let err = convert_mode(b"not an image", "1bpp").unwrap_err();
        assert!(matches!(err, ConvertError::Decode(_)));
    }

    #[test]
    fn test_render_round_trip() {
        let packed = convert_mode(&white_png(), "4bpp").unwrap();
        let preview = render(&packed, "4bpp").unwrap();
        assert_eq!((preview.width(), preview.height()), (1200, 825));
        assert!(preview.pixels().iter().all(|&v| v == 255));
    }

    #[test]
    fn test_render_wrong_length() {
        assert!(matches!(
            render(&[0u8; 10], "1bpp"),
            Err(ConvertError::InvalidStreamLength { .. })
        ));
    }
}
