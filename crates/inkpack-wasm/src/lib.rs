//! inkpack WASM - WebAssembly bindings for the e-paper bitmap codec
//!
//! Lets a browser produce the same packed stream the command-line tool
//! writes, so images can be prepared client-side before upload to a panel.
//!
//! # Module Structure
//!
//! - `convert` - image bytes to packed stream, and packed stream back to pixels
//! - `types` - JS-facing wrapper types
//!
//! # Usage
//!
//! ```typescript
//! import init, { convert, preview } from '@inkpack/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const packed = convert(bytes, '4bpp');
//! const image = preview(packed, '4bpp');
//! console.log(`${packed.length} bytes for ${image.width}x${image.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod convert;
mod types;

pub use convert::{convert, convert_with_options, packed_len, preview};
pub use types::JsPreview;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
