//! PNG encoding and self-contained `data:` URL export.

use crate::raster::RasterBuffer;
use base64::{Engine, engine::general_purpose::STANDARD};
use thiserror::Error;

/// Prefix of every exported sketch.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Export and import errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
    #[error("PNG decoding failed: {0}")]
    Decode(#[from] png::DecodingError),
    #[error("Base64 decoding failed: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Not a PNG data URL")]
    NotPngDataUrl,
    #[error("Unsupported PNG layout: {0}")]
    UnsupportedLayout(String),
}

/// Encode the buffer as an 8-bit RGBA PNG.
pub fn encode_png(buffer: &RasterBuffer) -> Result<Vec<u8>, ExportError> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, buffer.width(), buffer.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(buffer.as_rgba())?;
        writer.finish()?;
    }
    Ok(png_data)
}

/// Encode the buffer as a `data:image/png;base64,...` URL.
pub fn to_data_url(buffer: &RasterBuffer) -> Result<String, ExportError> {
    let png_data = encode_png(buffer)?;
    log::debug!(
        "Exported {}x{} sketch as {} PNG bytes",
        buffer.width(),
        buffer.height(),
        png_data.len()
    );
    Ok(format!("{PNG_DATA_URL_PREFIX}{}", STANDARD.encode(png_data)))
}

/// Decode a PNG data URL produced by [`to_data_url`] back into a buffer.
pub fn from_data_url(url: &str) -> Result<RasterBuffer, ExportError> {
    let encoded = url
        .strip_prefix(PNG_DATA_URL_PREFIX)
        .ok_or(ExportError::NotPngDataUrl)?;
    let bytes = STANDARD.decode(encoded)?;
    decode_png(&bytes)
}

/// Decode 8-bit RGBA PNG bytes into a buffer.
pub fn decode_png(bytes: &[u8]) -> Result<RasterBuffer, ExportError> {
    let decoder = png::Decoder::new(bytes);
    let mut reader = decoder.read_info()?;
    let mut pixels = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut pixels)?;

    if info.color_type != png::ColorType::Rgba || info.bit_depth != png::BitDepth::Eight {
        return Err(ExportError::UnsupportedLayout(format!(
            "{:?} at {:?}",
            info.color_type, info.bit_depth
        )));
    }
    pixels.truncate(info.buffer_size());

    RasterBuffer::from_rgba(info.width, info.height, pixels).ok_or_else(|| {
        ExportError::UnsupportedLayout(format!("{}x{} frame size mismatch", info.width, info.height))
    })
}
