//! Ideae Render Library
//!
//! Raster side of the sketch feature: an owned RGBA buffer, the pointer-driven
//! [`DrawingSurface`] that strokes into it, and PNG data-URL export.

mod export;
mod raster;
mod surface;

pub use export::{ExportError, PNG_DATA_URL_PREFIX, decode_png, encode_png, from_data_url, to_data_url};
pub use raster::RasterBuffer;
pub use surface::DrawingSurface;
