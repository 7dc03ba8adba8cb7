//! Owned RGBA raster buffer with round-capped segment stroking.

use ideae_core::color::HexColor;
use ideae_core::tools::StrokePaint;
use kurbo::{Point, Rect, Size};

const BYTES_PER_PIXEL: usize = 4;

/// Fixed-size RGBA8 pixel buffer, row-major, no premultiplication.
///
/// Strokes are written opaque with hard edges so the same input always
/// produces the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterBuffer {
    /// Create a buffer filled with `background`.
    ///
    /// Returns `None` when the byte length of a `width` x `height` buffer is
    /// not addressable.
    pub fn new(width: u32, height: u32, background: HexColor) -> Option<Self> {
        let mut buffer = Self {
            width,
            height,
            pixels: vec![0; byte_len(width, height)?],
        };
        buffer.fill(background);
        Some(buffer)
    }

    /// Wrap existing RGBA8 data. Returns `None` if the length does not match.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        (Some(pixels.len()) == byte_len(width, height)).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Raw RGBA8 bytes.
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: HexColor) {
        let rgba = color.to_rgba8();
        for pixel in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&rgba);
        }
    }

    /// RGBA of the pixel at (x, y), or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = self.offset(x, y);
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[offset..offset + BYTES_PER_PIXEL]);
        Some(rgba)
    }

    /// Number of pixels exactly equal to `color`.
    pub fn count_color(&self, color: HexColor) -> usize {
        let rgba = color.to_rgba8();
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|pixel| *pixel == rgba)
            .count()
    }

    /// Stroke a straight segment with round caps.
    ///
    /// A pixel is painted when its center lies within `paint.width / 2` of
    /// the segment. Returns the number of pixels written.
    pub fn stroke_segment(&mut self, from: Point, to: Point, paint: &StrokePaint) -> usize {
        let radius = (paint.width / 2.0).max(0.5);
        let Some((x0, y0, x1, y1)) = self.pixel_bounds(Rect::from_points(from, to).inflate(radius, radius))
        else {
            return 0;
        };

        let rgba = HexColor::from(paint.color).to_rgba8();
        let radius_sq = radius * radius;
        let mut written = 0;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if distance_sq_to_segment(center, from, to) <= radius_sq {
                    let offset = self.offset(x, y);
                    self.pixels[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&rgba);
                    written += 1;
                }
            }
        }
        written
    }

    /// Integer pixel range covered by `rect`, clipped to the buffer.
    fn pixel_bounds(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let max_x = f64::from(self.width - 1);
        let max_y = f64::from(self.height - 1);
        if rect.x1 < 0.0 || rect.y1 < 0.0 || rect.x0 > max_x + 1.0 || rect.y0 > max_y + 1.0 {
            return None;
        }
        Some((
            rect.x0.floor().clamp(0.0, max_x) as u32,
            rect.y0.floor().clamp(0.0, max_y) as u32,
            rect.x1.ceil().clamp(0.0, max_x) as u32,
            rect.y1.ceil().clamp(0.0, max_y) as u32,
        ))
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }
}

/// RGBA8 byte length of a buffer, if it fits an allocation.
fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(BYTES_PER_PIXEL)
        .filter(|&len| len <= isize::MAX as usize)
}

/// Squared distance from `point` to the segment `start..end`.
fn distance_sq_to_segment(point: Point, start: Point, end: Point) -> f64 {
    let line_vec = end - start;
    let point_vec = point - start;

    let line_len_sq = line_vec.hypot2();
    if line_len_sq < f64::EPSILON {
        return point_vec.hypot2();
    }

    let t = (point_vec.dot(line_vec) / line_len_sq).clamp(0.0, 1.0);
    let projection = start + line_vec * t;
    (point - projection).hypot2()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen(width: f64) -> StrokePaint {
        StrokePaint {
            color: HexColor::black().into(),
            width,
        }
    }

    /// Painted rows crossing column `x`.
    fn column_coverage(buffer: &RasterBuffer, x: u32, color: HexColor) -> usize {
        (0..buffer.height())
            .filter(|&y| buffer.pixel(x, y) == Some(color.to_rgba8()))
            .count()
    }

    #[test]
    fn test_new_is_filled() {
        let buffer = RasterBuffer::new(4, 3, HexColor::white()).unwrap();
        assert_eq!(buffer.count_color(HexColor::white()), 12);
        assert_eq!(buffer.pixel(3, 2), Some([255, 255, 255, 255]));
        assert_eq!(buffer.pixel(4, 0), None);
    }

    #[test]
    fn test_horizontal_segment_width() {
        let mut buffer = RasterBuffer::new(100, 100, HexColor::white()).unwrap();
        buffer.stroke_segment(Point::new(10.0, 50.0), Point::new(90.0, 50.0), &pen(4.0));
        assert_eq!(column_coverage(&buffer, 50, HexColor::black()), 4);

        let mut buffer = RasterBuffer::new(100, 100, HexColor::white()).unwrap();
        buffer.stroke_segment(Point::new(10.0, 50.0), Point::new(90.0, 50.0), &pen(12.0));
        assert_eq!(column_coverage(&buffer, 50, HexColor::black()), 12);
    }

    #[test]
    fn test_zero_length_segment_paints_a_dot() {
        let mut buffer = RasterBuffer::new(20, 20, HexColor::white()).unwrap();
        let written = buffer.stroke_segment(Point::new(10.0, 10.0), Point::new(10.0, 10.0), &pen(4.0));
        assert!(written > 0);
        assert_eq!(buffer.pixel(10, 10), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_offscreen_segment_is_clipped() {
        let mut buffer = RasterBuffer::new(20, 20, HexColor::white()).unwrap();
        let written =
            buffer.stroke_segment(Point::new(-50.0, -50.0), Point::new(-40.0, -40.0), &pen(4.0));
        assert_eq!(written, 0);

        let written = buffer.stroke_segment(Point::new(-5.0, 10.0), Point::new(25.0, 10.0), &pen(2.0));
        assert_eq!(written, 40);
    }

    #[test]
    fn test_fill_resets() {
        let mut buffer = RasterBuffer::new(10, 10, HexColor::white()).unwrap();
        buffer.stroke_segment(Point::new(0.0, 0.0), Point::new(10.0, 10.0), &pen(3.0));
        buffer.fill(HexColor::white());
        assert_eq!(Some(buffer), RasterBuffer::new(10, 10, HexColor::white()));
    }

    #[test]
    fn test_from_rgba_checks_length() {
        assert!(RasterBuffer::from_rgba(2, 2, vec![0; 16]).is_some());
        assert!(RasterBuffer::from_rgba(2, 2, vec![0; 15]).is_none());
    }

    #[test]
    fn test_unaddressable_size_rejected() {
        assert_eq!(byte_len(3, 2), Some(24));
        assert_eq!(byte_len(u32::MAX, u32::MAX), None);
        assert!(RasterBuffer::new(u32::MAX, u32::MAX, HexColor::white()).is_none());
        assert!(RasterBuffer::from_rgba(u32::MAX, u32::MAX, vec![0; 16]).is_none());
    }
}
