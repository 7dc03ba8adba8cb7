//! Mapping between displayed canvas coordinates and backing-buffer pixels.

use kurbo::{Affine, Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Where and how large the canvas element is displayed, relative to the
/// resolution of its backing buffer.
///
/// The buffer keeps a fixed resolution while the element is laid out at
/// whatever size the page gives it, so every pointer position is rescaled
/// per axis before it touches the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasViewport {
    /// Backing buffer size in pixels.
    pub buffer_size: Size,
    /// Displayed element rectangle in client coordinates.
    pub display_rect: Rect,
}

impl CanvasViewport {
    /// A viewport displayed at exactly its buffer size at the origin.
    pub fn unscaled(width: u32, height: u32) -> Self {
        let size = Size::new(f64::from(width), f64::from(height));
        Self {
            buffer_size: size,
            display_rect: Rect::from_origin_size(Point::ZERO, size),
        }
    }

    /// Update the displayed rectangle after a layout change.
    pub fn set_display_rect(&mut self, rect: Rect) {
        self.display_rect = rect;
    }

    /// Per-axis buffer/display ratio, or `None` when the element has no area.
    pub fn scale(&self) -> Option<(f64, f64)> {
        let width = self.display_rect.width();
        let height = self.display_rect.height();
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return None;
        }
        Some((self.buffer_size.width / width, self.buffer_size.height / height))
    }

    /// Transform from client coordinates to buffer coordinates.
    pub fn client_to_buffer_transform(&self) -> Option<Affine> {
        let (sx, sy) = self.scale()?;
        Some(Affine::scale_non_uniform(sx, sy) * Affine::translate(-self.display_rect.origin().to_vec2()))
    }

    /// Convert a client-space point into buffer space.
    ///
    /// Returns `None` for non-finite input or a zero-area element.
    pub fn client_to_buffer(&self, client: Point) -> Option<Point> {
        if !(client.x.is_finite() && client.y.is_finite()) {
            return None;
        }
        Some(self.client_to_buffer_transform()? * client)
    }

    /// The buffer pixel containing a buffer-space point, clamped to the buffer.
    pub fn pixel_at(&self, point: Point) -> (u32, u32) {
        let clamp = |value: f64, extent: f64| {
            let max = (extent - 1.0).max(0.0);
            value.floor().clamp(0.0, max) as u32
        };
        (
            clamp(point.x, self.buffer_size.width),
            clamp(point.y, self.buffer_size.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(buffer: (u32, u32), display: Rect) -> CanvasViewport {
        let mut viewport = CanvasViewport::unscaled(buffer.0, buffer.1);
        viewport.set_display_rect(display);
        viewport
    }

    #[test]
    fn test_unscaled_identity() {
        let viewport = CanvasViewport::unscaled(800, 600);
        let point = viewport.client_to_buffer(Point::new(120.0, 45.0)).unwrap();
        assert!((point.x - 120.0).abs() < 1e-10);
        assert!((point.y - 45.0).abs() < 1e-10);
    }

    #[test]
    fn test_independent_axis_scaling() {
        // 800x600 buffer squeezed into a 400x150 element offset by (10, 20)
        let viewport = viewport((800, 600), Rect::new(10.0, 20.0, 410.0, 170.0));
        let point = viewport.client_to_buffer(Point::new(210.0, 95.0)).unwrap();
        assert!((point.x - 400.0).abs() < 1e-10);
        assert!((point.y - 300.0).abs() < 1e-10);
    }

    #[test]
    fn test_bottom_right_corner_maps_to_last_pixel() {
        let displays = [
            Rect::new(0.0, 0.0, 800.0, 600.0),
            Rect::new(0.0, 0.0, 320.0, 240.0),
            Rect::new(5.0, 7.0, 1605.0, 1207.0),
            Rect::new(33.0, 0.0, 333.3, 91.7),
        ];
        for display in displays {
            let viewport = viewport((800, 600), display);
            let corner = viewport
                .client_to_buffer(Point::new(display.x1, display.y1))
                .unwrap();
            assert_eq!(viewport.pixel_at(corner), (799, 599), "display {display:?}");
        }
    }

    #[test]
    fn test_invalid_geometry() {
        let collapsed = viewport((800, 600), Rect::new(0.0, 0.0, 0.0, 300.0));
        assert!(collapsed.client_to_buffer(Point::new(1.0, 1.0)).is_none());

        let viewport = CanvasViewport::unscaled(800, 600);
        assert!(viewport.client_to_buffer(Point::new(f64::NAN, 1.0)).is_none());
        assert!(viewport.client_to_buffer(Point::new(1.0, f64::INFINITY)).is_none());
    }

    #[test]
    fn test_pixel_at_clamps() {
        let viewport = CanvasViewport::unscaled(10, 10);
        assert_eq!(viewport.pixel_at(Point::new(-3.0, 4.5)), (0, 4));
        assert_eq!(viewport.pixel_at(Point::new(42.0, 9.99)), (9, 9));
    }
}
