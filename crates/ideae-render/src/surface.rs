//! Freehand sketch surface: pointer-driven strokes on an owned raster.

use crate::export::{ExportError, to_data_url};
use crate::raster::RasterBuffer;
use ideae_core::color::HexColor;
use ideae_core::config::{ConfigError, DrawingConfig};
use ideae_core::input::{PointerEvent, PointerPhase, RawPointerInput};
use ideae_core::tools::{ToolKind, Toolbar};
use ideae_core::viewport::CanvasViewport;
use kurbo::{BezPath, Point, Rect};

/// Stroke lifecycle.
#[derive(Debug, Clone, Default)]
enum StrokeState {
    #[default]
    Idle,
    Stroking {
        /// Last rasterized point in buffer space.
        last: Point,
        /// Path of the stroke so far in buffer space.
        path: BezPath,
    },
}

/// A raster sketch canvas driven by pointer events.
///
/// The surface owns its buffer exclusively. Every segment is rasterized as
/// soon as the pointer moves, so the buffer always reflects all strokes;
/// exports are encoded copies and never alias it.
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    toolbar: Toolbar,
    viewport: CanvasViewport,
    buffer: RasterBuffer,
    background: HexColor,
    state: StrokeState,
    autosave_on_stroke_end: bool,
    autosave: Option<String>,
}

impl DrawingSurface {
    /// Create a surface with a background-filled buffer, displayed unscaled.
    ///
    /// The config is validated first, so canvas size and eraser width hold
    /// for every surface regardless of where the config came from.
    pub fn new(config: &DrawingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let buffer = RasterBuffer::new(config.width, config.height, config.background).ok_or_else(|| {
            ConfigError::Invalid(format!("canvas {}x{} is too large", config.width, config.height))
        })?;

        log::debug!("Mounting {}x{} sketch surface", config.width, config.height);
        Ok(Self {
            toolbar: Toolbar::from_config(config),
            viewport: CanvasViewport::unscaled(config.width, config.height),
            buffer,
            background: config.background,
            state: StrokeState::Idle,
            autosave_on_stroke_end: config.autosave_on_stroke_end,
            autosave: None,
        })
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.toolbar.set_tool(tool);
    }

    pub fn set_color(&mut self, color: HexColor) {
        self.toolbar.set_color(color);
    }

    pub fn set_brush_size(&mut self, size: u32) {
        self.toolbar.set_brush_size(size);
    }

    pub fn viewport(&self) -> &CanvasViewport {
        &self.viewport
    }

    /// Update where the canvas element is displayed, in client coordinates.
    pub fn set_display_rect(&mut self, rect: Rect) {
        self.viewport.set_display_rect(rect);
    }

    pub fn buffer(&self) -> &RasterBuffer {
        &self.buffer
    }

    pub fn background(&self) -> HexColor {
        self.background
    }

    /// Whether a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, StrokeState::Stroking { .. })
    }

    /// Path of the stroke in progress, in buffer coordinates.
    pub fn current_path(&self) -> Option<&BezPath> {
        match &self.state {
            StrokeState::Stroking { path, .. } => Some(path),
            StrokeState::Idle => None,
        }
    }

    /// Export cached when the last stroke ended, if autosave is on.
    pub fn last_autosave(&self) -> Option<&str> {
        self.autosave.as_deref()
    }

    /// Normalize and dispatch a native host event.
    pub fn handle_raw(&mut self, input: &RawPointerInput) {
        if let Some(event) = input.normalize() {
            self.handle_event(event);
        }
    }

    /// Dispatch a unified pointer event.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event.phase {
            PointerPhase::Down => match event.valid_position() {
                Some(position) => self.pointer_down(position),
                None => self.end_stroke(),
            },
            PointerPhase::Move => match event.valid_position() {
                Some(position) => self.pointer_move(position),
                None => self.end_stroke(),
            },
            PointerPhase::Up => self.pointer_up(),
            PointerPhase::Leave => self.pointer_leave(),
        }
    }

    /// Begin a stroke at a client-space position.
    ///
    /// A stroke still open from a lost pointer-up is ended first.
    pub fn pointer_down(&mut self, client: Point) {
        self.end_stroke();
        let Some(start) = self.viewport.client_to_buffer(client) else {
            log::debug!("Ignoring pointer down with unusable geometry: {client:?}");
            return;
        };

        let mut path = BezPath::new();
        path.move_to(start);
        self.state = StrokeState::Stroking { last: start, path };
    }

    /// Extend the open stroke to a client-space position and rasterize the
    /// new segment. Ignored while idle.
    pub fn pointer_move(&mut self, client: Point) {
        if !self.is_drawing() {
            return;
        }
        let Some(point) = self.viewport.client_to_buffer(client) else {
            self.end_stroke();
            return;
        };

        let paint = self.toolbar.paint(self.background);
        if let StrokeState::Stroking { last, path } = &mut self.state {
            self.buffer.stroke_segment(*last, point, &paint);
            path.line_to(point);
            *last = point;
        }
    }

    pub fn pointer_up(&mut self) {
        self.end_stroke();
    }

    pub fn pointer_leave(&mut self) {
        self.end_stroke();
    }

    /// Close the open stroke, if any, and refresh the autosave cache.
    fn end_stroke(&mut self) {
        if !self.is_drawing() {
            return;
        }
        self.state = StrokeState::Idle;

        if self.autosave_on_stroke_end {
            match to_data_url(&self.buffer) {
                Ok(url) => self.autosave = Some(url),
                Err(err) => log::warn!("Autosave export failed: {err}"),
            }
        }
    }

    /// Abandon any open stroke and refill the buffer with the background.
    /// There is no undo.
    pub fn clear(&mut self) {
        self.state = StrokeState::Idle;
        self.buffer.fill(self.background);
        self.autosave = None;
        log::debug!("Sketch cleared");
    }

    /// Close any open stroke and export the buffer as a PNG data URL.
    pub fn export(&mut self) -> Result<String, ExportError> {
        self.end_stroke();
        to_data_url(&self.buffer)
    }

    /// Owned copy of the current pixels.
    pub fn snapshot(&self) -> RasterBuffer {
        self.buffer.clone()
    }
}
