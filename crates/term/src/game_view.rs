//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::{u32_width, Cell, CellStyle, FrameBuffer};
use crate::pixel::PixelCanvas;
use crate::types::{Rect, Rgb, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const WALL_COLOR: Rgb = Rgb::new(0, 0, 255);
const PADDLE_COLOR: Rgb = Rgb::new(255, 0, 0);

/// Top-right FPS readout placement.
const FPS_ROW: u16 = 1;
const FPS_MARGIN: u16 = 2;

/// Renders the playfield with half-block pixels.
///
/// The simulation's logical 640x480 space is scaled uniformly to the
/// viewport's pixel grid and centered; leftover space stays black. The
/// internal canvas is reused across frames, so rendering does not allocate
/// once the viewport size settles.
pub struct GameView {
    canvas: PixelCanvas,
}

impl GameView {
    pub fn new() -> Self {
        Self {
            canvas: PixelCanvas::new(0, 0),
        }
    }

    /// Render the current game state into an existing framebuffer.
    pub fn render_into(
        &mut self,
        state: &GameState,
        fps: u32,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }

        self.canvas
            .resize(viewport.width, viewport.height.saturating_mul(2));
        self.canvas.clear(BACKGROUND);

        let pw = self.canvas.width() as f64;
        let ph = self.canvas.height() as f64;
        let scale = (pw / SCREEN_WIDTH as f64).min(ph / SCREEN_HEIGHT as f64);
        let off_x = (pw - SCREEN_WIDTH as f64 * scale) / 2.0;
        let off_y = (ph - SCREEN_HEIGHT as f64 * scale) / 2.0;

        for wall in state.walls() {
            let (x, y, w, h) = project_rect(wall.rect(), scale, off_x, off_y);
            self.canvas.fill_rect(x, y, w, h, WALL_COLOR);
        }

        for paddle in state.paddles() {
            let (x, y, w, h) = project_rect(paddle.rect(), scale, off_x, off_y);
            self.canvas.fill_rect(x, y, w, h, PADDLE_COLOR);
        }

        let ball = state.ball();
        self.canvas.fill_circle(
            off_x + ball.x * scale,
            off_y + ball.y * scale,
            (ball.radius * scale).max(1.0),
            ball.color,
        );

        self.canvas.composite_into(fb);
        draw_fps(fb, fps);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&mut self, state: &GameState, fps: u32, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, fps, viewport, &mut fb);
        fb
    }
}

impl Default for GameView {
    fn default() -> Self {
        Self::new()
    }
}

/// Project a logical rectangle onto the pixel grid.
///
/// Edges are scaled and rounded independently so adjacent rectangles stay
/// flush; the result is never thinner than one pixel.
fn project_rect(rect: Rect, scale: f64, off_x: f64, off_y: f64) -> (i32, i32, i32, i32) {
    let x0 = (off_x + rect.left() as f64 * scale).round() as i32;
    let y0 = (off_y + rect.top() as f64 * scale).round() as i32;
    let x1 = (off_x + rect.right() as f64 * scale).round() as i32;
    let y1 = (off_y + rect.bottom() as f64 * scale).round() as i32;
    (x0, y0, (x1 - x0).max(1), (y1 - y0).max(1))
}

/// Overlay `FPS: n` near the top-right corner, above the arena.
fn draw_fps(fb: &mut FrameBuffer, fps: u32) {
    let label = "FPS: ";
    let text_w = label.len() as u16 + u32_width(fps);
    let Some(x) = fb.width().checked_sub(text_w + FPS_MARGIN) else {
        return;
    };

    let style = CellStyle {
        fg: Rgb::new(255, 255, 255),
        bg: BACKGROUND,
        bold: true,
        dim: false,
    };
    fb.put_str(x, FPS_ROW, label, style);
    fb.put_u32(x + label.len() as u16, FPS_ROW, fps, style);
}
