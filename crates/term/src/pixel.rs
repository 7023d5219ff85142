//! Half-block pixel canvas.
//!
//! Terminal cells are roughly twice as tall as they are wide, so one cell
//! carries two vertically stacked pixels: the upper half block `▀` with the
//! foreground color for the top pixel and the background color for the bottom
//! one. A canvas of `width x 2*rows` pixels composites into a `width x rows`
//! framebuffer.

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::Rgb;

const UPPER_HALF_BLOCK: char = '\u{2580}';

/// RGB pixel surface with drawing primitives.
///
/// Coordinates are `i32` so shapes can hang off any edge; out-of-bounds
/// pixels are dropped.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
}

impl PixelCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the canvas, preserving the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.pixels.resize(len, Rgb::default());
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32 {
            self.pixels[(y as usize) * (self.width as usize) + (x as usize)] = color;
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        if x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32 {
            Some(self.pixels[(y as usize) * (self.width as usize) + (x as usize)])
        } else {
            None
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, color);
            }
        }
    }

    /// Fill a circle by horizontal scanlines, sampled at pixel centers.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb) {
        if radius <= 0.0 {
            return;
        }

        let y0 = (cy - radius).floor() as i32;
        let y1 = (cy + radius).ceil() as i32;
        for y in y0..=y1 {
            let dy = (y as f64 + 0.5) - cy;
            let span = radius * radius - dy * dy;
            if span <= 0.0 {
                continue;
            }
            let half = span.sqrt();
            let x0 = (cx - half).round() as i32;
            let x1 = (cx + half).round() as i32;
            for x in x0..x1 {
                self.set(x, y, color);
            }
        }
    }

    /// Write the canvas into a framebuffer as half-block cells.
    ///
    /// When both halves of a cell share one color the cell becomes a plain
    /// space with that color as its background.
    pub fn composite_into(&self, fb: &mut FrameBuffer) {
        let rows = self.height / 2;
        for row in 0..rows {
            for col in 0..self.width {
                let top = self.pixels[(row as usize * 2) * (self.width as usize) + col as usize];
                let bottom =
                    self.pixels[(row as usize * 2 + 1) * (self.width as usize) + col as usize];

                let cell = if top == bottom {
                    Cell {
                        ch: ' ',
                        style: CellStyle {
                            fg: top,
                            bg: top,
                            bold: false,
                            dim: false,
                        },
                    }
                } else {
                    Cell {
                        ch: UPPER_HALF_BLOCK,
                        style: CellStyle {
                            fg: top,
                            bg: bottom,
                            bold: false,
                            dim: false,
                        },
                    }
                };
                fb.set(col, row, cell);
            }
        }
    }
}
