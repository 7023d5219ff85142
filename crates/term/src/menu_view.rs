//! MenuView: renders the main menu into a terminal framebuffer.
//!
//! Pure (no I/O), like [`crate::game_view`]. The menu is a block-letter
//! title, a subtitle, and the control hints; selecting play hands control to
//! the game loop.

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::game_view::Viewport;
use crate::types::Rgb;

/// 5-row block glyphs for the title, one string per letter.
const TITLE: [&str; 5] = [
    "█████   ███   █   █   ████ ",
    "█   █  █   █  ██  █  █     ",
    "█████  █   █  █ █ █  █  ██ ",
    "█      █   █  █  ██  █   █ ",
    "█       ███   █   █   ████ ",
];

const SUBTITLE: &str = "a terminal pong";
const PLAY_HINT: &str = "[ Enter / Space ]  play";
const QUIT_HINT: &str = "q  quit";

/// Renders the main menu, centered in the viewport.
///
/// Stateless; small viewports degrade by clipping rather than erroring.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuView;

impl MenuView {
    pub fn new() -> Self {
        Self
    }

    /// Render the menu into an existing framebuffer.
    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }

        let title_style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let subtitle_style = CellStyle {
            dim: true,
            ..CellStyle::default()
        };
        let play_style = CellStyle {
            fg: Rgb::new(255, 0, 0),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };

        // Title block plus three text lines, one blank row between groups.
        let block_h = TITLE.len() as u16 + 5;
        let top = viewport.height.saturating_sub(block_h) / 2;

        for (i, row) in TITLE.iter().enumerate() {
            let x = centered_x(viewport.width, row.chars().count() as u16);
            fb.put_str(x, top + i as u16, row, title_style);
        }

        let mut y = top + TITLE.len() as u16 + 1;
        fb.put_str(
            centered_x(viewport.width, SUBTITLE.len() as u16),
            y,
            SUBTITLE,
            subtitle_style,
        );

        y += 2;
        fb.put_str(
            centered_x(viewport.width, PLAY_HINT.len() as u16),
            y,
            PLAY_HINT,
            play_style,
        );

        y += 2;
        fb.put_str(
            centered_x(viewport.width, QUIT_HINT.len() as u16),
            y,
            QUIT_HINT,
            subtitle_style,
        );
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(viewport, &mut fb);
        fb
    }
}

fn centered_x(viewport_width: u16, text_width: u16) -> u16 {
    viewport_width.saturating_sub(text_width) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_string(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width())
            .map(|x| fb.get(x, y).unwrap().ch)
            .collect()
    }

    #[test]
    fn menu_contains_play_and_quit_hints() {
        let fb = MenuView::new().render(Viewport::new(60, 24));

        let all: String = (0..fb.height()).map(|y| row_string(&fb, y) + "\n").collect();
        assert!(all.contains(PLAY_HINT));
        assert!(all.contains(QUIT_HINT));
        assert!(all.contains(SUBTITLE));
    }

    #[test]
    fn title_rows_are_centered() {
        let view = MenuView::new();
        let fb = view.render(Viewport::new(80, 24));

        let title_row = (0..fb.height())
            .find(|&y| row_string(&fb, y).contains('█'))
            .expect("title must be drawn");
        let row: Vec<char> = row_string(&fb, title_row).chars().collect();
        let first = row.iter().position(|&c| c == '█').unwrap();
        let last = row.iter().rposition(|&c| c == '█').unwrap();
        let right_gap = row.len() - 1 - last;
        assert!(first.abs_diff(right_gap) <= 2);
    }

    #[test]
    fn zero_viewport_renders_nothing() {
        let mut fb = FrameBuffer::new(4, 4);
        MenuView::new().render_into(Viewport::new(0, 0), &mut fb);
        assert_eq!(fb.width(), 0);
    }

    #[test]
    fn tiny_viewport_clips_instead_of_panicking() {
        let fb = MenuView::new().render(Viewport::new(8, 3));
        assert_eq!(fb.width(), 8);
        assert_eq!(fb.height(), 3);
    }
}
