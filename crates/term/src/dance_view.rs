//! DanceView: maps a [`Stage`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layer order: border, dancers (back to front by `y`), then the HUD so the
//! title and counters stay readable over passing dancers.

use crate::core::{DrawSink, HudSnapshot, Stage};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Viewport;

pub const TITLE: &str = "✨ kaomoji dance party ✨";
pub const HELP: &str = "SPACE: push  G: flip gravity  +/-: more dancers  W: reset  Q: quit";

/// Column offset of the FPS counter, measured from the right edge.
const HUD_RIGHT_OFFSET: u16 = 30;

/// The 16 classic terminal colors, indexed by dancer color code.
const PALETTE: [Rgb; 16] = [
    Rgb::new(0, 0, 0),
    Rgb::new(205, 49, 49),
    Rgb::new(13, 188, 121),
    Rgb::new(229, 229, 16),
    Rgb::new(36, 114, 200),
    Rgb::new(188, 63, 188),
    Rgb::new(17, 168, 205),
    Rgb::new(229, 229, 229),
    Rgb::new(102, 102, 102),
    Rgb::new(241, 76, 76),
    Rgb::new(35, 209, 139),
    Rgb::new(245, 245, 67),
    Rgb::new(59, 142, 234),
    Rgb::new(214, 112, 214),
    Rgb::new(41, 184, 219),
    Rgb::new(255, 255, 255),
];

const GRAY: u8 = 8;
const BRIGHT_GREEN: u8 = 10;
const BRIGHT_YELLOW: u8 = 14;

/// Palette lookup; codes past 15 wrap.
pub fn palette(color: u8) -> Rgb {
    PALETTE[(color & 0x0f) as usize]
}

fn style_for(color: u8) -> CellStyle {
    CellStyle::fg(palette(color))
}

/// [`DrawSink`] over a framebuffer. Glyphs outside the buffer are clipped.
pub struct FrameSink<'a> {
    fb: &'a mut FrameBuffer,
}

impl<'a> FrameSink<'a> {
    pub fn new(fb: &'a mut FrameBuffer) -> Self {
        Self { fb }
    }
}

impl DrawSink for FrameSink<'_> {
    fn draw_glyph(&mut self, x: i32, y: i32, color: u8, text: &str) {
        self.fb.put_str_clipped(x, y, text, style_for(color));
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DanceView {
    border: bool,
    hud: bool,
}

impl Default for DanceView {
    fn default() -> Self {
        Self {
            border: true,
            hud: true,
        }
    }
}

impl DanceView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    pub fn with_hud(mut self, hud: bool) -> Self {
        self.hud = hud;
        self
    }

    /// Render the stage into an existing framebuffer, resized to the stage's
    /// current viewport.
    pub fn render_into(&self, stage: &mut Stage, fb: &mut FrameBuffer) {
        let viewport = stage.viewport();
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        if self.border {
            draw_border(fb, viewport, style_for(GRAY));
        }

        stage.draw(&mut FrameSink::new(fb));

        if self.hud {
            draw_hud(fb, &stage.hud());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, stage: &mut Stage) -> FrameBuffer {
        let viewport = stage.viewport();
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(stage, &mut fb);
        fb
    }
}

fn draw_border(fb: &mut FrameBuffer, viewport: Viewport, style: CellStyle) {
    let (w, h) = (viewport.width, viewport.height);
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(0, 0, '╔', style);
    fb.put_char(w - 1, 0, '╗', style);
    fb.put_char(0, h - 1, '╚', style);
    fb.put_char(w - 1, h - 1, '╝', style);

    for x in 1..w - 1 {
        fb.put_char(x, 0, '═', style);
        fb.put_char(x, h - 1, '═', style);
    }
    for y in 1..h - 1 {
        fb.put_char(0, y, '║', style);
        fb.put_char(w - 1, y, '║', style);
    }
}

fn draw_hud(fb: &mut FrameBuffer, hud: &HudSnapshot) {
    fb.put_str(2, 0, TITLE, style_for(BRIGHT_YELLOW));

    let counters = style_for(BRIGHT_GREEN);
    let x = fb.width().saturating_sub(HUD_RIGHT_OFFSET);
    let x = fb.put_str(x, 0, "FPS: ", counters);
    let x = fb.put_u32(x, 0, hud.fps, counters);
    let x = fb.put_str(x, 0, "  dancers: ", counters);
    fb.put_u32(x, 0, hud.dancers.min(u32::MAX as usize) as u32, counters);

    fb.put_str(2, 1, HELP, style_for(GRAY));
}
