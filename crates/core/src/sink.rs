//! Draw sink boundary.
//!
//! The core never touches the terminal. Each tick it emits one
//! [`DrawSink::draw_glyph`] call per dancer, in depth order, and the rendering
//! layer decides what a call means (a framebuffer write, a test recording).

/// Receiver of ordered glyph draw calls.
pub trait DrawSink {
    /// Draw `text` with its first column at `(x, y)` using palette `color`.
    ///
    /// Coordinates may lie partly outside the visible area; sinks clip.
    fn draw_glyph(&mut self, x: i32, y: i32, color: u8, text: &str);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCall {
    pub x: i32,
    pub y: i32,
    pub color: u8,
    pub text: String,
}

impl DrawSink for Vec<DrawCall> {
    fn draw_glyph(&mut self, x: i32, y: i32, color: u8, text: &str) {
        self.push(DrawCall {
            x,
            y,
            color,
            text: text.to_string(),
        });
    }
}
