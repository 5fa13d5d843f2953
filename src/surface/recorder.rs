//! Call-recording surface for unit tests.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::{Font, Surface};

/// Glyph cell of the fake font, before scaling.
pub const GLYPH_WIDTH: u32 = 6;
pub const GLYPH_HEIGHT: u32 = 8;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FillRect(Rectangle, Rgb565),
    DrawRect(Rectangle, Rgb565),
    DrawBitmap(Point, Size, Rgb565),
    DrawColorBitmap(Point, Size),
    SetFont(bool),
    SetTextSize(u8),
    SetTextColor(Rgb565),
    SetCursor(Point),
    DrawText(String),
}

/// Error injected by a [`RecordingSurface`] set up to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceFault;

/// Records every call. Text is measured as fixed 6x8 cells; with a font
/// selected the box sits above the origin like a baseline-anchored glyph.
///
/// A failed call is not recorded.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
    font: bool,
    scale: u8,
    fills_attempted: usize,
    fail_fill_at: Option<usize>,
    fail_next_text: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            scale: 1,
            ..Self::default()
        }
    }

    /// Fail the `nth` `fill_rect` call from now on (1-based), once.
    pub fn fail_fill(&mut self, nth: usize) {
        self.fail_fill_at = Some(self.fills_attempted + nth);
    }

    /// Fail the next `draw_text` call, once.
    pub fn fail_next_text(&mut self) {
        self.fail_next_text = true;
    }

    /// Drain the recorded calls.
    pub fn take(&mut self) -> Vec<Call> {
        core::mem::take(&mut self.calls)
    }

    pub fn fills(&self) -> Vec<(Rectangle, Rgb565)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::FillRect(area, color) => Some((*area, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::DrawText(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    type Error = SurfaceFault;

    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), Self::Error> {
        self.fills_attempted += 1;
        if self.fail_fill_at == Some(self.fills_attempted) {
            return Err(SurfaceFault);
        }
        self.calls.push(Call::FillRect(area, color));
        Ok(())
    }

    fn draw_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), Self::Error> {
        self.calls.push(Call::DrawRect(area, color));
        Ok(())
    }

    fn draw_bitmap(
        &mut self,
        top_left: Point,
        _bitmap: &[u8],
        size: Size,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        self.calls.push(Call::DrawBitmap(top_left, size, color));
        Ok(())
    }

    fn draw_color_bitmap(
        &mut self,
        top_left: Point,
        _bitmap: &[u16],
        size: Size,
    ) -> Result<(), Self::Error> {
        self.calls.push(Call::DrawColorBitmap(top_left, size));
        Ok(())
    }

    fn set_font(&mut self, font: Font) {
        self.font = font.is_some();
        self.calls.push(Call::SetFont(self.font));
    }

    fn set_text_size(&mut self, scale: u8) {
        self.scale = scale.max(1);
        self.calls.push(Call::SetTextSize(scale));
    }

    fn set_text_color(&mut self, color: Rgb565) {
        self.calls.push(Call::SetTextColor(color));
    }

    fn measure_text(&self, text: &str, origin: Point) -> Rectangle {
        let scale = u32::from(self.scale.max(1));
        let size = Size::new(
            GLYPH_WIDTH * scale * text.chars().count() as u32,
            GLYPH_HEIGHT * scale,
        );
        let top_left = if self.font {
            origin - Point::new(0, size.height as i32)
        } else {
            origin
        };
        Rectangle::new(top_left, size)
    }

    fn set_cursor(&mut self, position: Point) {
        self.calls.push(Call::SetCursor(position));
    }

    fn draw_text(&mut self, text: &str) -> Result<(), Self::Error> {
        if core::mem::take(&mut self.fail_next_text) {
            return Err(SurfaceFault);
        }
        self.calls.push(Call::DrawText(text.to_string()));
        Ok(())
    }
}
