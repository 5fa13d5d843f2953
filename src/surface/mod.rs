//! Drawing capability consumed by the widget tree.
//!
//! The widget layer never touches pixels itself. Everything it paints goes
//! through the [`Surface`] trait, which mirrors the small set of primitives a
//! panel driver offers: rectangle fill/stroke, bitmap blits and cursor-based
//! text output with measurement.
//!
//! [`GraphicsSurface`] implements the trait for any embedded-graphics
//! `DrawTarget<Color = Rgb565>`.

mod graphics;

#[cfg(test)]
pub(crate) mod recorder;

pub use graphics::{DEFAULT_FONT, GraphicsSurface};

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Font handle accepted by [`Surface::set_font`].
///
/// `None` selects the surface's built-in default font, which is drawn
/// top-anchored at the cursor. A selected font is drawn baseline-anchored.
pub type Font = Option<&'static MonoFont<'static>>;

/// Pixel drawing primitives provided by the display driver.
pub trait Surface {
    /// Error reported by the underlying panel.
    type Error;

    /// Fill `area` with a solid colour.
    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), Self::Error>;

    /// Stroke a single-pixel outline along the inside edge of `area`.
    fn draw_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), Self::Error>;

    /// Blit a 1-bit bitmap. Set bits are drawn in `color`, clear bits are left
    /// untouched. Rows are padded to whole bytes, most significant bit first.
    fn draw_bitmap(
        &mut self,
        top_left: Point,
        bitmap: &[u8],
        size: Size,
        color: Rgb565,
    ) -> Result<(), Self::Error>;

    /// Blit a full-colour bitmap of raw RGB565 words in row-major order.
    fn draw_color_bitmap(
        &mut self,
        top_left: Point,
        bitmap: &[u16],
        size: Size,
    ) -> Result<(), Self::Error>;

    fn set_font(&mut self, font: Font);

    /// Integer magnification applied to text. `0` is treated as `1`.
    fn set_text_size(&mut self, scale: u8);

    fn set_text_color(&mut self, color: Rgb565);

    /// Bounding box `text` would cover if drawn with the cursor at `origin`,
    /// using the current font and text size.
    fn measure_text(&self, text: &str, origin: Point) -> Rectangle;

    fn set_cursor(&mut self, position: Point);

    /// Draw `text` at the cursor and advance the cursor past it.
    fn draw_text(&mut self, text: &str) -> Result<(), Self::Error>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    type Error = S::Error;

    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), Self::Error> {
        (**self).fill_rect(area, color)
    }

    fn draw_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), Self::Error> {
        (**self).draw_rect(area, color)
    }

    fn draw_bitmap(
        &mut self,
        top_left: Point,
        bitmap: &[u8],
        size: Size,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        (**self).draw_bitmap(top_left, bitmap, size, color)
    }

    fn draw_color_bitmap(
        &mut self,
        top_left: Point,
        bitmap: &[u16],
        size: Size,
    ) -> Result<(), Self::Error> {
        (**self).draw_color_bitmap(top_left, bitmap, size)
    }

    fn set_font(&mut self, font: Font) {
        (**self).set_font(font)
    }

    fn set_text_size(&mut self, scale: u8) {
        (**self).set_text_size(scale)
    }

    fn set_text_color(&mut self, color: Rgb565) {
        (**self).set_text_color(color)
    }

    fn measure_text(&self, text: &str, origin: Point) -> Rectangle {
        (**self).measure_text(text, origin)
    }

    fn set_cursor(&mut self, position: Point) {
        (**self).set_cursor(position)
    }

    fn draw_text(&mut self, text: &str) -> Result<(), Self::Error> {
        (**self).draw_text(text)
    }
}
