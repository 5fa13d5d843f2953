// src/ui/components/image.rs
//! Static bitmap widgets

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::surface::Surface;
use crate::ui::core::{Control, ElementState, Placement};
use crate::ui::{WidgetError, WidgetResult};

/// Bytes needed for a 1-bit bitmap of `size` with byte-padded rows.
pub fn mono_bitmap_len(size: Size) -> usize {
    size.width.div_ceil(8) as usize * size.height as usize
}

/// Single-colour icon from a 1-bit bitmap, drawn once.
///
/// An empty bitmap is allowed and draws nothing.
#[derive(Debug, Clone)]
pub struct Icon {
    placement: Placement,
    bitmap: &'static [u8],
}

impl Icon {
    pub fn new(bounds: Rectangle, bitmap: &'static [u8], foreground: Rgb565) -> WidgetResult<Self> {
        let expected = mono_bitmap_len(bounds.size);
        if !bitmap.is_empty() && bitmap.len() < expected {
            return Err(WidgetError::BitmapTooSmall {
                expected,
                actual: bitmap.len(),
            });
        }

        Ok(Self {
            placement: Placement::new(bounds, foreground),
            bitmap,
        })
    }
}

impl Control for Icon {
    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn redraw<S: Surface>(
        &mut self,
        state: &mut ElementState,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        if self.bitmap.is_empty() || !state.needs_draw() {
            return Ok(());
        }

        surface.draw_bitmap(
            state.bounds.top_left,
            self.bitmap,
            state.bounds.size,
            state.foreground,
        )?;
        state.mark_drawn();
        Ok(())
    }
}

/// Full-colour image from raw RGB565 words, drawn once.
///
/// An empty bitmap is allowed and draws nothing.
#[derive(Debug, Clone)]
pub struct Bitmap {
    placement: Placement,
    pixels: &'static [u16],
}

impl Bitmap {
    pub fn new(bounds: Rectangle, pixels: &'static [u16]) -> WidgetResult<Self> {
        let expected = bounds.size.width as usize * bounds.size.height as usize;
        if !pixels.is_empty() && pixels.len() < expected {
            return Err(WidgetError::BitmapTooSmall {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            placement: Placement::new(bounds, Rgb565::BLACK),
            pixels,
        })
    }
}

impl Control for Bitmap {
    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn redraw<S: Surface>(
        &mut self,
        state: &mut ElementState,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        if self.pixels.is_empty() || !state.needs_draw() {
            return Ok(());
        }

        surface.draw_color_bitmap(state.bounds.top_left, self.pixels, state.bounds.size)?;
        state.mark_drawn();
        Ok(())
    }
}
