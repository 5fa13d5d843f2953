// src/ui/components/frame.rs
//! Bordered box and plain grouping container

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::surface::Surface;
use crate::ui::core::{Control, ElementState, Placement};
use crate::ui::geometry::{concentric_outlines, fill_area, inset};

/// Box with a `thickness`-pixel border in the foreground colour and an
/// interior filled with the background colour. Drawn once.
///
/// A thickness of `0` draws a single filled rectangle.
#[derive(Debug, Clone)]
pub struct Frame {
    placement: Placement,
    thickness: u32,
}

impl Frame {
    pub fn new(bounds: Rectangle, thickness: u32, foreground: Rgb565) -> Self {
        Self {
            placement: Placement::new(bounds, foreground),
            thickness,
        }
    }

    /// Interior colour. Defaults to the owner's background; children attached
    /// to the frame inherit it.
    pub fn with_background(mut self, background: Rgb565) -> Self {
        self.placement.background = Some(background);
        self
    }
}

impl Control for Frame {
    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn redraw<S: Surface>(
        &mut self,
        state: &mut ElementState,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        if !state.needs_draw() {
            return Ok(());
        }

        for outline in concentric_outlines(state.bounds, self.thickness) {
            surface.draw_rect(outline, state.foreground)?;
        }
        fill_area(surface, inset(state.bounds, self.thickness), state.background)?;

        state.mark_drawn();
        Ok(())
    }
}

/// Element that draws nothing itself. Used as the tree root and to show or
/// hide a set of children together.
#[derive(Debug, Clone)]
pub struct Group {
    placement: Placement,
}

impl Group {
    /// `origin` offsets every child attached to the group.
    pub fn new(origin: Point) -> Self {
        Self {
            placement: Placement::new(Rectangle::new(origin, Size::zero()), Rgb565::BLACK),
        }
    }

    /// Background handed down to children attached after this call.
    pub fn with_background(mut self, background: Rgb565) -> Self {
        self.placement.background = Some(background);
        self
    }
}

impl Control for Group {
    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn redraw<S: Surface>(
        &mut self,
        _state: &mut ElementState,
        _surface: &mut S,
    ) -> Result<(), S::Error> {
        Ok(())
    }
}
