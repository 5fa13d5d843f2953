// src/ui/components/bar.rs
//! Horizontal progress bar bound to an integer value
//!
//! After the first paint the bar only repaints the columns between the old
//! and the new fill front, so an update costs pixels proportional to the
//! change rather than to the bar width. This is what keeps frequently
//! updated gauges cheap on slow SPI links.

use core::ops::Range;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;
use log::{debug, trace};

use crate::surface::Surface;
use crate::ui::binding::Binding;
use crate::ui::core::{Control, ElementState, Placement};
use crate::ui::geometry::{concentric_outlines, fill_area, horizontal_span, inset};

/// Progress bar filling its interior in proportion to a bound value.
///
/// Left alignment grows the fill rightwards from the left edge; right
/// alignment grows it leftwards from the right edge.
///
/// # Examples
/// ```ignore
/// let level = Binding::new(0);
/// let bar = BoundBar::new(
///     Rectangle::new(Point::new(10, 200), Size::new(102, 12)),
///     1,
///     COLOR_ACCENT,
///     0,
///     100,
/// )
/// .bound_to(level.clone());
/// ```
#[derive(Debug, Clone)]
pub struct BoundBar {
    placement: Placement,
    thickness: u32,
    min: i32,
    max: i32,
    source: Option<Binding<i32>>,
    last_value: i32,
    /// Fill front, in pixels from the interior's left edge.
    last_pos: i32,
}

impl BoundBar {
    /// An unbound bar with a `thickness`-pixel border showing `[min, max]`.
    pub fn new(bounds: Rectangle, thickness: u32, foreground: Rgb565, min: i32, max: i32) -> Self {
        Self {
            placement: Placement::new(bounds, foreground),
            thickness,
            min,
            max,
            source: None,
            last_value: min,
            last_pos: 0,
        }
    }

    pub fn bound_to(mut self, source: Binding<i32>) -> Self {
        self.source = Some(source);
        self
    }

    /// Fill direction: `Right` grows from the right edge.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.placement.alignment = alignment;
        self
    }

    /// Fill front after the last repaint, from the interior's left edge.
    pub fn fill_position(&self) -> i32 {
        self.last_pos
    }

    fn clamp(&self, value: i32) -> i32 {
        // Not `Ord::clamp`: an inverted range must not panic.
        let value = if value > self.max { self.max } else { value };
        if value < self.min { self.min } else { value }
    }

    /// Filled width for `value`, rounded down.
    fn position(&self, value: i32, inner_width: i32) -> i32 {
        let range = i64::from(self.max) - i64::from(self.min);
        let offset = i64::from(value) - i64::from(self.min);
        (i64::from(inner_width) * offset / range) as i32
    }
}

impl Control for BoundBar {
    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn redraw<S: Surface>(
        &mut self,
        state: &mut ElementState,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        if !state.visible || self.min == self.max {
            return Ok(());
        }
        let Some(source) = &self.source else {
            return Ok(());
        };
        let Some(raw) = source.try_with(|value| *value) else {
            debug!("Bar value is being written, skipping this frame");
            return Ok(());
        };

        let value = self.clamp(raw);
        if state.drawn && value == self.last_value {
            return Ok(());
        }

        let interior = inset(state.bounds, self.thickness);
        let inner_width = interior.size.width as i32;
        let right = state.alignment == Alignment::Right;

        if !state.drawn {
            for outline in concentric_outlines(state.bounds, self.thickness) {
                surface.draw_rect(outline, state.foreground)?;
            }
            self.last_pos = if right { inner_width } else { 0 };
        }

        let mut pos = self.position(value, inner_width);
        let last = self.last_pos;

        // The fill front moves towards the origin when right-aligned, so
        // growing uncovers background and shrinking paints foreground.
        let (columns, color): (Range<i32>, Rgb565) = if right {
            pos = inner_width - pos;
            if pos > last {
                (last..pos, state.background)
            } else {
                (pos..last, state.foreground)
            }
        } else if pos > last {
            (last..pos, state.foreground)
        } else {
            (pos..last, state.background)
        };

        trace!("Bar {} -> {}, repainting columns {:?}", last, pos, columns);
        fill_area(
            surface,
            horizontal_span(interior, columns.start, columns.end),
            color,
        )?;

        self.last_pos = pos;
        self.last_value = value;
        state.mark_drawn();
        Ok(())
    }
}
