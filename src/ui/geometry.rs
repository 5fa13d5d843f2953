// src/ui/geometry.rs
//! Alignment and rectangle helpers shared by the widgets

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;

use crate::surface::Surface;

/// Extra cursor shift for centred text drawn with a selected font.
pub const FONT_NUDGE_CENTER: i32 = 3;

/// Extra cursor shift for right-aligned text drawn with a selected font.
pub const FONT_NUDGE_RIGHT: i32 = 6;

/// Horizontal correction for the cursor bias of selected fonts. The default
/// font needs none.
pub fn cursor_nudge(alignment: Alignment, fonted: bool) -> i32 {
    if !fonted {
        return 0;
    }
    match alignment {
        Alignment::Left => 0,
        Alignment::Center => FONT_NUDGE_CENTER,
        Alignment::Right => FONT_NUDGE_RIGHT,
    }
}

/// How far left of the anchor the cursor starts for text `text_width` wide.
pub fn alignment_offset(alignment: Alignment, text_width: u32, nudge: i32) -> i32 {
    match alignment {
        Alignment::Left => nudge,
        Alignment::Center => (text_width / 2) as i32 + nudge,
        Alignment::Right => text_width as i32 + nudge,
    }
}

/// `bounds` shrunk by `amount` pixels on every side.
///
/// An inset past the centre collapses to a zero-sized rectangle; the offset
/// stops growing once it exceeds the larger side.
pub fn inset(bounds: Rectangle, amount: u32) -> Rectangle {
    let longest = bounds.size.width.max(bounds.size.height);
    let offset = i32::try_from(amount.min(longest)).unwrap_or(i32::MAX);
    let shrink = amount.saturating_mul(2);

    Rectangle::new(
        bounds.top_left + Point::new(offset, offset),
        Size::new(
            bounds.size.width.saturating_sub(shrink),
            bounds.size.height.saturating_sub(shrink),
        ),
    )
}

/// The `thickness` one-pixel outlines making up a border, outermost first.
/// Stops at the first ring that has collapsed to nothing.
pub fn concentric_outlines(bounds: Rectangle, thickness: u32) -> impl Iterator<Item = Rectangle> {
    (0..thickness)
        .map(move |ring| inset(bounds, ring))
        .take_while(|outline| !outline.is_zero_sized())
}

/// Full-height slice of `area` covering columns `[from, to)` counted from its
/// left edge.
pub fn horizontal_span(area: Rectangle, from: i32, to: i32) -> Rectangle {
    Rectangle::new(
        area.top_left + Point::new(from, 0),
        Size::new(to.saturating_sub(from).max(0) as u32, area.size.height),
    )
}

/// Fill `area` unless it covers no pixels.
pub fn fill_area<S: Surface>(surface: &mut S, area: Rectangle, color: Rgb565) -> Result<(), S::Error> {
    if area.is_zero_sized() {
        return Ok(());
    }
    surface.fill_rect(area, color)
}
