// src/ui/components/label.rs
//! Text widgets and the erase-then-redraw protocol they share
//!
//! A label never knows what is under its text, so every repaint first clears
//! the box it painted last time (the *erase extent*) with the background
//! colour and then draws the new text at a cursor derived from alignment.

use alloc::string::String;
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;
use log::{debug, trace};

use crate::surface::{Font, Surface};
use crate::ui::binding::Binding;
use crate::ui::core::{Control, ElementState, Placement};
use crate::ui::geometry::{alignment_offset, cursor_nudge, fill_area};

/// Font, size, affixes and erase extent of a text widget.
#[derive(Clone)]
pub struct LabelText {
    font: Font,
    text_size: u8,
    prefix: Option<&'static str>,
    suffix: Option<&'static str>,
    /// Box painted by the last print; `None` until then.
    extent: Option<Rectangle>,
}

impl Default for LabelText {
    fn default() -> Self {
        Self {
            font: None,
            text_size: 1,
            prefix: None,
            suffix: None,
            extent: None,
        }
    }
}

impl LabelText {
    /// Box the next print will erase. Before the first print this is the
    /// element's nominal box.
    pub fn erase_extent(&self, state: &ElementState) -> Rectangle {
        self.extent.unwrap_or(state.bounds)
    }

    fn compose(&self, value: &str) -> String {
        let mut text = String::new();
        if let Some(prefix) = self.prefix {
            text.push_str(prefix);
        }
        text.push_str(value);
        if let Some(suffix) = self.suffix {
            text.push_str(suffix);
        }
        text
    }

    /// Erase what was painted last time and draw `prefix + value + suffix`.
    ///
    /// An empty composed string only clears the old extent, and only when
    /// `erase` is set. It leaves the extent in place and draws nothing; the
    /// calling widget still owns the drawn flag.
    pub(crate) fn print<S: Surface>(
        &mut self,
        state: &ElementState,
        surface: &mut S,
        value: &str,
        erase: bool,
    ) -> Result<(), S::Error> {
        let text = self.compose(value);
        let previous = self.erase_extent(state);

        if text.is_empty() {
            if erase {
                trace!("Clearing empty label at {:?}", previous);
                fill_area(surface, previous, state.background)?;
            }
            return Ok(());
        }

        surface.set_font(self.font);
        surface.set_text_size(self.text_size);
        surface.set_text_color(state.foreground);

        let measured = surface.measure_text(&text, Point::zero());

        let fonted = self.font.is_some();
        let nudge = cursor_nudge(state.alignment, fonted);
        let offset = alignment_offset(state.alignment, measured.size.width, nudge);
        let height_offset = if fonted {
            measured.size.height as i32
        } else {
            0
        };

        let anchor = state.bounds.top_left;
        let cursor = Point::new(anchor.x - offset, anchor.y + height_offset);

        surface.set_cursor(cursor);
        fill_area(surface, previous, state.background)?;
        surface.draw_text(&text)?;

        self.extent = Some(Rectangle::new(measured.top_left + cursor, measured.size));
        Ok(())
    }
}

/// Builder options shared by all text widgets.
pub trait TextOptions: Sized {
    fn placement_mut(&mut self) -> &mut Placement;

    fn text_mut(&mut self) -> &mut LabelText;

    /// Draw with `font` instead of the surface's default font.
    fn with_font(mut self, font: &'static MonoFont<'static>) -> Self {
        self.text_mut().font = Some(font);
        self
    }

    /// Integer text magnification (defaults to 1).
    fn with_text_size(mut self, text_size: u8) -> Self {
        self.text_mut().text_size = text_size;
        self
    }

    fn with_prefix(mut self, prefix: &'static str) -> Self {
        self.text_mut().prefix = Some(prefix);
        self
    }

    fn with_suffix(mut self, suffix: &'static str) -> Self {
        self.text_mut().suffix = Some(suffix);
        self
    }

    /// Which side of the text sits on the anchor point.
    fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.placement_mut().alignment = alignment;
        self
    }
}

/// Fixed text, drawn once.
///
/// # Examples
/// ```ignore
/// let title = StaticLabel::new(Point::new(160, 4), "Pressure", WHITE)
///     .with_font(&FONT_10X20)
///     .with_alignment(Alignment::Center);
/// ```
#[derive(Clone)]
pub struct StaticLabel {
    placement: Placement,
    text: LabelText,
    content: &'static str,
}

impl StaticLabel {
    pub fn new(anchor: Point, content: &'static str, foreground: Rgb565) -> Self {
        Self {
            placement: Placement::anchored(anchor, foreground),
            text: LabelText::default(),
            content,
        }
    }

    pub fn content(&self) -> &'static str {
        self.content
    }

    pub fn label_text(&self) -> &LabelText {
        &self.text
    }
}

impl TextOptions for StaticLabel {
    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn text_mut(&mut self) -> &mut LabelText {
        &mut self.text
    }
}

impl Control for StaticLabel {
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

        self.text.print(state, surface, self.content, false)?;
        state.mark_drawn();
        Ok(())
    }
}

/// Text bound to a host-owned string; repaints whenever the string changes.
#[derive(Clone)]
pub struct BoundLabel {
    placement: Placement,
    text: LabelText,
    source: Option<Binding<String>>,
    last: String,
}

impl BoundLabel {
    /// An unbound label. It draws nothing until [`bound_to`](Self::bound_to)
    /// supplies a value.
    pub fn new(anchor: Point, foreground: Rgb565) -> Self {
        Self {
            placement: Placement::anchored(anchor, foreground),
            text: LabelText::default(),
            source: None,
            last: String::new(),
        }
    }

    pub fn bound_to(mut self, source: Binding<String>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn label_text(&self) -> &LabelText {
        &self.text
    }
}

impl TextOptions for BoundLabel {
    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn text_mut(&mut self) -> &mut LabelText {
        &mut self.text
    }
}

impl Control for BoundLabel {
    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn redraw<S: Surface>(
        &mut self,
        state: &mut ElementState,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        if !state.visible {
            return Ok(());
        }
        let Some(source) = &self.source else {
            return Ok(());
        };

        let drawn = state.drawn;
        let last = &self.last;
        let changed = source.try_with(|value| {
            if drawn && value == last {
                None
            } else {
                Some(value.clone())
            }
        });

        let current = match changed {
            Some(Some(current)) => current,
            Some(None) => return Ok(()),
            None => {
                debug!("Bound label value is being written, skipping this frame");
                return Ok(());
            }
        };

        self.text.print(state, surface, &current, drawn)?;
        self.last = current;
        state.mark_drawn();
        Ok(())
    }
}
