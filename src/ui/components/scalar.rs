// src/ui/components/scalar.rs
//! Labels bound to a single primitive value

use core::fmt::{self, Write};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::{debug, warn};

use crate::surface::Surface;
use crate::ui::binding::Binding;
use crate::ui::components::label::{LabelText, TextOptions};
use crate::ui::core::{Control, ElementState, Placement};

/// Capacity of the scratch buffer a value is formatted into.
pub const VALUE_TEXT_CAPACITY: usize = 48;

/// Decimal places used by [`BoundFloat`] unless configured otherwise.
pub const DEFAULT_DECIMALS: u8 = 2;

pub type ValueText = heapless::String<VALUE_TEXT_CAPACITY>;

/// A primitive that can be shown by a [`BoundScalar`].
///
/// Change detection uses `PartialEq`, so floats are compared exactly.
pub trait ScalarValue: Copy + PartialEq {
    fn write_value(&self, out: &mut ValueText, decimals: u8) -> fmt::Result;
}

impl ScalarValue for i32 {
    fn write_value(&self, out: &mut ValueText, _decimals: u8) -> fmt::Result {
        write!(out, "{self}")
    }
}

impl ScalarValue for f32 {
    fn write_value(&self, out: &mut ValueText, decimals: u8) -> fmt::Result {
        write!(out, "{:.*}", usize::from(decimals), self)
    }
}

impl ScalarValue for char {
    fn write_value(&self, out: &mut ValueText, _decimals: u8) -> fmt::Result {
        out.write_char(*self)
    }
}

/// Label showing a bound primitive, repainted only when the value changes.
///
/// # Examples
/// ```ignore
/// let rpm = Binding::new(0);
/// let label = BoundNumeric::new(Point::new(300, 40), WHITE)
///     .with_alignment(Alignment::Right)
///     .with_suffix(" rpm")
///     .bound_to(rpm.clone());
/// ```
#[derive(Clone)]
pub struct BoundScalar<T> {
    placement: Placement,
    text: LabelText,
    source: Option<Binding<T>>,
    last: Option<T>,
    decimals: u8,
}

/// Integer label.
pub type BoundNumeric = BoundScalar<i32>;

/// Fixed-point float label.
pub type BoundFloat = BoundScalar<f32>;

/// Single character label.
pub type BoundChar = BoundScalar<char>;

impl<T: ScalarValue> BoundScalar<T> {
    /// An unbound label. It draws nothing until [`bound_to`](Self::bound_to)
    /// supplies a value.
    pub fn new(anchor: Point, foreground: Rgb565) -> Self {
        Self {
            placement: Placement::anchored(anchor, foreground),
            text: LabelText::default(),
            source: None,
            last: None,
            decimals: DEFAULT_DECIMALS,
        }
    }

    pub fn bound_to(mut self, source: Binding<T>) -> Self {
        self.source = Some(source);
        self
    }

    /// Value shown by the last repaint.
    pub fn last_value(&self) -> Option<T> {
        self.last
    }

    pub fn label_text(&self) -> &LabelText {
        &self.text
    }
}

impl BoundScalar<f32> {
    /// Number of digits printed after the decimal point.
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }
}

impl<T: ScalarValue> TextOptions for BoundScalar<T> {
    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn text_mut(&mut self) -> &mut LabelText {
        &mut self.text
    }
}

impl<T: ScalarValue> Control for BoundScalar<T> {
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
        let Some(value) = source.try_with(|value| *value) else {
            debug!("Bound value is being written, skipping this frame");
            return Ok(());
        };

        if state.drawn && self.last == Some(value) {
            return Ok(());
        }

        let mut formatted = ValueText::new();
        if value.write_value(&mut formatted, self.decimals).is_err() {
            warn!("Bound value truncated to {} bytes", VALUE_TEXT_CAPACITY);
        }

        self.text.print(state, surface, &formatted, state.drawn)?;
        self.last = Some(value);
        state.mark_drawn();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recorder::RecordingSurface;
    use embedded_graphics::primitives::Rectangle;
    use embedded_graphics::text::Alignment;

    fn state_for(placement: &Placement) -> ElementState {
        let owner = ElementState::new(
            Rectangle::new(Point::new(0, 0), Size::zero()),
            Rgb565::WHITE,
            Rgb565::BLACK,
            Alignment::Left,
        );
        placement.resolve(&owner)
    }

    #[test]
    fn test_unchanged_value_emits_no_calls() {
        let value = Binding::new(42);
        let mut label = BoundNumeric::new(Point::new(1, 1), Rgb565::WHITE).bound_to(value.clone());
        let mut state = state_for(label.placement());
        let mut surface = RecordingSurface::new();

        label.redraw(&mut state, &mut surface).unwrap();
        assert_eq!(surface.texts(), ["42"]);
        surface.take();

        label.redraw(&mut state, &mut surface).unwrap();
        label.redraw(&mut state, &mut surface).unwrap();
        assert!(surface.calls.is_empty());

        value.set(-7);
        label.redraw(&mut state, &mut surface).unwrap();
        assert_eq!(surface.texts(), ["-7"]);
        assert_eq!(label.last_value(), Some(-7));
    }

    #[test]
    fn test_float_uses_fixed_decimals() {
        let value = Binding::new(3.14159_f32);
        let mut label = BoundFloat::new(Point::zero(), Rgb565::WHITE)
            .with_suffix(" V")
            .bound_to(value.clone());
        let mut state = state_for(label.placement());
        let mut surface = RecordingSurface::new();

        label.redraw(&mut state, &mut surface).unwrap();
        assert_eq!(surface.texts(), ["3.14 V"]);

        let mut precise = BoundFloat::new(Point::zero(), Rgb565::WHITE)
            .with_decimals(0)
            .bound_to(value);
        let mut state = state_for(precise.placement());
        surface.take();
        precise.redraw(&mut state, &mut surface).unwrap();
        assert_eq!(surface.texts(), ["3"]);
    }

    #[test]
    fn test_float_comparison_is_exact() {
        let value = Binding::new(1.0_f32);
        let mut label = BoundFloat::new(Point::zero(), Rgb565::WHITE).bound_to(value.clone());
        let mut state = state_for(label.placement());
        let mut surface = RecordingSurface::new();

        label.redraw(&mut state, &mut surface).unwrap();
        surface.take();

        // Prints the same text, but the value differs so it repaints.
        value.set(1.0001);
        label.redraw(&mut state, &mut surface).unwrap();
        assert_eq!(surface.texts(), ["1.00"]);
    }

    #[test]
    fn test_unchanged_float_and_char_emit_no_calls() {
        let reading = Binding::new(2.5_f32);
        let mut float = BoundFloat::new(Point::zero(), Rgb565::WHITE).bound_to(reading.clone());
        let mut float_state = state_for(float.placement());
        let glyph = Binding::new('x');
        let mut char_label = BoundChar::new(Point::new(0, 20), Rgb565::WHITE).bound_to(glyph.clone());
        let mut char_state = state_for(char_label.placement());
        let mut surface = RecordingSurface::new();

        float.redraw(&mut float_state, &mut surface).unwrap();
        char_label.redraw(&mut char_state, &mut surface).unwrap();
        assert_eq!(surface.texts(), ["2.50", "x"]);
        surface.take();

        reading.set(2.5);
        glyph.set('x');
        float.redraw(&mut float_state, &mut surface).unwrap();
        char_label.redraw(&mut char_state, &mut surface).unwrap();
        assert!(surface.calls.is_empty());
        assert_eq!(float.last_value(), Some(2.5));
        assert_eq!(char_label.last_value(), Some('x'));
    }

    #[test]
    fn test_char_label() {
        let value = Binding::new('A');
        let mut label = BoundChar::new(Point::zero(), Rgb565::WHITE)
            .with_prefix("[")
            .with_suffix("]")
            .bound_to(value.clone());
        let mut state = state_for(label.placement());
        let mut surface = RecordingSurface::new();

        label.redraw(&mut state, &mut surface).unwrap();
        value.set('B');
        label.redraw(&mut state, &mut surface).unwrap();
        assert_eq!(surface.texts(), ["[A]", "[B]"]);
    }

    #[test]
    fn test_hidden_or_unbound_is_silent() {
        let mut unbound = BoundNumeric::new(Point::zero(), Rgb565::WHITE);
        let mut state = state_for(unbound.placement());
        let mut surface = RecordingSurface::new();
        unbound.redraw(&mut state, &mut surface).unwrap();

        let mut hidden = BoundNumeric::new(Point::zero(), Rgb565::WHITE).bound_to(Binding::new(1));
        let mut hidden_state = state_for(hidden.placement());
        hidden_state.hide();
        hidden.redraw(&mut hidden_state, &mut surface).unwrap();

        assert!(surface.calls.is_empty());
        assert!(!state.is_drawn());
        assert!(!hidden_state.is_drawn());
    }

    #[test]
    fn test_foreground_change_repaints_same_value() {
        let mut label = BoundNumeric::new(Point::zero(), Rgb565::WHITE).bound_to(Binding::new(5));
        let mut state = state_for(label.placement());
        let mut surface = RecordingSurface::new();

        label.redraw(&mut state, &mut surface).unwrap();
        surface.take();

        state.set_foreground(Rgb565::RED);
        label.redraw(&mut state, &mut surface).unwrap();
        assert_eq!(surface.texts(), ["5"]);
    }
}
