// src/ui/core.rs
//! Core element types shared by every widget in the tree

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;

use crate::surface::Surface;

/// Handle to an element attached to a [`Screen`](super::Screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the element in attachment order (the root is `0`).
    pub fn index(self) -> usize {
        self.0
    }
}

/// Construction-time geometry and colours of a widget.
///
/// `bounds` is relative to the owner; it becomes absolute when the widget is
/// attached and never moves afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub bounds: Rectangle,
    pub foreground: Rgb565,
    /// Explicit background. `None` takes the owner's background at attach time.
    pub background: Option<Rgb565>,
    pub alignment: Alignment,
}

impl Placement {
    pub fn new(bounds: Rectangle, foreground: Rgb565) -> Self {
        Self {
            bounds,
            foreground,
            background: None,
            alignment: Alignment::Left,
        }
    }

    /// A zero-sized placement anchored at `anchor`, used by text widgets.
    pub fn anchored(anchor: Point, foreground: Rgb565) -> Self {
        Self::new(Rectangle::new(anchor, Size::zero()), foreground)
    }

    /// Resolve against the owner's state into the element's initial state.
    pub(crate) fn resolve(&self, owner: &ElementState) -> ElementState {
        ElementState::new(
            Rectangle::new(owner.bounds.top_left + self.bounds.top_left, self.bounds.size),
            self.foreground,
            self.background.unwrap_or(owner.background),
            self.alignment,
        )
    }
}

/// Runtime state common to all elements: absolute box, colours, visibility
/// and the drawn flag.
///
/// `drawn == false` is the only signal that forces an element to repaint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementState {
    pub(crate) bounds: Rectangle,
    pub(crate) foreground: Rgb565,
    pub(crate) background: Rgb565,
    pub(crate) alignment: Alignment,
    pub(crate) visible: bool,
    pub(crate) drawn: bool,
}

impl ElementState {
    pub(crate) fn new(
        bounds: Rectangle,
        foreground: Rgb565,
        background: Rgb565,
        alignment: Alignment,
    ) -> Self {
        Self {
            bounds,
            foreground,
            background,
            alignment,
            visible: true,
            drawn: false,
        }
    }

    /// Absolute position and nominal size.
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn foreground(&self) -> Rgb565 {
        self.foreground
    }

    pub fn background(&self) -> Rgb565 {
        self.background
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the panel currently shows this element's last content.
    pub fn is_drawn(&self) -> bool {
        self.drawn
    }

    /// Visible and not yet drawn.
    pub(crate) fn needs_draw(&self) -> bool {
        self.visible && !self.drawn
    }

    pub(crate) fn mark_drawn(&mut self) {
        self.drawn = true;
    }

    pub(crate) fn invalidate(&mut self) {
        self.drawn = false;
    }

    pub(crate) fn show(&mut self) {
        self.visible = true;
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
        self.drawn = false;
    }

    /// Store a new foreground colour. Returns `true` if it changed, in which
    /// case the element will repaint on the next refresh.
    pub(crate) fn set_foreground(&mut self, foreground: Rgb565) -> bool {
        if foreground == self.foreground {
            return false;
        }
        self.foreground = foreground;
        self.drawn = false;
        true
    }
}

/// Behaviour every widget variant provides to the tree.
///
/// `redraw` is generic over the [`Surface`], which makes this trait
/// not object-safe; the tree stores widgets as the closed
/// [`Widget`](super::Widget) enum instead.
pub trait Control {
    fn placement(&self) -> &Placement;

    /// Paint whatever is out of date. Each implementation checks visibility
    /// and its own change detection; a call may emit no drawing at all.
    fn redraw<S: Surface>(
        &mut self,
        state: &mut ElementState,
        surface: &mut S,
    ) -> Result<(), S::Error>;
}
