// src/ui/mod.rs
//! Retained widget tree with partial redraw
//!
//! This module provides:
//! - [`Screen`], the element tree bound to a drawing surface
//! - Static widgets (icons, bitmaps, frames, fixed labels) that draw once
//! - Bound widgets (labels, scalars, progress bars) that poll a [`Binding`]
//!   and repaint only what changed
//! - Visibility and drawn-state tracking shared by every element

pub mod binding;
pub mod components;
pub mod core;
pub mod elements;
mod error;
pub mod geometry;
pub mod screen;

pub use self::core::{Control, ElementState, NodeId, Placement};
pub use binding::Binding;
pub use components::{
    Bitmap, BoundBar, BoundChar, BoundFloat, BoundLabel, BoundNumeric, BoundScalar, Frame, Group,
    Icon, LabelText, ScalarValue, StaticLabel, TextOptions,
};
pub use elements::{Element, Widget};
pub use error::{WidgetError, WidgetResult};
pub use screen::Screen;
