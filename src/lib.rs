//! Retained-mode widget layer for pixel-addressable display panels.
//!
//! A [`Screen`](ui::Screen) owns a tree of elements (icons, frames, labels,
//! bound values, progress bars) and a [`Surface`](surface::Surface) to draw on.
//! The host calls [`Screen::refresh`](ui::Screen::refresh) once per frame and
//! every element decides for itself whether anything has to be re-sent to the
//! panel, so slow buses only carry pixels that actually changed.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod config;
pub mod surface;
pub mod ui;

pub use config::ScreenConfig;
pub use surface::{GraphicsSurface, Surface};
pub use ui::{Binding, NodeId, Screen, Widget, WidgetError, WidgetResult};
