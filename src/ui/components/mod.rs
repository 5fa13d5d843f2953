// src/ui/components/mod.rs
//! Widget library

pub mod bar;
pub mod frame;
pub mod image;
pub mod label;
pub mod scalar;

pub use bar::BoundBar;
pub use frame::{Frame, Group};
pub use image::{Bitmap, Icon};
pub use label::{BoundLabel, LabelText, StaticLabel, TextOptions};
pub use scalar::{BoundChar, BoundFloat, BoundNumeric, BoundScalar, ScalarValue};
