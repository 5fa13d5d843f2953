//! Screen-wide settings, storable as a postcard blob in flash.

use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ui::{WidgetError, WidgetResult};

/// Root settings of a [`Screen`](crate::ui::Screen).
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScreenConfig {
    /// Root background as a raw RGB565 word; every element inherits it unless
    /// an owner overrides it.
    pub background: u16,
    /// Panel offset added to every element position.
    pub origin_x: i32,
    pub origin_y: i32,
}

impl ScreenConfig {
    pub fn background_color(&self) -> Rgb565 {
        Rgb565::from(RawU16::new(self.background))
    }

    pub fn origin(&self) -> Point {
        Point::new(self.origin_x, self.origin_y)
    }

    pub fn from_bytes(bytes: &[u8]) -> WidgetResult<Self> {
        postcard::from_bytes(bytes).map_err(WidgetError::InvalidConfig)
    }

    pub fn to_vec(&self) -> WidgetResult<Vec<u8>> {
        postcard::to_allocvec(self).map_err(WidgetError::InvalidConfig)
    }
}
