//! Digital/analog watchface core.
//!
//! Draws a clock face made of a digital time band, a date badge and an analog
//! dial whose colours follow the connection and battery state. The host
//! firmware provides the clock, connectivity and battery readings through
//! [`Host`] and a [`DrawTarget`](embedded_graphics::draw_target::DrawTarget)
//! to paint on.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

mod error;
pub mod peripherals;
pub mod system;
pub mod ui;

pub use error::Error;
pub use peripherals::{
    battery::BatteryInfo,
    vibration::{VibePattern, CONNECTION_ALERT},
};
pub use system::{
    config::{Layout, Palette, Variant, WatchfaceConfig},
    host::Host,
    time::{format_date, format_time, WallClock},
};
pub use ui::{
    event::{Dirty, Event},
    hands::{compute_hands, AngleFraction, Dial, HandSegment, HandVector},
    status::{select_status_colors, StatusColors},
    default_watchface::DefaultWatchface,
    WatchFace, WatchFaceState,
};
