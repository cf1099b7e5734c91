//! Host-reported device state consumed by the watchface.

pub mod battery;
pub mod vibration;
