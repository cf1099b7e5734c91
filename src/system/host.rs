//! Services provided by the watch firmware.

use chrono::NaiveDateTime;

use crate::{BatteryInfo, VibePattern};

/// Queries and actions the host runtime offers the watchface.
///
/// Every query returns the current reading; nothing is cached on this side.
pub trait Host {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Whether the phone app is connected.
    fn is_connected(&self) -> bool;

    /// Current battery state.
    fn battery(&self) -> BatteryInfo;

    /// User preference for 24 hour time display.
    fn is_24h_style(&self) -> bool;

    /// Queue a vibration pattern on the motor.
    fn vibrate(&mut self, pattern: &VibePattern);
}
