//! Status colours for connection and battery state.
//!
//! Colours are a pure function of the latest readings. There is no
//! hysteresis, a charge level hovering around a threshold changes colour on
//! every redraw.

use embedded_graphics::pixelcolor::Rgb565;

use crate::{BatteryInfo, Error, Palette};

/// Charge at or below which the battery is critical.
pub const CRITICAL_PERCENT: u8 = 10;
/// Charge at or below which the battery is low.
pub const LOW_PERCENT: u8 = 30;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusColors {
    /// Dial face colour
    pub connection: Rgb565,
    /// Time text box colour
    pub battery: Rgb565,
}

impl Palette {
    pub fn connection_color(&self, connected: bool) -> Rgb565 {
        if connected {
            self.connected
        } else {
            self.disconnected
        }
    }

    pub fn battery_color(&self, battery: &BatteryInfo) -> Rgb565 {
        let percent = battery.percent();
        if battery.is_charging() {
            if percent == 100 {
                self.battery_full
            } else {
                self.battery_charging
            }
        } else if percent <= CRITICAL_PERCENT {
            self.battery_critical
        } else if percent <= LOW_PERCENT {
            self.battery_low
        } else {
            self.battery_normal
        }
    }

    pub fn status_colors(&self, connected: bool, battery: &BatteryInfo) -> StatusColors {
        StatusColors {
            connection: self.connection_color(connected),
            battery: self.battery_color(battery),
        }
    }
}

/// Pick the connection and battery colours from the stock palette.
pub fn select_status_colors(
    connected: bool,
    is_charging: bool,
    charge_percent: u8,
) -> Result<StatusColors, Error> {
    let battery = BatteryInfo::new(is_charging, charge_percent)?;
    Ok(Palette::default().status_colors(connected, &battery))
}
