//! Battery charge state as reported by the host.

use crate::Error;

/// Snapshot of the battery state.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatteryInfo {
    /// Charging state
    charging: bool,
    /// Battery percentage (0–100)
    percent: u8,
}

impl BatteryInfo {
    /// Create a new battery snapshot, rejecting charge levels above 100 %.
    pub fn new(charging: bool, percent: u8) -> Result<Self, Error> {
        if percent > 100 {
            return Err(Error::InvalidChargePercent);
        }
        Ok(Self { charging, percent })
    }

    /// Whether the watch is currently on the charger.
    pub fn is_charging(&self) -> bool {
        self.charging
    }

    /// Battery capacity in percent.
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Charging and at 100 %.
    pub fn is_full(&self) -> bool {
        self.charging && self.percent == 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        assert_eq!(BatteryInfo::new(false, 0).map(|b| b.percent()), Ok(0));
        assert_eq!(BatteryInfo::new(true, 100).map(|b| b.percent()), Ok(100));
    }

    #[test]
    fn rejects_over_hundred() {
        assert_eq!(BatteryInfo::new(false, 101), Err(Error::InvalidChargePercent));
        assert_eq!(BatteryInfo::new(true, 255), Err(Error::InvalidChargePercent));
    }

    #[test]
    fn full_needs_charger() {
        assert!(BatteryInfo::new(true, 100).unwrap().is_full());
        assert!(!BatteryInfo::new(false, 100).unwrap().is_full());
        assert!(!BatteryInfo::new(true, 99).unwrap().is_full());
    }
}
