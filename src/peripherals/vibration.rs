//! Vibration patterns handed to the host's vibration motor.

/// Alternating on/off durations in milliseconds, starting with "on".
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VibePattern {
    pub durations: &'static [u32],
}

/// Three short pulses played when the phone connects or disconnects.
pub const CONNECTION_ALERT: VibePattern = VibePattern {
    durations: &[100, 75, 100, 75, 100],
};

impl VibePattern {
    /// Number of times the motor switches on.
    pub fn pulses(&self) -> usize {
        (self.durations.len() + 1) / 2
    }

    /// Duration of the whole pattern in ms.
    pub fn total_ms(&self) -> u32 {
        self.durations.iter().sum()
    }
}
