use core::fmt;

/// Contract violations reported by the watchface core.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Hour outside 0–23 or minute outside 0–59.
    InvalidTime,
    /// Zero radius or hand length, or a hand that would overdraw the dial border.
    InvalidGeometry,
    /// Battery charge above 100 %.
    InvalidChargePercent,
    /// Text did not fit its buffer.
    Format,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTime => f.write_str("time out of range"),
            Error::InvalidGeometry => f.write_str("hand does not fit inside the dial"),
            Error::InvalidChargePercent => f.write_str("charge percent above 100"),
            Error::Format => f.write_str("text buffer too small"),
        }
    }
}
