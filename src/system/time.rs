//! Wall clock sampling and time/date text.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::Error;

/// Hour and minute of the local wall clock.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallClock {
    hour: u8,
    minute: u8,
}

impl WallClock {
    /// Create a wall clock from raw values, rejecting hour > 23 or minute > 59.
    pub fn new(hour: u8, minute: u8) -> Result<Self, Error> {
        if hour > 23 || minute > 59 {
            return Err(Error::InvalidTime);
        }
        Ok(Self { hour, minute })
    }

    /// Sample hour and minute from a local date and time.
    pub fn from_datetime(time: &NaiveDateTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Hour on a 12 hour dial (0–11).
    pub fn hour12(&self) -> u8 {
        self.hour % 12
    }
}

/// Write the time as `HH:MM` (24h style) or `hh:MM` (12h style, 01–12).
pub fn format_time<'a>(
    buf: &'a mut [u8],
    time: &NaiveDateTime,
    clock_24h: bool,
) -> Result<&'a str, Error> {
    let hour = if clock_24h {
        time.hour()
    } else {
        time.hour12().1
    };
    format_no_std::show(buf, format_args!("{:02}:{:02}", hour, time.minute()))
        .map_err(|_| Error::Format)
}

/// Write the day of month as `DD`.
pub fn format_date<'a>(buf: &'a mut [u8], time: &NaiveDateTime) -> Result<&'a str, Error> {
    format_no_std::show(buf, format_args!("{:02}", time.day())).map_err(|_| Error::Format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn wall_clock_range() {
        assert!(WallClock::new(0, 0).is_ok());
        assert!(WallClock::new(23, 59).is_ok());
        assert_eq!(WallClock::new(24, 0), Err(Error::InvalidTime));
        assert_eq!(WallClock::new(12, 60), Err(Error::InvalidTime));
    }

    #[test]
    fn wall_clock_from_datetime() {
        let clock = WallClock::from_datetime(&at(3, 17, 42));
        assert_eq!(clock, WallClock::new(17, 42).unwrap());
        assert_eq!(clock.hour12(), 5);
        assert_eq!(WallClock::new(12, 0).unwrap().hour12(), 0);
    }

    #[test]
    fn time_text_24h() {
        let mut buf = [0u8; 8];
        assert_eq!(format_time(&mut buf, &at(3, 0, 5), true), Ok("00:05"));
        assert_eq!(format_time(&mut buf, &at(3, 21, 30), true), Ok("21:30"));
    }

    #[test]
    fn time_text_12h() {
        let mut buf = [0u8; 8];
        assert_eq!(format_time(&mut buf, &at(3, 0, 5), false), Ok("12:05"));
        assert_eq!(format_time(&mut buf, &at(3, 9, 7), false), Ok("09:07"));
        assert_eq!(format_time(&mut buf, &at(3, 21, 30), false), Ok("09:30"));
    }

    #[test]
    fn date_text() {
        let mut buf = [0u8; 4];
        assert_eq!(format_date(&mut buf, &at(3, 12, 0)), Ok("03"));
        assert_eq!(format_date(&mut buf, &at(31, 12, 0)), Ok("31"));
    }

    #[test]
    fn short_buffer() {
        let mut buf = [0u8; 3];
        assert_eq!(format_time(&mut buf, &at(3, 12, 0), true), Err(Error::Format));
    }
}
