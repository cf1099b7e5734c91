//! UI definitions module

use chrono::NaiveDateTime;
use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb565};

use crate::{system::config::WatchfaceConfig, BatteryInfo, Error, Host, WallClock};

pub mod default_watchface;
pub mod event;
pub mod hands;
pub mod status;

pub trait WatchFace: Sized {
    /// Create new watchface
    fn new(config: WatchfaceConfig, state: &WatchFaceState) -> Result<Self, Error>;

    /// Update watchface with state
    fn update(&mut self, state: &WatchFaceState) -> Result<(), Error>;

    /// Paint the whole face
    fn draw<D>(&self, state: &WatchFaceState, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>;
}

/// State for the watch face, sampled from the host at the start of each callback
// No `defmt::Format`: chrono's `NaiveDateTime` does not implement it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WatchFaceState {
    pub time: NaiveDateTime,
    pub connected: bool,
    pub battery: BatteryInfo,
    pub clock_24h: bool,
}

impl WatchFaceState {
    /// Take a fresh snapshot of everything the face depends on.
    pub fn sample<H: Host>(host: &H) -> Self {
        Self {
            time: host.now(),
            connected: host.is_connected(),
            battery: host.battery(),
            clock_24h: host.is_24h_style(),
        }
    }

    pub fn wall_clock(&self) -> WallClock {
        WallClock::from_datetime(&self.time)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Fakes shared by the UI tests.

    use chrono::{NaiveDate, NaiveDateTime};
    use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

    use crate::{BatteryInfo, Host, VibePattern};

    pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    pub struct FakeHost {
        pub time: NaiveDateTime,
        pub connected: bool,
        pub battery: BatteryInfo,
        pub clock_24h: bool,
        pub vibrations: Vec<VibePattern>,
    }

    impl Default for FakeHost {
        fn default() -> Self {
            Self {
                time: at(10, 8),
                connected: true,
                battery: BatteryInfo::new(false, 80).unwrap(),
                clock_24h: true,
                vibrations: Vec::new(),
            }
        }
    }

    impl Host for FakeHost {
        fn now(&self) -> NaiveDateTime {
            self.time
        }

        fn is_connected(&self) -> bool {
            self.connected
        }

        fn battery(&self) -> BatteryInfo {
            self.battery
        }

        fn is_24h_style(&self) -> bool {
            self.clock_24h
        }

        fn vibrate(&mut self, pattern: &VibePattern) {
            self.vibrations.push(*pattern);
        }
    }

    /// Plain framebuffer to render into.
    pub struct FrameBuffer {
        size: Size,
        pixels: Vec<Rgb565>,
    }

    impl FrameBuffer {
        pub fn new(size: Size) -> Self {
            Self {
                size,
                pixels: vec![Rgb565::new(1, 2, 3); (size.width * size.height) as usize],
            }
        }

        pub fn pixel(&self, x: i32, y: i32) -> Rgb565 {
            self.pixels[(y as u32 * self.size.width + x as u32) as usize]
        }

        pub fn count(&self, color: Rgb565) -> usize {
            self.pixels.iter().filter(|&&c| c == color).count()
        }
    }

    impl OriginDimensions for FrameBuffer {
        fn size(&self) -> Size {
            self.size
        }
    }

    impl DrawTarget for FrameBuffer {
        type Color = Rgb565;
        type Error = core::convert::Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if point.x >= 0
                    && point.y >= 0
                    && (point.x as u32) < self.size.width
                    && (point.y as u32) < self.size.height
                {
                    let index = (point.y as u32 * self.size.width + point.x as u32) as usize;
                    self.pixels[index] = color;
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{at, FakeHost};
    use super::*;

    #[test]
    fn sample_reads_every_query() {
        let host = FakeHost {
            time: at(23, 59),
            connected: false,
            battery: BatteryInfo::new(true, 42).unwrap(),
            clock_24h: false,
            ..Default::default()
        };
        let state = WatchFaceState::sample(&host);
        assert_eq!(state.time, at(23, 59));
        assert!(!state.connected);
        assert_eq!(state.battery.percent(), 42);
        assert!(!state.clock_24h);
        assert_eq!(state.wall_clock(), WallClock::new(23, 59).unwrap());
    }
}
