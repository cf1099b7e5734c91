//! Clock hand geometry.
//!
//! Positions on the dial are expressed as an [`AngleFraction`] in `[0, 1)`,
//! with 0 pointing to 12 o'clock and increasing values sweeping clockwise.
//! Screen coordinates grow to the right and downwards, so the direction for
//! a fraction `f` is `(sin(2πf), -cos(2πf))`.

use core::f32::consts::TAU;

use embedded_graphics::geometry::Point;

use crate::{system::time::WallClock, Error};

/// Position around the dial in `[0, 1)`.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct AngleFraction(f32);

impl AngleFraction {
    /// Hour hand position for an hour in 0–23. Whole hours only, 12 wraps to 0.
    pub(crate) fn hour(hour: u8) -> Self {
        Self((hour % 12) as f32 / 12.0)
    }

    /// Minute hand position for a minute in 0–59.
    pub(crate) fn minute(minute: u8) -> Self {
        Self(minute as f32 / 60.0)
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

/// Unit direction of a hand.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandVector {
    pub dx: f32,
    pub dy: f32,
}

impl HandVector {
    pub fn from_fraction(fraction: AngleFraction) -> Self {
        let angle = TAU * fraction.value();
        Self {
            dx: libm::sinf(angle),
            dy: -libm::cosf(angle),
        }
    }

    /// Endpoint `length` pixels from `center`, rounded half away from zero.
    ///
    /// Fails if the endpoint is not addressable with `i32` coordinates.
    pub fn scale_from(&self, center: Point, length: u32) -> Result<Point, Error> {
        let length = length as f32;
        let x = center
            .x
            .checked_add(libm::roundf(self.dx * length) as i32)
            .ok_or(Error::InvalidGeometry)?;
        let y = center
            .y
            .checked_add(libm::roundf(self.dy * length) as i32)
            .ok_or(Error::InvalidGeometry)?;
        Ok(Point::new(x, y))
    }
}

/// A hand drawn as a straight line from the dial centre.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandSegment {
    pub start: Point,
    pub end: Point,
}

impl HandSegment {
    /// Euclidean length in pixels.
    pub fn length(&self) -> f32 {
        let dx = self.end.x as f32 - self.start.x as f32;
        let dy = self.end.y as f32 - self.start.y as f32;
        libm::sqrtf(dx * dx + dy * dy)
    }
}

/// Round dial the hands are drawn on.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dial {
    pub center: Point,
    /// Radius of the dial face, without the border ring.
    pub radius: u32,
    /// Width of the border ring, also used as hand stroke width.
    pub stroke: u32,
}

impl Dial {
    pub const fn new(center: Point, radius: u32, stroke: u32) -> Self {
        Self {
            center,
            radius,
            stroke,
        }
    }

    /// Longest hand that stays clear of the border.
    pub fn max_hand_length(&self) -> u32 {
        self.radius.saturating_sub(self.stroke)
    }

    /// Check that both hands are non-zero and fit inside the dial, and that
    /// the dial with its border ring stays within `i32` coordinates.
    pub fn check_hands(&self, hour_len: u32, minute_len: u32) -> Result<(), Error> {
        if self.radius <= self.stroke {
            return Err(Error::InvalidGeometry);
        }
        let extent = self.radius as i64 + self.stroke as i64;
        let fits = |c: i32| {
            c as i64 - extent >= i32::MIN as i64 && c as i64 + extent <= i32::MAX as i64
        };
        if !fits(self.center.x) || !fits(self.center.y) {
            return Err(Error::InvalidGeometry);
        }
        let max = self.max_hand_length();
        if hour_len == 0 || minute_len == 0 || hour_len > max || minute_len > max {
            return Err(Error::InvalidGeometry);
        }
        Ok(())
    }
}

impl WallClock {
    /// Hour and minute hands for this time.
    pub fn hands(
        &self,
        dial: &Dial,
        hour_len: u32,
        minute_len: u32,
    ) -> Result<(HandSegment, HandSegment), Error> {
        dial.check_hands(hour_len, minute_len)?;

        let hour = HandVector::from_fraction(self.hour_fraction());
        let minute = HandVector::from_fraction(self.minute_fraction());

        Ok((
            HandSegment {
                start: dial.center,
                end: hour.scale_from(dial.center, hour_len)?,
            },
            HandSegment {
                start: dial.center,
                end: minute.scale_from(dial.center, minute_len)?,
            },
        ))
    }

    /// Hour hand position on the 12 hour dial.
    pub fn hour_fraction(&self) -> AngleFraction {
        AngleFraction::hour(self.hour())
    }

    /// Minute hand position on the 60 minute dial.
    pub fn minute_fraction(&self) -> AngleFraction {
        AngleFraction::minute(self.minute())
    }
}

/// Compute the hour and minute hand segments for `hour:minute` on `dial`.
pub fn compute_hands(
    hour: u8,
    minute: u8,
    dial: &Dial,
    hour_len: u32,
    minute_len: u32,
) -> Result<(HandSegment, HandSegment), Error> {
    WallClock::new(hour, minute)?.hands(dial, hour_len, minute_len)
}
