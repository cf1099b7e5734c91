//! Watchface configuration: layout variants and colour palette

use embedded_graphics::{
    geometry::{Dimensions, Point, Size},
    pixelcolor::{Rgb565, RgbColor},
    primitives::{Circle, Rectangle},
};

use crate::{ui::hands::Dial, Error};

/// Product variants of the face. They only differ in layout.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Small dial top left, two date pages top right.
    #[default]
    Classic,
    /// Like `Classic` with a thicker stack of pages and no vibration.
    Calendar,
    /// Large centred dial, no date badge.
    BigDial,
}

/// Horizontal band holding the digital time.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeBand {
    /// Black band across the screen
    pub outer: Rectangle,
    /// Text box inside the band, painted in the battery colour
    pub text: Rectangle,
}

/// Stack of rounded "calendar pages" showing the day of month.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateBadge {
    /// Top left corner of the front page, border included
    pub origin: Point,
    /// Size of one page, border included
    pub page: Size,
    pub border: u32,
    /// Number of pages, at least one
    pub pages: u8,
    /// Offset of each page behind the previous one, right and up
    pub step: i32,
}

impl DateBadge {
    /// Place the badge centred in the right half of the screen with its
    /// bottom edge level with the bottom of the dial ring.
    pub fn beside_dial(screen: Size, dial: &Dial, page: Size, border: u32, pages: u8) -> Self {
        let step = 2 * border as i32;
        let spread = page.width as i32 + (pages as i32 - 1) * step;
        Self {
            origin: Point::new(
                3 * screen.width as i32 / 4 - spread / 2,
                dial.center.y + (dial.radius + dial.stroke) as i32 - page.height as i32,
            ),
            page,
            border,
            pages,
            step,
        }
    }

    /// Outer rectangle of page `index`, 0 being the front page.
    pub fn page_rect(&self, index: u8) -> Rectangle {
        let offset = index as i32 * self.step;
        Rectangle::new(self.origin + Point::new(offset, -offset), self.page)
    }

    /// Inner (paper) rectangle of page `index`.
    pub fn paper_rect(&self, index: u8) -> Rectangle {
        let border = self.border as i32;
        let outer = self.page_rect(index);
        Rectangle::new(
            outer.top_left + Point::new(border, border),
            Size::new(
                self.page.width.saturating_sub(2 * self.border),
                self.page.height.saturating_sub(2 * self.border),
            ),
        )
    }
}

/// Geometry of one variant.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub screen: Size,
    pub band: TimeBand,
    pub dial: Dial,
    pub hour_len: u32,
    pub minute_len: u32,
    pub badge: Option<DateBadge>,
    /// Vibrate whenever the phone connects or disconnects
    pub vibrate_on_connection_change: bool,
}

const SCREEN: Size = Size::new(144, 168);
const BORDER: u32 = 4;
const BAND_Y: i32 = 94;
const BAND_H: u32 = 57;

impl Layout {
    fn band(screen: Size) -> TimeBand {
        TimeBand {
            outer: Rectangle::new(Point::new(0, BAND_Y), Size::new(screen.width, BAND_H)),
            // Text box sits 3 px into the band
            text: Rectangle::new(Point::new(0, BAND_Y + 3), Size::new(screen.width, BAND_H - 7)),
        }
    }

    pub fn classic() -> Self {
        let dial = Dial::new(Point::new(SCREEN.width as i32 / 4, BAND_Y / 2), 28, BORDER);
        Self {
            screen: SCREEN,
            band: Self::band(SCREEN),
            dial,
            hour_len: dial.radius / 2,
            minute_len: dial.max_hand_length(),
            badge: Some(DateBadge::beside_dial(SCREEN, &dial, Size::new(56, 48), BORDER, 2)),
            vibrate_on_connection_change: true,
        }
    }

    pub fn calendar() -> Self {
        Self {
            badge: Some(DateBadge::beside_dial(
                SCREEN,
                &Self::classic().dial,
                Size::new(56, 48),
                BORDER,
                3,
            )),
            vibrate_on_connection_change: false,
            ..Self::classic()
        }
    }

    pub fn big_dial() -> Self {
        let dial = Dial::new(Point::new(SCREEN.width as i32 / 2, BAND_Y / 2), 40, BORDER);
        Self {
            screen: SCREEN,
            band: Self::band(SCREEN),
            dial,
            hour_len: dial.radius / 2 - 2,
            minute_len: dial.max_hand_length() - 2,
            badge: None,
            vibrate_on_connection_change: true,
        }
    }

    /// Bounding box of the dial including its border ring.
    pub fn dial_bounds(&self) -> Rectangle {
        Circle::with_center(self.dial.center, 2 * (self.dial.radius + self.dial.stroke) + 1)
            .bounding_box()
    }

    /// Check that the hands fit the dial and everything fits the screen.
    pub fn validate(&self) -> Result<(), Error> {
        self.dial.check_hands(self.hour_len, self.minute_len)?;
        if self.hour_len >= self.minute_len {
            // Hour hand must be the shorter one
            return Err(Error::InvalidGeometry);
        }

        let screen = Rectangle::new(Point::zero(), self.screen);
        let inside = |r: Rectangle| screen.intersection(&r) == r;

        if !inside(self.dial_bounds()) || !inside(self.band.outer) {
            return Err(Error::InvalidGeometry);
        }
        if self.band.outer.intersection(&self.band.text) != self.band.text {
            return Err(Error::InvalidGeometry);
        }
        if let Some(badge) = self.badge {
            if badge.pages == 0
                || badge.page.width <= 2 * badge.border
                || badge.page.height <= 2 * badge.border
            {
                return Err(Error::InvalidGeometry);
            }
            if !(0..badge.pages).all(|i| inside(badge.page_rect(i))) {
                return Err(Error::InvalidGeometry);
            }
        }
        Ok(())
    }
}

impl Variant {
    pub fn layout(&self) -> Layout {
        match self {
            Variant::Classic => Layout::classic(),
            Variant::Calendar => Layout::calendar(),
            Variant::BigDial => Layout::big_dial(),
        }
    }
}

/// Colours used by the face.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb565,
    pub band: Rgb565,
    pub text: Rgb565,
    pub page_front: Rgb565,
    pub page_back: Rgb565,
    pub page_border: Rgb565,
    pub dial_ring: Rgb565,
    pub hands: Rgb565,
    /// Dial face while connected
    pub connected: Rgb565,
    /// Dial face while disconnected
    pub disconnected: Rgb565,
    pub battery_full: Rgb565,
    pub battery_charging: Rgb565,
    pub battery_critical: Rgb565,
    pub battery_low: Rgb565,
    pub battery_normal: Rgb565,
}

const DUKE_BLUE: Rgb565 = Rgb565::new(0, 0, 0xAA >> 3);
const ORANGE: Rgb565 = Rgb565::new(0xFF >> 3, 0x55 >> 2, 0);
const LIGHT_GRAY: Rgb565 = Rgb565::new(0xAA >> 3, 0xAA >> 2, 0xAA >> 3);

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: DUKE_BLUE,
            band: Rgb565::BLACK,
            text: Rgb565::BLACK,
            page_front: Rgb565::WHITE,
            page_back: LIGHT_GRAY,
            page_border: Rgb565::BLACK,
            dial_ring: Rgb565::BLACK,
            hands: Rgb565::BLACK,
            connected: Rgb565::WHITE,
            disconnected: Rgb565::RED,
            battery_full: Rgb565::GREEN,
            battery_charging: Rgb565::YELLOW,
            battery_critical: Rgb565::RED,
            battery_low: ORANGE,
            battery_normal: Rgb565::WHITE,
        }
    }
}

/// Complete watchface configuration
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WatchfaceConfig {
    pub variant: Variant,
    pub layout: Layout,
    pub palette: Palette,
}

impl WatchfaceConfig {
    /// Create the stock configuration of a variant
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            layout: variant.layout(),
            palette: Palette::default(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.layout.validate()
    }
}

impl Default for WatchfaceConfig {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_matches_stock_face() {
        let layout = Layout::classic();
        assert_eq!(layout.dial.center, Point::new(36, 47));
        assert_eq!(layout.hour_len, 14);
        assert_eq!(layout.minute_len, 24);
        let badge = layout.badge.unwrap();
        assert_eq!(badge.origin, Point::new(76, 31));
        assert_eq!(badge.step, 8);
        assert_eq!(badge.page_rect(1).top_left, Point::new(84, 23));
        assert_eq!(
            badge.paper_rect(0),
            Rectangle::new(Point::new(80, 35), Size::new(48, 40))
        );
        assert_eq!(layout.band.text.top_left, Point::new(0, 97));
        assert_eq!(layout.band.text.size, Size::new(144, 50));
    }

    #[test]
    fn all_variants_validate() {
        for variant in [Variant::Classic, Variant::Calendar, Variant::BigDial] {
            assert_eq!(WatchfaceConfig::new(variant).validate(), Ok(()));
        }
    }

    #[test]
    fn calendar_pages_stay_on_screen() {
        let badge = Layout::calendar().badge.unwrap();
        assert_eq!(badge.pages, 3);
        let back = badge.page_rect(2);
        assert!(back.top_left.x + back.size.width as i32 <= 144);
    }

    #[test]
    fn rejects_long_hands() {
        let mut layout = Layout::classic();
        layout.minute_len = 25;
        assert_eq!(layout.validate(), Err(Error::InvalidGeometry));
    }

    #[test]
    fn rejects_hour_hand_longer_than_minute() {
        let mut layout = Layout::classic();
        layout.hour_len = 24;
        layout.minute_len = 14;
        assert_eq!(layout.validate(), Err(Error::InvalidGeometry));
    }

    #[test]
    fn rejects_dial_off_screen() {
        let mut layout = Layout::big_dial();
        layout.dial.center = Point::new(10, 47);
        assert_eq!(layout.validate(), Err(Error::InvalidGeometry));
    }

    #[test]
    fn rejects_empty_badge() {
        let mut layout = Layout::classic();
        if let Some(badge) = layout.badge.as_mut() {
            badge.pages = 0;
        }
        assert_eq!(layout.validate(), Err(Error::InvalidGeometry));
    }

    #[test]
    fn stock_palette() {
        let palette = Palette::default();
        assert_eq!(palette.background, Rgb565::new(0, 0, 21));
        assert_eq!(palette.battery_low, Rgb565::new(31, 21, 0));
        assert_eq!(palette.disconnected, Rgb565::RED);
    }
}
