//! Default watchface

use chrono::{NaiveDateTime, Timelike};
use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Point, Size},
    mono_font::{iso_8859_1::FONT_10X20, MonoTextStyle, MonoTextStyleBuilder},
    pixelcolor::Rgb565,
    primitives::{Circle, Line, Primitive, PrimitiveStyle, Rectangle, RoundedRectangle},
    text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder},
    Drawable,
};
use profont::PROFONT_24_POINT;

use super::{event::Dirty, hands::HandSegment, WatchFace, WatchFaceState};
use crate::{
    system::{
        config::WatchfaceConfig,
        time::{format_date, format_time},
    },
    Error,
};

const BUF_LEN: usize = 8;

/// Text backed by its own buffer
struct Label {
    str_buf: [u8; BUF_LEN],
    len: usize,
}

impl Label {
    /// Create new label showing `text`
    fn new(text: &str) -> Self {
        let mut str_buf = [0; BUF_LEN];
        let len = text.len().min(BUF_LEN);
        str_buf[..len].copy_from_slice(&text.as_bytes()[..len]);
        Self { str_buf, len }
    }

    fn set_time(&mut self, time: &NaiveDateTime, clock_24h: bool) -> Result<(), Error> {
        self.len = format_time(&mut self.str_buf, time, clock_24h)?.len();
        Ok(())
    }

    fn set_date(&mut self, time: &NaiveDateTime) -> Result<(), Error> {
        self.len = format_date(&mut self.str_buf, time)?.len();
        Ok(())
    }

    fn as_str(&self) -> &str {
        core::str::from_utf8(&self.str_buf[..self.len]).unwrap_or("")
    }
}

/// Digital time band, date badge and analog dial
pub struct DefaultWatchface {
    config: WatchfaceConfig,
    /// Time label
    time_label: Label,
    /// Date label
    date_label: Label,
    /// Hour and minute hands for the time shown by the labels
    hands: (HandSegment, HandSegment),
}

fn centered() -> TextStyle {
    TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build()
}

impl DefaultWatchface {
    pub fn config(&self) -> &WatchfaceConfig {
        &self.config
    }

    pub fn time_text(&self) -> &str {
        self.time_label.as_str()
    }

    pub fn date_text(&self) -> &str {
        self.date_label.as_str()
    }

    /// Hour and minute hands, computed on the last update.
    pub fn hands(&self) -> (HandSegment, HandSegment) {
        self.hands
    }

    /// Paint only what `dirty` covers.
    pub fn redraw<D>(
        &self,
        dirty: Dirty,
        state: &WatchFaceState,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        match dirty {
            Dirty::Time => self.draw_time(state, target),
            Dirty::Face => self.draw(state, target),
        }
    }

    /// Background, time band and the pages of the date badge.
    fn draw_background<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let layout = &self.config.layout;
        let palette = &self.config.palette;

        Rectangle::new(Point::zero(), layout.screen)
            .into_styled(PrimitiveStyle::with_fill(palette.background))
            .draw(target)?;
        layout
            .band
            .outer
            .into_styled(PrimitiveStyle::with_fill(palette.band))
            .draw(target)?;

        if let Some(badge) = layout.badge {
            // Back to front
            for index in (0..badge.pages).rev() {
                RoundedRectangle::with_equal_corners(
                    badge.page_rect(index),
                    Size::new_equal(2 * badge.border),
                )
                .into_styled(PrimitiveStyle::with_fill(palette.page_border))
                .draw(target)?;

                let paper = if index == 0 {
                    palette.page_front
                } else {
                    palette.page_back
                };
                RoundedRectangle::with_equal_corners(
                    badge.paper_rect(index),
                    Size::new_equal(badge.border),
                )
                .into_styled(PrimitiveStyle::with_fill(paper))
                .draw(target)?;
            }
        }
        Ok(())
    }

    /// Time text, date text and the analog dial.
    ///
    /// Text and hands show the time of the last update. Only the status
    /// colours are taken from `state`.
    pub fn draw_time<D>(&self, state: &WatchFaceState, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let layout = &self.config.layout;
        let palette = &self.config.palette;
        let colors = palette.status_colors(state.connected, &state.battery);

        // Numeric clock on the battery coloured text box
        layout
            .band
            .text
            .into_styled(PrimitiveStyle::with_fill(colors.battery))
            .draw(target)?;
        Text::with_text_style(
            self.time_label.as_str(),
            layout.band.text.center(),
            MonoTextStyle::new(&PROFONT_24_POINT, palette.text),
            centered(),
        )
        .draw(target)?;

        if let Some(badge) = layout.badge {
            // Opaque cells so a time-only redraw replaces the previous day
            let date_style = MonoTextStyleBuilder::new()
                .font(&FONT_10X20)
                .text_color(palette.text)
                .background_color(palette.page_front)
                .build();
            Text::with_text_style(
                self.date_label.as_str(),
                badge.paper_rect(0).center(),
                date_style,
                centered(),
            )
            .draw(target)?;
        }

        // Dial: border ring, then the connection coloured face
        let dial = &layout.dial;
        Circle::with_center(dial.center, 2 * (dial.radius + dial.stroke) + 1)
            .into_styled(PrimitiveStyle::with_fill(palette.dial_ring))
            .draw(target)?;
        Circle::with_center(dial.center, 2 * dial.radius + 1)
            .into_styled(PrimitiveStyle::with_fill(colors.connection))
            .draw(target)?;

        let (hour, minute) = self.hands;
        let hand_style = PrimitiveStyle::with_stroke(palette.hands, dial.stroke);
        Line::new(hour.start, hour.end)
            .into_styled(hand_style)
            .draw(target)?;
        Line::new(minute.start, minute.end)
            .into_styled(hand_style)
            .draw(target)?;

        Ok(())
    }
}

impl WatchFace for DefaultWatchface {
    fn new(config: WatchfaceConfig, state: &WatchFaceState) -> Result<Self, Error> {
        config.validate()?;

        let center = config.layout.dial.center;
        let mut face = Self {
            config,
            time_label: Label::new("00:00"),
            date_label: Label::new("XX"),
            hands: (
                HandSegment {
                    start: center,
                    end: center,
                },
                HandSegment {
                    start: center,
                    end: center,
                },
            ),
        };
        face.update(state)?;
        info!("Watchface ready");

        Ok(face)
    }

    fn update(&mut self, state: &WatchFaceState) -> Result<(), Error> {
        self.time_label.set_time(&state.time, state.clock_24h)?;
        self.date_label.set_date(&state.time)?;
        let layout = &self.config.layout;
        self.hands = state
            .wall_clock()
            .hands(&layout.dial, layout.hour_len, layout.minute_len)?;
        debug!(
            "Time updated: {}:{}",
            state.time.hour(),
            state.time.minute()
        );
        Ok(())
    }

    fn draw<D>(&self, state: &WatchFaceState, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.draw_background(target)?;
        self.draw_time(state, target)
    }
}
