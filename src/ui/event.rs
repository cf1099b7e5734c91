//! Event handlers invoked by the host's event loop.
//!
//! The host delivers one callback at a time. Each handler samples what it
//! needs from the host, updates the face and reports what must be repainted.

use chrono::NaiveDateTime;

use super::{default_watchface::DefaultWatchface, WatchFace, WatchFaceState};
use crate::{system::config::WatchfaceConfig, Error, Host, CONNECTION_ALERT};

/// Callbacks the host delivers to the face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Minute timer fired
    Tick(NaiveDateTime),
    /// Phone app connected (`true`) or disconnected (`false`)
    ConnectionChanged(bool),
    /// Host asked for a repaint
    Redraw,
}

/// Part of the face that needs repainting after an event.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dirty {
    /// Time text, date text and dial
    Time,
    /// Everything
    Face,
}

impl DefaultWatchface {
    /// Create the face at startup, showing the current time immediately.
    pub fn init<H: Host>(config: WatchfaceConfig, host: &H) -> Result<Self, Error> {
        Self::new(config, &WatchFaceState::sample(host))
    }

    pub fn on_tick<H: Host>(&mut self, time: NaiveDateTime, host: &H) -> Result<Dirty, Error> {
        let state = WatchFaceState {
            time,
            ..WatchFaceState::sample(host)
        };
        self.update(&state)?;
        Ok(Dirty::Time)
    }

    pub fn on_connection_change<H: Host>(&mut self, connected: bool, host: &mut H) -> Dirty {
        info!("Connection changed: {}", connected);
        if self.config().layout.vibrate_on_connection_change {
            host.vibrate(&CONNECTION_ALERT);
        }
        Dirty::Face
    }

    pub fn on_redraw(&self) -> Dirty {
        Dirty::Face
    }

    /// Dispatch one host event to its handler.
    pub fn handle_event<H: Host>(&mut self, event: Event, host: &mut H) -> Result<Dirty, Error> {
        match event {
            Event::Tick(time) => self.on_tick(time, host),
            Event::ConnectionChanged(connected) => Ok(self.on_connection_change(connected, host)),
            Event::Redraw => Ok(self.on_redraw()),
        }
    }
}
