//! Popup state management with time-based expiration.
//!
//! Each popup variant holds the `Instant` it was triggered at.

use std::time::Instant;

use crate::timing::POPUP_DURATION;

/// Active popup with its start time.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// "MARKER: ON/OFF"
    NorthMarker(Instant),
    /// "THEME n"
    Theme(Instant),
    /// "SAVING: ON/OFF"
    EnergySaving(Instant),
    /// "SCREEN: ON/AUTO"
    KeepScreenOn(Instant),
}

impl Popup {
    /// Get the start time of this popup.
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::NorthMarker(t) | Self::Theme(t) | Self::EnergySaving(t) | Self::KeepScreenOn(t) => *t,
        }
    }

    /// Check if this popup has expired at `now`.
    #[inline]
    pub fn is_expired_at(
        &self,
        now: Instant,
    ) -> bool {
        now.saturating_duration_since(self.start_time()) >= POPUP_DURATION
    }

    /// Check if this popup has expired.
    #[inline]
    pub fn is_expired(&self) -> bool { self.is_expired_at(Instant::now()) }
}
