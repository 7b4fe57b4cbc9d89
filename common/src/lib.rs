//! Magnetic field gauge for the compass display.
//!
//! This crate contains platform-agnostic code shared by every host that shows
//! the gauge (the desktop simulator today):
//!
//! - [`config`]: Gauge layout constants
//! - [`geometry`]: Pure arc, label and marker math
//! - [`gauge`]: `GaugeRenderer` with cached layout and redraw tracking
//! - [`colors`]: RGB565 colors and theme palettes
//! - [`styles`]: Pre-computed text styles
//! - [`widgets`]: embedded-graphics drawing of a gauge frame and popups
//! - [`prefs`]: Typed preferences over an injected store
//! - [`log_buffer`]: Levelled log ring buffer
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests and never allocates. Strings and
//! maps are fixed-capacity `heapless` types and trigonometry comes from `libm`.
//!
//! # Testing
//!
//! ```bash
//! cargo test -p compass-common
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod gauge;
pub mod geometry;
pub mod log_buffer;
pub mod prefs;
pub mod styles;
pub mod widgets;

// Re-export commonly used items
pub use colors::Palette;
pub use gauge::{GaugeFrame, GaugeRenderer, RedrawState};
pub use geometry::{ArcSpan, GaugeGeometry, LabelPlacement, NorthMarker, PointF, square_side};
pub use log_buffer::{DebugLog, LogLevel};
pub use prefs::{MemoryStore, Prefs, PrefsError, SettingValue, SettingsStore};
