//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Frame time in energy saving mode (~10 FPS).
pub const ENERGY_SAVING_FRAME_TIME: Duration = Duration::from_millis(100);

/// Duration that popups remain visible on screen.
pub const POPUP_DURATION: Duration = Duration::from_secs(3);

/// Signal time units advanced per second of wall time.
pub const SIGNAL_RATE: f32 = 2.5;

const _: () = assert!(FRAME_TIME.as_millis() < ENERGY_SAVING_FRAME_TIME.as_millis());
const _: () = assert!(ENERGY_SAVING_FRAME_TIME.as_millis() < POPUP_DURATION.as_millis());
