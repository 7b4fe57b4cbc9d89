//! Color constants and gauge palettes.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! Palettes are selected by the theme index stored in preferences. Any index
//! maps to a palette, so a stale or corrupted preference can't break drawing.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

pub const BLACK: Rgb565 = Rgb565::BLACK;

pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. North marker on every theme, popup fill.
pub const RED: Rgb565 = Rgb565::RED;

pub const GREEN: Rgb565 = Rgb565::GREEN;

pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors
// =============================================================================

/// Dark gray for the unfilled arc and outer circle.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Light gray for label text on dark themes.
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(24, 48, 24);

/// Deep navy background.
pub const NAVY: Rgb565 = Rgb565::new(1, 4, 8);

/// Cyan field indicator.
pub const CYAN: Rgb565 = Rgb565::new(0, 56, 28);

/// Teal background.
pub const DARK_TEAL: Rgb565 = Rgb565::new(0, 20, 10);

/// Amber field indicator.
pub const AMBER: Rgb565 = Rgb565::new(31, 40, 0);

/// Off-white paper background for the light theme.
pub const PAPER: Rgb565 = Rgb565::new(30, 60, 28);

// =============================================================================
// Palettes
// =============================================================================

/// Colors used to draw one gauge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb565,
    pub outer_circle: Rgb565,
    /// Unfilled part of the arc.
    pub arc_background: Rgb565,
    /// Filled part of the arc.
    pub arc_value: Rgb565,
    pub text: Rgb565,
    pub north_mark: Rgb565,
}

pub const PALETTE_DARK: Palette = Palette {
    background: BLACK,
    outer_circle: GRAY,
    arc_background: GRAY,
    arc_value: GREEN,
    text: LIGHT_GRAY,
    north_mark: RED,
};

pub const PALETTE_NAVY: Palette = Palette {
    background: NAVY,
    outer_circle: GRAY,
    arc_background: GRAY,
    arc_value: CYAN,
    text: WHITE,
    north_mark: RED,
};

pub const PALETTE_TEAL: Palette = Palette {
    background: DARK_TEAL,
    outer_circle: LIGHT_GRAY,
    arc_background: BLACK,
    arc_value: AMBER,
    text: WHITE,
    north_mark: RED,
};

pub const PALETTE_LIGHT: Palette = Palette {
    background: PAPER,
    outer_circle: GRAY,
    arc_background: LIGHT_GRAY,
    arc_value: BLACK,
    text: BLACK,
    north_mark: RED,
};

/// All palettes, indexed by theme.
pub static PALETTES: [Palette; 4] = [PALETTE_DARK, PALETTE_NAVY, PALETTE_TEAL, PALETTE_LIGHT];

impl Palette {
    /// Palette for a stored theme index. Indices wrap, negatives included.
    pub fn for_theme(index: i32) -> &'static Self {
        let idx = index.rem_euclid(PALETTES.len() as i32) as usize;
        &PALETTES[idx]
    }
}

impl Default for Palette {
    fn default() -> Self { PALETTE_DARK }
}

/// Next theme index after `index`, wrapping.
pub fn next_theme(index: i32) -> i32 { (index.rem_euclid(PALETTES.len() as i32) + 1) % PALETTES.len() as i32 }
