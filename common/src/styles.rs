//! Pre-computed text styles.
//!
//! Alignment styles are `const` so no style object is built per frame. Label
//! colors come from the active [`Palette`](crate::colors::Palette), so callers
//! build `MonoTextStyle::new(LABEL_FONT, palette.text)` with the shared font.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_12_POINT;

use crate::colors::WHITE;

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered on the anchor both ways. Used for gauge labels.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Centered on the baseline. Used for popup text.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned. Used for the log footer.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

// =============================================================================
// Fonts
// =============================================================================

/// Gauge label font (6x10 pixels, close to the 10dp labels on a phone).
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// White popup text.
pub const POPUP_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, WHITE);
