//! Non-modal popup overlays for status messages.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::{Palette, WHITE};
use crate::styles::{CENTERED, POPUP_STYLE_WHITE};

const POPUP_WIDTH: u32 = 160;
const POPUP_HEIGHT: u32 = 40;
const POPUP_BORDER: u32 = 3;

const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

/// Draw a bordered status box centered on `center`, e.g. "MARKER: ON".
///
/// The box is filled with the palette's north-mark color so it reads as
/// part of the active theme.
pub fn draw_toggle_popup<D>(
    display: &mut D,
    center: Point,
    text: &str,
    palette: &Palette,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let top_left = center - Point::new(POPUP_WIDTH as i32 / 2, POPUP_HEIGHT as i32 / 2);
    let border = POPUP_BORDER as i32;

    Rectangle::new(
        top_left - Point::new(border, border),
        Size::new(POPUP_WIDTH + 2 * POPUP_BORDER, POPUP_HEIGHT + 2 * POPUP_BORDER),
    )
    .into_styled(WHITE_FILL)
    .draw(display)
    .ok();

    Rectangle::new(top_left, Size::new(POPUP_WIDTH, POPUP_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(palette.north_mark))
        .draw(display)
        .ok();

    Text::with_text_style(text, center + Point::new(0, 4), POPUP_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}
