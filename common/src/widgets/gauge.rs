//! Magnetic field gauge widget.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::primitives::{draw_arc_span, draw_filled_triangle, draw_label, draw_ring};
use crate::colors::Palette;
use crate::config::{ARC_STROKE_WIDTH, OUTER_CIRCLE_STROKE_WIDTH};
use crate::gauge::GaugeFrame;

/// Draw a computed gauge frame.
///
/// `origin` is the top-left corner of the gauge square on `display`. The
/// background is not cleared; callers clear before a full redraw.
pub fn draw_gauge<D>(
    display: &mut D,
    origin: Point,
    frame: &GaugeFrame<'_>,
    palette: &Palette,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_arc_span(
        display,
        origin,
        frame.center,
        frame.arc_radius,
        frame.background,
        palette.arc_background,
        ARC_STROKE_WIDTH,
    );
    draw_arc_span(
        display,
        origin,
        frame.center,
        frame.arc_radius,
        frame.value,
        palette.arc_value,
        ARC_STROKE_WIDTH,
    );

    draw_label(display, origin, frame.readout.anchor, &frame.readout_text, palette.text);
    draw_label(display, origin, frame.caption.anchor, frame.caption_text, palette.text);

    if let Some(marker) = frame.north_marker {
        draw_ring(
            display,
            origin,
            frame.center,
            frame.outer_radius,
            palette.outer_circle,
            OUTER_CIRCLE_STROKE_WIDTH,
        );
        draw_filled_triangle(display, origin, marker.vertices(), palette.north_mark);
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::colors::PALETTE_DARK;
    use crate::gauge::GaugeRenderer;

    fn render(
        reading: f32,
        marker: bool,
    ) -> MockDisplay<Rgb565> {
        let mut renderer = GaugeRenderer::new();
        renderer.configure(64.0);
        if marker {
            renderer.show_north_marker();
        }
        renderer.update(reading);
        let frame = renderer.frame("", "");

        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        draw_gauge(&mut display, Point::zero(), &frame, &PALETTE_DARK);
        display
    }

    fn count(
        display: &MockDisplay<Rgb565>,
        color: Rgb565,
    ) -> usize {
        let mut n = 0;
        for y in 0..64 {
            for x in 0..64 {
                if display.get_pixel(Point::new(x, y)) == Some(color) {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn test_empty_reading_draws_no_value_arc() {
        let display = render(0.0, false);
        assert_eq!(count(&display, PALETTE_DARK.arc_value), 0);
        assert!(count(&display, PALETTE_DARK.arc_background) > 0);
    }

    #[test]
    fn test_full_reading_draws_value_arc() {
        let display = render(500.0, false);
        assert!(count(&display, PALETTE_DARK.arc_value) > 0);
    }

    #[test]
    fn test_value_arc_grows_with_reading() {
        let half = count(&render(80.0, false), PALETTE_DARK.arc_value);
        let full = count(&render(160.0, false), PALETTE_DARK.arc_value);
        assert!(half > 0);
        assert!(full > half, "full {full} should cover more than half {half}");
    }

    #[test]
    fn test_north_marker_drawn_only_when_shown() {
        assert_eq!(count(&render(0.0, false), PALETTE_DARK.north_mark), 0);
        assert!(count(&render(0.0, true), PALETTE_DARK.north_mark) > 0);
    }
}
