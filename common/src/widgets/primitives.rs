//! Low-level drawing primitives shared across widgets.
//!
//! Geometry arrives in sub-pixel [`PointF`] coordinates and is rounded onto
//! the pixel grid here, offset by the widget origin.

use embedded_graphics::geometry::Angle;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, PrimitiveStyle, Triangle};
use embedded_graphics::text::Text;

use crate::geometry::{ArcSpan, PointF};
use crate::styles::{CENTERED_MIDDLE, LABEL_FONT};

/// Round a sub-pixel point onto the grid, relative to `origin`.
#[inline]
pub fn to_pixel(
    origin: Point,
    p: PointF,
) -> Point {
    origin + Point::new(libm::roundf(p.x) as i32, libm::roundf(p.y) as i32)
}

/// Diameter in whole pixels for `radius`. Zero for degenerate radii.
#[inline]
fn diameter(radius: f32) -> u32 {
    if radius > 0.0 {
        libm::roundf(radius * 2.0) as u32
    } else {
        0
    }
}

/// Stroke an arc span on a circle around `center`.
///
/// embedded-graphics measures angles clockwise from the positive x axis on
/// screen, the same convention as [`ArcSpan`].
pub fn draw_arc_span<D>(
    display: &mut D,
    origin: Point,
    center: PointF,
    radius: f32,
    span: ArcSpan,
    color: Rgb565,
    stroke_width: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let d = diameter(radius);
    if d == 0 || span.sweep_deg <= 0.0 {
        return;
    }
    Arc::with_center(
        to_pixel(origin, center),
        d,
        Angle::from_degrees(span.start_deg),
        Angle::from_degrees(span.sweep_deg),
    )
    .into_styled(PrimitiveStyle::with_stroke(color, stroke_width))
    .draw(display)
    .ok();
}

/// Stroke a full circle around `center`.
pub fn draw_ring<D>(
    display: &mut D,
    origin: Point,
    center: PointF,
    radius: f32,
    color: Rgb565,
    stroke_width: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let d = diameter(radius);
    if d == 0 {
        return;
    }
    Circle::with_center(to_pixel(origin, center), d)
        .into_styled(PrimitiveStyle::with_stroke(color, stroke_width))
        .draw(display)
        .ok();
}

/// Fill a triangle.
pub fn draw_filled_triangle<D>(
    display: &mut D,
    origin: Point,
    vertices: [PointF; 3],
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let [a, b, c] = vertices.map(|v| to_pixel(origin, v));
    Triangle::new(a, b, c)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Draw a label centered on `anchor`.
///
/// Mono fonts can't be rotated, so the text stays upright.
pub fn draw_label<D>(
    display: &mut D,
    origin: Point,
    anchor: PointF,
    text: &str,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if text.is_empty() {
        return;
    }
    Text::with_text_style(
        text,
        to_pixel(origin, anchor),
        MonoTextStyle::new(LABEL_FONT, color),
        CENTERED_MIDDLE,
    )
    .draw(display)
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pixel_rounds_and_offsets() {
        let p = to_pixel(Point::new(40, 0), PointF::new(10.4, 10.6));
        assert_eq!(p, Point::new(50, 11));
    }

    #[test]
    fn test_diameter() {
        assert_eq!(diameter(81.4), 163);
        assert_eq!(diameter(0.0), 0);
        assert_eq!(diameter(-3.0), 0);
        assert_eq!(diameter(f32::NAN), 0);
    }
}
