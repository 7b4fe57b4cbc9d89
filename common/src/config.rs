//! Gauge layout configuration constants.
//!
//! Every radius is a fraction of the side of the square the gauge is drawn in,
//! so the whole gauge scales linearly with that side. Angles use the canvas
//! convention: 0° is the positive x axis and angles grow clockwise.

// =============================================================================
// Radius Fractions (multiplied by the square side)
// =============================================================================

/// Outer circle drawn around the gauge while the north marker is shown.
pub const OUTER_RADIUS: f32 = 0.43;

/// Radius of the background and value arcs.
pub const VIEW_RADIUS: f32 = 0.407;

/// Radius the field-name caption is anchored on.
pub const NAME_LABEL_RADIUS: f32 = 0.414;

/// Radius the value readout is anchored on.
pub const VALUE_LABEL_RADIUS: f32 = 0.4;

const _: () = assert!(VALUE_LABEL_RADIUS < VIEW_RADIUS);
const _: () = assert!(VIEW_RADIUS < NAME_LABEL_RADIUS);
const _: () = assert!(NAME_LABEL_RADIUS < OUTER_RADIUS);
const _: () = assert!(OUTER_RADIUS < 0.5);

// =============================================================================
// Arc Span
// =============================================================================

/// Start angle of the background arc (degrees).
pub const ARC_START_DEG: f32 = 315.0;

/// Sweep of the background arc (degrees).
pub const ARC_SWEEP_DEG: f32 = 85.0;

/// Fixed end of the background arc. The value arc always terminates here.
/// 400° is 40° on the circle.
pub const ARC_END_DEG: f32 = ARC_START_DEG + ARC_SWEEP_DEG;

/// Reading that fills the whole arc.
pub const DEFAULT_MAX_SCALE: f32 = 160.0;

// =============================================================================
// Labels
// =============================================================================

/// Anchor angle of the value readout, just before the start of the arc.
pub const VALUE_LABEL_ANGLE_DEG: f32 = 307.0;

/// Anchor angle of the field-name caption, just past the end of the arc.
pub const NAME_LABEL_ANGLE_DEG: f32 = 53.0;

/// Rotation added to labels drawn on the outside of the arc.
pub const LABEL_ROTATION_DEG: f32 = 90.0;

/// Rotation added to labels drawn upside down relative to the arc.
pub const LABEL_ROTATION_INVERTED_DEG: f32 = 270.0;

/// Capacity of the readout text (`<integer><unit>`).
pub const READOUT_LEN: usize = 24;

const _: () = assert!(VALUE_LABEL_ANGLE_DEG < ARC_START_DEG + 360.0);
const _: () = assert!(NAME_LABEL_ANGLE_DEG + 360.0 > ARC_END_DEG);

// =============================================================================
// North Marker (device-independent units)
// =============================================================================

/// Edge length of the north marker triangle.
pub const NORTH_MARKER_LENGTH: f32 = 12.0;

/// Distance the marker is pulled in from the outer circle.
pub const NORTH_MARKER_INSET: f32 = 2.0;

const _: () = assert!(NORTH_MARKER_INSET < NORTH_MARKER_LENGTH);

// =============================================================================
// Stroke Widths (pixels)
// =============================================================================

/// Stroke of the background and value arcs.
pub const ARC_STROKE_WIDTH: u32 = 6;

/// Stroke of the outer circle.
pub const OUTER_CIRCLE_STROKE_WIDTH: u32 = 1;

#[cfg(test)]
#[allow(clippy::assertions_on_constants)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_end_is_forty_degrees_past_full_turn() {
        assert_eq!(ARC_END_DEG, 400.0);
        assert_eq!(ARC_END_DEG % 360.0, 40.0);
    }

    #[test]
    fn test_radius_ordering() {
        assert!(VALUE_LABEL_RADIUS < VIEW_RADIUS);
        assert!(VIEW_RADIUS < NAME_LABEL_RADIUS);
        assert!(NAME_LABEL_RADIUS < OUTER_RADIUS);
    }

    #[test]
    fn test_labels_sit_outside_the_arc() {
        // Readout before the start (315°), caption after the end (40°)
        assert!(VALUE_LABEL_ANGLE_DEG < ARC_START_DEG);
        assert!(NAME_LABEL_ANGLE_DEG > ARC_END_DEG - 360.0);
    }
}
