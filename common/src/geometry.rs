//! Pure gauge geometry.
//!
//! All functions here are total: degenerate sizes collapse to zero-radius
//! geometry and out-of-range readings are clamped, so every input yields
//! something drawable. Coordinates are in device-independent units with the
//! origin at the top-left of the gauge square and y pointing down.

use core::f32::consts::PI;

use crate::config::{
    ARC_END_DEG,
    ARC_START_DEG,
    ARC_SWEEP_DEG,
    LABEL_ROTATION_DEG,
    LABEL_ROTATION_INVERTED_DEG,
    NAME_LABEL_RADIUS,
    NORTH_MARKER_INSET,
    NORTH_MARKER_LENGTH,
    OUTER_RADIUS,
    VALUE_LABEL_RADIUS,
    VIEW_RADIUS,
};

/// A point with sub-pixel precision.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(
        x: f32,
        y: f32,
    ) -> Self {
        Self { x, y }
    }
}

/// Angular interval, clockwise from the positive x axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ArcSpan {
    pub start_deg: f32,
    pub sweep_deg: f32,
}

impl ArcSpan {
    pub const fn new(
        start_deg: f32,
        sweep_deg: f32,
    ) -> Self {
        Self { start_deg, sweep_deg }
    }

    /// Angle the span ends at (not wrapped into one turn).
    #[inline]
    pub fn end_deg(&self) -> f32 { self.start_deg + self.sweep_deg }
}

/// Layout derived from the side of the gauge square.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GaugeGeometry {
    pub center: PointF,
    pub side: f32,
    pub outer_radius: f32,
    pub view_radius: f32,
    pub name_label_radius: f32,
    pub value_label_radius: f32,
}

impl GaugeGeometry {
    /// Compute the layout for a square of `side` units.
    ///
    /// Non-positive and NaN sides produce an all-zero geometry.
    pub fn from_side(side: f32) -> Self {
        // NaN fails the comparison too
        let side = if side > 0.0 { side } else { 0.0 };
        let half = side / 2.0;
        Self {
            center: PointF::new(half, half),
            side,
            outer_radius: side * OUTER_RADIUS,
            view_radius: side * VIEW_RADIUS,
            name_label_radius: side * NAME_LABEL_RADIUS,
            value_label_radius: side * VALUE_LABEL_RADIUS,
        }
    }
}

/// Where a label goes and how much to rotate it before drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LabelPlacement {
    pub anchor: PointF,
    /// Rotation in degrees, clockwise. May exceed 360.
    pub rotation_deg: f32,
}

impl LabelPlacement {
    /// Rotation folded into `[0, 360)`.
    pub fn normalized_rotation(&self) -> f32 {
        let r = self.rotation_deg % 360.0;
        if r < 0.0 { r + 360.0 } else { r }
    }
}

/// Static north marker triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NorthMarker {
    pub apex: PointF,
    pub base_left: PointF,
    pub base_right: PointF,
}

impl NorthMarker {
    /// Vertices in drawing order: base left, base right, apex.
    pub const fn vertices(&self) -> [PointF; 3] { [self.base_left, self.base_right, self.apex] }
}

/// Side of the square the gauge occupies inside a `width` x `height` region.
#[inline]
pub fn square_side(
    width: f32,
    height: f32,
) -> f32 {
    let side = width.min(height);
    if side > 0.0 { side } else { 0.0 }
}

/// The fixed background arc.
#[inline]
pub const fn background_arc() -> ArcSpan { ArcSpan::new(ARC_START_DEG, ARC_SWEEP_DEG) }

/// Fraction of the scale covered by `reading`, clamped to `[0, 1]`.
///
/// NaN readings and non-positive scales read as empty.
pub fn scale_fraction(
    reading: f32,
    max_scale: f32,
) -> f32 {
    if !(max_scale > 0.0) {
        return 0.0;
    }
    let fraction = reading / max_scale;
    if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) }
}

/// Filled portion of the arc for `reading`.
///
/// The span grows backwards from the fixed arc end, so it always terminates
/// at [`ARC_END_DEG`].
pub fn value_arc(
    reading: f32,
    max_scale: f32,
) -> ArcSpan {
    let sweep = scale_fraction(reading, max_scale) * ARC_SWEEP_DEG;
    ArcSpan::new(ARC_END_DEG - sweep, sweep)
}

#[inline]
fn to_radians(deg: f32) -> f32 { deg * (PI / 180.0) }

/// Anchor and rotation for a label at `angle_deg` on a circle of `radius`.
pub fn label_placement(
    center: PointF,
    angle_deg: f32,
    radius: f32,
    inverted: bool,
) -> LabelPlacement {
    let rad = to_radians(angle_deg);
    let anchor = PointF::new(
        center.x + radius * libm::cosf(rad),
        center.y + radius * libm::sinf(rad),
    );
    let base = if inverted {
        LABEL_ROTATION_INVERTED_DEG
    } else {
        LABEL_ROTATION_DEG
    };
    LabelPlacement {
        anchor,
        rotation_deg: base + angle_deg,
    }
}

/// North marker for `geometry`. The apex points at the gauge center.
pub fn north_marker(geometry: &GaugeGeometry) -> NorthMarker {
    let x = geometry.center.x;
    let length = NORTH_MARKER_LENGTH;
    let apex_y = geometry.center.y - geometry.outer_radius + length - NORTH_MARKER_INSET;
    let base_y = apex_y - length;
    NorthMarker {
        apex: PointF::new(x, apex_y),
        base_left: PointF::new(x - length / 2.0, base_y),
        base_right: PointF::new(x + length / 2.0, base_y),
    }
}
