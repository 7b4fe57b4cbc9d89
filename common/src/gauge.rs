//! Magnetic field gauge renderer.
//!
//! [`GaugeRenderer`] owns the cached layout and the last accepted reading, and
//! turns them into a [`GaugeFrame`] the widgets (or any other canvas) can draw.
//!
//! # Redraw Tracking
//!
//! Sensor readings arrive far faster than their integer part changes. Only
//! [`GaugeRenderer::update`] moves the renderer from [`RedrawState::Clean`] to
//! [`RedrawState::Dirty`], and it does so only when the truncated reading
//! changes. The host consumes the pending redraw with
//! [`GaugeRenderer::take_redraw`].
//!
//! | Event | State | Strategy |
//! |-------|-------|----------|
//! | Reading, same integer part | unchanged | Discarded |
//! | Reading, new integer part | Dirty | Stored, redraw owed |
//! | Host draws | Clean | `take_redraw` |
//! | Resize / marker toggle | unchanged | Host redraws on its own |
//!
//! The truncation only gates redraws. Arc and label geometry always use the
//! full-precision reading.

use core::fmt::Write;

use heapless::String;

use crate::config::{DEFAULT_MAX_SCALE, NAME_LABEL_ANGLE_DEG, READOUT_LEN, VALUE_LABEL_ANGLE_DEG};
use crate::geometry::{
    self,
    ArcSpan,
    GaugeGeometry,
    LabelPlacement,
    NorthMarker,
    PointF,
};

// =============================================================================
// Redraw State
// =============================================================================

/// Whether the host owes the gauge a redraw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RedrawState {
    /// Nothing visible changed since the last draw.
    #[default]
    Clean,
    /// The readout changed and has not been drawn yet.
    Dirty,
}

// =============================================================================
// Frame
// =============================================================================

/// Everything needed to draw the gauge once.
#[derive(Clone, Debug, PartialEq)]
pub struct GaugeFrame<'a> {
    pub center: PointF,
    /// Radius both arcs are drawn on.
    pub arc_radius: f32,
    /// Radius of the outer circle, drawn only alongside the north marker.
    pub outer_radius: f32,
    pub background: ArcSpan,
    pub value: ArcSpan,
    pub north_marker: Option<NorthMarker>,
    pub readout: LabelPlacement,
    /// Truncated reading followed by the unit suffix.
    pub readout_text: String<READOUT_LEN>,
    pub caption: LabelPlacement,
    pub caption_text: &'a str,
}

// =============================================================================
// Renderer
// =============================================================================

/// Stateful gauge renderer.
///
/// Single-threaded: the host must serialise calls, e.g. by forwarding sensor
/// callbacks to the draw loop.
#[derive(Clone, Debug)]
pub struct GaugeRenderer {
    geometry: GaugeGeometry,
    max_scale: f32,
    reading: f32,
    state: RedrawState,
    show_north_marker: bool,
    /// Marker for the current geometry. Dropped on resize.
    north_marker: Option<NorthMarker>,
}

impl GaugeRenderer {
    /// Renderer with the default scale maximum and no size yet.
    pub fn new() -> Self { Self::with_max_scale(DEFAULT_MAX_SCALE) }

    /// Renderer whose arc is full at `max_scale`.
    pub fn with_max_scale(max_scale: f32) -> Self {
        Self {
            geometry: GaugeGeometry::from_side(0.0),
            max_scale,
            reading: 0.0,
            state: RedrawState::Clean,
            show_north_marker: false,
            north_marker: None,
        }
    }

    // -------------------------------------------------------------------------
    // Sizing
    // -------------------------------------------------------------------------

    /// Lay the gauge out in a square of `side` units.
    ///
    /// Returns `true` if the geometry changed. Configuring the same side twice
    /// keeps the cached geometry and marker.
    pub fn configure(
        &mut self,
        side: f32,
    ) -> bool {
        let geometry = GaugeGeometry::from_side(side);
        if geometry == self.geometry {
            return false;
        }
        self.geometry = geometry;
        self.north_marker = None;
        true
    }

    #[inline]
    pub const fn geometry(&self) -> &GaugeGeometry { &self.geometry }

    #[inline]
    pub const fn max_scale(&self) -> f32 { self.max_scale }

    // -------------------------------------------------------------------------
    // Primitives
    // -------------------------------------------------------------------------

    /// Fixed background arc, drawn on [`GaugeGeometry::view_radius`].
    #[inline]
    pub const fn background_arc(&self) -> ArcSpan { geometry::background_arc() }

    /// Filled arc for `reading` on this renderer's scale.
    #[inline]
    pub fn value_arc(
        &self,
        reading: f32,
    ) -> ArcSpan {
        geometry::value_arc(reading, self.max_scale)
    }

    /// Label anchor and rotation around the gauge center.
    #[inline]
    pub fn label_placement(
        &self,
        angle_deg: f32,
        radius: f32,
        inverted: bool,
    ) -> LabelPlacement {
        geometry::label_placement(self.geometry.center, angle_deg, radius, inverted)
    }

    /// North marker for the current geometry, or `None` when disabled.
    ///
    /// The triangle is computed on first use and reused until the next resize.
    pub fn compute_north_marker(
        &mut self,
        enabled: bool,
    ) -> Option<NorthMarker> {
        if !enabled {
            return None;
        }
        let g = &self.geometry;
        Some(*self.north_marker.get_or_insert_with(|| geometry::north_marker(g)))
    }

    pub fn show_north_marker(&mut self) { self.show_north_marker = true; }

    pub fn hide_north_marker(&mut self) { self.show_north_marker = false; }

    #[inline]
    pub const fn is_north_marker_visible(&self) -> bool { self.show_north_marker }

    // -------------------------------------------------------------------------
    // Reading / Redraw
    // -------------------------------------------------------------------------

    /// Offer a new reading.
    ///
    /// Accepts it and returns `true` only if its integer part differs from the
    /// stored reading's. Otherwise the reading is discarded.
    pub fn update(
        &mut self,
        reading: f32,
    ) -> bool {
        if truncate(self.reading) == truncate(reading) {
            return false;
        }
        self.reading = reading;
        self.state = RedrawState::Dirty;
        true
    }

    /// Last accepted reading.
    #[inline]
    pub const fn reading(&self) -> f32 { self.reading }

    #[inline]
    pub const fn state(&self) -> RedrawState { self.state }

    #[inline]
    pub fn is_dirty(&self) -> bool { self.state == RedrawState::Dirty }

    /// Consume a pending redraw. Returns `true` if one was owed.
    pub fn take_redraw(&mut self) -> bool {
        let dirty = self.is_dirty();
        self.state = RedrawState::Clean;
        dirty
    }

    /// Assemble the drawable frame for the current reading.
    pub fn frame<'a>(
        &mut self,
        unit: &str,
        caption: &'a str,
    ) -> GaugeFrame<'a> {
        let north_marker = self.compute_north_marker(self.show_north_marker);
        let g = self.geometry;

        let mut readout_text: String<READOUT_LEN> = String::new();
        let _ = write!(readout_text, "{}", truncate(self.reading));
        for c in unit.chars() {
            if readout_text.push(c).is_err() {
                break;
            }
        }

        GaugeFrame {
            center: g.center,
            arc_radius: g.view_radius,
            outer_radius: g.outer_radius,
            background: self.background_arc(),
            value: self.value_arc(self.reading),
            north_marker,
            readout: self.label_placement(VALUE_LABEL_ANGLE_DEG, g.value_label_radius, false),
            readout_text,
            caption: self.label_placement(NAME_LABEL_ANGLE_DEG, g.name_label_radius, true),
            caption_text: caption,
        }
    }
}

impl Default for GaugeRenderer {
    fn default() -> Self { Self::new() }
}

/// Integer part of a reading, toward zero. NaN truncates to 0.
#[inline]
fn truncate(reading: f32) -> i32 { reading as i32 }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let r = GaugeRenderer::new();
        assert_eq!(r.state(), RedrawState::Clean);
        assert_eq!(r.reading(), 0.0);
        assert_eq!(r.max_scale(), 160.0);
        assert!(!r.is_north_marker_visible());
    }

    #[test]
    fn test_update_same_integer_part_is_discarded() {
        let mut r = GaugeRenderer::new();
        assert!(r.update(12.1));
        assert!(r.take_redraw());
        assert!(!r.update(12.9), "12.1 and 12.9 both truncate to 12");
        assert_eq!(r.reading(), 12.1, "discarded reading must not be stored");
        assert_eq!(r.state(), RedrawState::Clean);
    }

    #[test]
    fn test_update_new_integer_part_marks_dirty() {
        let mut r = GaugeRenderer::new();
        r.update(12.9);
        r.take_redraw();
        assert!(r.update(13.0));
        assert_eq!(r.reading(), 13.0);
        assert_eq!(r.state(), RedrawState::Dirty);
    }

    #[test]
    fn test_update_sub_unit_from_initial_zero() {
        let mut r = GaugeRenderer::new();
        assert!(!r.update(0.7), "0.7 truncates to the initial 0");
        assert!(!r.update(-0.7), "truncation is toward zero");
        assert!(r.update(-1.2));
    }

    #[test]
    fn test_take_redraw_consumes_dirty() {
        let mut r = GaugeRenderer::new();
        assert!(!r.take_redraw());
        r.update(40.0);
        assert!(r.is_dirty());
        assert!(r.take_redraw());
        assert!(!r.take_redraw());
        assert_eq!(r.state(), RedrawState::Clean);
    }

    #[test]
    fn test_configure_is_idempotent() {
        let mut r = GaugeRenderer::new();
        assert!(r.configure(200.0));
        let before = *r.geometry();
        assert!(!r.configure(200.0));
        assert_eq!(*r.geometry(), before);
        assert!((r.geometry().view_radius - 81.4).abs() < 1e-3);
    }

    #[test]
    fn test_configure_does_not_dirty() {
        let mut r = GaugeRenderer::new();
        r.configure(120.0);
        assert_eq!(r.state(), RedrawState::Clean);
    }

    #[test]
    fn test_background_arc_independent_of_configure() {
        let mut r = GaugeRenderer::new();
        let before = r.background_arc();
        r.configure(200.0);
        r.configure(57.0);
        assert_eq!(r.background_arc(), before);
        assert_eq!(before, ArcSpan::new(315.0, 85.0));
    }

    #[test]
    fn test_value_arc_sweeps() {
        let r = GaugeRenderer::new();
        let sweeps = [0.0, 80.0, 160.0, 200.0].map(|x| r.value_arc(x).sweep_deg);
        assert_eq!(sweeps, [0.0, 42.5, 85.0, 85.0]);
    }

    #[test]
    fn test_custom_max_scale() {
        let r = GaugeRenderer::with_max_scale(100.0);
        assert_eq!(r.value_arc(50.0).sweep_deg, 42.5);
        assert_eq!(r.value_arc(100.0).sweep_deg, 85.0);
    }

    #[test]
    fn test_north_marker_disabled() {
        let mut r = GaugeRenderer::new();
        r.configure(200.0);
        assert_eq!(r.compute_north_marker(false), None);
    }

    #[test]
    fn test_north_marker_cached_until_resize() {
        let mut r = GaugeRenderer::new();
        r.configure(200.0);
        let first = r.compute_north_marker(true).unwrap();
        assert_eq!(r.compute_north_marker(true), Some(first));
        r.configure(200.0);
        assert_eq!(r.north_marker, Some(first), "same side keeps the cache");

        r.configure(400.0);
        assert_eq!(r.north_marker, None, "resize drops the cache");
        let second = r.compute_north_marker(true).unwrap();
        assert!(second.apex.x > first.apex.x);
    }

    #[test]
    fn test_degenerate_configure_does_not_panic() {
        let mut r = GaugeRenderer::new();
        r.configure(-50.0);
        r.show_north_marker();
        r.update(80.0);
        let frame = r.frame("uT", "Magnetic field");
        assert_eq!(frame.arc_radius, 0.0);
        assert_eq!(frame.center, PointF::new(0.0, 0.0));
        assert!(frame.north_marker.is_some());
    }

    #[test]
    fn test_frame_contents() {
        let mut r = GaugeRenderer::new();
        r.configure(200.0);
        r.update(80.6);
        let frame = r.frame("uT", "Magnetic field");

        assert_eq!(frame.readout_text.as_str(), "80uT");
        assert_eq!(frame.caption_text, "Magnetic field");
        assert_eq!(frame.background, ArcSpan::new(315.0, 85.0));
        assert!((frame.value.sweep_deg - 80.6 / 160.0 * 85.0).abs() < 1e-3, "geometry keeps full precision");
        assert!((frame.arc_radius - 81.4).abs() < 1e-3);
        assert_eq!(frame.readout.rotation_deg, 397.0);
        assert_eq!(frame.caption.rotation_deg, 323.0);
        assert_eq!(frame.north_marker, None);
    }

    #[test]
    fn test_frame_includes_marker_when_shown() {
        let mut r = GaugeRenderer::new();
        r.configure(200.0);
        r.show_north_marker();
        assert!(r.frame("", "").north_marker.is_some());
        r.hide_north_marker();
        assert!(r.frame("", "").north_marker.is_none());
    }

    #[test]
    fn test_frame_does_not_consume_redraw() {
        let mut r = GaugeRenderer::new();
        r.update(5.0);
        let _ = r.frame("uT", "");
        assert!(r.is_dirty());
    }

    #[test]
    fn test_readout_truncates_long_unit() {
        let mut r = GaugeRenderer::new();
        r.update(123.0);
        let unit = "x".repeat(READOUT_LEN * 2);
        let frame = r.frame(&unit, "");
        assert_eq!(frame.readout_text.len(), READOUT_LEN);
        assert!(frame.readout_text.starts_with("123x"));
    }
}
