//! Synthetic magnetic field readings.
//!
//! A slow drift around the surface geomagnetic field with sensor jitter, plus
//! a periodic "magnet pass" that pushes the reading well past full scale.

use std::f32::consts::{PI, TAU};

/// Typical surface geomagnetic field magnitude (uT).
pub const BASELINE_UT: f32 = 48.0;

const DRIFT_AMPLITUDE: f32 = 12.0;
const DRIFT_FREQ: f32 = 0.3;

const JITTER_AMPLITUDE: f32 = 0.6;
const JITTER_FREQ: f32 = 7.0;

/// Magnet passes once per `TAU / MAGNET_FREQ` time units.
const MAGNET_FREQ: f32 = 0.05;
const MAGNET_START: f32 = 5.0;
const MAGNET_END: f32 = 6.0;
const MAGNET_PEAK: f32 = 180.0;

/// Field magnitude at time `t`. Never negative.
pub fn field_signal(t: f32) -> f32 {
    let drift = (t * DRIFT_FREQ).sin().mul_add(DRIFT_AMPLITUDE, BASELINE_UT);
    let jitter = (t * JITTER_FREQ).sin() * JITTER_AMPLITUDE;

    let cycle = (t * MAGNET_FREQ) % TAU;
    let magnet = if cycle > MAGNET_START && cycle < MAGNET_END {
        ((cycle - MAGNET_START) / (MAGNET_END - MAGNET_START) * PI).sin() * MAGNET_PEAK
    } else {
        0.0
    };

    (drift + jitter + magnet).max(0.0)
}

#[cfg(test)]
mod tests {
    use compass_common::GaugeRenderer;

    use super::*;

    fn samples() -> impl Iterator<Item = f32> { (0..3000).map(|i| field_signal(i as f32 * 0.05)) }

    #[test]
    fn test_starts_at_baseline() {
        assert!((field_signal(0.0) - BASELINE_UT).abs() < 1e-3);
    }

    #[test]
    fn test_signal_bounds() {
        let upper = BASELINE_UT + DRIFT_AMPLITUDE + JITTER_AMPLITUDE + MAGNET_PEAK;
        for v in samples() {
            assert!((0.0..=upper).contains(&v), "sample {v} out of range");
        }
    }

    #[test]
    fn test_magnet_pass_exceeds_full_scale() {
        let max = samples().fold(f32::MIN, f32::max);
        let renderer = GaugeRenderer::new();
        assert!(max > renderer.max_scale(), "max sample {max} should overshoot the scale");
    }

    #[test]
    fn test_jitter_does_not_redraw_every_frame() {
        let mut renderer = GaugeRenderer::new();
        let mut redraws = 0;
        let mut frames = 0;
        for v in samples() {
            frames += 1;
            if renderer.update(v) {
                redraws += 1;
            }
        }
        assert!(redraws > 0);
        assert!(redraws < frames / 2, "{redraws} redraws in {frames} frames");
    }
}
