//! Scroll-coupled card fan.
//!
//! The showcase section's top edge, measured against the viewport, is mapped to a
//! progress value in `[0, 1]`. Each card's transform is a pure function of that
//! progress and the card's signed distance from the middle of the deck, so the same
//! scroll position always produces the same frame.

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollCalibration {
    /// Viewport fraction at which the section top starts the animation.
    pub start: f64,
    /// Viewport fraction at which the section top completes it.
    pub end: f64,
}

impl Default for ScrollCalibration {
    fn default() -> Self {
        Self { start: config::FAN_START, end: config::FAN_END }
    }
}

impl ScrollCalibration {
    pub fn progress(&self, section_top: f64, viewport_height: f64) -> f64 {
        if !(viewport_height > 0.0) || !section_top.is_finite() || !viewport_height.is_finite() {
            return 0.0;
        }
        let start = self.start * viewport_height;
        let end = self.end * viewport_height;
        let span = start - end;
        if span <= 0.0 {
            return if section_top <= end { 1.0 } else { 0.0 };
        }
        ((start - section_top) / span).clamp(0.0, 1.0)
    }
}

/// The section heading fades in once the section top is inside the lower viewport band.
pub fn header_revealed(section_top: f64, viewport_height: f64) -> bool {
    viewport_height > 0.0 && section_top < config::FAN_HEADER_REVEAL * viewport_height
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FanGeometry {
    pub spread_px: f64,
    pub lift_px: f64,
    pub max_rotation_deg: f64,
    pub scale_falloff: f64,
    pub min_scale: f64,
    pub rest_opacity: f64,
}

impl Default for FanGeometry {
    fn default() -> Self {
        Self {
            spread_px: 180.0,
            lift_px: 28.0,
            max_rotation_deg: 9.0,
            scale_falloff: 0.05,
            min_scale: 0.8,
            rest_opacity: 0.6,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate_deg: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_index: i32,
}

impl CardTransform {
    pub fn to_style(&self) -> String {
        format!(
            "transform: translate({:.2}px, {:.2}px) rotate({:.3}deg) scale({:.4}); opacity: {:.3}; z-index: {};",
            self.translate_x, self.translate_y, self.rotate_deg, self.scale, self.opacity, self.z_index
        )
    }
}

/// Signed distance of card `index` from the middle of a deck of `count` cards.
pub fn center_offset(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    index as f64 - (count as f64 - 1.0) / 2.0
}

impl FanGeometry {
    pub fn card(&self, index: usize, count: usize, progress: f64) -> CardTransform {
        let p = if progress.is_finite() { progress.clamp(0.0, 1.0) } else { 0.0 };
        let offset = center_offset(index, count);
        let distance = offset.abs();

        CardTransform {
            translate_x: offset * self.spread_px * p,
            translate_y: distance * self.lift_px * p,
            rotate_deg: offset * self.max_rotation_deg * p,
            scale: (1.0 - distance * self.scale_falloff * p).max(self.min_scale),
            opacity: self.rest_opacity + (1.0 - self.rest_opacity) * p,
            z_index: (count as f64 * 2.0 - distance * 2.0).round() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VH: f64 = 1000.0;

    #[test]
    fn clamps_before_start_and_after_end() {
        let calibration = ScrollCalibration::default();
        assert_eq!(calibration.progress(2000.0, VH), 0.0);
        assert_eq!(calibration.progress(750.0, VH), 0.0);
        assert_eq!(calibration.progress(100.0, VH), 1.0);
        assert_eq!(calibration.progress(-500.0, VH), 1.0);
    }

    #[test]
    fn linear_between_calibration_points() {
        let calibration = ScrollCalibration::default();
        let midpoint = (750.0 + 100.0) / 2.0;
        assert!((calibration.progress(midpoint, VH) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn degenerate_viewport_yields_zero() {
        let calibration = ScrollCalibration::default();
        assert_eq!(calibration.progress(100.0, 0.0), 0.0);
        assert_eq!(calibration.progress(f64::NAN, VH), 0.0);
    }

    #[test]
    fn neutral_at_zero_fanned_at_one() {
        let geometry = FanGeometry::default();
        for index in 0..5 {
            let rest = geometry.card(index, 5, 0.0);
            assert_eq!(rest.translate_x, 0.0);
            assert_eq!(rest.translate_y, 0.0);
            assert_eq!(rest.rotate_deg, 0.0);
            assert_eq!(rest.scale, 1.0);
            assert_eq!(rest.opacity, geometry.rest_opacity);
        }
        let outer = geometry.card(0, 5, 1.0);
        assert_eq!(outer.translate_x, -2.0 * geometry.spread_px);
        assert_eq!(outer.rotate_deg, -2.0 * geometry.max_rotation_deg);
        assert!((outer.opacity - 1.0).abs() < 1e-12);
    }

    #[test]
    fn center_card_stays_on_top() {
        let geometry = FanGeometry::default();
        let z: Vec<i32> = (0..5).map(|i| geometry.card(i, 5, 0.5).z_index).collect();
        assert!(z[2] > z[1] && z[1] > z[0]);
        assert_eq!(z[1], z[3]);
    }

    #[test]
    fn header_reveal_threshold() {
        assert!(!header_revealed(950.0, VH));
        assert!(header_revealed(850.0, VH));
    }

    proptest! {
        #[test]
        fn progress_is_monotonic_as_section_rises(a in -3000.0f64..3000.0, b in -3000.0f64..3000.0) {
            let calibration = ScrollCalibration::default();
            let (lower, higher) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(calibration.progress(lower, VH) >= calibration.progress(higher, VH));
        }

        #[test]
        fn progress_stays_in_unit_range(top in -1e6f64..1e6, vh in 1.0f64..5000.0) {
            let p = ScrollCalibration::default().progress(top, vh);
            prop_assert!((0.0..=1.0).contains(&p));
        }

        #[test]
        fn card_motion_grows_with_progress(index in 0usize..8, p in 0.0f64..1.0, q in 0.0f64..1.0) {
            let geometry = FanGeometry::default();
            let (lo, hi) = if p <= q { (p, q) } else { (q, p) };
            let a = geometry.card(index, 8, lo);
            let b = geometry.card(index, 8, hi);
            prop_assert!(a.translate_x.abs() <= b.translate_x.abs());
            prop_assert!(a.rotate_deg.abs() <= b.rotate_deg.abs());
            prop_assert!(a.scale >= b.scale);
            prop_assert!(a.opacity <= b.opacity);
        }
    }
}
