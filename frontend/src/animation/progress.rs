//! Scroll progress and the hero's interpolation formulas.
//!
//! Everything here is a pure function of the progress value so it can be
//! exercised without a browser.

use crate::config::HeroConfig;

/// Where the viewport is within the hero track, derived fresh on every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub scroll_offset: f64,
    pub track_extent: f64,
    pub progress: f64,
}

impl ScrollState {
    /// `track_height` and `viewport_height` are both in CSS pixels.
    pub fn measure(scroll_offset: f64, track_height: f64, viewport_height: f64) -> Self {
        Self::from_extent(scroll_offset, track_height - viewport_height)
    }

    pub fn from_extent(scroll_offset: f64, track_extent: f64) -> Self {
        Self {
            scroll_offset,
            track_extent,
            progress: progress(scroll_offset, track_extent),
        }
    }
}

/// Normalized position inside the track, pinned to `[0, 1]`.
///
/// A track no taller than the viewport has no scrollable range and always
/// yields `0`.
pub fn progress(scroll_offset: f64, track_extent: f64) -> f64 {
    if !(track_extent > 0.0) {
        return 0.0;
    }
    let ratio = scroll_offset / track_extent;
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

pub fn mask_scale(progress: f64, gain: f64) -> f64 {
    1.0 + progress * gain
}

pub fn counter_scale(progress: f64, gain: f64) -> f64 {
    1.0 / mask_scale(progress, gain)
}

/// Unclamped title fade. Goes negative past the midpoint.
pub fn title_fade(progress: f64) -> f64 {
    1.0 - progress * 2.0
}

/// The caption finishes its own sequence halfway through the track.
pub fn caption_progress(progress: f64) -> f64 {
    (progress * 2.0).min(1.0)
}

pub fn caption_blur_px(text_progress: f64) -> f64 {
    (4.0 - text_progress * 20.0).max(0.0)
}

pub fn caption_opacity(text_progress: f64) -> f64 {
    (0.4 + text_progress * 2.0).min(1.0)
}

pub fn caption_offset_px(text_progress: f64) -> f64 {
    20.0 - text_progress * 40.0
}

/// Every style value the hero needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroFrame {
    pub progress: f64,
    pub mask_scale: f64,
    pub media_scale: f64,
    pub title_top_shift_vh: f64,
    pub title_bottom_shift_vh: f64,
    pub title_opacity: f64,
    pub caption_blur_px: f64,
    pub caption_opacity: f64,
    pub caption_offset_px: f64,
}

impl HeroFrame {
    pub fn at(progress: f64, config: &HeroConfig) -> Self {
        let scale = mask_scale(progress, config.scale_gain);
        let shift = progress * config.title_travel_vh;
        let fade = title_fade(progress);
        let text_progress = caption_progress(progress);

        Self {
            progress,
            mask_scale: scale,
            media_scale: counter_scale(progress, config.scale_gain),
            title_top_shift_vh: -shift,
            title_bottom_shift_vh: shift,
            title_opacity: if config.clamp_title_opacity {
                fade.clamp(0.0, 1.0)
            } else {
                fade
            },
            caption_blur_px: caption_blur_px(text_progress),
            caption_opacity: caption_opacity(text_progress),
            caption_offset_px: caption_offset_px(text_progress),
        }
    }

    pub fn from_state(state: &ScrollState, config: &HeroConfig) -> Self {
        Self::at(state.progress, config)
    }

    pub fn mask_transform(&self) -> String {
        format!("scale({})", self.mask_scale)
    }

    pub fn media_transform(&self) -> String {
        format!("translate(-50%, -50%) scale({})", self.media_scale)
    }

    pub fn title_top_transform(&self) -> String {
        format!("translateY({}vh)", self.title_top_shift_vh)
    }

    pub fn title_bottom_transform(&self) -> String {
        format!("translateY({}vh)", self.title_bottom_shift_vh)
    }

    pub fn caption_filter(&self) -> String {
        format!("blur({}px)", self.caption_blur_px)
    }

    pub fn caption_transform(&self) -> String {
        format!("translateY({}px)", self.caption_offset_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn reference() -> HeroConfig {
        HeroConfig::default()
    }

    #[test]
    fn progress_stays_within_unit_range() {
        let extent = 1800.0;
        for offset in [0.0, 1.0, 450.0, 900.0, 1799.0, 1800.0, 5000.0, 1e9] {
            let p = progress(offset, extent);
            assert!((0.0..=1.0).contains(&p), "offset {offset} gave {p}");
        }
        assert_eq!(progress(900.0, extent), 0.5);
        assert_eq!(progress(5000.0, extent), 1.0);
    }

    #[test]
    fn progress_is_monotonic_in_offset() {
        let extent = 1234.0;
        let mut last = 0.0;
        for step in 0..200 {
            let p = progress(step as f64 * 10.0, extent);
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn degenerate_extent_pins_progress_to_zero() {
        for extent in [0.0, -1.0, -900.0, f64::NAN] {
            assert_eq!(progress(300.0, extent), 0.0);
            assert_eq!(progress(0.0, extent), 0.0);
        }
        let state = ScrollState::measure(500.0, 800.0, 800.0);
        assert_eq!(state.track_extent, 0.0);
        assert_eq!(state.progress, 0.0);
    }

    #[test]
    fn measure_subtracts_viewport_from_track() {
        let state = ScrollState::measure(1200.0, 3000.0, 1000.0);
        assert_eq!(state.track_extent, 2000.0);
        assert!((state.progress - 0.6).abs() < EPS);
    }

    #[test]
    fn mask_scale_spans_one_to_one_forty_one() {
        assert_eq!(mask_scale(0.0, 140.0), 1.0);
        assert_eq!(mask_scale(1.0, 140.0), 141.0);
        assert_eq!(mask_scale(0.5, 140.0), 71.0);
    }

    #[test]
    fn counter_scale_cancels_mask_scale() {
        for i in 0..=100 {
            let p = i as f64 / 100.0;
            let product = mask_scale(p, 140.0) * counter_scale(p, 140.0);
            assert!((product - 1.0).abs() < EPS, "progress {p}");
        }
    }

    #[test]
    fn title_fade_hits_zero_at_midpoint() {
        assert_eq!(title_fade(0.0), 1.0);
        assert_eq!(title_fade(0.5), 0.0);
        assert!(title_fade(0.75) < 0.0);

        let mut last = f64::INFINITY;
        for i in 0..=100 {
            let fade = title_fade(i as f64 / 100.0);
            assert!(fade < last);
            last = fade;
        }
    }

    #[test]
    fn caption_blur_clears_early() {
        assert_eq!(caption_blur_px(caption_progress(0.0)), 4.0);
        assert_eq!(caption_blur_px(caption_progress(0.2)), 0.0);
        assert_eq!(caption_blur_px(caption_progress(1.0)), 0.0);

        let mut last = f64::INFINITY;
        for i in 0..=100 {
            let blur = caption_blur_px(caption_progress(i as f64 / 100.0));
            assert!(blur <= last);
            last = blur;
        }
    }

    #[test]
    fn caption_fades_in_and_rises() {
        assert!((caption_opacity(0.0) - 0.4).abs() < EPS);
        assert_eq!(caption_opacity(0.35), 1.0);
        assert_eq!(caption_opacity(1.0), 1.0);
        assert_eq!(caption_offset_px(0.0), 20.0);
        assert_eq!(caption_offset_px(1.0), -20.0);
        assert_eq!(caption_progress(0.75), 1.0);
    }

    #[test]
    fn frame_at_rest_is_identity() {
        let frame = HeroFrame::at(0.0, &reference());
        assert_eq!(frame.mask_scale, 1.0);
        assert_eq!(frame.media_scale, 1.0);
        assert_eq!(frame.title_opacity, 1.0);
        assert_eq!(frame.caption_blur_px, 4.0);
        assert_eq!(frame.mask_transform(), "scale(1)");
        assert_eq!(frame.media_transform(), "translate(-50%, -50%) scale(1)");
        assert_eq!(frame.title_bottom_transform(), "translateY(0vh)");
        assert_eq!(frame.caption_filter(), "blur(4px)");
        assert_eq!(frame.caption_transform(), "translateY(20px)");
    }

    #[test]
    fn titles_part_in_opposite_directions() {
        let frame = HeroFrame::at(0.25, &reference());
        assert_eq!(frame.title_top_shift_vh, -25.0);
        assert_eq!(frame.title_bottom_shift_vh, 25.0);
        assert_eq!(frame.title_top_transform(), "translateY(-25vh)");
        assert_eq!(frame.title_bottom_transform(), "translateY(25vh)");
    }

    #[test]
    fn title_opacity_clamps_past_midpoint_unless_disabled() {
        let clamped = HeroFrame::at(0.9, &reference());
        assert_eq!(clamped.title_opacity, 0.0);

        let raw_config = HeroConfig {
            clamp_title_opacity: false,
            ..reference()
        };
        let raw = HeroFrame::at(0.9, &raw_config);
        assert!((raw.title_opacity - -0.8).abs() < EPS);
    }

    #[test]
    fn frame_at_full_progress() {
        let state = ScrollState::from_extent(4000.0, 2000.0);
        let frame = HeroFrame::from_state(&state, &reference());
        assert_eq!(frame.progress, 1.0);
        assert_eq!(frame.mask_scale, 141.0);
        assert!((frame.media_scale - 1.0 / 141.0).abs() < EPS);
        assert_eq!(frame.caption_opacity, 1.0);
        assert_eq!(frame.caption_offset_px, -20.0);
    }
}
