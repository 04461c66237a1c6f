/// Base URL for videos and other static assets. Empty means same origin.
pub fn get_asset_base_url() -> String {
    option_env!("ATHERMIND_ASSET_BASE_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_default()
}

pub fn asset_url(path: &str) -> String {
    format!("{}/{}", get_asset_base_url(), path.trim_start_matches('/'))
}

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Tuning for the hero zoom/parallax sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroConfig {
    /// How much the clip mask grows at full progress (`scale = 1 + progress * gain`).
    pub scale_gain: f64,
    /// Distance both titles travel at full progress, in vh.
    pub title_travel_vh: f64,
    pub clamp_title_opacity: bool,
    /// Height of the scroll track, in viewport heights.
    pub track_height_vh: u32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            scale_gain: 140.0,
            title_travel_vh: 100.0,
            clamp_title_opacity: true,
            track_height_vh: 300,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandingConfig {
    pub hero: HeroConfig,
    pub carousel_interval_ms: u32,
    /// Fraction of the viewport height an element's top must pass before it reveals.
    pub reveal_start_ratio: f64,
    pub header_entrance_delay_ms: u32,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            hero: HeroConfig::default(),
            carousel_interval_ms: 5000,
            reveal_start_ratio: 0.8,
            header_entrance_delay_ms: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_tuning() {
        let config = LandingConfig::default();
        assert_eq!(config.hero.scale_gain, 140.0);
        assert_eq!(config.hero.title_travel_vh, 100.0);
        assert_eq!(config.hero.track_height_vh, 300);
        assert!(config.hero.clamp_title_opacity);
        assert_eq!(config.carousel_interval_ms, 5000);
        assert_eq!(config.reveal_start_ratio, 0.8);
    }

    #[test]
    fn asset_url_joins_with_single_slash() {
        let url = asset_url("/videos/fingerprint_blue.mp4");
        assert!(url.ends_with("/videos/fingerprint_blue.mp4"));
        assert!(!url.contains("//videos"));
    }
}
