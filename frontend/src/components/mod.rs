pub mod dashboard_preview;
pub mod floating_modules;
pub mod footer;
pub mod header;
pub mod hero_section;
pub mod modules_showcase;
pub mod optimized_video;
pub mod reporting_hub;
pub mod reveal;
pub mod risk_detection;
