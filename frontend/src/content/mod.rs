//! Copy, card data and link lists for the landing page.
//!
//! The catalog ships inside the binary as JSON and is parsed on first use.

use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::error::LandingError;

const LANDING_JSON: &str = include_str!("landing.json");

static CATALOG: OnceCell<LandingContent> = OnceCell::new();

pub fn catalog() -> Result<&'static LandingContent, LandingError> {
    CATALOG.get_or_try_init(|| parse(LANDING_JSON))
}

pub fn parse(raw: &str) -> Result<LandingContent, LandingError> {
    Ok(serde_json::from_str(raw)?)
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LandingContent {
    pub brand: Brand,
    pub nav: Vec<Link>,
    pub header_cta: Link,
    pub hero: HeroCopy,
    pub ambient_video: String,
    pub floating_modules: Vec<FloatingModule>,
    pub showcase: Showcase,
    pub reporting: Reporting,
    pub risk: Risk,
    pub dashboard: Dashboard,
    pub footer: Footer,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Brand {
    pub name: String,
    pub description: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct HeroCopy {
    pub title_top: String,
    pub title_bottom: String,
    pub caption: String,
    pub scroll_hint: String,
    pub video: String,
}

/// A badge pinned over the page at `x`/`y` percent of the viewport.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FloatingModule {
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// Resting rotation in degrees.
    pub rotation: f64,
    /// Entrance delay in seconds.
    pub delay: f64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Showcase {
    pub heading: String,
    pub subheading: String,
    pub modules: Vec<ShowcaseModule>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ShowcaseModule {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub features: Vec<String>,
    pub gradient: [String; 3],
    pub icon: String,
}

impl ShowcaseModule {
    pub fn gradient_css(&self, direction: &str) -> String {
        let [from, via, to] = &self.gradient;
        format!("linear-gradient({}, {}, {}, {})", direction, from, via, to)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Reporting {
    pub heading: String,
    pub subheading: String,
    pub report_types: Vec<ReportType>,
    /// Percent fill per quarter, Q1 first.
    pub quarterly: Vec<u8>,
    pub alert_title: String,
    pub alert_body: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ReportType {
    pub name: String,
    pub description: String,
    pub color: String,
    pub delay: f64,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn color(self) -> &'static str {
        match self {
            Severity::Critical => "#EF4444",
            Severity::High => "#F97316",
            Severity::Medium => "#F59E0B",
            Severity::Low => "#10B981",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Risk {
    pub heading: String,
    pub subheading: String,
    pub levels: Vec<RiskLevel>,
    pub points: Vec<RiskPoint>,
}

impl Risk {
    pub fn total_risks(&self) -> u32 {
        self.levels.iter().map(|level| level.count).sum()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RiskLevel {
    pub severity: Severity,
    pub count: u32,
    pub delay: f64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RiskPoint {
    pub x: f64,
    pub y: f64,
    pub severity: Severity,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub badge: String,
    pub heading: String,
    pub subheading: String,
    pub address: String,
    pub widgets: Vec<Widget>,
    /// Trend line heights in the chart's 600x200 view box, left to right.
    pub trend: Vec<u16>,
    pub stats: Vec<Stat>,
}

impl Dashboard {
    /// Points for an SVG polyline spread evenly across `width`.
    pub fn trend_points(&self, width: f64) -> Vec<(f64, f64)> {
        let steps = self.trend.len().saturating_sub(1).max(1) as f64;
        self.trend
            .iter()
            .enumerate()
            .map(|(i, y)| (i as f64 * width / steps, f64::from(*y)))
            .collect()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Widget {
    pub icon: String,
    pub value: String,
    pub label: String,
    pub color: String,
    /// Progress bar fill in percent.
    pub fill: u8,
    /// Fill animation length in seconds.
    pub duration: f64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub icon: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Footer {
    pub heading: String,
    pub heading_accent: String,
    pub blurb: String,
    pub cta: String,
    pub socials: Vec<String>,
    pub columns: Vec<LinkColumn>,
    pub status: String,
    pub bottom_links: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LinkColumn {
    pub title: String,
    pub links: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let content = catalog().expect("embedded landing.json should parse");
        assert_eq!(content.brand.name, "Athermind");
        assert_eq!(content.nav.len(), 6);
        assert_eq!(content.floating_modules.len(), 3);
        assert_eq!(content.showcase.modules.len(), 3);
        assert_eq!(content.reporting.report_types.len(), 4);
        assert_eq!(content.dashboard.stats.len(), 4);
    }

    #[test]
    fn risk_total_sums_levels() {
        let content = catalog().unwrap();
        assert_eq!(content.risk.total_risks(), 45);
    }

    #[test]
    fn footer_columns_keep_their_order() {
        let content = catalog().unwrap();
        let titles: Vec<&str> = content
            .footer
            .columns
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, ["product", "company", "resources", "legal"]);
    }

    #[test]
    fn severity_colors() {
        assert_eq!(Severity::Critical.color(), "#EF4444");
        assert_eq!(Severity::Low.color(), "#10B981");
        let parsed: Severity = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Severity::Medium);
        assert_eq!(parsed.label(), "Medium");
    }

    #[test]
    fn trend_points_span_the_view_box() {
        let content = catalog().unwrap();
        let points = content.dashboard.trend_points(600.0);
        assert_eq!(points.first(), Some(&(0.0, 150.0)));
        assert_eq!(points.last(), Some(&(600.0, 50.0)));
        assert_eq!(points[1], (100.0, 120.0));
    }

    #[test]
    fn brand_needs_only_rendered_copy() {
        let brand: Brand =
            serde_json::from_str(r#"{"name": "Athermind", "description": "GRC"}"#).unwrap();
        assert_eq!(brand.name, "Athermind");
        assert_eq!(brand.description, "GRC");
    }

    #[test]
    fn malformed_content_is_an_error() {
        let err = parse("{\"brand\": 3}").unwrap_err();
        assert!(matches!(err, LandingError::Content(_)));
    }

    #[test]
    fn gradient_css_uses_all_three_stops() {
        let content = catalog().unwrap();
        assert_eq!(
            content.showcase.modules[0].gradient_css("to right"),
            "linear-gradient(to right, #0078B4, #00A8E8, #0078B4)"
        );
    }
}
