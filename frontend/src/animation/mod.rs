pub mod frame_gate;
pub mod parallax;
pub mod progress;
pub mod surface;

/// Staggered CSS delay for the `index`-th item of a group.
pub fn stagger(index: usize, step_secs: f64) -> String {
    format!("{}s", index as f64 * step_secs)
}

/// Whether an element whose top edge sits at `top` (relative to the
/// viewport) has passed the reveal start line.
pub fn is_past_start(top: f64, viewport_height: f64, start_ratio: f64) -> bool {
    top <= viewport_height * start_ratio
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_formats_seconds() {
        assert_eq!(stagger(0, 0.15), "0s");
        assert_eq!(stagger(2, 0.5), "1s");
    }

    #[test]
    fn reveal_starts_at_eighty_percent() {
        assert!(!is_past_start(900.0, 1000.0, 0.8));
        assert!(!is_past_start(800.5, 1000.0, 0.8));
        assert!(is_past_start(799.0, 1000.0, 0.8));
        // scrolled past: still revealed
        assert!(is_past_start(-400.0, 1000.0, 0.8));
    }

    #[test]
    fn top_touching_the_start_line_reveals() {
        // observers fire once on touch, so the line itself must count
        assert!(is_past_start(800.0, 1000.0, 0.8));
        assert!(is_past_start(0.0, 0.0, 0.8));
    }
}
