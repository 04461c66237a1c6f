/// Base follow speed for the first floating module; each later one moves faster.
const BASE_SPEED: f64 = 0.02;
const SPEED_STEP: f64 = 0.01;

pub fn follow_speed(index: usize) -> f64 {
    BASE_SPEED + index as f64 * SPEED_STEP
}

/// Offset in px for the module at `index` given the pointer position and
/// viewport size. Zero when the pointer sits at the viewport center.
pub fn pointer_offset(
    pointer: (f64, f64),
    viewport: (f64, f64),
    index: usize,
) -> (f64, f64) {
    let speed = follow_speed(index);
    let (center_x, center_y) = (viewport.0 / 2.0, viewport.1 / 2.0);
    ((pointer.0 - center_x) * speed, (pointer.1 - center_y) * speed)
}

/// Maps a `[0, 1)` random sample to a drift in `[-amplitude, amplitude)`.
pub fn drift(sample: f64, amplitude: f64) -> f64 {
    sample * amplitude * 2.0 - amplitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_does_not_move_modules() {
        for index in 0..3 {
            assert_eq!(pointer_offset((640.0, 360.0), (1280.0, 720.0), index), (0.0, 0.0));
        }
    }

    #[test]
    fn later_modules_follow_faster() {
        let pointer = (1280.0, 0.0);
        let viewport = (1280.0, 720.0);
        let (first_x, first_y) = pointer_offset(pointer, viewport, 0);
        let (third_x, _) = pointer_offset(pointer, viewport, 2);

        assert!((first_x - 12.8).abs() < 1e-9);
        assert!((first_y - -7.2).abs() < 1e-9);
        assert!(third_x > first_x);
        assert!((follow_speed(2) - 0.04).abs() < 1e-12);
    }

    #[test]
    fn drift_is_symmetric_around_zero() {
        assert_eq!(drift(0.0, 15.0), -15.0);
        assert_eq!(drift(0.5, 15.0), 0.0);
        assert!(drift(0.999, 15.0) < 15.0);
    }
}
