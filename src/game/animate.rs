//! Value Animation
//!
//! Exponential approach-to-target used for camera follow.
//! The blend factor `1 - 2^(-rate * dt)` makes the convergence speed
//! independent of frame time: two half-length steps land on the same
//! value as one full-length step.

use macroquad::math::Vec2;

/// Distance at which an animated value is considered to have arrived.
pub const ARRIVAL_EPSILON: f32 = 0.001;

/// Check if two floats are within `epsilon` of each other
pub fn almost_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

/// Move `current` toward `target` by one frame of exponential decay.
///
/// Returns the new value and whether the target was reached. Once within
/// [`ARRIVAL_EPSILON`] the value snaps exactly onto `target`.
pub fn smooth_towards(current: f32, target: f32, delta_time: f32, rate: f32) -> (f32, bool) {
    let blend = 1.0 - 2.0f32.powf(-rate * delta_time);
    let value = current + (target - current) * blend;
    if almost_equal(value, target, ARRIVAL_EPSILON) {
        (target, true)
    } else {
        (value, false)
    }
}

/// Per-axis [`smooth_towards`]. Reached only when both axes are.
pub fn smooth_towards_v2(current: Vec2, target: Vec2, delta_time: f32, rate: f32) -> (Vec2, bool) {
    let (x, x_reached) = smooth_towards(current.x, target.x, delta_time, rate);
    let (y, y_reached) = smooth_towards(current.y, target.y, delta_time, rate);
    (Vec2::new(x, y), x_reached && y_reached)
}

/// In-place variant for state that lives in a struct field
pub fn animate_v2_to_target(value: &mut Vec2, target: Vec2, delta_time: f32, rate: f32) -> bool {
    let (next, reached) = smooth_towards_v2(*value, target, delta_time, rate);
    *value = next;
    reached
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn ticks_to_converge(rate: f32) -> (usize, f32) {
        let mut value = 0.0;
        for tick in 1..=1000 {
            let (next, reached) = smooth_towards(value, 100.0, DT, rate);
            value = next;
            if reached {
                return (tick, value);
            }
        }
        panic!("did not converge");
    }

    #[test]
    fn test_converges_and_snaps_exactly() {
        let (ticks, value) = ticks_to_converge(30.0);
        assert_eq!(value, 100.0);
        assert!(ticks < 60, "took {} ticks", ticks);
    }

    #[test]
    fn test_convergence_is_deterministic() {
        assert_eq!(ticks_to_converge(30.0), ticks_to_converge(30.0));
    }

    #[test]
    fn test_epsilon_snap() {
        for &(dt, rate) in &[(DT, 30.0), (0.5, 1.0), (1e-6, 0.1)] {
            let (value, reached) = smooth_towards(99.9995, 100.0, dt, rate);
            assert!(reached);
            assert_eq!(value, 100.0);
        }
    }

    #[test]
    fn test_zero_delta_time_holds_value() {
        let (value, reached) = smooth_towards(10.0, 100.0, 0.0, 30.0);
        assert_eq!(value, 10.0);
        assert!(!reached);
    }

    #[test]
    fn test_zero_rate_never_moves() {
        let (value, reached) = smooth_towards(10.0, 100.0, DT, 0.0);
        assert_eq!(value, 10.0);
        assert!(!reached);

        let (value, reached) = smooth_towards(100.0, 100.0, DT, 0.0);
        assert_eq!(value, 100.0);
        assert!(reached);
    }

    #[test]
    fn test_vector_requires_both_axes() {
        // x already there, y far away
        let (value, reached) = smooth_towards_v2(Vec2::new(5.0, 0.0), Vec2::new(5.0, 100.0), DT, 30.0);
        assert!(!reached);
        assert_eq!(value.x, 5.0);
        assert!(value.y > 0.0 && value.y < 100.0);

        let mut camera = Vec2::new(-40.0, 12.0);
        let target = Vec2::new(16.0, -32.0);
        let mut reached = false;
        for _ in 0..200 {
            reached = animate_v2_to_target(&mut camera, target, DT, 30.0);
            if reached {
                break;
            }
        }
        assert!(reached);
        assert_eq!(camera, target);
    }
}
