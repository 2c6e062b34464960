//! Synchronous relaxation steps.
//!
//! Every step reads positions from one buffer and writes the moved positions to a
//! second buffer, so all forces of a step are computed from the positions as they
//! stood before it. Each ordered pair `(i, j)` is evaluated independently; the pair
//! `(j, i)` is evaluated again from the other endpoint.
use glam::DVec2;

/// Force parameters of a relaxation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceParams {
    pub spread: f64,
    pub damping: f64,
    pub radius: f64,
}

/// Net repulsive force on `points[index]` from every other point within `radius`.
///
/// Each neighbor at distance `d` with `0 < d < radius` contributes
/// `spread / d * (p_i - p_j)`. Coincident points contribute nothing. Distances and
/// contributions that would overflow or underflow are recomputed in a scaled form, so
/// finite inputs always give a finite force per neighbor.
#[inline]
pub fn net_force(points: &[DVec2], index: usize, spread: f64, radius: f64) -> DVec2 {
    let p = points[index];
    let mut force = DVec2::ZERO;

    for (j, &q) in points.iter().enumerate() {
        if j == index {
            continue;
        }
        let delta = p - q;
        let d = distance(delta);
        if d > 0.0 && d < radius {
            let ratio = spread / d;
            force += if ratio.is_finite() {
                delta * ratio
            } else {
                (delta / d) * spread
            };
        }
    }

    force
}

/// Length of `delta`, falling back to `hypot` when the squared sum over- or underflows.
#[inline]
fn distance(delta: DVec2) -> f64 {
    let d = delta.length();
    if d.is_infinite() || (d == 0.0 && delta != DVec2::ZERO) {
        delta.x.hypot(delta.y)
    } else {
        d
    }
}

/// Writes one relaxation step of `current` into `next`.
///
/// `next` must have the same length as `current`.
pub fn relax_step(current: &[DVec2], next: &mut [DVec2], params: ForceParams) {
    debug_assert_eq!(current.len(), next.len());

    for (i, out) in next.iter_mut().enumerate() {
        let force = net_force(current, i, params.spread, params.radius);
        *out = current[i] + force * params.damping;
    }
}

/// Double-buffered working copy of a point set.
#[derive(Debug, Clone)]
pub(crate) struct Relaxation {
    current: Vec<DVec2>,
    next: Vec<DVec2>,
}

impl Relaxation {
    pub(crate) fn new(points: &[DVec2]) -> Self {
        Self {
            current: points.to_vec(),
            next: points.to_vec(),
        }
    }

    pub(crate) fn step(&mut self, params: ForceParams) {
        relax_step(&self.current, &mut self.next, params);
        std::mem::swap(&mut self.current, &mut self.next);
    }

    pub(crate) fn points(&self) -> &[DVec2] {
        &self.current
    }

    pub(crate) fn points_mut(&mut self) -> &mut [DVec2] {
        &mut self.current
    }

    pub(crate) fn into_points(self) -> Vec<DVec2> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(spread: f64, damping: f64, radius: f64) -> ForceParams {
        ForceParams {
            spread,
            damping,
            radius,
        }
    }

    #[test]
    fn two_points_push_apart_symmetrically() {
        let current = [DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0)];
        let mut next = [DVec2::ZERO; 2];
        relax_step(&current, &mut next, params(1.0, 1.0, 10.0));
        assert_eq!(next, [DVec2::new(-1.0, 0.0), DVec2::new(2.0, 0.0)]);
    }

    #[test]
    fn coincident_points_exert_no_force() {
        let points = [DVec2::new(2.0, 2.0), DVec2::new(2.0, 2.0)];
        assert_eq!(net_force(&points, 0, 1.0, 10.0), DVec2::ZERO);
        assert_eq!(net_force(&points, 1, 1.0, 10.0), DVec2::ZERO);
    }

    #[test]
    fn pairs_at_or_beyond_radius_are_ignored() {
        let points = [DVec2::new(0.0, 0.0), DVec2::new(3.0, 0.0)];
        assert_eq!(net_force(&points, 0, 1.0, 3.0), DVec2::ZERO);
        assert_ne!(net_force(&points, 0, 1.0, 3.0 + 1e-9), DVec2::ZERO);
    }

    #[test]
    fn update_uses_start_of_step_positions() {
        // The middle point is balanced; the outer points move away from it. A
        // sequential update would let point 1 see point 0's new position.
        let current = [
            DVec2::new(-1.0, 0.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
        ];
        let mut next = [DVec2::ZERO; 3];
        relax_step(&current, &mut next, params(1.0, 0.5, 1.5));
        assert_eq!(next[1], DVec2::ZERO);
        assert_eq!(next[0], DVec2::new(-1.5, 0.0));
        assert_eq!(next[2], DVec2::new(1.5, 0.0));
    }

    #[test]
    fn force_magnitude_is_spread_per_neighbor() {
        let points = [DVec2::new(0.0, 0.0), DVec2::new(0.3, 0.4)];
        let f = net_force(&points, 0, 2.0, 1.0);
        assert!((f.length() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn huge_spread_over_tiny_distance_stays_finite() {
        let current = [DVec2::new(0.0, 0.0), DVec2::new(1e-150, 0.0)];
        let mut next = [DVec2::ZERO; 2];
        relax_step(&current, &mut next, params(1e200, 1.0, 10.0));
        for p in next {
            assert!(p.is_finite(), "non-finite point {p:?}");
        }
        assert!(next[0].x < 0.0 && next[1].x > 0.0);
        assert_eq!(next[0].y, 0.0);
    }

    #[test]
    fn far_pair_within_huge_radius_is_repelled() {
        let points = [DVec2::new(0.0, 0.0), DVec2::new(1e160, 0.0)];
        let f = net_force(&points, 0, 1.0, 1e300);
        assert!((f.x + 1.0).abs() < 1e-12);
        assert_eq!(f.y, 0.0);
    }

    #[test]
    fn distinct_points_below_squared_underflow_still_interact() {
        let points = [DVec2::new(0.0, 0.0), DVec2::new(1e-170, 0.0)];
        let f = net_force(&points, 0, 1.0, 1.0);
        assert!(f.is_finite());
        assert!((f.x + 1.0).abs() < 1e-12);
    }

    #[test]
    fn distance_fast_path_matches_length() {
        let delta = DVec2::new(3.0, 4.0);
        assert_eq!(distance(delta), delta.length());
        assert_eq!(distance(DVec2::ZERO), 0.0);
    }

    #[test]
    fn relaxation_swaps_buffers_between_steps() {
        let mut relax = Relaxation::new(&[DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0)]);
        relax.step(params(1.0, 1.0, 10.0));
        assert_eq!(relax.points()[1], DVec2::new(2.0, 0.0));
        relax.step(params(1.0, 1.0, 10.0));
        // Distance is now 3, still inside the radius.
        let out = relax.into_points();
        assert!(out[0].abs_diff_eq(DVec2::new(-2.0, 0.0), 1e-12));
        assert!(out[1].abs_diff_eq(DVec2::new(3.0, 0.0), 1e-12));
    }
}
