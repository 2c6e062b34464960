//! Axis-aligned bounds of point sets.
use glam::DVec2;

/// Axis-aligned rectangle spanning a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Minimum x and y over the set.
    pub min: DVec2,
    /// Maximum x and y over the set.
    pub max: DVec2,
}

impl Bounds {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Computes the bounds of `points`, or `None` when the set is empty.
    pub fn from_points(points: &[DVec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), &p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Width and height as a vector.
    #[inline]
    pub fn extent(&self) -> DVec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Compares both corners component-wise within `tolerance`.
    pub fn approx_eq(&self, other: &Bounds, tolerance: f64) -> bool {
        self.min.abs_diff_eq(other.min, tolerance) && self.max.abs_diff_eq(other.max, tolerance)
    }
}

/// Bounds of `points`; `None` on an empty set.
pub fn bounds_of(points: &[DVec2]) -> Option<Bounds> {
    Bounds::from_points(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_no_bounds() {
        assert!(bounds_of(&[]).is_none());
    }

    #[test]
    fn single_point_has_zero_extent() {
        let b = bounds_of(&[DVec2::new(3.0, -2.0)]).expect("bounds");
        assert_eq!(b.min, DVec2::new(3.0, -2.0));
        assert_eq!(b.max, DVec2::new(3.0, -2.0));
        assert_eq!(b.extent(), DVec2::ZERO);
    }

    #[test]
    fn min_max_reduction_over_mixed_points() {
        let points = [
            DVec2::new(1.0, 5.0),
            DVec2::new(-4.0, 2.0),
            DVec2::new(3.0, -1.0),
        ];
        let b = bounds_of(&points).expect("bounds");
        assert_eq!(b.min, DVec2::new(-4.0, -1.0));
        assert_eq!(b.max, DVec2::new(3.0, 5.0));
        assert_eq!(b.width(), 7.0);
        assert_eq!(b.height(), 6.0);
        assert_eq!(b.center(), DVec2::new(-0.5, 2.0));
    }

    #[test]
    fn approx_eq_respects_tolerance() {
        let a = Bounds::new(DVec2::ZERO, DVec2::ONE);
        let b = Bounds::new(DVec2::splat(1e-12), DVec2::ONE);
        assert!(a.approx_eq(&b, 1e-9));
        assert!(!a.approx_eq(&Bounds::new(DVec2::ZERO, DVec2::splat(1.1)), 1e-9));
    }
}
