//! Adapters between caller-defined items and point sets.
//!
//! Callers describe each item by a center and, optionally, a size (the diagonal of
//! its bounding box). Centers feed the distributor; sizes and pairwise distances seed
//! default `spread` and `radius` values. After a run, each item is translated by the
//! delta between its original center and its distributed point.
use glam::DVec2;

use crate::error::{Error, Result};
use crate::geometry::{median_pairwise_distance, median_size};

/// Divisor applied to the median pairwise distance to seed `spread`.
pub const SPREAD_DIVISOR: f64 = 8.0;

/// Multiplier applied to the median item size to seed `radius`.
pub const RADIUS_MULTIPLIER: f64 = 1.5;

/// An item that can be moved by the distributor.
pub trait Distributable {
    /// Center point fed to the distributor.
    fn center(&self) -> DVec2;

    /// Size scalar used for seeding, typically the bounding-box diagonal.
    fn size(&self) -> Option<f64> {
        None
    }

    /// Moves the item by `delta`.
    fn translate(&mut self, delta: DVec2);
}

impl Distributable for DVec2 {
    fn center(&self) -> DVec2 {
        *self
    }

    fn translate(&mut self, delta: DVec2) {
        *self += delta;
    }
}

impl Distributable for mint::Point2<f64> {
    fn center(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    fn translate(&mut self, delta: DVec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}

/// Axis-aligned bounding box of an item.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemFrame {
    pub min: DVec2,
    pub max: DVec2,
}

impl ItemFrame {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Creates a frame from its minimum corner and its size.
    pub fn from_origin_size(origin: DVec2, size: DVec2) -> Self {
        Self::new(origin, origin + size)
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    pub fn diagonal(&self) -> f64 {
        (self.max - self.min).length()
    }
}

impl Distributable for ItemFrame {
    fn center(&self) -> DVec2 {
        ItemFrame::center(self)
    }

    fn size(&self) -> Option<f64> {
        Some(self.diagonal())
    }

    fn translate(&mut self, delta: DVec2) {
        self.min += delta;
        self.max += delta;
    }
}

/// Centers of `items`, index-aligned.
pub fn centers<T: Distributable>(items: &[T]) -> Vec<DVec2> {
    items.iter().map(Distributable::center).collect()
}

/// Sizes of the items that report one.
pub fn sizes<T: Distributable>(items: &[T]) -> Vec<f64> {
    items.iter().filter_map(Distributable::size).collect()
}

/// Default parameters derived from a set of items.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SeededParams {
    /// Median pairwise center distance divided by [`SPREAD_DIVISOR`].
    pub spread: Option<f64>,
    /// Median item size multiplied by [`RADIUS_MULTIPLIER`].
    pub radius: Option<f64>,
}

/// Seeds `spread` and `radius` from the item centers and sizes.
///
/// Either value is `None` when there is not enough data (fewer than two items,
/// or no item reports a size).
pub fn seed_params<T: Distributable>(items: &[T], sample_cap: usize) -> SeededParams {
    let spread =
        median_pairwise_distance(&centers(items), sample_cap).map(|d| d / SPREAD_DIVISOR);
    let radius = median_size(&sizes(items)).map(|s| s * RADIUS_MULTIPLIER);
    SeededParams { spread, radius }
}

/// Per-item translation `distributed[i] - original[i]`.
pub fn translations(original: &[DVec2], distributed: &[DVec2]) -> Result<Vec<DVec2>> {
    if original.len() != distributed.len() {
        return Err(Error::LengthMismatch {
            expected: original.len(),
            actual: distributed.len(),
        });
    }
    Ok(original
        .iter()
        .zip(distributed)
        .map(|(from, to)| *to - *from)
        .collect())
}

/// Translates every item by the delta at the same index.
pub fn apply_translations<T: Distributable>(items: &mut [T], deltas: &[DVec2]) -> Result<()> {
    if items.len() != deltas.len() {
        return Err(Error::LengthMismatch {
            expected: items.len(),
            actual: deltas.len(),
        });
    }
    for (item, delta) in items.iter_mut().zip(deltas) {
        item.translate(*delta);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::DEFAULT_PAIR_SAMPLE_CAP;

    #[test]
    fn frame_normalizes_corners() {
        let frame = ItemFrame::new(DVec2::new(4.0, 1.0), DVec2::new(0.0, 3.0));
        assert_eq!(frame.min, DVec2::new(0.0, 1.0));
        assert_eq!(frame.max, DVec2::new(4.0, 3.0));
        assert_eq!(frame.center(), DVec2::new(2.0, 2.0));
    }

    #[test]
    fn seed_params_from_frames() {
        // Three 3x4 frames (diagonal 5) centered at x = 0, 2, 6.
        let items: Vec<ItemFrame> = [0.0, 2.0, 6.0]
            .iter()
            .map(|&x| {
                ItemFrame::from_origin_size(DVec2::new(x - 1.5, -2.0), DVec2::new(3.0, 4.0))
            })
            .collect();
        let seeded = seed_params(&items, DEFAULT_PAIR_SAMPLE_CAP);
        // Pairwise distances 2, 6, 4 -> median 4.
        assert_eq!(seeded.spread, Some(4.0 / SPREAD_DIVISOR));
        assert_eq!(seeded.radius, Some(5.0 * RADIUS_MULTIPLIER));
    }

    #[test]
    fn bare_points_seed_no_radius() {
        let items = [DVec2::ZERO, DVec2::new(8.0, 0.0)];
        let seeded = seed_params(&items, DEFAULT_PAIR_SAMPLE_CAP);
        assert_eq!(seeded.spread, Some(1.0));
        assert_eq!(seeded.radius, None);
        assert_eq!(seed_params(&items[..1], 10), SeededParams::default());
    }

    #[test]
    fn translations_and_application_round_trip_centers() {
        let original = vec![DVec2::new(1.0, 1.0), DVec2::new(2.0, 0.0)];
        let distributed = vec![DVec2::new(0.0, 1.5), DVec2::new(3.0, -1.0)];
        let deltas = translations(&original, &distributed).expect("aligned");
        assert_eq!(deltas, vec![DVec2::new(-1.0, 0.5), DVec2::new(1.0, -1.0)]);

        let mut items = original.clone();
        apply_translations(&mut items, &deltas).expect("aligned");
        assert_eq!(items, distributed);
    }

    #[test]
    fn misaligned_sets_are_rejected() {
        let err = translations(&[DVec2::ZERO], &[]).expect_err("mismatch");
        assert!(matches!(
            err,
            Error::LengthMismatch {
                expected: 1,
                actual: 0
            }
        ));
        let mut items = [DVec2::ZERO, DVec2::ONE];
        assert!(apply_translations(&mut items, &[DVec2::ONE]).is_err());
        assert_eq!(items, [DVec2::ZERO, DVec2::ONE]);
    }

    #[test]
    fn mint_points_are_distributable() {
        let mut p = mint::Point2 { x: 1.0, y: 2.0 };
        assert_eq!(Distributable::center(&p), DVec2::new(1.0, 2.0));
        p.translate(DVec2::new(0.5, -1.0));
        assert_eq!((p.x, p.y), (1.5, 1.0));
    }
}
