//! In-place rescaling of point sets.
use glam::DVec2;

use crate::geometry::bounds::Bounds;

/// Maps the current bounds of `points` onto `target`, scaling x and y independently.
///
/// An axis whose current extent is zero is left untouched, so a single point or a
/// colinear set never divides by zero. Empty input is a no-op.
pub fn scale_to_bounding_box(points: &mut [DVec2], target: &Bounds) {
    let Some(source) = Bounds::from_points(points) else {
        return;
    };

    let x = axis_map(source.min.x, source.width(), target.min.x, target.width());
    let y = axis_map(source.min.y, source.height(), target.min.y, target.height());

    for p in points.iter_mut() {
        if let Some((src_min, dst_min, ratio)) = x {
            p.x = dst_min + (p.x - src_min) * ratio;
        }
        if let Some((src_min, dst_min, ratio)) = y {
            p.y = dst_min + (p.y - src_min) * ratio;
        }
    }
}

#[inline]
fn axis_map(
    src_min: f64,
    src_extent: f64,
    dst_min: f64,
    dst_extent: f64,
) -> Option<(f64, f64, f64)> {
    if src_extent > 0.0 && src_extent.is_finite() {
        Some((src_min, dst_min, dst_extent / src_extent))
    } else {
        None
    }
}

/// Scales every point's displacement from `fulcrum` by `factor` on both axes.
///
/// When `fulcrum` is `None` the bounds center of `points` is used.
pub fn scale_uniform(points: &mut [DVec2], factor: f64, fulcrum: Option<DVec2>) {
    let fulcrum = match fulcrum {
        Some(f) => f,
        None => match Bounds::from_points(points) {
            Some(b) => b.center(),
            None => return,
        },
    };

    for p in points.iter_mut() {
        *p = fulcrum + (*p - fulcrum) * factor;
    }
}
