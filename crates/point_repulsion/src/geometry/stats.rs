//! Median statistics used to seed default distribution parameters.
use glam::DVec2;

/// Default cap on the number of point pairs sampled by [`median_pairwise_distance`].
pub const DEFAULT_PAIR_SAMPLE_CAP: usize = 5000;

/// Median of `values`, averaging the two middle values on even counts.
///
/// Sorts `values` in place. Returns `None` for an empty slice.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) * 0.5)
    } else {
        Some(values[mid])
    }
}

/// Median Euclidean distance over unordered point pairs.
///
/// Pairs `(i, j)` with `i < j` are visited in index order and sampling stops after
/// `sample_cap` pairs. Returns `None` with fewer than two points or a zero cap.
pub fn median_pairwise_distance(points: &[DVec2], sample_cap: usize) -> Option<f64> {
    let pair_count = points.len().saturating_mul(points.len().saturating_sub(1)) / 2;
    let mut distances = Vec::with_capacity(pair_count.min(sample_cap));

    'outer: for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            if distances.len() >= sample_cap {
                break 'outer;
            }
            distances.push(a.distance(*b));
        }
    }

    median(&mut distances)
}

/// Median of precomputed item sizes (typically bounding-box diagonals).
pub fn median_size(sizes: &[f64]) -> Option<f64> {
    let mut sizes = sizes.to_vec();
    median(&mut sizes)
}
