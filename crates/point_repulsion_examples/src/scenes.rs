//! Scene generators for the example binaries.
use glam::DVec2;
use point_repulsion::prelude::ItemFrame;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn unit(rng: &mut StdRng) -> f64 {
    rng.next_u32() as f64 / u32::MAX as f64
}

/// `count` points packed into a disk of diameter `extent / 4` at the center of the domain.
pub fn overlapping_cluster(count: usize, extent: f64, seed: u64) -> Vec<DVec2> {
    let mut rng = StdRng::seed_from_u64(seed);
    let center = DVec2::splat(extent * 0.5);
    let radius = extent * 0.125;
    (0..count)
        .map(|_| {
            let angle = unit(&mut rng) * std::f64::consts::TAU;
            let r = radius * unit(&mut rng).sqrt();
            center + DVec2::new(angle.cos(), angle.sin()) * r
        })
        .collect()
}

/// `count` item frames with random sizes, scattered uniformly over the domain.
pub fn random_frames(count: usize, extent: f64, seed: u64) -> Vec<ItemFrame> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let size = DVec2::new(0.5 + unit(&mut rng) * 1.5, 0.5 + unit(&mut rng) * 1.5);
            let room = extent - size.max_element();
            let origin = DVec2::new(unit(&mut rng), unit(&mut rng)) * room;
            ItemFrame::from_origin_size(origin, size)
        })
        .collect()
}
