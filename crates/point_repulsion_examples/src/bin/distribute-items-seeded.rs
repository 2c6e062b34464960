use point_repulsion::prelude::*;
use point_repulsion_examples::{
    init_tracing, random_frames, render_before_after_png, RenderConfig,
};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let confirmed = std::env::args().any(|a| a == "--yes");

    let mut frames = random_frames(500, 30.0, 99);
    let before = centers(&frames);

    // Derive spread and radius from the items themselves.
    let seeded = seed_params(&frames, DEFAULT_PAIR_SAMPLE_CAP);
    tracing::info!("seeded parameters: {seeded:?}");
    let config = DistributionConfig::default()
        .with_damping(0.5)
        .with_max_steps(40)
        .with_max_iterations(2)
        .with_keep_within_bounds(true)
        .with_seeded(&seeded);
    let distributor = PointDistributor::try_new(config)?;

    let workload = distributor.workload(frames.len());
    match workload.level() {
        WorkloadLevel::Light => {}
        WorkloadLevel::Heavy => {
            tracing::warn!("{} operations projected; this may take a while", workload.operations)
        }
        WorkloadLevel::Extreme => {
            if !confirmed {
                anyhow::bail!(
                    "{} operations projected; pass --yes to run anyway",
                    workload.operations
                );
            }
        }
    }

    let deltas = distributor.distribute_items(&mut frames)?;
    let moved = deltas.iter().filter(|d| d.length() > 1e-6).count();
    tracing::info!("moved {moved} of {} items", frames.len());

    let after = centers(&frames);
    let sets = [before.as_slice(), after.as_slice()];
    let rc = RenderConfig::fitting((600, 600), &sets, 2.0).with_dot_radius(2);
    render_before_after_png(&before, &after, &rc, "distribute-items-seeded.png")?;

    Ok(())
}
