use point_repulsion::prelude::*;
use point_repulsion_examples::{
    init_tracing, overlapping_cluster, render_before_after_png, RenderConfig,
};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // 400 points packed into a small disk; most of them overlap.
    let extent = 40.0;
    let points = overlapping_cluster(400, extent, 42);

    let config = DistributionConfig::new(0.05, 0.5, 2.0)
        .with_max_steps(60)
        .with_max_iterations(1);
    let distributor = PointDistributor::try_new(config)?;

    let distributed = distributor.distribute_with_progress(&points, |step, total| {
        tracing::info!("step {step}/{total}");
    })?;

    let sets = [points.as_slice(), distributed.as_slice()];
    let rc = RenderConfig::fitting((600, 600), &sets, 1.0);
    let out = "distribute-overlapping-cluster.png";
    render_before_after_png(&points, &distributed, &rc, out)?;

    Ok(())
}
