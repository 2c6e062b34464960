use point_repulsion::prelude::*;
use point_repulsion_examples::{
    init_tracing, overlapping_cluster, render_before_after_png, RenderConfig,
};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let points = overlapping_cluster(250, 40.0, 7);
    let original = bounds_of(&points).ok_or_else(|| anyhow::anyhow!("empty scene"))?;

    let base = DistributionConfig::new(0.05, 0.5, 2.0)
        .with_max_steps(30)
        .with_max_iterations(3);

    // Keep the result inside the bounds of the original cluster.
    let kept = PointDistributor::try_new(base.clone().with_keep_within_bounds(true))?
        .distribute(&points)?;
    let kept_bounds = bounds_of(&kept).ok_or_else(|| anyhow::anyhow!("empty result"))?;
    tracing::info!(
        "original bounds {:?}, kept bounds {:?}, equal: {}",
        original,
        kept_bounds,
        kept_bounds.approx_eq(&original, 1e-9)
    );

    // Shrink slightly after every pass instead, about the cluster center.
    let shrunk = PointDistributor::try_new(base.with_scale_factor(0.9))?.distribute(&points)?;

    let sets = [points.as_slice(), kept.as_slice(), shrunk.as_slice()];
    let rc = RenderConfig::fitting((500, 500), &sets, 1.0);
    render_before_after_png(&points, &kept, &rc, "distribute-keep-within-bounds.png")?;
    render_before_after_png(&points, &shrunk, &rc, "distribute-scale-factor.png")?;

    Ok(())
}
