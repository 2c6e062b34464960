use point_repulsion::prelude::*;
use point_repulsion_examples::{
    init_tracing, load_config, overlapping_cluster, render_before_after_png, RenderConfig,
};

const DEFAULT_CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/cluster.ron");

fn main() -> anyhow::Result<()> {
    init_tracing();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let example = load_config(&path)?;

    let points = overlapping_cluster(example.count, example.extent, example.seed);
    let mut config = example.distribution.clone();
    if example.seed_from_items {
        // Bare points carry no size, so only `spread` is seeded here.
        config = config.with_seeded(&seed_params(&points, DEFAULT_PAIR_SAMPLE_CAP));
    }

    let mut sink = FnSink::new(|event| match event {
        DistributeEvent::RunStarted { workload, .. } => {
            tracing::info!("run started: {workload:?}");
        }
        DistributeEvent::IterationFinished { iteration, bounds } => {
            tracing::info!("iteration {iteration} bounds {bounds:?}");
        }
        DistributeEvent::RunFinished { summary } => {
            tracing::info!("run finished: {summary:?}");
        }
        _ => {}
    });
    let distributed =
        PointDistributor::try_new(config)?.distribute_with_events(&points, &mut sink)?;

    let sets = [points.as_slice(), distributed.as_slice()];
    let rc = RenderConfig::fitting((600, 600), &sets, 1.0);
    render_before_after_png(&points, &distributed, &rc, "distribute-from-ron.png")?;

    Ok(())
}
