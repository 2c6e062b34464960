#![forbid(unsafe_code)]

mod config;
mod rendering;
mod scenes;

pub use config::{load_config, parse_config, ExampleConfig};
pub use rendering::{init_tracing, render_before_after_png, RenderConfig};
pub use scenes::{overlapping_cluster, random_frames};
