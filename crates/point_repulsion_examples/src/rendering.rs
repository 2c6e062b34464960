//! PNG rendering of point sets and tracing setup for the example binaries.
use std::path::Path;

use anyhow::Context;
use glam::DVec2;
use image::{Rgb, RgbImage};
use point_repulsion::prelude::Bounds;
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// How points are mapped to pixels and drawn.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output size of each panel in pixels.
    pub panel_size: (u32, u32),
    /// World-space region shown in each panel.
    pub view: Bounds,
    pub background: [u8; 3],
    pub before_color: [u8; 3],
    pub after_color: [u8; 3],
    /// Dot radius in pixels.
    pub dot_radius: i32,
}

impl RenderConfig {
    pub fn new(panel_size: (u32, u32), view: Bounds) -> Self {
        Self {
            panel_size,
            view,
            background: [24, 26, 32],
            before_color: [230, 120, 90],
            after_color: [120, 200, 240],
            dot_radius: 3,
        }
    }

    /// Uses the union of both point sets' bounds, padded by `padding` world units.
    pub fn fitting(panel_size: (u32, u32), sets: &[&[DVec2]], padding: f64) -> Self {
        let mut view: Option<Bounds> = None;
        for set in sets {
            if let Some(b) = Bounds::from_points(set) {
                view = Some(match view {
                    Some(v) => Bounds::new(v.min.min(b.min), v.max.max(b.max)),
                    None => b,
                });
            }
        }
        let view = view.unwrap_or_else(|| Bounds::new(DVec2::ZERO, DVec2::ONE));
        let pad = DVec2::splat(padding);
        Self::new(panel_size, Bounds::new(view.min - pad, view.max + pad))
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_dot_radius(mut self, dot_radius: i32) -> Self {
        self.dot_radius = dot_radius;
        self
    }

    fn to_pixel(&self, p: DVec2) -> (i32, i32) {
        let extent = self.view.extent().max(DVec2::splat(f64::EPSILON));
        let uv = (p - self.view.min) / extent;
        let (w, h) = self.panel_size;
        let x = (uv.x * (w.saturating_sub(1)) as f64).round() as i32;
        // Image rows grow downwards.
        let y = ((1.0 - uv.y) * (h.saturating_sub(1)) as f64).round() as i32;
        (x, y)
    }
}

/// Renders `before` and `after` side by side and writes the result to `out_path`.
pub fn render_before_after_png(
    before: &[DVec2],
    after: &[DVec2],
    config: &RenderConfig,
    out_path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.panel_size;
    let mut img = RgbImage::from_pixel(w * 2, h, Rgb(config.background));

    for &p in before {
        let (x, y) = config.to_pixel(p);
        draw_disk(&mut img, x, y, config.dot_radius, Rgb(config.before_color));
    }
    for &p in after {
        let (x, y) = config.to_pixel(p);
        draw_disk(&mut img, x + w as i32, y, config.dot_radius, Rgb(config.after_color));
    }

    let out_path = out_path.as_ref();
    img.save(out_path)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    tracing::info!("Wrote {}.", out_path.display());
    Ok(())
}

fn draw_disk(img: &mut RgbImage, cx: i32, cy: i32, radius: i32, color: Rgb<u8>) {
    let (w, h) = (img.width() as i32, img.height() as i32);
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > r2 {
                continue;
            }
            let (x, y) = (cx + dx, cy + dy);
            if x >= 0 && y >= 0 && x < w && y < h {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}
