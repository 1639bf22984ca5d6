// File: crates/barchart-render-svg/src/lib.rs
// Summary: Rendering adapter; draws an `EncodedChart` as SVG and rasterizes it to PNG.

use std::path::Path;

use anyhow::{Context, Result};
use barchart_core::EncodedChart;

pub mod svg;
pub mod theme;

pub use svg::render_svg;
pub use theme::Theme;

#[derive(Clone, Copy, Debug, Default)]
pub struct SvgRenderer {
    pub theme: Theme,
}

impl SvgRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn render(&self, chart: &EncodedChart) -> String {
        render_svg(chart, &self.theme)
    }

    /// Write the SVG markup to `output_path`, creating parent directories.
    pub fn render_to_svg(&self, chart: &EncodedChart, output_path: impl AsRef<Path>) -> Result<()> {
        let path = output_path.as_ref();
        write_creating_dirs(path, self.render(chart).as_bytes())?;
        tracing::debug!(path = %path.display(), "wrote svg");
        Ok(())
    }

    /// Rasterize the chart on a CPU pixmap of the outer surface size.
    pub fn render_to_png_bytes(&self, chart: &EncodedChart) -> Result<Vec<u8>> {
        let svg = self.render(chart);
        let opt = usvg::Options::default();
        let tree = usvg::Tree::from_str(&svg, &opt).context("parse generated svg")?;
        let size = tree.size().to_int_size();
        let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
            .ok_or_else(|| anyhow::anyhow!("failed to allocate {}x{} pixmap", size.width(), size.height()))?;
        resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap.as_mut());
        pixmap.encode_png().context("encode PNG failed")
    }

    pub fn render_to_png(&self, chart: &EncodedChart, output_path: impl AsRef<Path>) -> Result<()> {
        let path = output_path.as_ref();
        let bytes = self.render_to_png_bytes(chart)?;
        write_creating_dirs(path, &bytes)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
        Ok(())
    }
}

fn write_creating_dirs(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::write(path, data).with_context(|| format!("write {}", path.display()))
}
