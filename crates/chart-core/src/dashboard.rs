// File: crates/chart-core/src/dashboard.rs
// Summary: Grid of chart panels under a shared title, rendered into one image.

use anyhow::{bail, Result};

use crate::chart::{encode_png, raster_surface, write_png, Chart, RenderOptions};
use crate::geometry::RectI32;
use crate::TextShaper;

/// Height of the title band above the panel grid.
const TITLE_BAND: i32 = 56;
const GAP: i32 = 12;

#[derive(Clone, Debug)]
pub struct Dashboard {
    pub title: String,
    pub rows: usize,
    pub cols: usize,
    /// Row-major; at most `rows * cols`.
    pub panels: Vec<Chart>,
}

impl Dashboard {
    pub fn new(title: impl Into<String>, rows: usize, cols: usize) -> Self {
        Self { title: title.into(), rows, cols, panels: Vec::new() }
    }

    pub fn add_panel(&mut self, chart: Chart) {
        self.panels.push(chart);
    }

    /// Cell rectangles for a `width` x `height` image, row-major.
    pub fn layout(&self, width: i32, height: i32) -> Vec<RectI32> {
        let body = RectI32::from_ltrb(GAP, TITLE_BAND, width - GAP, height - GAP);
        body.grid(self.rows, self.cols, GAP)
    }

    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_png(output_png_path.as_ref(), &bytes)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let cells = self.layout(opts.width, opts.height);
        if self.panels.len() > cells.len() {
            bail!("dashboard has {} panels but only {} cells", self.panels.len(), cells.len());
        }

        let mut surface = raster_surface(opts.width, opts.height)?;
        let text = opts.draw_labels.then(TextShaper::new);
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        if let Some(text) = &text {
            if !self.title.is_empty() {
                let cx = opts.width as f32 * 0.5;
                text.draw_centered(canvas, &self.title, cx, TITLE_BAND as f32 * 0.65, 22.0, opts.theme.title, true);
            }
        }
        for (chart, cell) in self.panels.iter().zip(cells) {
            chart.draw(canvas, cell, opts, text.as_ref());
        }

        encode_png(&mut surface)
    }
}
