// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (PNG / RGBA) using Skia CPU raster surfaces.

use anyhow::{anyhow, bail, Result};
use skia_safe as skia;

use crate::bounds::DataBounds;
use crate::geometry::RectI32;
use crate::grid::{format_value, nice_ticks};
use crate::series::{Series, SeriesType};
use crate::theme::Theme;
use crate::geometry::{Insets, HEIGHT, WIDTH};
use crate::{Axis, TextShaper};

/// Fraction of a category slot covered by a bar.
const BAR_FILL: f32 = 0.7;
const TITLE_SIZE: f32 = 16.0;
const LABEL_SIZE: f32 = 13.0;
const TICK_SIZE: f32 = 11.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Skip all text; keeps pixels identical across platforms and fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data, padding by `margin` x span.
    /// Categorical X axes keep their slot layout; only Y is refit.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let Some(b) = DataBounds::from_series(&self.series).map(|b| b.padded(margin)) else {
            return;
        };
        if !self.x_axis.is_categorical() {
            self.x_axis.min = b.x_min;
            self.x_axis.max = b.x_max;
        }
        self.y_axis.min = b.y_min;
        self.y_axis.max = b.y_max;
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_png(output_png_path.as_ref(), &bytes)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        encode_png(&mut surface)
    }

    /// Render to an unpremultiplied RGBA8 buffer: (pixels, width, height, stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        read_rgba8(&mut surface, opts.width, opts.height)
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = raster_surface(opts.width, opts.height)?;
        let text = opts.draw_labels.then(TextShaper::new);
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);
        self.draw(canvas, RectI32::from_ltwh(0, 0, opts.width, opts.height), opts, text.as_ref());
        Ok(surface)
    }

    /// Draw the whole chart (panel, grid, axes, series, labels) inside `frame`.
    pub fn draw(&self, canvas: &skia::Canvas, frame: RectI32, opts: &RenderOptions, text: Option<&TextShaper>) {
        let theme = &opts.theme;
        let mut panel = skia::Paint::default();
        panel.set_color(theme.panel);
        canvas.draw_rect(frame.to_skia(), &panel);

        let plot = PlotArea { rect: frame.inset(&opts.insets), x: &self.x_axis, y: &self.y_axis };
        let y_ticks = nice_ticks(self.y_axis.min, self.y_axis.max, 6);
        let x_ticks: Vec<(f64, String)> = if self.x_axis.is_categorical() {
            self.x_axis.ticks.clone()
        } else {
            nice_ticks(self.x_axis.min, self.x_axis.max, 8).into_iter().map(|v| (v, format_value(v))).collect()
        };

        draw_grid(canvas, &plot, &x_ticks, &y_ticks, theme);

        canvas.save();
        canvas.clip_rect(plot.rect.to_skia(), skia::ClipOp::Intersect, true);
        for s in &self.series {
            match s.series_type {
                SeriesType::Bar => draw_bar_series(canvas, &plot, s, theme),
                SeriesType::Line => draw_line_series(canvas, &plot, s, theme),
                SeriesType::Scatter => draw_scatter_series(canvas, &plot, s, theme),
            }
        }
        canvas.restore();

        draw_axes(canvas, &plot, theme);

        if let Some(text) = text {
            draw_labels(canvas, text, frame, &plot, &self.title, &x_ticks, &y_ticks, theme);
            draw_legend(canvas, text, &plot, &self.series, theme);
        }
    }
}

// ---- surfaces ---------------------------------------------------------------

pub(crate) fn raster_surface(width: i32, height: i32) -> Result<skia::Surface> {
    if width <= 0 || height <= 0 {
        bail!("invalid surface size {width}x{height}");
    }
    skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow!("failed to create raster surface"))
}

pub(crate) fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

pub(crate) fn read_rgba8(surface: &mut skia::Surface, width: i32, height: i32) -> Result<(Vec<u8>, u32, u32, usize)> {
    let info = skia::ImageInfo::new((width, height), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = width as usize * 4;
    let mut pixels = vec![0u8; stride * height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        bail!("reading {width}x{height} RGBA pixels failed");
    }
    Ok((pixels, width as u32, height as u32, stride))
}

pub(crate) fn write_png(path: &std::path::Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

struct PlotArea<'a> {
    rect: RectI32,
    x: &'a Axis,
    y: &'a Axis,
}

impl PlotArea<'_> {
    fn sx(&self, x: f64) -> f32 {
        self.rect.left as f32 + ((x - self.x.min) / self.x.span()) as f32 * self.rect.width() as f32
    }

    fn sy(&self, y: f64) -> f32 {
        self.rect.bottom as f32 - ((y - self.y.min) / self.y.span()) as f32 * self.rect.height() as f32
    }

    /// Pixels per unit of X.
    fn unit_px(&self) -> f32 {
        self.rect.width() as f32 / self.x.span() as f32
    }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, plot: &PlotArea, x_ticks: &[(f64, String)], y_ticks: &[f64], theme: &Theme) {
    let paint = stroke_paint(theme.grid, 1.0);
    let r = plot.rect;

    // verticals (numeric X only; category slots read better without them)
    if !plot.x.is_categorical() {
        for &(x, _) in x_ticks {
            let px = plot.sx(x);
            canvas.draw_line((px, r.top as f32), (px, r.bottom as f32), &paint);
        }
    }
    // horizontals
    for &y in y_ticks {
        let py = plot.sy(y);
        canvas.draw_line((r.left as f32, py), (r.right as f32, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &PlotArea, theme: &Theme) {
    let paint = stroke_paint(theme.axis_line, 1.5);
    let r = plot.rect;
    canvas.draw_line((r.left as f32, r.bottom as f32), (r.right as f32, r.bottom as f32), &paint);
    canvas.draw_line((r.left as f32, r.top as f32), (r.left as f32, r.bottom as f32), &paint);
}

fn draw_bar_series(canvas: &skia::Canvas, plot: &PlotArea, series: &Series, theme: &Theme) {
    let half = plot.unit_px() * BAR_FILL * 0.5;
    let base = plot.sy(0.0f64.max(plot.y.min).min(plot.y.max));
    let outline = stroke_paint(theme.axis_line.with_a(120), 1.0);

    for (i, &(x, y)) in series.data_xy.iter().enumerate() {
        let slot = if series.varied_colors { i } else { series.color_slot };
        let cx = plot.sx(x);
        let top = plot.sy(y);
        let rect = skia::Rect::from_ltrb(cx - half, top.min(base), cx + half, top.max(base));
        canvas.draw_rect(rect, &fill_paint(theme.palette_color(slot)));
        canvas.draw_rect(rect, &outline);
    }
}

fn draw_line_series(canvas: &skia::Canvas, plot: &PlotArea, series: &Series, theme: &Theme) {
    let data = &series.data_xy;
    let Some(&(x0, y0)) = data.first() else { return };
    let color = if series.name.is_some() { theme.palette_color(series.color_slot) } else { theme.line_stroke };

    if data.len() >= 2 {
        let mut path = skia::Path::new();
        path.move_to((plot.sx(x0), plot.sy(y0)));
        for &(x, y) in data.iter().skip(1) {
            path.line_to((plot.sx(x), plot.sy(y)));
        }
        canvas.draw_path(&path, &stroke_paint(color, series.size));
    }

    if series.markers {
        let dot = fill_paint(color);
        let radius = series.size * 2.0;
        for &(x, y) in data {
            canvas.draw_circle((plot.sx(x), plot.sy(y)), radius, &dot);
        }
    }
}

fn draw_scatter_series(canvas: &skia::Canvas, plot: &PlotArea, series: &Series, theme: &Theme) {
    let fill = fill_paint(theme.palette_color(series.color_slot).with_a(204));
    let ring = stroke_paint(theme.panel, 1.0);
    for &(x, y) in &series.data_xy {
        let c = (plot.sx(x), plot.sy(y));
        canvas.draw_circle(c, series.size, &fill);
        canvas.draw_circle(c, series.size, &ring);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_labels(
    canvas: &skia::Canvas,
    text: &TextShaper,
    frame: RectI32,
    plot: &PlotArea,
    title: &str,
    x_ticks: &[(f64, String)],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let r = plot.rect;
    let center = (frame.left + frame.right) as f32 * 0.5;

    if !title.is_empty() {
        text.draw_centered(canvas, title, center, frame.top as f32 + 24.0, TITLE_SIZE, theme.title, true);
    }

    for (x, label) in x_ticks {
        let px = plot.sx(*x);
        if px < r.left as f32 - 1.0 || px > r.right as f32 + 1.0 { continue; }
        text.draw_centered(canvas, label, px, r.bottom as f32 + 18.0, TICK_SIZE, theme.tick, false);
    }
    for &y in y_ticks {
        text.draw_right(canvas, &format_value(y), r.left as f32 - 6.0, plot.sy(y) + 4.0, TICK_SIZE, theme.tick, false);
    }

    let x_label_center = (r.left + r.right) as f32 * 0.5;
    text.draw_centered(canvas, &plot.x.label, x_label_center, frame.bottom as f32 - 14.0, LABEL_SIZE, theme.axis_label, false);
    text.draw_left(canvas, &plot.y.label, frame.left as f32 + 8.0, r.top as f32 - 8.0, LABEL_SIZE, theme.axis_label, false);
}

fn draw_legend(canvas: &skia::Canvas, text: &TextShaper, plot: &PlotArea, series: &[Series], theme: &Theme) {
    let entries: Vec<(&str, usize)> = series
        .iter()
        .filter_map(|s| s.name.as_deref().map(|n| (n, s.color_slot)))
        .collect();
    if entries.is_empty() {
        return;
    }

    let width = entries
        .iter()
        .map(|(n, _)| text.measure_width(n, TICK_SIZE, false))
        .fold(0.0f32, f32::max)
        + 30.0;
    let row = 18.0f32;
    let right = plot.rect.right as f32 - 8.0;
    let top = plot.rect.top as f32 + 8.0;
    let bg = skia::Rect::from_ltrb(right - width, top, right, top + row * entries.len() as f32 + 6.0);
    canvas.draw_rect(bg, &fill_paint(theme.panel.with_a(220)));
    canvas.draw_rect(bg, &stroke_paint(theme.grid, 1.0));

    for (i, (name, slot)) in entries.iter().enumerate() {
        let cy = top + 12.0 + row * i as f32;
        canvas.draw_circle((right - width + 12.0, cy), 5.0, &fill_paint(theme.palette_color(*slot)));
        text.draw_left(canvas, name, right - width + 22.0, cy + 4.0, TICK_SIZE, theme.axis_label, false);
    }
}
