// File: crates/chart-core/src/series.rs
// Summary: Series model for line, bar and scatter data.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Bar,     // (x, y) bars from 0.0, one per category slot
    Scatter, // (x, y) markers
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,
    /// Shown in the legend when set.
    pub name: Option<String>,
    /// Theme palette slot for the series color.
    pub color_slot: usize,
    /// Bars only: color each bar with its own palette slot.
    pub varied_colors: bool,
    /// Lines only: draw a dot at each data point.
    pub markers: bool,
    /// Scatter marker radius / line stroke width, in pixels.
    pub size: f32,
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self::with_data(series_type, Vec::new())
    }

    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        let size = match series_type {
            SeriesType::Line => 2.0,
            SeriesType::Scatter => 6.0,
            SeriesType::Bar => 0.0,
        };
        Self {
            series_type,
            data_xy: data,
            name: None,
            color_slot: 0,
            varied_colors: false,
            markers: false,
            size,
        }
    }

    /// Bars at category slots 0, 1, 2, ... matching `Axis::categorical`.
    pub fn bars(values: &[f64]) -> Self {
        let data = values.iter().enumerate().map(|(i, v)| (i as f64, *v)).collect();
        Self::with_data(SeriesType::Bar, data)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_color_slot(mut self, slot: usize) -> Self {
        self.color_slot = slot;
        self
    }

    pub fn with_varied_colors(mut self) -> Self {
        self.varied_colors = true;
        self
    }

    pub fn with_markers(mut self) -> Self {
        self.markers = true;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size.max(0.5);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.data_xy.is_empty()
    }
}
