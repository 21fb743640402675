// File: crates/chart-core/src/bounds.rs
// Summary: Data extents over a chart's series, used to autoscale axes.

use crate::series::{Series, SeriesType};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataBounds {
    /// Extents of all points; bars also pull in their 0.0 baseline.
    /// Returns `None` when there is no finite data.
    pub fn from_series(series: &[Series]) -> Option<Self> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in series {
            for &(x, y) in s.data_xy.iter().filter(|(x, y)| x.is_finite() && y.is_finite()) {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
            if s.series_type == SeriesType::Bar && !s.is_empty() {
                y_min = y_min.min(0.0);
                y_max = y_max.max(0.0);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return None;
        }
        Some(Self { x_min, x_max, y_min, y_max })
    }

    /// Widen degenerate spans to 1.0 and pad each side by `margin` x span.
    /// Zero stays pinned as an edge when it already is one, so bars start on the axis.
    pub fn padded(self, margin: f64) -> Self {
        let Self { mut x_min, mut x_max, mut y_min, mut y_max } = self;
        if (x_max - x_min).abs() < 1e-9 { x_min -= 0.5; x_max += 0.5; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let xm = (x_max - x_min) * margin;
        let ym = (y_max - y_min) * margin;
        Self {
            x_min: x_min - xm,
            x_max: x_max + xm,
            y_min: if y_min == 0.0 { 0.0 } else { y_min - ym },
            y_max: if y_max == 0.0 { 0.0 } else { y_max + ym },
        }
    }
}
