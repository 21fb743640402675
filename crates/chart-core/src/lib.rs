// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod geometry;
pub mod bounds;
pub mod theme;
pub mod text;
pub mod dashboard;

pub use chart::{Chart, RenderOptions};
pub use series::{Series, SeriesType};
pub use axis::Axis;
pub use geometry::{Insets, RectI32};
pub use bounds::DataBounds;
pub use dashboard::Dashboard;
pub use theme::Theme;
pub use text::TextShaper;
