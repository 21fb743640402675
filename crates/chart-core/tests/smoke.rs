// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke tests writing PNGs.

use chart_core::{Axis, Chart, Dashboard, RenderOptions, Series, SeriesType};

#[test]
fn render_smoke_png() {
    let mut chart = Chart::new().with_title("Smoke");
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(
        SeriesType::Line,
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)],
    ).with_markers());

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn empty_chart_renders() {
    let chart = Chart::new();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bytes = chart.render_to_png_bytes(&opts).expect("render empty chart");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));

    let mut with_empty = Chart::new();
    with_empty.add_series(Series::bars(&[]));
    with_empty.add_series(Series::new(SeriesType::Scatter));
    with_empty.autoscale_axes(0.05);
    with_empty.render_to_png_bytes(&opts).expect("render empty series");
}

#[test]
fn dashboard_smoke_png() {
    let mut dash = Dashboard::new("Dashboard", 2, 2);
    for i in 0..4 {
        let mut chart = Chart::new().with_title(format!("Panel {i}"));
        chart.x_axis = Axis::categorical("Category", &["a", "b", "c"]);
        chart.add_series(Series::bars(&[1.0, 2.0 + i as f64, 3.0]).with_varied_colors());
        chart.autoscale_axes(0.05);
        dash.add_panel(chart);
    }

    let mut opts = RenderOptions::default();
    opts.width = 900;
    opts.height = 700;
    let out = std::path::PathBuf::from("target/test_out/dashboard.png");
    dash.render_to_png(&opts, &out).expect("render dashboard");
    assert!(std::fs::metadata(&out).expect("output exists").len() > 0);
}

#[test]
fn dashboard_rejects_extra_panels() {
    let mut dash = Dashboard::new("Too many", 1, 2);
    for _ in 0..3 {
        dash.add_panel(Chart::new());
    }
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    assert!(dash.render_to_png_bytes(&opts).is_err());
}

#[test]
fn invalid_surface_size_is_an_error() {
    let mut opts = RenderOptions::default();
    opts.width = 0;
    assert!(Chart::new().render_to_png_bytes(&opts).is_err());
}
