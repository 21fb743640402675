// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over mixed series types.

use chart_core::{Axis, Chart, DataBounds, Series, SeriesType};

#[test]
fn autoscale_mixed_series() {
    let mut chart = Chart::new();

    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 1.0), (5.0, 3.0)]));
    chart.add_series(Series::with_data(SeriesType::Scatter, vec![(2.0, 6.0), (3.0, 1.5)]));

    chart.autoscale_axes(0.0);

    // X spans 0..5 from line vs 2..3 from scatter => expect ~0..5
    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 5.0 - 1e-9);
    assert!(chart.y_axis.min <= 1.0 + 1e-9);
    assert!(chart.y_axis.max >= 6.0 - 1e-9);
}

#[test]
fn bars_include_zero_baseline() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::categorical("Role", &["seller", "HR", "IT"]);
    chart.add_series(Series::bars(&[4500.0, 3200.0, 9000.0]));
    chart.autoscale_axes(0.05);

    assert_eq!(chart.y_axis.min, 0.0);
    assert!(chart.y_axis.max > 9000.0);
    // Category layout is untouched.
    assert_eq!(chart.x_axis.min, -0.5);
    assert_eq!(chart.x_axis.max, 2.5);
    assert_eq!(chart.x_axis.ticks.len(), 3);
}

#[test]
fn no_data_leaves_axes_alone() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 1.0, 2.0);
    chart.y_axis = Axis::new("Y", 3.0, 4.0);
    chart.add_series(Series::new(SeriesType::Line));
    chart.autoscale_axes(0.1);
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (1.0, 2.0));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (3.0, 4.0));
    assert!(DataBounds::from_series(&chart.series).is_none());
}

#[test]
fn single_point_is_widened() {
    let b = DataBounds::from_series(&[Series::with_data(SeriesType::Scatter, vec![(40.0, 5000.0)])])
        .expect("bounds")
        .padded(0.0);
    assert_eq!((b.x_min, b.x_max), (39.5, 40.5));
    assert_eq!((b.y_min, b.y_max), (5000.0, 5001.0));
}
