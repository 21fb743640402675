// File: crates/report/src/charts.rs
// Summary: Builds the four analysis charts and the 2x2 dashboard from the generated tables.

use chart_core::{Axis, Chart, Dashboard, Series, SeriesType};
use staff_data::{mean_salary_by_role, monthly_totals, total_sales_by_seller, Employee, Month, Role, SalesRecord};

pub const DASHBOARD_TITLE: &str = "Employee and Sales Analysis";

/// Mean salary per role, one colored bar per role.
pub fn salary_by_role(employees: &[Employee]) -> Chart {
    let groups = mean_salary_by_role(employees);
    let labels: Vec<&str> = groups.iter().map(|(r, _)| r.label()).collect();
    let values: Vec<f64> = groups.iter().map(|(_, v)| *v).collect();

    let mut chart = Chart::new().with_title("Mean Salary by Role");
    chart.x_axis = Axis::categorical("Role", &labels);
    chart.y_axis.label = "Mean Salary".into();
    chart.add_series(Series::bars(&values).with_varied_colors());
    chart.autoscale_axes(0.05);
    chart
}

/// Annual sales per seller, best seller first.
pub fn sales_by_seller(sales: &[SalesRecord]) -> Chart {
    let totals = total_sales_by_seller(sales);
    let labels: Vec<&str> = totals.iter().map(|(s, _)| s.as_str()).collect();
    let values: Vec<f64> = totals.iter().map(|(_, v)| *v).collect();

    let mut chart = Chart::new().with_title("Total Sales by Seller (Year)");
    chart.x_axis = Axis::categorical("Seller", &labels);
    chart.y_axis.label = "Total Sales".into();
    chart.add_series(Series::bars(&values).with_varied_colors());
    chart.autoscale_axes(0.05);
    chart
}

/// Sales summed over sellers for each month, months 1..=12 on X.
pub fn monthly_sales(sales: &[SalesRecord]) -> Chart {
    let data: Vec<(f64, f64)> = monthly_totals(sales)
        .into_iter()
        .map(|(m, total)| (f64::from(m.number()), total))
        .collect();
    let ticks = Month::ALL.iter().map(|m| (f64::from(m.number()), m.label().to_string())).collect();

    let mut chart = Chart::new().with_title("Monthly Sales Trend");
    chart.x_axis = Axis::new("Month", 0.5, 12.5).with_ticks(ticks);
    chart.y_axis.label = "Total Sales".into();
    chart.add_series(Series::with_data(SeriesType::Line, data).with_markers());
    chart.autoscale_axes(0.08);
    chart
}

/// Age against salary, one colored group per role.
pub fn age_vs_salary(employees: &[Employee]) -> Chart {
    let mut chart = Chart::new().with_title("Age vs Salary by Role");
    chart.x_axis.label = "Age".into();
    chart.y_axis.label = "Salary".into();

    for (slot, role) in Role::ALL.into_iter().enumerate() {
        let points: Vec<(f64, f64)> = employees
            .iter()
            .filter(|e| e.role == role)
            .map(|e| (f64::from(e.age), e.salary))
            .collect();
        if points.is_empty() {
            continue;
        }
        chart.add_series(
            Series::with_data(SeriesType::Scatter, points)
                .named(role.label())
                .with_color_slot(slot)
                .with_size(7.0),
        );
    }
    chart.autoscale_axes(0.1);
    chart
}

pub fn dashboard(employees: &[Employee], sales: &[SalesRecord]) -> Dashboard {
    let mut dash = Dashboard::new(DASHBOARD_TITLE, 2, 2);
    dash.add_panel(salary_by_role(employees));
    dash.add_panel(sales_by_seller(sales));
    dash.add_panel(monthly_sales(sales));
    dash.add_panel(age_vs_salary(employees));
    dash
}
