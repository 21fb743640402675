// File: crates/report/src/tables.rs
// Summary: Console renderings of the employee table, sales head and summary statistics.

use chart_core::grid::format_value;
use staff_data::{Employee, SalesRecord, Summary};

/// Two decimals with thousands separators, e.g. `12,345.60`.
pub fn money(v: f64) -> String {
    let cents = (v.abs() * 100.0).round() as i64;
    let sign = if v < 0.0 && cents != 0 { "-" } else { "" };
    format!("{sign}{}.{:02}", format_value((cents / 100) as f64), cents % 100)
}

pub fn employee_table(employees: &[Employee]) -> String {
    let header = format!(
        "{:<3} {:<10} {:<12} {:<12} {:>10} {:<8} {:>4}",
        "#", "name", "birth_date", "enrolled", "salary", "role", "age"
    );
    let rows = employees.iter().enumerate().map(|(i, e)| {
        format!(
            "{:<3} {:<10} {:<12} {:<12} {:>10} {:<8} {:>4}",
            i,
            e.name,
            e.birth_date.to_string(),
            e.enrollment_date.to_string(),
            money(e.salary),
            e.role.label(),
            e.age
        )
    });
    lines(std::iter::once(header).chain(rows))
}

/// First `limit` sales rows.
pub fn sales_table(sales: &[SalesRecord], limit: usize) -> String {
    let header = format!(
        "{:<3} {:<10} {:<5} {:>3} {:>10} {:<6} {:<10} {:>9}",
        "#", "seller", "month", "num", "amount", "region", "product", "commission"
    );
    let rows = sales.iter().take(limit).enumerate().map(|(i, r)| {
        format!(
            "{:<3} {:<10} {:<5} {:>3} {:>10} {:<6} {:<10} {:>9}",
            i,
            r.seller,
            r.month.label(),
            r.month.number(),
            money(r.amount),
            r.region.label(),
            r.product.label(),
            money(r.commission)
        )
    });
    lines(std::iter::once(header).chain(rows))
}

pub fn summary_lines(summary: &Summary) -> String {
    let or_dash = |v: Option<f64>| v.map(money).unwrap_or_else(|| "-".to_string());
    let best = match &summary.top_seller {
        Some((name, total)) => format!("{name} ({})", money(*total)),
        None => "-".to_string(),
    };
    lines([
        "--- STATISTICS ---".to_string(),
        format!("Total sellers: {}", summary.seller_count),
        format!("Annual sales total: {}", money(summary.annual_total)),
        format!("Mean sales per month: {}", or_dash(summary.mean_monthly_total)),
        format!("Best seller: {best}"),
        format!("Company mean salary: {}", or_dash(summary.mean_salary)),
    ])
}

/// One entry per line, each newline-terminated.
fn lines(rows: impl IntoIterator<Item = String>) -> String {
    rows.into_iter().map(|row| row + "\n").collect()
}
