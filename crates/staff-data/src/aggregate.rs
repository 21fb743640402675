// File: crates/staff-data/src/aggregate.rs
// Summary: Group-by folds over employee and sales records (sums, means, rankings).

use std::collections::{BTreeMap, HashSet};

use crate::model::{Employee, Month, Role, SalesRecord};

/// Mean salary per role, in role order. Roles without employees are omitted.
pub fn mean_salary_by_role(employees: &[Employee]) -> Vec<(Role, f64)> {
    let groups = employees.iter().fold(BTreeMap::<Role, (f64, usize)>::new(), |mut acc, e| {
        let slot = acc.entry(e.role).or_insert((0.0, 0));
        slot.0 += e.salary;
        slot.1 += 1;
        acc
    });
    groups.into_iter().map(|(role, (sum, n))| (role, sum / n as f64)).collect()
}

/// Annual sales per seller, highest first. Equal totals keep name order.
pub fn total_sales_by_seller(sales: &[SalesRecord]) -> Vec<(String, f64)> {
    let groups = sales.iter().fold(BTreeMap::<&str, f64>::new(), |mut acc, r| {
        *acc.entry(r.seller.as_str()).or_insert(0.0) += r.amount;
        acc
    });
    let mut totals: Vec<(String, f64)> = groups.into_iter().map(|(s, t)| (s.to_string(), t)).collect();
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));
    totals
}

/// Sales summed across sellers per month, in calendar order. Months without records are omitted.
pub fn monthly_totals(sales: &[SalesRecord]) -> Vec<(Month, f64)> {
    sales
        .iter()
        .fold(BTreeMap::<Month, f64>::new(), |mut acc, r| {
            *acc.entry(r.month).or_insert(0.0) += r.amount;
            acc
        })
        .into_iter()
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub seller_count: usize,
    pub annual_total: f64,
    /// Mean of the per-month totals.
    pub mean_monthly_total: Option<f64>,
    pub top_seller: Option<(String, f64)>,
    pub mean_salary: Option<f64>,
}

pub fn summarize(employees: &[Employee], sales: &[SalesRecord]) -> Summary {
    let sellers: HashSet<&str> = sales.iter().map(|r| r.seller.as_str()).collect();
    let months = monthly_totals(sales);
    let mean_monthly_total = mean(months.iter().map(|(_, t)| *t));
    let salary = mean(employees.iter().map(|e| e.salary));

    Summary {
        seller_count: sellers.len(),
        annual_total: sales.iter().map(|r| r.amount).sum(),
        mean_monthly_total,
        top_seller: total_sales_by_seller(sales).into_iter().next(),
        mean_salary: salary,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}
