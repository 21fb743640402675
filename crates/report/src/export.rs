// File: crates/report/src/export.rs
// Summary: CSV export of the generated employee and sales tables.

use std::path::Path;

use anyhow::{Context, Result};
use staff_data::{Employee, SalesRecord};

pub fn write_employees_csv(path: &Path, employees: &[Employee]) -> Result<()> {
    let mut w = csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    w.write_record(["name", "birth_date", "enrollment_date", "salary", "role", "age"])?;
    for e in employees {
        w.write_record([
            e.name.clone(),
            e.birth_date.to_string(),
            e.enrollment_date.to_string(),
            format!("{:.2}", e.salary),
            e.role.label().to_string(),
            e.age.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_sales_csv(path: &Path, sales: &[SalesRecord]) -> Result<()> {
    let mut w = csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    w.write_record(["seller", "month", "month_num", "amount", "region", "product", "commission"])?;
    for r in sales {
        w.write_record([
            r.seller.clone(),
            r.month.label().to_string(),
            r.month.number().to_string(),
            format!("{:.2}", r.amount),
            r.region.label().to_string(),
            r.product.label().to_string(),
            format!("{:.2}", r.commission),
        ])?;
    }
    w.flush()?;
    Ok(())
}
