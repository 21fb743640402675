// File: crates/report/src/lib.rs
// Summary: Presentation layer for the staff report: charts, console tables and CSV export.

pub mod charts;
pub mod export;
pub mod tables;

use staff_data::SellerBonuses;

/// Bonus table for the two distinguished sellers.
pub fn standard_bonuses() -> SellerBonuses {
    SellerBonuses::new().with("Ana", 1000.0).with("Elena", 800.0)
}
