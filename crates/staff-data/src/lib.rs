// File: crates/staff-data/src/lib.rs
// Summary: Library entry point; exports the data model, generators and aggregation folds.

pub mod aggregate;
pub mod error;
pub mod model;
pub mod roster;
pub mod sales;

pub use aggregate::{mean_salary_by_role, monthly_totals, summarize, total_sales_by_seller, Summary};
pub use error::DataError;
pub use model::{Employee, Month, Product, Region, Role, SalesRecord};
pub use roster::{age_in_years, generate_roster, generate_salaries, RosterEntry, RosterTemplate};
pub use sales::{round_cents, synthesize_sales, SalesConfig, SeasonalAdjustment, SellerBonuses, SALES_SEED};
