// File: crates/staff-data/src/error.rs
// Summary: Error type shared by the roster and sales generators.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("invalid {field} '{value}' for {name}")]
    InvalidDate {
        name: String,
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Salary index i belongs to roster member i, so the lengths must agree.
    #[error("roster has {roster} members but {salaries} salaries were generated")]
    SalaryCountMismatch { roster: usize, salaries: usize },

    #[error("invalid sales distribution: {0}")]
    Distribution(#[from] rand_distr::NormalError),
}
