// File: crates/staff-data/src/roster.rs
// Summary: Fixed employee roster with randomly generated salaries and date-derived ages.

use chrono::NaiveDate;
use rand::Rng;
use tracing::debug;

use crate::error::DataError;
use crate::model::{Employee, Role};

/// Lower bound (inclusive) of an ordinary salary.
pub const SALARY_MIN: u32 = 3000;
/// Upper bound (exclusive) of an ordinary salary.
pub const SALARY_MAX: u32 = 6000;
/// Fixed salary of the last roster slot.
pub const TOP_SALARY: f64 = 9000.0;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DAYS_PER_YEAR: f64 = 365.25;

/// Literal roster row; dates stay as ISO strings until the roster is built.
#[derive(Clone, Copy, Debug)]
pub struct RosterEntry {
    pub name: &'static str,
    pub birth_date: &'static str,
    pub enrollment_date: &'static str,
    pub role: Role,
}

impl RosterEntry {
    pub const fn new(name: &'static str, birth_date: &'static str, enrollment_date: &'static str, role: Role) -> Self {
        Self { name, birth_date, enrollment_date, role }
    }
}

#[derive(Clone, Debug)]
pub struct RosterTemplate {
    pub entries: Vec<RosterEntry>,
}

impl RosterTemplate {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    /// The 8-person company: 7 ordinary staff followed by the top earner.
    pub fn standard() -> Self {
        Self::new(vec![
            RosterEntry::new("Ana", "1987-03-15", "2021-06-10", Role::Seller),
            RosterEntry::new("Bruno", "1982-11-22", "2020-03-15", Role::Seller),
            RosterEntry::new("Carla", "1990-07-08", "2023-11-08", Role::Seller),
            RosterEntry::new("Diego", "1985-01-30", "2022-09-20", Role::Hr),
            RosterEntry::new("Elena", "1992-09-12", "2024-01-12", Role::Seller),
            RosterEntry::new("Fernando", "1988-05-17", "2021-10-05", Role::Seller),
            RosterEntry::new("Gabi", "1991-12-03", "2022-07-18", Role::It),
            RosterEntry::new("Hugo", "1983-08-25", "2020-12-30", Role::Manager),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pair each entry with the salary at the same index and derive ages as of `today`.
    pub fn build(&self, salaries: &[f64], today: NaiveDate) -> Result<Vec<Employee>, DataError> {
        if salaries.len() != self.entries.len() {
            return Err(DataError::SalaryCountMismatch {
                roster: self.entries.len(),
                salaries: salaries.len(),
            });
        }

        self.entries
            .iter()
            .zip(salaries)
            .map(|(entry, &salary)| {
                let birth_date = parse_date(entry.name, "birth date", entry.birth_date)?;
                let enrollment_date = parse_date(entry.name, "enrollment date", entry.enrollment_date)?;
                Ok(Employee {
                    name: entry.name.to_string(),
                    birth_date,
                    enrollment_date,
                    salary,
                    role: entry.role,
                    age: age_in_years(birth_date, today),
                })
            })
            .collect()
    }
}

fn parse_date(name: &str, field: &'static str, value: &str) -> Result<NaiveDate, DataError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| DataError::InvalidDate {
        name: name.to_string(),
        field,
        value: value.to_string(),
        source,
    })
}

/// Draw `ordinary` salaries uniformly from [3000, 6000) and append the fixed top salary.
pub fn generate_salaries<R: Rng + ?Sized>(rng: &mut R, ordinary: usize) -> Vec<f64> {
    let mut salaries: Vec<f64> = (0..ordinary)
        .map(|_| f64::from(rng.gen_range(SALARY_MIN..SALARY_MAX)))
        .collect();
    salaries.push(TOP_SALARY);
    salaries
}

/// Whole years between `birth` and `today`, counting 365.25 days per year.
/// Birth dates after `today` yield 0.
pub fn age_in_years(birth: NaiveDate, today: NaiveDate) -> u32 {
    let days = (today - birth).num_days().max(0);
    (days as f64 / DAYS_PER_YEAR).floor() as u32
}

/// Build the standard roster. Ages depend on `today`, salaries on `rng`.
pub fn generate_roster<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> Result<Vec<Employee>, DataError> {
    let template = RosterTemplate::standard();
    let salaries = generate_salaries(rng, template.len().saturating_sub(1));
    let roster = template.build(&salaries, today)?;
    debug!(employees = roster.len(), %today, "generated roster");
    Ok(roster)
}
