// File: crates/staff-data/src/model.rs
// Summary: Employee and sales record types plus the closed sets they draw from.

use chrono::NaiveDate;
use std::fmt;

/// Job role. Ordering follows declaration order, which is also roster order of first appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Seller,
    Hr,
    It,
    Manager,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Seller, Role::Hr, Role::It, Role::Manager];

    pub const fn label(self) -> &'static str {
        match self {
            Role::Seller => "seller",
            Role::Hr => "HR",
            Role::It => "IT",
            Role::Manager => "manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// Calendar order.
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// 1-based ordinal (Jan = 1).
    pub const fn number(self) -> u32 {
        self as u32 + 1
    }

    pub const fn label(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];

    pub const fn label(self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Product {
    A,
    B,
    C,
    D,
}

impl Product {
    pub const ALL: [Product; 4] = [Product::A, Product::B, Product::C, Product::D];

    pub const fn label(self) -> &'static str {
        match self {
            Product::A => "Product A",
            Product::B => "Product B",
            Product::C => "Product C",
            Product::D => "Product D",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One staff member. `age` is derived from `birth_date` when the roster is generated.
#[derive(Clone, Debug, PartialEq)]
pub struct Employee {
    pub name: String,
    pub birth_date: NaiveDate,
    pub enrollment_date: NaiveDate,
    pub salary: f64,
    pub role: Role,
    pub age: u32,
}

impl Employee {
    pub fn is_seller(&self) -> bool {
        self.role == Role::Seller
    }
}

/// Synthetic sales for one seller in one month.
#[derive(Clone, Debug, PartialEq)]
pub struct SalesRecord {
    pub seller: String,
    pub month: Month,
    pub amount: f64,
    pub region: Region,
    pub product: Product,
    pub commission: f64,
}
