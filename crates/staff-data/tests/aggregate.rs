// File: crates/staff-data/tests/aggregate.rs
// Purpose: Group-by folds and the summary statistics over small hand-built tables.

use chrono::NaiveDate;
use staff_data::{
    mean_salary_by_role, monthly_totals, summarize, total_sales_by_seller, Employee, Month, Product, Region,
    Role, SalesRecord,
};

fn employee(name: &str, role: Role, salary: f64) -> Employee {
    let d = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    Employee { name: name.into(), birth_date: d, enrollment_date: d, salary, role, age: 30 }
}

fn sale(seller: &str, month: Month, amount: f64) -> SalesRecord {
    SalesRecord {
        seller: seller.into(),
        month,
        amount,
        region: Region::North,
        product: Product::A,
        commission: amount * 0.05,
    }
}

#[test]
fn mean_salary_grouped_in_role_order() {
    let staff = vec![
        employee("Hugo", Role::Manager, 9000.0),
        employee("Ana", Role::Seller, 4000.0),
        employee("Bruno", Role::Seller, 5000.0),
        employee("Gabi", Role::It, 3500.0),
    ];
    assert_eq!(
        mean_salary_by_role(&staff),
        vec![(Role::Seller, 4500.0), (Role::It, 3500.0), (Role::Manager, 9000.0)]
    );
}

#[test]
fn seller_totals_sorted_descending() {
    let sales = vec![
        sale("Bruno", Month::Jan, 100.0),
        sale("Ana", Month::Jan, 300.0),
        sale("Bruno", Month::Feb, 150.0),
        sale("Carla", Month::Jan, 250.0),
    ];
    assert_eq!(
        total_sales_by_seller(&sales),
        vec![("Ana".to_string(), 300.0), ("Bruno".to_string(), 250.0), ("Carla".to_string(), 250.0)]
    );
}

#[test]
fn monthly_totals_in_calendar_order() {
    let sales = vec![
        sale("Ana", Month::Dec, 10.0),
        sale("Ana", Month::Jan, 1.0),
        sale("Bruno", Month::Dec, 20.0),
        sale("Bruno", Month::Mar, 5.0),
    ];
    assert_eq!(monthly_totals(&sales), vec![(Month::Jan, 1.0), (Month::Mar, 5.0), (Month::Dec, 30.0)]);
}

#[test]
fn summary_statistics() {
    let staff = vec![employee("Ana", Role::Seller, 4000.0), employee("Hugo", Role::Manager, 9000.0)];
    let sales = vec![
        sale("Ana", Month::Jan, 1000.0),
        sale("Ana", Month::Feb, 3000.0),
        sale("Bruno", Month::Jan, 2000.0),
    ];
    let s = summarize(&staff, &sales);
    assert_eq!(s.seller_count, 2);
    assert_eq!(s.annual_total, 6000.0);
    assert_eq!(s.mean_monthly_total, Some(3000.0));
    assert_eq!(s.top_seller, Some(("Ana".to_string(), 4000.0)));
    assert_eq!(s.mean_salary, Some(6500.0));
}

#[test]
fn summary_of_empty_tables() {
    let s = summarize(&[], &[]);
    assert_eq!(s.seller_count, 0);
    assert_eq!(s.annual_total, 0.0);
    assert_eq!(s.mean_monthly_total, None);
    assert_eq!(s.top_seller, None);
    assert_eq!(s.mean_salary, None);
    assert!(monthly_totals(&[]).is_empty());
    assert!(mean_salary_by_role(&[]).is_empty());
}
