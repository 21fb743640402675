// File: crates/staff-data/tests/sales.rs
// Purpose: Sales synthesis invariants, reproducibility and seller bonuses.

use std::collections::HashSet;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use staff_data::{
    generate_roster, round_cents, synthesize_sales, total_sales_by_seller, DataError, Employee, Month, Role,
    SalesConfig, SalesRecord, SellerBonuses, SALES_SEED,
};

fn roster() -> Vec<Employee> {
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    generate_roster(&mut StdRng::seed_from_u64(1), today).expect("roster")
}

fn config() -> SalesConfig {
    SalesConfig::default().with_bonuses(SellerBonuses::new().with("Ana", 1000.0).with("Elena", 800.0))
}

fn synthesize(roster: &[Employee], seed: u64) -> Vec<SalesRecord> {
    synthesize_sales(roster, &config(), &mut StdRng::seed_from_u64(seed)).expect("sales")
}

#[test]
fn one_record_per_seller_and_month() {
    let roster = roster();
    let sales = synthesize(&roster, SALES_SEED);

    let sellers: Vec<&str> = roster.iter().filter(|e| e.role == Role::Seller).map(|e| e.name.as_str()).collect();
    assert_eq!(sellers, ["Ana", "Bruno", "Carla", "Elena", "Fernando"]);
    assert_eq!(sales.len(), sellers.len() * 12);
    assert_eq!(sales.len(), 60);

    let pairs: HashSet<(&str, Month)> = sales.iter().map(|r| (r.seller.as_str(), r.month)).collect();
    assert_eq!(pairs.len(), sales.len());

    // (seller index, month index) order
    for (i, r) in sales.iter().enumerate() {
        assert_eq!(r.seller, sellers[i / 12]);
        assert_eq!(r.month, Month::ALL[i % 12]);
        assert_eq!(r.month.number() as usize, i % 12 + 1);
    }
}

#[test]
fn amounts_floor_and_commission_law() {
    let sales = synthesize(&roster(), SALES_SEED);
    for r in &sales {
        assert!(r.amount >= 1000.0, "amount below floor: {r:?}");
        assert_eq!(r.amount, round_cents(r.amount));
        assert_eq!(r.commission, round_cents(r.amount * 0.05));
    }
}

#[test]
fn fixed_seed_is_reproducible() {
    let roster = roster();
    let first = synthesize(&roster, SALES_SEED);
    let second = synthesize(&roster, SALES_SEED);
    assert_eq!(first, second);

    let other = synthesize(&roster, SALES_SEED + 1);
    assert_ne!(first, other);
}

#[test]
fn reproducible_regardless_of_salaries() {
    // Salaries come from an unseeded draw; sales must not depend on them.
    let a = roster();
    let mut b = a.clone();
    for e in &mut b {
        e.salary += 1.0;
    }
    assert_eq!(synthesize(&a, SALES_SEED), synthesize(&b, SALES_SEED));
}

#[test]
fn no_sellers_yields_empty_sales() {
    let mut roster = roster();
    for e in &mut roster {
        e.role = Role::It;
    }
    let sales = synthesize(&roster, SALES_SEED);
    assert!(sales.is_empty());
    assert_eq!(sales.iter().map(|r| r.amount).sum::<f64>(), 0.0);
    assert!(total_sales_by_seller(&sales).is_empty());
}

#[test]
fn bonus_lifts_mean_amount() {
    let roster = roster();
    let mut diffs = Vec::new();
    for seed in 0..200 {
        let sales = synthesize(&roster, seed);
        for month in Month::ALL {
            let amount = |name: &str| {
                sales.iter().find(|r| r.seller == name && r.month == month).map(|r| r.amount).unwrap()
            };
            diffs.push(amount("Ana") - amount("Fernando"));
        }
    }
    let mean = diffs.iter().sum::<f64>() / diffs.len() as f64;
    assert!((mean - 1000.0).abs() < 250.0, "Ana vs Fernando mean difference {mean}");
}

#[test]
fn seasonal_offsets_shift_months() {
    let roster = roster();
    let mut by_month = [0.0f64; 12];
    let trials = 200;
    for seed in 0..trials {
        for r in synthesize(&roster, seed).iter().filter(|r| r.seller == "Bruno") {
            by_month[r.month as usize] += r.amount / trials as f64;
        }
    }
    let nov = by_month[Month::Nov as usize];
    let jun = by_month[Month::Jun as usize];
    let jan = by_month[Month::Jan as usize];
    assert!((nov - jun - 2000.0).abs() < 500.0, "Nov {nov} vs Jun {jun}");
    assert!((jun - jan - 1000.0).abs() < 500.0, "Jun {jun} vs Jan {jan}");
}

#[test]
fn default_config_has_no_bonuses() {
    let cfg = SalesConfig::default();
    assert_eq!(cfg.bonuses.bonus_for("Ana"), 0.0);
    assert_eq!(config().bonuses.bonus_for("Ana"), 1000.0);
    assert_eq!(config().bonuses.bonus_for("Elena"), 800.0);
    assert_eq!(config().bonuses.bonus_for("Bruno"), 0.0);
}

#[test]
fn invalid_distribution_is_reported() {
    let cfg = SalesConfig { std_dev: -1.0, ..SalesConfig::default() };
    let err = synthesize_sales(&roster(), &cfg, &mut StdRng::seed_from_u64(SALES_SEED)).unwrap_err();
    assert!(matches!(err, DataError::Distribution(_)));
}

#[test]
fn nan_spread_is_reported() {
    let cfg = SalesConfig { std_dev: f64::NAN, ..SalesConfig::default() };
    let err = synthesize_sales(&roster(), &cfg, &mut StdRng::seed_from_u64(SALES_SEED)).unwrap_err();
    assert!(matches!(err, DataError::Distribution(_)));
}

#[test]
fn zero_spread_is_accepted() {
    let cfg = SalesConfig { std_dev: 0.0, ..SalesConfig::default() };
    let sales = synthesize_sales(&roster(), &cfg, &mut StdRng::seed_from_u64(SALES_SEED)).unwrap();
    assert!(!sales.is_empty());
}

#[test]
fn floor_applies_when_distribution_is_low() {
    let cfg = SalesConfig { mean: -5000.0, std_dev: 10.0, ..SalesConfig::default() };
    let sales = synthesize_sales(&roster(), &cfg, &mut StdRng::seed_from_u64(SALES_SEED)).expect("sales");
    assert!(sales.iter().all(|r| r.amount == 1000.0 && r.commission == 50.0));
}
