// File: crates/staff-data/src/sales.rs
// Summary: Monthly sales record synthesis for every seller in a roster.

use std::collections::HashMap;

use rand::Rng;
use rand_distr::{Distribution, Normal, NormalError};
use tracing::debug;

use crate::error::DataError;
use crate::model::{Employee, Month, Product, Region, SalesRecord};

/// Seed the report uses so sales are reproducible between runs.
pub const SALES_SEED: u64 = 42;

/// Additive monthly offsets: uplift for the holiday months, slump after them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeasonalAdjustment {
    pub holiday_uplift: f64,
    pub post_holiday_slump: f64,
}

impl Default for SeasonalAdjustment {
    fn default() -> Self {
        Self { holiday_uplift: 2000.0, post_holiday_slump: 1000.0 }
    }
}

impl SeasonalAdjustment {
    pub fn offset(&self, month: Month) -> f64 {
        match month {
            Month::Nov | Month::Dec => self.holiday_uplift,
            Month::Jan | Month::Feb => -self.post_holiday_slump,
            _ => 0.0,
        }
    }
}

/// Per-seller bonus keyed by seller name. Sellers not listed get nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SellerBonuses(HashMap<String, f64>);

impl SellerBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, seller: impl Into<String>, bonus: f64) -> Self {
        self.0.insert(seller.into(), bonus);
        self
    }

    pub fn bonus_for(&self, seller: &str) -> f64 {
        self.0.get(seller).copied().unwrap_or(0.0)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for SellerBonuses {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SalesConfig {
    pub mean: f64,
    pub std_dev: f64,
    pub seasonal: SeasonalAdjustment,
    pub bonuses: SellerBonuses,
    /// Lower clamp applied after all adjustments.
    pub floor: f64,
    pub commission_rate: f64,
}

impl Default for SalesConfig {
    fn default() -> Self {
        Self {
            mean: 5000.0,
            std_dev: 1500.0,
            seasonal: SeasonalAdjustment::default(),
            bonuses: SellerBonuses::default(),
            floor: 1000.0,
            commission_rate: 0.05,
        }
    }
}

impl SalesConfig {
    pub fn with_bonuses(mut self, bonuses: SellerBonuses) -> Self {
        self.bonuses = bonuses;
        self
    }
}

/// Round half away from zero to 2 decimal places.
#[inline]
pub fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// One record per (seller, month), sellers in roster order and months in calendar order.
///
/// Each record consumes three draws from `rng` in a fixed order: the normal base amount,
/// then the region, then the product. The same seed and roster always yield the same records.
pub fn synthesize_sales<R: Rng + ?Sized>(
    roster: &[Employee],
    config: &SalesConfig,
    rng: &mut R,
) -> Result<Vec<SalesRecord>, DataError> {
    // rand_distr accepts a negative std dev and mirrors the spread.
    if !(config.std_dev >= 0.0) {
        return Err(DataError::Distribution(NormalError::BadVariance));
    }
    let base = Normal::new(config.mean, config.std_dev)?;
    let sellers: Vec<&str> = roster.iter().filter(|e| e.is_seller()).map(|e| e.name.as_str()).collect();

    let mut records = Vec::with_capacity(sellers.len() * Month::ALL.len());
    for seller in &sellers {
        let bonus = config.bonuses.bonus_for(seller);
        for month in Month::ALL {
            let raw = base.sample(rng) + config.seasonal.offset(month) + bonus;
            let amount = round_cents(raw.max(config.floor));
            let region = Region::ALL[rng.gen_range(0..Region::ALL.len())];
            let product = Product::ALL[rng.gen_range(0..Product::ALL.len())];

            records.push(SalesRecord {
                seller: seller.to_string(),
                month,
                amount,
                region,
                product,
                commission: round_cents(amount * config.commission_rate),
            });
        }
    }

    debug!(sellers = sellers.len(), records = records.len(), "synthesized sales");
    Ok(records)
}
