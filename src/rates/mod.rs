//! Brochure premium rates and illustrative maturity data

mod illustrative;
pub mod loader;

pub use illustrative::{total_premiums_paid, IllustrativeMaturity, IllustrativeMaturityTable};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Sum Assured underlying every brochure premium cell
pub const BROCHURE_SUM_ASSURED: f64 = 200_000.0;

/// Issue ages published in the brochure
pub const AVAILABLE_AGES: [u8; 4] = [20, 30, 40, 50];

/// Policy terms that appear anywhere in the brochure
pub const ALL_TERMS: [u32; 3] = [18, 20, 25];

/// Years between policy term and premium paying term (PPT = Term - 3)
pub const PPT_OFFSET: u32 = 3;

/// A single published premium cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateCell {
    pub age: u8,
    pub term: u32,
    /// Premium paying term, always `term - 3` for this plan
    pub ppt: u32,
    /// Annual premium excluding taxes
    pub annual_premium: f64,
}

/// Premium lookup keyed by issue age, then policy term
///
/// Only combinations explicitly published in the brochure exist. Absence
/// means the combination is not offered, not that the premium is zero.
/// Loaded once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct BrochureRateTable {
    premiums: BTreeMap<u8, BTreeMap<u32, f64>>,
}

impl BrochureRateTable {
    /// Brochure premiums for plan 733 (annual mode, SA 2,00,000)
    pub fn plan_733() -> Self {
        let rows: &[(u8, u32, f64)] = &[
            (20, 18, 15_000.0),
            (20, 20, 11_711.0),
            (20, 25, 9_006.0),
            (30, 18, 15_200.0),
            (30, 20, 11_858.0),
            (30, 25, 9_222.0),
            (40, 18, 16_000.0),
            (40, 20, 12_495.0),
            (40, 25, 10_074.0),
            (50, 18, 18_000.0),
        ];
        Self::from_rows(rows.iter().copied())
    }

    /// Build a table from (age, term, annual_premium) rows
    pub fn from_rows(rows: impl IntoIterator<Item = (u8, u32, f64)>) -> Self {
        let mut premiums: BTreeMap<u8, BTreeMap<u32, f64>> = BTreeMap::new();
        for (age, term, premium) in rows {
            premiums.entry(age).or_default().insert(term, premium);
        }
        Self { premiums }
    }

    /// Load the table from `data/brochure_premiums.csv`
    pub fn from_csv() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_csv_path(Path::new(loader::DEFAULT_RATES_PATH))
    }

    /// Load the table from a CSV file in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let rows = loader::load_brochure_premiums(path)?;
        Ok(Self::from_rows(rows))
    }

    /// Annual premium for an exact (age, term) match
    ///
    /// Returns `None` when the combination is not published. Only listed
    /// combinations may be quoted, so there is no interpolation or default.
    pub fn premium(&self, age: u8, term: u32) -> Option<f64> {
        self.premiums.get(&age)?.get(&term).copied()
    }

    /// Whether an (age, term) combination is published in the brochure
    pub fn is_valid_combination(&self, age: u8, term: u32) -> bool {
        self.premium(age, term).is_some()
    }

    /// Terms published for an age, ascending; empty when the age is unknown
    pub fn terms_for_age(&self, age: u8) -> Vec<u32> {
        self.premiums
            .get(&age)
            .map(|terms| terms.keys().copied().collect())
            .unwrap_or_default()
    }

    /// All published cells, ascending by age then term within each age
    pub fn all_cells(&self) -> Vec<RateCell> {
        self.premiums
            .iter()
            .flat_map(|(&age, terms)| {
                terms.iter().map(move |(&term, &annual_premium)| RateCell {
                    age,
                    term,
                    ppt: term - PPT_OFFSET,
                    annual_premium,
                })
            })
            .collect()
    }
}
