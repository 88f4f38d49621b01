//! Illustrative maturity figures from the brochure's what-if tables
//!
//! These are published display values, not outputs of the estimator. They are
//! kept alongside the rate table so the what-if view can quote them verbatim.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One published what-if row for an (age, term) combination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IllustrativeMaturity {
    /// Annual premium excluding taxes
    pub annual_premium: f64,
    /// Total premiums paid over the PPT
    pub total_paid: f64,
    /// Published estimated maturity value
    pub est_maturity: f64,
}

/// Published illustrative maturities keyed by issue age, then policy term
#[derive(Debug, Clone)]
pub struct IllustrativeMaturityTable {
    entries: BTreeMap<u8, BTreeMap<u32, IllustrativeMaturity>>,
}

impl IllustrativeMaturityTable {
    /// What-if figures for plan 733 (SA 2,00,000)
    pub fn plan_733() -> Self {
        let rows: &[(u8, u32, f64, f64, f64)] = &[
            (20, 13, 20_217.0, 202_170.0, 298_800.0),
            (20, 15, 16_670.0, 200_040.0, 318_000.0),
            (20, 20, 11_711.0, 199_087.0, 382_000.0),
            (20, 25, 9_006.0, 198_132.0, 520_000.0),
            (30, 13, 20_286.0, 202_860.0, 298_800.0),
            (30, 15, 16_758.0, 201_096.0, 318_000.0),
            (30, 20, 11_858.0, 201_586.0, 382_000.0),
            (30, 25, 9_222.0, 202_884.0, 520_000.0),
            (40, 13, 20_678.0, 206_780.0, 298_800.0),
            (40, 15, 16_758.0, 201_096.0, 318_000.0),
            (40, 17, 14_798.0, 207_172.0, 348_800.0),
            (40, 20, 12_495.0, 212_415.0, 382_000.0),
            (40, 25, 10_074.0, 221_628.0, 520_000.0),
            (50, 13, 22_030.0, 220_300.0, 298_800.0),
            (50, 15, 18_698.0, 224_376.0, 318_000.0),
        ];

        let mut entries: BTreeMap<u8, BTreeMap<u32, IllustrativeMaturity>> = BTreeMap::new();
        for &(age, term, annual_premium, total_paid, est_maturity) in rows {
            entries.entry(age).or_default().insert(
                term,
                IllustrativeMaturity {
                    annual_premium,
                    total_paid,
                    est_maturity,
                },
            );
        }
        Self { entries }
    }

    /// Published figures for an exact (age, term) match
    pub fn get(&self, age: u8, term: u32) -> Option<IllustrativeMaturity> {
        self.entries.get(&age)?.get(&term).copied()
    }

    /// Terms with published figures for an age, ascending
    pub fn terms_for_age(&self, age: u8) -> Vec<u32> {
        self.entries
            .get(&age)
            .map(|terms| terms.keys().copied().collect())
            .unwrap_or_default()
    }
}

/// Total premium outlay over the premium paying term
pub fn total_premiums_paid(annual_premium: f64, ppt: u32) -> f64 {
    annual_premium * ppt as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let table = IllustrativeMaturityTable::plan_733();

        let row = table.get(40, 17).unwrap();
        assert_eq!(row.annual_premium, 14_798.0);
        assert_eq!(row.est_maturity, 348_800.0);

        // Age 50 has no published term-20 figure
        assert!(table.get(50, 20).is_none());
        assert_eq!(table.terms_for_age(50), vec![13, 15]);
    }

    #[test]
    fn test_total_paid() {
        // Age 20, term 13, PPT 10: published total matches annual x PPT
        assert_eq!(total_premiums_paid(20_217.0, 10), 202_170.0);
    }
}
