//! CSV-based rate table loader
//!
//! Loads brochure premiums from CSV files in data/

use log::warn;
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Default path to rate data directory
pub const DEFAULT_RATES_PATH: &str = "data";

/// Load brochure premiums from CSV
/// Returns Vec<(age, term, annual_premium)> in file order
pub fn load_brochure_premiums(path: &Path) -> Result<Vec<(u8, u32, f64)>, Box<dyn Error>> {
    let file = File::open(path.join("brochure_premiums.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let age: u8 = record[0].parse()?;
        let term: u32 = record[1].parse()?;
        let premium: f64 = record[2].parse()?;

        // PPT = term - 3 must stay positive
        if term <= 3 {
            warn!("skipping brochure row with term {} (age {})", term, age);
            continue;
        }
        rows.push((age, term, premium));
    }

    Ok(rows)
}
