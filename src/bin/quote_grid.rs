//! Export the full illustration grid to CSV
//!
//! One row per published brochure cell: premium, installment modes, total
//! outlay, bonus breakdown, and both maturity estimates (per-PPT and the
//! quick term-based display figure).

use plan_illustration::rates::total_premiums_paid;
use plan_illustration::{
    calculate_installments, estimate_maturity, estimate_maturity_quick, BonusDeclaration,
    BrochureRateTable, BROCHURE_SUM_ASSURED, DEFAULT_BONUS_CONFIG,
};
use std::fs::File;
use std::io::Write;

fn main() {
    env_logger::init();

    let table = BrochureRateTable::from_csv().unwrap_or_else(|err| {
        eprintln!("Rate CSV unavailable ({err}), using built-in brochure table");
        BrochureRateTable::plan_733()
    });

    let declaration = BonusDeclaration::load_default().unwrap_or_else(|err| {
        eprintln!("Declaration file unavailable ({err}), using built-in declaration");
        BonusDeclaration::default()
    });

    let output_path = "illustration_grid.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(
        file,
        "Age,Term,PPT,AnnualPremium,HalfYearly,Quarterly,Monthly,TotalPaid,SRB,FAB,TotalMaturity,QuickMaturity"
    )
    .unwrap();

    let cells = table.all_cells();
    for cell in &cells {
        let schedule = calculate_installments(cell.annual_premium);
        let estimate =
            estimate_maturity(BROCHURE_SUM_ASSURED, cell.term, cell.ppt, &DEFAULT_BONUS_CONFIG)
                .expect("brochure cell satisfies estimator preconditions");
        let quick = estimate_maturity_quick(BROCHURE_SUM_ASSURED, cell.term, &declaration)
            .expect("brochure cell satisfies estimator preconditions");

        writeln!(
            file,
            "{},{},{},{:.0},{:.0},{:.0},{:.0},{:.0},{:.0},{:.0},{:.0},{:.0}",
            cell.age,
            cell.term,
            cell.ppt,
            schedule.annual,
            schedule.half_yearly,
            schedule.quarterly,
            schedule.monthly,
            total_premiums_paid(cell.annual_premium, cell.ppt),
            estimate.simple_reversionary_bonus,
            estimate.final_additional_bonus,
            estimate.total_maturity,
            quick.total_maturity,
        )
        .unwrap();
    }

    println!("Wrote {} cells to {}", cells.len(), output_path);
}
