//! Plan Illustration CLI
//!
//! Prints the full quote sheet for the brochure: annual premium, installment
//! modes, and the estimated maturity for every published (age, term) cell.

use plan_illustration::{
    calculate_installments, estimate_maturity, format_currency, BrochureRateTable,
    BROCHURE_SUM_ASSURED, DEFAULT_BONUS_CONFIG,
};

fn main() {
    env_logger::init();

    println!("Plan Illustration v0.1.0");
    println!("========================\n");

    // Prefer the CSV rate file, fall back to the built-in brochure table
    let table = BrochureRateTable::from_csv().unwrap_or_else(|err| {
        eprintln!("Rate CSV unavailable ({err}), using built-in brochure table");
        BrochureRateTable::plan_733()
    });

    let bonus = DEFAULT_BONUS_CONFIG;

    println!(
        "Sum Assured: {}   Bonus: {}/1000 SRB + {}/1000 FAB\n",
        format_currency(BROCHURE_SUM_ASSURED, false),
        bonus.simple_reversionary_per_thousand,
        bonus.final_additional_per_thousand,
    );

    println!(
        "{:>4} {:>5} {:>4} {:>12} {:>12} {:>10} {:>9} {:>12}",
        "Age", "Term", "PPT", "Annual", "HalfYearly", "Quarterly", "Monthly", "Maturity"
    );
    println!("{}", "-".repeat(76));

    for cell in table.all_cells() {
        let schedule = calculate_installments(cell.annual_premium);
        let estimate = estimate_maturity(BROCHURE_SUM_ASSURED, cell.term, cell.ppt, &bonus)
            .expect("brochure cell satisfies estimator preconditions");

        println!(
            "{:>4} {:>5} {:>4} {:>12} {:>12} {:>10} {:>9} {:>12}",
            cell.age,
            cell.term,
            cell.ppt,
            format_currency(schedule.annual, false),
            format_currency(schedule.half_yearly, false),
            format_currency(schedule.quarterly, false),
            format_currency(schedule.monthly, false),
            format_currency(estimate.total_maturity, true),
        );
    }

    println!("\nMaturity figures are illustrative and not guaranteed.");
}
