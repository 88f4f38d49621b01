//! Maturity and installment premium estimation
//!
//! Pure functions over the rate table and bonus declaration. Maturity figures
//! are illustrative only; callers must present them as non-guaranteed.

use crate::bonus::{BonusConfig, BonusDeclaration};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Estimation input error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// A precondition on the caller-supplied inputs failed
    #[error("{0}")]
    InvalidInput(String),
}

/// Maturity benefit breakdown on survival to maturity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaturityEstimate {
    /// Guaranteed base payout
    pub basic_sum_assured: f64,
    /// Vested simple reversionary bonus, rounded to the nearest rupee
    pub simple_reversionary_bonus: f64,
    /// Final additional bonus, rounded to the nearest rupee
    pub final_additional_bonus: f64,
    /// SA plus both bonus components
    pub total_maturity: f64,
}

/// Installment amounts for each payment mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstallmentSchedule {
    pub annual: f64,
    pub half_yearly: f64,
    pub quarterly: f64,
    pub monthly: f64,
}

/// Estimate the maturity benefit for a given bonus declaration
///
/// Maturity = SA + simple reversionary bonus + final additional bonus, where
/// the reversionary bonus accrues once per premium-paying year. Each bonus
/// component is rounded to the nearest rupee before summation and the total
/// is not rounded again.
///
/// # Example
/// ```
/// use plan_illustration::{estimate_maturity, BonusConfig};
///
/// let bonus = BonusConfig {
///     simple_reversionary_per_thousand: 50.0,
///     final_additional_per_thousand: 30.0,
/// };
/// let est = estimate_maturity(200_000.0, 20, 17, &bonus).unwrap();
/// assert_eq!(est.total_maturity, 376_000.0);
/// ```
pub fn estimate_maturity(
    sum_assured: f64,
    term: u32,
    ppt: u32,
    bonus: &BonusConfig,
) -> Result<MaturityEstimate, EstimateError> {
    if sum_assured <= 0.0 {
        return Err(EstimateError::InvalidInput(
            "Sum Assured must be positive".to_string(),
        ));
    }
    if term == 0 || ppt == 0 {
        return Err(EstimateError::InvalidInput(
            "Term and PPT must be positive".to_string(),
        ));
    }
    if ppt > term {
        return Err(EstimateError::InvalidInput(
            "PPT cannot exceed Term".to_string(),
        ));
    }

    let thousands = sum_assured / 1000.0;

    // Accrues for each year premium is paid
    let simple_reversionary_bonus =
        (bonus.simple_reversionary_per_thousand * ppt as f64 * thousands).round();

    // One-time bonus at maturity, not scaled by duration
    let final_additional_bonus = (bonus.final_additional_per_thousand * thousands).round();

    let total_maturity = sum_assured + simple_reversionary_bonus + final_additional_bonus;

    Ok(MaturityEstimate {
        basic_sum_assured: sum_assured,
        simple_reversionary_bonus,
        final_additional_bonus,
        total_maturity,
    })
}

/// Quick two-argument maturity estimate from a loaded bonus declaration
///
/// The reversionary bonus accrues over the full policy term here, and the
/// total is rounded to the nearest 100 for display. This intentionally
/// diverges from [`estimate_maturity`], which rounds components only; the two
/// serve different callers and must not be unified.
pub fn estimate_maturity_quick(
    sum_assured: f64,
    term: u32,
    decl: &BonusDeclaration,
) -> Result<MaturityEstimate, EstimateError> {
    if sum_assured <= 0.0 {
        return Err(EstimateError::InvalidInput(
            "Sum Assured must be positive".to_string(),
        ));
    }
    if term == 0 {
        return Err(EstimateError::InvalidInput(
            "Term must be positive".to_string(),
        ));
    }

    let thousands = sum_assured / 1000.0;

    let simple_reversionary_bonus =
        (decl.simple_reversionary_per_thousand * term as f64 * thousands).round();
    let final_additional_bonus = (decl.final_additional_per_thousand * thousands).round();

    let raw_total = sum_assured + simple_reversionary_bonus + final_additional_bonus;
    let total_maturity = (raw_total / 100.0).round() * 100.0;

    Ok(MaturityEstimate {
        basic_sum_assured: sum_assured,
        simple_reversionary_bonus,
        final_additional_bonus,
        total_maturity,
    })
}

/// Installment premiums for each payment mode from the annual premium
///
/// Multipliers are fixed business constants; paying more frequently costs
/// slightly more than the pro-rata share (about 102% of annual in total).
pub fn calculate_installments(annual_premium: f64) -> InstallmentSchedule {
    InstallmentSchedule {
        annual: annual_premium.round(),
        half_yearly: (annual_premium * 0.51).round(),
        quarterly: (annual_premium * 0.255).round(),
        monthly: (annual_premium * 0.085).round(),
    }
}
