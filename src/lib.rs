//! Plan Illustration - premium and maturity estimation for an endowment plan
//!
//! This library provides:
//! - Brochure rate table lookups (age, term) -> annual premium
//! - Maturity benefit estimation from a declared bonus configuration
//! - Installment premium schedules for each payment mode
//! - Rupee display formatting (Indian numbering and lakh notation)
//!
//! All maturity figures are illustrative and non-guaranteed; the bonus
//! declaration behind every estimate is passed in explicitly so the
//! assumption a figure was produced under is always auditable.

pub mod bonus;
pub mod estimator;
pub mod format;
pub mod rates;

// Re-export commonly used types
pub use bonus::{BonusConfig, BonusDeclaration, DEFAULT_BONUS_CONFIG};
pub use estimator::{
    calculate_installments, estimate_maturity, estimate_maturity_quick, EstimateError,
    InstallmentSchedule, MaturityEstimate,
};
pub use format::format_currency;
pub use rates::{BrochureRateTable, IllustrativeMaturityTable, RateCell, BROCHURE_SUM_ASSURED};
