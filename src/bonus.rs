//! Bonus declaration configuration
//!
//! Bonus rates are non-guaranteed and change between declarations, so every
//! estimation call takes the declaration it should use as an explicit value.
//! Nothing in this crate reads bonus rates from ambient state.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Default path to the bonus declaration file
pub const DEFAULT_DECLARATION_PATH: &str = "data/bonus_declaration.json";

/// Per-thousand bonus rates used by the estimator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusConfig {
    /// Simple reversionary bonus per 1,000 SA, accruing each premium-paying year
    pub simple_reversionary_per_thousand: f64,
    /// Final additional bonus per 1,000 SA, paid once at maturity
    pub final_additional_per_thousand: f64,
}

/// Public brochure assumption (per 1,000 SA)
pub const DEFAULT_BONUS_CONFIG: BonusConfig = BonusConfig {
    simple_reversionary_per_thousand: 50.0,
    final_additional_per_thousand: 30.0,
};

/// A point-in-time bonus declaration loaded from configuration
///
/// Same rates as [`BonusConfig`] plus an optional free-text note recording
/// the provenance of the declared figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusDeclaration {
    pub simple_reversionary_per_thousand: f64,
    pub final_additional_per_thousand: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Default for BonusDeclaration {
    fn default() -> Self {
        Self {
            simple_reversionary_per_thousand: 40.0,
            final_additional_per_thousand: 15.0,
            note: Some("Illustrative declaration; actual bonuses are not guaranteed".to_string()),
        }
    }
}

impl BonusDeclaration {
    /// Load the declaration from the default location (data/bonus_declaration.json)
    pub fn load_default() -> Result<Self, Box<dyn Error>> {
        Self::load_from(Path::new(DEFAULT_DECLARATION_PATH))
    }

    /// Load a declaration from a specific JSON file
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)?;
        let decl = serde_json::from_reader(file)?;
        Ok(decl)
    }

    /// The rate pair, without the note
    pub fn config(&self) -> BonusConfig {
        BonusConfig {
            simple_reversionary_per_thousand: self.simple_reversionary_per_thousand,
            final_additional_per_thousand: self.final_additional_per_thousand,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_declaration() {
        let result = BonusDeclaration::load_default();
        assert!(result.is_ok(), "Failed to load declaration: {:?}", result.err());

        let decl = result.unwrap();
        assert!(decl.simple_reversionary_per_thousand >= 0.0);
        assert!(decl.final_additional_per_thousand >= 0.0);
    }

    #[test]
    fn test_declaration_json_field_names() {
        let json = r#"{
            "simpleReversionaryPerThousand": 40,
            "finalAdditionalPerThousand": 15,
            "note": "test declaration"
        }"#;

        let decl: BonusDeclaration = serde_json::from_str(json).unwrap();
        assert_eq!(decl.simple_reversionary_per_thousand, 40.0);
        assert_eq!(decl.final_additional_per_thousand, 15.0);
        assert_eq!(decl.note.as_deref(), Some("test declaration"));

        // Note is optional
        let bare: BonusDeclaration =
            serde_json::from_str(r#"{"simpleReversionaryPerThousand": 50, "finalAdditionalPerThousand": 30}"#)
                .unwrap();
        assert_eq!(bare.note, None);
        assert_eq!(bare.config(), DEFAULT_BONUS_CONFIG);
    }
}
