//! Consistency checks of a loaded recipe table.
//!
//! Findings never block loading; lookups on suspicious entries still work.

use crate::model::{FabricType, RecipeTable};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Check if there is nothing to report.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Validate every recipe in the table.
pub fn validate_table(table: &RecipeTable) -> ValidationResult {
    let mut result = ValidationResult::default();

    if table.is_empty() {
        result.add_warning("Recipe table is empty");
        return result;
    }

    for (color, fabric, width, recipe) in table.entries() {
        // Table keys must match exactly; lookups are case-sensitive.
        match FabricType::ALL.into_iter().find(|f| f.name() == fabric) {
            None => result.add_warning(format!("Color {}: unknown fabric '{}'", color, fabric)),
            Some(fabric_type) if !fabric_type.has_width(width) => {
                result.add_warning(format!(
                    "Color {}, {}: width '{}' is not offered for this fabric",
                    color, fabric, width
                ));
            }
            Some(_) => {}
        }

        if recipe.is_empty() {
            result.add_warning(format!("Color {}, {} {}: empty recipe", color, fabric, width));
        }

        for (substance, per_liter) in recipe {
            if !per_liter.is_finite() || *per_liter < 0.0 {
                result.add_warning(format!(
                    "Color {}, {} {}: invalid dosage {} for {}",
                    color, fabric, width, per_liter, substance
                ));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_table() {
        let table =
            RecipeTable::from_json(r#"{"1001": {"Cotone": {"7mm": {"Blue": 2.0, "Red": 0}}}}"#)
                .unwrap();
        let result = validate_table(&table);
        assert!(result.is_clean(), "{:?}", result.warnings);
    }

    #[test]
    fn test_empty_table_warns() {
        let result = validate_table(&RecipeTable::new());
        assert_eq!(result.warnings, vec!["Recipe table is empty".to_string()]);
    }

    #[test]
    fn test_unknown_fabric_and_width() {
        let table = RecipeTable::from_json(
            r#"{"1001": {"Velluto": {"7mm": {"Blue": 1.0}}, "Taffeta": {"7mm": {"Blue": 1.0}}}}"#,
        )
        .unwrap();
        let result = validate_table(&table);
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[0].contains("unknown fabric 'Velluto'"));
        assert!(result.warnings[1].contains("width '7mm' is not offered"));
    }

    #[test]
    fn test_negative_dosage_and_empty_recipe() {
        let table = RecipeTable::from_json(
            r#"{"1001": {"Cotone": {"7mm": {"Blue": -1.0}, "15mm": {}}}}"#,
        )
        .unwrap();
        let result = validate_table(&table);
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[0].contains("invalid dosage -1 for Blue"));
        assert!(result.warnings[1].contains("empty recipe"));
    }
}
