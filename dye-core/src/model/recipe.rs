//! Recipe table: color → fabric → width → substance dosages.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Dosage per liter for each substance, in table order.
pub type Recipe = IndexMap<String, f64>;

type WidthMap = IndexMap<String, Recipe>;
type FabricMap = IndexMap<String, WidthMap>;

/// The full recipe table as published.
///
/// Keys are kept as plain strings so that entries for fabrics or widths
/// unknown to this build still load; see [`crate::validation`] for checks
/// against the fabric-width table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeTable {
    colors: IndexMap<String, FabricMap>,
}

impl RecipeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from its JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add or replace one recipe.
    pub fn insert(
        &mut self,
        color_id: impl Into<String>,
        fabric: impl Into<String>,
        width: impl Into<String>,
        recipe: Recipe,
    ) {
        self.colors
            .entry(color_id.into())
            .or_default()
            .entry(fabric.into())
            .or_default()
            .insert(width.into(), recipe);
    }

    /// Resolve the recipe for a color/fabric/width triple.
    pub fn lookup(&self, color_id: &str, fabric: &str, width: &str) -> Option<&Recipe> {
        self.colors
            .get(color_id)
            .and_then(|fabrics| fabrics.get(fabric))
            .and_then(|widths| widths.get(width))
    }

    /// Check if the table has no colors at all.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Number of color identifiers.
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    /// Number of individual recipes across all colors.
    pub fn recipe_count(&self) -> usize {
        self.entries().count()
    }

    /// Color identifiers in table order.
    pub fn color_ids(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// Every `(color, fabric, width, recipe)` in table order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str, &Recipe)> {
        self.colors.iter().flat_map(|(color, fabrics)| {
            fabrics.iter().flat_map(move |(fabric, widths)| {
                widths.iter().map(move |(width, recipe)| {
                    (color.as_str(), fabric.as_str(), width.as_str(), recipe)
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "1001": {
            "Cotone": {
                "7mm": {"Blue": 2.0, "Red": 1.0},
                "15mm": {"Blue": 2.5}
            },
            "Coda": {}
        },
        "2040": {
            "Gros Grain": {"8mm": {"Yellow": 0.4, "Black": 0.05, "Fixer": 3}}
        }
    }"#;

    #[test]
    fn test_lookup_resolves_all_three_levels() {
        let table = RecipeTable::from_json(SAMPLE).unwrap();
        let recipe = table.lookup("1001", "Cotone", "7mm").unwrap();
        assert_eq!(recipe.get("Blue"), Some(&2.0));
        assert_eq!(recipe.get("Red"), Some(&1.0));
    }

    #[test]
    fn test_lookup_missing_level_is_none() {
        let table = RecipeTable::from_json(SAMPLE).unwrap();
        assert!(table.lookup("9999", "Cotone", "7mm").is_none());
        assert!(table.lookup("1001", "Taffeta", "7mm").is_none());
        assert!(table.lookup("1001", "Cotone", "3mm").is_none());
        assert!(table.lookup("1001", "Coda", "").is_none());
    }

    #[test]
    fn test_substance_order_follows_document() {
        let table = RecipeTable::from_json(SAMPLE).unwrap();
        let recipe = table.lookup("2040", "Gros Grain", "8mm").unwrap();
        let names: Vec<&str> = recipe.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Yellow", "Black", "Fixer"]);
        assert_eq!(recipe.get("Fixer"), Some(&3.0));
    }

    #[test]
    fn test_counts() {
        let table = RecipeTable::from_json(SAMPLE).unwrap();
        assert_eq!(table.color_count(), 2);
        assert_eq!(table.recipe_count(), 3);
        assert_eq!(table.color_ids().collect::<Vec<_>>(), vec!["1001", "2040"]);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(RecipeTable::from_json("[1, 2, 3]").is_err());
        assert!(RecipeTable::from_json(r#"{"1001": {"Cotone": {"7mm": {"Blue": "two"}}}}"#).is_err());
    }

    #[test]
    fn test_insert_builds_nested_levels() {
        let mut table = RecipeTable::new();
        assert!(table.is_empty());
        table.insert("1001", "Cotone", "7mm", Recipe::from([("Blue".to_string(), 2.0)]));
        assert_eq!(table.recipe_count(), 1);
        assert!(table.lookup("1001", "Cotone", "7mm").is_some());
    }
}
