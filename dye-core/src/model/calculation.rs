//! Validated calculation inputs and their scaled result.

use indexmap::IndexMap;
use serde::Serialize;

/// Inputs that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalcRequest {
    /// Color identifier, trimmed.
    pub color_id: String,
    /// Fabric name as keyed in the recipe table.
    pub fabric: String,
    /// Width label as keyed in the recipe table.
    pub width: String,
    /// Bath volume in liters.
    pub liters: i64,
    /// Percent adjustment; `None` when the field was left blank.
    pub percent: Option<i64>,
}

impl CalcRequest {
    /// Percent adjustment with blank treated as zero.
    pub fn effective_percent(&self) -> i64 {
        self.percent.unwrap_or(0)
    }

    /// Multiplier applied on top of `dosage * liters`.
    pub fn factor(&self) -> f64 {
        1.0 + self.effective_percent() as f64 / 100.0
    }
}

/// Final amount per substance for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    /// What was asked for.
    pub request: CalcRequest,
    /// Amount per substance, in recipe order.
    pub amounts: IndexMap<String, f64>,
}

impl Calculation {
    /// Amount for one substance.
    pub fn amount(&self, substance: &str) -> Option<f64> {
        self.amounts.get(substance).copied()
    }

    /// Number of substances in the result.
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Check if the result has no substances.
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}
