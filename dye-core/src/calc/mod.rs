//! Input validation, recipe resolution and dosage scaling.

use indexmap::IndexMap;
use tracing::debug;

use crate::config::MIN_PERCENT;
use crate::error::{DyeError, Result};
use crate::model::{CalcRequest, Calculation, Recipe, RecipeTable};

/// Validate the five raw form fields.
///
/// Blank color, fabric or width is reported before the numeric fields are
/// looked at. A blank percent means no adjustment.
pub fn parse_request(
    color_id: &str,
    fabric: &str,
    width: &str,
    liters: &str,
    percent: &str,
) -> Result<CalcRequest> {
    let color_id = required("color", color_id)?;
    let fabric = required("fabric", fabric)?;
    let width = required("width", width)?;

    let liters = parse_int("liters", required("liters", liters)?)?;
    if liters < 0 {
        return Err(DyeError::OutOfRange {
            field: "liters",
            value: liters,
            reason: "must not be negative",
        });
    }

    let percent = match percent.trim() {
        "" => None,
        text => Some(parse_int("percent", text)?),
    };
    if let Some(p) = percent {
        if p < MIN_PERCENT {
            return Err(DyeError::OutOfRange {
                field: "percent",
                value: p,
                reason: "cannot reduce by more than 100%",
            });
        }
    }

    Ok(CalcRequest {
        color_id: color_id.to_string(),
        fabric: fabric.to_string(),
        width: width.to_string(),
        liters,
        percent,
    })
}

/// Validate raw fields and compute the dosages in one step.
pub fn calculate(
    table: &RecipeTable,
    color_id: &str,
    fabric: &str,
    width: &str,
    liters: &str,
    percent: &str,
) -> Result<Calculation> {
    let request = parse_request(color_id, fabric, width, liters, percent)?;
    calculate_request(table, request)
}

/// Resolve the recipe for a validated request and scale it.
pub fn calculate_request(table: &RecipeTable, request: CalcRequest) -> Result<Calculation> {
    let recipe = table
        .lookup(&request.color_id, &request.fabric, &request.width)
        .filter(|recipe| !recipe.is_empty())
        .ok_or_else(|| DyeError::NotFound {
            color_id: request.color_id.clone(),
            fabric: request.fabric.clone(),
            width: request.width.clone(),
        })?;

    debug!(
        "Recipe {} / {} / {}: {} substance(s)",
        request.color_id,
        request.fabric,
        request.width,
        recipe.len()
    );

    let amounts = scale(recipe, request.liters, request.effective_percent());
    Ok(Calculation { request, amounts })
}

/// Scale per-liter dosages to the bath volume and percent adjustment.
///
/// `final = dosage * liters * (1 + percent / 100)`, unrounded.
pub fn scale(recipe: &Recipe, liters: i64, percent: i64) -> IndexMap<String, f64> {
    let factor = 1.0 + percent as f64 / 100.0;
    recipe
        .iter()
        .map(|(substance, per_liter)| {
            let base = per_liter * liters as f64;
            (substance.clone(), base * factor)
        })
        .collect()
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DyeError::MissingField { field });
    }
    Ok(value)
}

fn parse_int(field: &'static str, value: &str) -> Result<i64> {
    value.parse().map_err(|source| DyeError::InvalidNumber {
        field,
        value: value.to_string(),
        source,
    })
}
