//! Text rendering for results and history entries.

use crate::model::Calculation;

/// One line per substance, name padded to eight columns, two decimals.
pub fn format_result(calc: &Calculation) -> String {
    calc.amounts
        .iter()
        .map(|(substance, amount)| format!("{:<8}:   {:.2}", substance, amount))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Transcript of one calculation as kept in the session history.
pub fn format_history_entry(calc: &Calculation) -> String {
    let request = &calc.request;
    let percent = request
        .percent
        .map(|p| p.to_string())
        .unwrap_or_default();

    let mut entry = format!(
        " Col {} , {} {} , {} L , {}% :\n",
        request.color_id, request.fabric, request.width, request.liters, percent
    );
    for (substance, amount) in &calc.amounts {
        entry.push_str(&format!("   {}: {:.2} \n", substance, amount));
    }
    entry
}
