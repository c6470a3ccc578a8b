//! Data model for recipes and calculations.

mod calculation;
mod fabric;
mod recipe;

pub use calculation::{CalcRequest, Calculation};
pub use fabric::{width_options, FabricType};
pub use recipe::{Recipe, RecipeTable};
