//! dye-core - Core library for the ribbon dye calculator.
//!
//! This library loads the published recipe table (color → fabric → width →
//! dosage per liter for each substance) and scales a recipe to a bath volume
//! and percent adjustment.
//!
//! # Example
//!
//! ```no_run
//! use dye_core::{RecipeStore, Session, StoreConfig, FabricType};
//!
//! let store = RecipeStore::load(&StoreConfig::default());
//! let mut session = Session::new();
//! session.set_color("1001");
//! session.select_fabric(Some(FabricType::Cotone));
//! session.select_width("7mm");
//! session.set_liters("10");
//! let _ = session.calculate(&store);
//! println!("{}", session.result_text());
//! ```

pub mod calc;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod session;
pub mod store;
pub mod validation;

// Re-exports for convenience
pub use calc::{calculate, calculate_request, parse_request, scale};
pub use config::{DataSource, StoreConfig};
pub use error::{DyeError, ErrorCode, Result};
pub use format::{format_history_entry, format_result};
pub use model::{width_options, CalcRequest, Calculation, FabricType, Recipe, RecipeTable};
pub use session::{user_message, History, Session};
pub use store::{LoadStatus, RecipeStore};
pub use validation::{validate_table, ValidationResult};
