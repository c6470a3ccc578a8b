//! Recipe store: the table loaded once at startup, plus how the load went.

mod fetch;

pub use fetch::{cache_busted_url, fetch_remote, read_file};

use tracing::{info, warn};

use crate::calc::calculate_request;
use crate::config::{DataSource, StoreConfig};
use crate::error::{DyeError, Result};
use crate::model::{CalcRequest, Calculation, RecipeTable};
use crate::validation::validate_table;

/// Outcome of the startup load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Table loaded from `source`.
    Loaded { source: String, recipes: usize },
    /// Load failed; the store is empty.
    Unavailable { reason: String },
}

/// Read-only recipe table with its load status.
#[derive(Debug, Clone)]
pub struct RecipeStore {
    table: RecipeTable,
    status: LoadStatus,
}

impl RecipeStore {
    /// Load the table, degrading to an empty store on any failure.
    pub fn load(config: &StoreConfig) -> Self {
        match try_load(config) {
            Ok(table) => {
                let recipes = table.recipe_count();
                info!(
                    "Loaded {} recipe(s) for {} color(s) from {}",
                    recipes,
                    table.color_count(),
                    config.source
                );
                for warning in validate_table(&table).warnings {
                    warn!("{}", warning);
                }
                Self {
                    table,
                    status: LoadStatus::Loaded {
                        source: config.source.to_string(),
                        recipes,
                    },
                }
            }
            Err(e) => {
                warn!("Failed to load recipes from {}: {}", config.source, e);
                Self::unavailable(e.to_string())
            }
        }
    }

    /// Wrap an already parsed table.
    pub fn from_table(table: RecipeTable, source: impl Into<String>) -> Self {
        let recipes = table.recipe_count();
        Self {
            table,
            status: LoadStatus::Loaded {
                source: source.into(),
                recipes,
            },
        }
    }

    /// Empty store flagged as unavailable.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            table: RecipeTable::new(),
            status: LoadStatus::Unavailable {
                reason: reason.into(),
            },
        }
    }

    /// The loaded table (empty if unavailable).
    pub fn table(&self) -> &RecipeTable {
        &self.table
    }

    /// How the load went.
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Check if the table was loaded.
    pub fn is_available(&self) -> bool {
        matches!(self.status, LoadStatus::Loaded { .. })
    }

    /// Calculate against this store.
    ///
    /// Fails with [`DyeError::DataUnavailable`] when the load failed, so the
    /// user is told the data is offline rather than that the color is unknown.
    pub fn calculate(&self, request: CalcRequest) -> Result<Calculation> {
        if let LoadStatus::Unavailable { reason } = &self.status {
            return Err(DyeError::DataUnavailable {
                reason: reason.clone(),
            });
        }
        calculate_request(&self.table, request)
    }
}

/// Read and parse the table without the fallback.
pub fn try_load(config: &StoreConfig) -> Result<RecipeTable> {
    let body = match &config.source {
        DataSource::Remote(url) => fetch_remote(url, config.timeout)?,
        DataSource::File(path) => read_file(path)?,
    };
    RecipeTable::from_json(&body)
}
