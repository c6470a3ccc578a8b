//! Fabric types and the widths each one is woven in.

use serde::{Deserialize, Serialize};

/// Ribbon fabric type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FabricType {
    #[serde(rename = "Doppio Raso")]
    DoppioRaso,
    #[serde(rename = "Gros Grain")]
    GrosGrain,
    Cotone,
    Taffeta,
    Cristal,
    Spigato,
    /// Tails; sold without a width.
    Coda,
}

impl FabricType {
    /// All fabric types, in the order they are offered to the user.
    pub const ALL: [FabricType; 7] = [
        FabricType::DoppioRaso,
        FabricType::GrosGrain,
        FabricType::Cotone,
        FabricType::Taffeta,
        FabricType::Cristal,
        FabricType::Spigato,
        FabricType::Coda,
    ];

    /// Name used as key in the recipe table.
    pub fn name(&self) -> &'static str {
        match self {
            FabricType::DoppioRaso => "Doppio Raso",
            FabricType::GrosGrain => "Gros Grain",
            FabricType::Cotone => "Cotone",
            FabricType::Taffeta => "Taffeta",
            FabricType::Cristal => "Cristal",
            FabricType::Spigato => "Spigato",
            FabricType::Coda => "Coda",
        }
    }

    /// Valid width labels, in display order. Empty when the fabric has no width.
    pub fn widths(&self) -> &'static [&'static str] {
        match self {
            FabricType::DoppioRaso => &["3mm", "6mm", "8mm", "10mm", "16mm", "25mm", "40mm", "55mm"],
            FabricType::GrosGrain => &["3mm", "8mm", "16mm", "25mm", "55mm"],
            FabricType::Cotone => &["3mm", "7mm", "15mm", "25mm", "40mm"],
            FabricType::Taffeta => &["6mm", "10mm", "16mm", "25mm", "40mm"],
            FabricType::Cristal => &["4mm", "8mm", "16mm", "25mm", "40mm", "60mm"],
            FabricType::Spigato => &["3mm", "8mm", "16mm", "30mm", "60mm"],
            FabricType::Coda => &[],
        }
    }

    /// Check if `width` is one of this fabric's labels.
    pub fn has_width(&self, width: &str) -> bool {
        self.widths().contains(&width)
    }

    /// Parse a fabric name. Surrounding whitespace and case are ignored.
    pub fn from_name(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|fabric| fabric.name().eq_ignore_ascii_case(wanted))
    }
}

impl std::fmt::Display for FabricType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Width labels for a fabric name; unknown names have none.
pub fn width_options(fabric: &str) -> &'static [&'static str] {
    FabricType::from_name(fabric)
        .map(|f| f.widths())
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrips_every_fabric() {
        for fabric in FabricType::ALL {
            assert_eq!(FabricType::from_name(fabric.name()), Some(fabric));
        }
    }

    #[test]
    fn test_from_name_ignores_case_and_padding() {
        assert_eq!(
            FabricType::from_name("  doppio raso "),
            Some(FabricType::DoppioRaso)
        );
        assert_eq!(FabricType::from_name("Velluto"), None);
        assert_eq!(FabricType::from_name(""), None);
    }

    #[test]
    fn test_width_options() {
        assert_eq!(width_options("Cotone"), &["3mm", "7mm", "15mm", "25mm", "40mm"]);
        assert!(width_options("Coda").is_empty());
        assert!(width_options("Nastro").is_empty());
    }

    #[test]
    fn test_has_width() {
        assert!(FabricType::Cristal.has_width("60mm"));
        assert!(!FabricType::Cotone.has_width("6mm"));
        assert!(!FabricType::Coda.has_width("3mm"));
    }

    #[test]
    fn test_serde_uses_table_names() {
        let json = serde_json::to_string(&FabricType::GrosGrain).unwrap();
        assert_eq!(json, "\"Gros Grain\"");
        let back: FabricType = serde_json::from_str("\"Doppio Raso\"").unwrap();
        assert_eq!(back, FabricType::DoppioRaso);
    }
}
