use serde::{Deserialize, Serialize};

/// Functional class of a pharmacogene. `Decreased` is the SLCO1B1 transporter
/// class; `Unknown` is only produced for unrecognized drugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhenotypeCode {
    #[serde(rename = "PM")]
    Poor,
    #[serde(rename = "IM")]
    Intermediate,
    #[serde(rename = "NM")]
    Normal,
    #[serde(rename = "RM")]
    Rapid,
    #[serde(rename = "URM")]
    UltraRapid,
    Decreased,
    Unknown,
}

impl PhenotypeCode {
    pub fn code(self) -> &'static str {
        match self {
            PhenotypeCode::Poor => "PM",
            PhenotypeCode::Intermediate => "IM",
            PhenotypeCode::Normal => "NM",
            PhenotypeCode::Rapid => "RM",
            PhenotypeCode::UltraRapid => "URM",
            PhenotypeCode::Decreased => "Decreased",
            PhenotypeCode::Unknown => "Unknown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PhenotypeCode::Poor => "Poor Metabolizer",
            PhenotypeCode::Intermediate => "Intermediate Metabolizer",
            PhenotypeCode::Normal => "Normal Metabolizer",
            PhenotypeCode::Rapid => "Rapid Metabolizer",
            PhenotypeCode::UltraRapid => "Ultra-Rapid Metabolizer",
            other => other.code(),
        }
    }
}

impl std::fmt::Display for PhenotypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
