use serde::{Deserialize, Serialize};

use crate::model::gene::Gene;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Drug {
    Codeine,
    Clopidogrel,
    Warfarin,
    Simvastatin,
    Azathioprine,
    Fluorouracil,
}

impl Drug {
    pub fn symbol(self) -> &'static str {
        match self {
            Drug::Codeine => "CODEINE",
            Drug::Clopidogrel => "CLOPIDOGREL",
            Drug::Warfarin => "WARFARIN",
            Drug::Simvastatin => "SIMVASTATIN",
            Drug::Azathioprine => "AZATHIOPRINE",
            Drug::Fluorouracil => "FLUOROURACIL",
        }
    }

    /// Gene governing the drug's metabolism or transport.
    pub fn gene(self) -> Gene {
        match self {
            Drug::Codeine => Gene::Cyp2d6,
            Drug::Clopidogrel => Gene::Cyp2c19,
            Drug::Warfarin => Gene::Cyp2c9,
            Drug::Simvastatin => Gene::Slco1b1,
            Drug::Azathioprine => Gene::Tpmt,
            Drug::Fluorouracil => Gene::Dpyd,
        }
    }

    /// Case-sensitive; callers upper-case user input first.
    pub fn from_symbol(symbol: &str) -> Option<Drug> {
        drug_order()
            .iter()
            .copied()
            .find(|drug| drug.symbol() == symbol)
    }
}

impl std::fmt::Display for Drug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

pub fn drug_order() -> &'static [Drug] {
    &[
        Drug::Codeine,
        Drug::Clopidogrel,
        Drug::Warfarin,
        Drug::Simvastatin,
        Drug::Azathioprine,
        Drug::Fluorouracil,
    ]
}

pub fn supported_drug_symbols() -> Vec<&'static str> {
    drug_order().iter().map(|d| d.symbol()).collect()
}
