pub mod confidence;
pub mod drug;
pub mod gene;
pub mod phenotype;
pub mod risk;
pub mod variant;
pub mod verdict;

pub use drug::Drug;
pub use gene::Gene;
pub use phenotype::PhenotypeCode;
pub use risk::{RiskLabel, RiskRule, Severity};
pub use variant::VariantRecord;
pub use verdict::{EvaluationFlags, RiskVerdict};

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
