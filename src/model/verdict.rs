use crate::model::gene::Gene;
use crate::model::phenotype::PhenotypeCode;
use crate::model::risk::{RiskLabel, Severity};
use crate::model::variant::VariantRecord;

/// Diagnostic flags recorded while classifying. Not part of reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationFlags {
    pub exact_match: bool,
    pub partial_assumption: bool,
    pub rule_matched: bool,
}

#[derive(Debug, Clone)]
pub struct RiskVerdict {
    /// `None` when the drug is not recognized.
    pub gene: Option<Gene>,
    pub diplotype: &'static str,
    pub phenotype: PhenotypeCode,
    pub variants: Vec<VariantRecord>,
    pub risk: RiskLabel,
    pub severity: Severity,
    pub confidence: f64,
    pub action: &'static str,
    pub notes: &'static str,
    pub flags: EvaluationFlags,
}

impl RiskVerdict {
    pub fn gene_symbol(&self) -> &'static str {
        self.gene.map(Gene::symbol).unwrap_or("UNKNOWN")
    }

    pub fn phenotype_label(&self) -> &'static str {
        self.phenotype.label()
    }

    pub fn variant_ids(&self) -> Vec<&str> {
        self.variants
            .iter()
            .map(|v| v.identifier.as_str())
            .collect()
    }
}
