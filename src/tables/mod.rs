pub mod defs;
pub mod notes;

use thiserror::Error;

use crate::model::gene::gene_order;
use crate::model::{Drug, Gene, PhenotypeCode, RiskLabel, RiskRule};
use defs::{DRUG_RULES, DrugRuleDef, GENE_PHENOTYPES, GenePhenotypeDef, MARKER_GENES};
use notes::{CLINICAL_ACTIONS, CLINICAL_NOTES, DrugNotesDef};

/// Read-only reference data consulted by the extractor and classifier.
///
/// The built-in instance lives in static memory; tests may assemble their own
/// from `'static` slices and pass it in the same way.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceTables {
    pub markers: &'static [(&'static str, Gene)],
    pub gene_phenotypes: &'static [GenePhenotypeDef],
    pub drug_rules: &'static [DrugRuleDef],
    pub actions: &'static [(RiskLabel, &'static str)],
    pub notes: &'static [DrugNotesDef],
}

static BUILTIN: ReferenceTables = ReferenceTables {
    markers: MARKER_GENES,
    gene_phenotypes: GENE_PHENOTYPES,
    drug_rules: DRUG_RULES,
    actions: CLINICAL_ACTIONS,
    notes: CLINICAL_NOTES,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("marker identifier {0} does not start with 'rs'")]
    MarkerNotRsid(String),
    #[error("marker identifier {0} listed more than once")]
    DuplicateMarker(String),
    #[error("no phenotype table for gene {0}")]
    MissingPhenotypeTable(Gene),
    #[error("override {identifier} for {gene} is not a {gene} marker")]
    OverrideNotMarker { gene: Gene, identifier: String },
    #[error("rule for {drug} is keyed by {gene}, expected {expected}")]
    RuleGeneMismatch {
        drug: Drug,
        gene: Gene,
        expected: Gene,
    },
    #[error("no clinical action text for {0}")]
    MissingAction(RiskLabel),
}

impl ReferenceTables {
    pub fn builtin() -> &'static ReferenceTables {
        &BUILTIN
    }

    pub fn gene_for_marker(&self, identifier: &str) -> Option<Gene> {
        self.markers
            .iter()
            .find(|(id, _)| *id == identifier)
            .map(|(_, gene)| *gene)
    }

    pub fn phenotype_table(&self, gene: Gene) -> Option<&'static GenePhenotypeDef> {
        self.gene_phenotypes.iter().find(|def| def.gene == gene)
    }

    /// drug -> gene -> phenotype. A missing level at any depth is `None`.
    pub fn rule(&self, drug: Drug, gene: Gene, phenotype: PhenotypeCode) -> Option<RiskRule> {
        let drug_rules = self.drug_rules.iter().find(|d| d.drug == drug)?;
        let gene_rules = drug_rules.genes.iter().find(|g| g.gene == gene)?;
        let entry = gene_rules
            .phenotypes
            .iter()
            .find(|p| p.phenotype == phenotype)?;
        Some(entry.rule)
    }

    pub fn action(&self, risk: RiskLabel) -> &'static str {
        let lookup = |label: RiskLabel| {
            self.actions
                .iter()
                .find(|(l, _)| *l == label)
                .map(|(_, text)| *text)
        };
        lookup(risk)
            .or_else(|| lookup(RiskLabel::Unknown))
            .unwrap_or(notes::NOTES_FALLBACK)
    }

    pub fn notes(&self, drug: Drug, phenotype: PhenotypeCode) -> &'static str {
        self.notes
            .iter()
            .find(|n| n.drug == drug)
            .and_then(|n| n.notes.iter().find(|(p, _)| *p == phenotype))
            .map(|(_, text)| *text)
            .unwrap_or(notes::NOTES_FALLBACK)
    }

    pub fn validate(&self) -> Result<(), TableError> {
        for (i, (id, _)) in self.markers.iter().enumerate() {
            if !id.starts_with("rs") {
                return Err(TableError::MarkerNotRsid(id.to_string()));
            }
            if self.markers[..i].iter().any(|(prev, _)| prev == id) {
                return Err(TableError::DuplicateMarker(id.to_string()));
            }
        }

        for &gene in gene_order() {
            let table = self
                .phenotype_table(gene)
                .ok_or(TableError::MissingPhenotypeTable(gene))?;
            for ov in table.overrides {
                if self.gene_for_marker(ov.identifier) != Some(gene) {
                    return Err(TableError::OverrideNotMarker {
                        gene,
                        identifier: ov.identifier.to_string(),
                    });
                }
            }
        }

        for drug_rules in self.drug_rules {
            let expected = drug_rules.drug.gene();
            for gene_rules in drug_rules.genes {
                if gene_rules.gene != expected {
                    return Err(TableError::RuleGeneMismatch {
                        drug: drug_rules.drug,
                        gene: gene_rules.gene,
                        expected,
                    });
                }
            }
        }

        for label in [
            RiskLabel::Safe,
            RiskLabel::AdjustDosage,
            RiskLabel::Toxic,
            RiskLabel::Ineffective,
            RiskLabel::Unknown,
        ] {
            if !self.actions.iter().any(|(l, _)| *l == label) {
                return Err(TableError::MissingAction(label));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/tables/tests.rs"]
mod tests;
