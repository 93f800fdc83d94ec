use crate::model::phenotype::PhenotypeCode;

#[derive(Debug, Clone)]
pub struct ConfidenceTiers {
    pub no_rule: f64,
    pub unknown_phenotype: f64,
    pub partial_assumption: f64,
    pub exact_match: f64,
    pub gene_default: f64,
}

impl ConfidenceTiers {
    pub fn default_v1() -> Self {
        Self {
            no_rule: 0.30,
            unknown_phenotype: 0.50,
            partial_assumption: 0.75,
            exact_match: 0.95,
            gene_default: 0.85,
        }
    }

    /// First matching tier wins; later tiers are not consulted.
    pub fn score(
        &self,
        phenotype: PhenotypeCode,
        rule_matched: bool,
        exact_match: bool,
        partial_assumption: bool,
    ) -> f64 {
        if !rule_matched {
            return self.no_rule;
        }
        if phenotype == PhenotypeCode::Unknown {
            return self.unknown_phenotype;
        }
        if partial_assumption {
            return self.partial_assumption;
        }
        if exact_match {
            return self.exact_match;
        }
        self.gene_default
    }
}

impl Default for ConfidenceTiers {
    fn default() -> Self {
        Self::default_v1()
    }
}
