use crate::model::{Drug, Gene, PhenotypeCode, RiskLabel, RiskRule, Severity};
use PhenotypeCode::{Decreased, Intermediate, Normal, Poor, Rapid, UltraRapid};

#[derive(Debug, Clone, Copy)]
pub struct VariantOverride {
    pub identifier: &'static str,
    pub diplotype: &'static str,
    pub phenotype: PhenotypeCode,
}

#[derive(Debug, Clone, Copy)]
pub struct GenePhenotypeDef {
    pub gene: Gene,
    pub default_diplotype: &'static str,
    pub default_phenotype: PhenotypeCode,
    pub overrides: &'static [VariantOverride],
}

impl GenePhenotypeDef {
    pub fn override_for(&self, identifier: &str) -> Option<&'static VariantOverride> {
        self.overrides.iter().find(|o| o.identifier == identifier)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PhenotypeRuleDef {
    pub phenotype: PhenotypeCode,
    pub rule: RiskRule,
}

#[derive(Debug, Clone, Copy)]
pub struct GeneRuleDef {
    pub gene: Gene,
    pub phenotypes: &'static [PhenotypeRuleDef],
}

#[derive(Debug, Clone, Copy)]
pub struct DrugRuleDef {
    pub drug: Drug,
    pub genes: &'static [GeneRuleDef],
}

pub const DEFAULT_DIPLOTYPE: &str = "*1/*1";

const fn ov(
    identifier: &'static str,
    diplotype: &'static str,
    phenotype: PhenotypeCode,
) -> VariantOverride {
    VariantOverride {
        identifier,
        diplotype,
        phenotype,
    }
}

const fn rule(phenotype: PhenotypeCode, risk: RiskLabel, severity: Severity) -> PhenotypeRuleDef {
    PhenotypeRuleDef {
        phenotype,
        rule: RiskRule { risk, severity },
    }
}

/// Known marker identifiers for the six target genes.
pub const MARKER_GENES: &[(&str, Gene)] = &[
    ("rs3892097", Gene::Cyp2d6),
    ("rs1065852", Gene::Cyp2d6),
    ("rs28371706", Gene::Cyp2d6),
    ("rs16947", Gene::Cyp2d6),
    ("rs28371725", Gene::Cyp2d6),
    ("rs762551", Gene::Cyp2d6),
    ("rs4986893", Gene::Cyp2c19),
    ("rs4244285", Gene::Cyp2c19),
    ("rs12248560", Gene::Cyp2c19),
    ("rs28399504", Gene::Cyp2c19),
    ("rs1799853", Gene::Cyp2c9),
    ("rs1057910", Gene::Cyp2c9),
    ("rs28371686", Gene::Cyp2c9),
    ("rs4149056", Gene::Slco1b1),
    ("rs2306283", Gene::Slco1b1),
    ("rs1800460", Gene::Tpmt),
    ("rs1142345", Gene::Tpmt),
    ("rs1800584", Gene::Tpmt),
    ("rs3918290", Gene::Dpyd),
    ("rs55886062", Gene::Dpyd),
    ("rs67376798", Gene::Dpyd),
    ("rs75017182", Gene::Dpyd),
];

const CYP2D6_OVERRIDES: &[VariantOverride] = &[
    ov("rs3892097", "*1/*4", Intermediate),
    ov("rs1065852", "*1/*10", Intermediate),
    ov("rs28371706", "*4/*4", Poor),
    ov("rs16947", "*1/*2", Normal),
    ov("rs762551", "*1/*1xN", UltraRapid),
];
const CYP2C19_OVERRIDES: &[VariantOverride] = &[
    ov("rs4986893", "*1/*3", Intermediate),
    ov("rs4244285", "*1/*2", Intermediate),
    ov("rs12248560", "*1/*17", Rapid),
    ov("rs28399504", "*2/*2", Poor),
];
const CYP2C9_OVERRIDES: &[VariantOverride] = &[
    ov("rs1799853", "*1/*2", Intermediate),
    ov("rs1057910", "*1/*3", Intermediate),
    ov("rs28371686", "*2/*3", Poor),
];
// rs4149056 is the *5 allele: decreased hepatic uptake.
const SLCO1B1_OVERRIDES: &[VariantOverride] = &[
    ov("rs4149056", "*1/*5", Decreased),
    ov("rs2306283", "*1a/*1b", Normal),
];
const TPMT_OVERRIDES: &[VariantOverride] = &[
    ov("rs1800460", "*1/*3B", Intermediate),
    ov("rs1142345", "*1/*3C", Intermediate),
    ov("rs1800584", "*3A/*3A", Poor),
];
const DPYD_OVERRIDES: &[VariantOverride] = &[
    ov("rs3918290", "*1/*2A", Intermediate),
    ov("rs55886062", "*2A/*2A", Poor),
    ov("rs67376798", "*1/*13", Intermediate),
    ov("rs75017182", "*1/*HapB3", Intermediate),
];

const fn gene_def(gene: Gene, overrides: &'static [VariantOverride]) -> GenePhenotypeDef {
    GenePhenotypeDef {
        gene,
        default_diplotype: DEFAULT_DIPLOTYPE,
        default_phenotype: Normal,
        overrides,
    }
}

pub const GENE_PHENOTYPES: &[GenePhenotypeDef] = &[
    gene_def(Gene::Cyp2d6, CYP2D6_OVERRIDES),
    gene_def(Gene::Cyp2c19, CYP2C19_OVERRIDES),
    gene_def(Gene::Cyp2c9, CYP2C9_OVERRIDES),
    gene_def(Gene::Slco1b1, SLCO1B1_OVERRIDES),
    gene_def(Gene::Tpmt, TPMT_OVERRIDES),
    gene_def(Gene::Dpyd, DPYD_OVERRIDES),
];

// Phenotypes absent from a gene's list are not rule-matched.
pub const DRUG_RULES: &[DrugRuleDef] = &[
    DrugRuleDef {
        drug: Drug::Codeine,
        genes: &[GeneRuleDef {
            gene: Gene::Cyp2d6,
            phenotypes: &[
                rule(Poor, RiskLabel::Toxic, Severity::High),
                rule(Normal, RiskLabel::Safe, Severity::None),
                rule(Intermediate, RiskLabel::AdjustDosage, Severity::Moderate),
            ],
        }],
    },
    DrugRuleDef {
        drug: Drug::Clopidogrel,
        genes: &[GeneRuleDef {
            gene: Gene::Cyp2c19,
            phenotypes: &[
                rule(Poor, RiskLabel::Ineffective, Severity::High),
                rule(Normal, RiskLabel::Safe, Severity::None),
                rule(Intermediate, RiskLabel::AdjustDosage, Severity::Moderate),
            ],
        }],
    },
    DrugRuleDef {
        drug: Drug::Warfarin,
        genes: &[GeneRuleDef {
            gene: Gene::Cyp2c9,
            phenotypes: &[
                rule(Poor, RiskLabel::AdjustDosage, Severity::Moderate),
                rule(Normal, RiskLabel::Safe, Severity::None),
            ],
        }],
    },
    DrugRuleDef {
        drug: Drug::Simvastatin,
        genes: &[GeneRuleDef {
            gene: Gene::Slco1b1,
            phenotypes: &[rule(Decreased, RiskLabel::Toxic, Severity::High)],
        }],
    },
    DrugRuleDef {
        drug: Drug::Azathioprine,
        genes: &[GeneRuleDef {
            gene: Gene::Tpmt,
            phenotypes: &[
                rule(Poor, RiskLabel::Toxic, Severity::High),
                rule(Intermediate, RiskLabel::AdjustDosage, Severity::Moderate),
            ],
        }],
    },
    DrugRuleDef {
        drug: Drug::Fluorouracil,
        genes: &[GeneRuleDef {
            gene: Gene::Dpyd,
            phenotypes: &[
                rule(Intermediate, RiskLabel::AdjustDosage, Severity::High),
                rule(Poor, RiskLabel::Toxic, Severity::Critical),
            ],
        }],
    },
];
