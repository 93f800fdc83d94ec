use tracing::debug;

use crate::model::confidence::ConfidenceTiers;
use crate::model::{
    Drug, EvaluationFlags, Gene, PhenotypeCode, RiskLabel, RiskRule, RiskVerdict, Severity,
    VariantRecord,
};
use crate::tables::ReferenceTables;
use crate::tables::defs::{DEFAULT_DIPLOTYPE, GenePhenotypeDef};
use crate::tables::notes::NOTES_UNKNOWN_DRUG;

#[derive(Debug, Clone, Copy)]
pub struct Stage2Context<'a> {
    pub tables: &'a ReferenceTables,
    pub tiers: &'a ConfidenceTiers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhenotypeResolution {
    pub diplotype: &'static str,
    pub phenotype: PhenotypeCode,
    pub exact_match: bool,
    pub partial_assumption: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: RiskRule,
    pub rule_matched: bool,
}

const NO_RULE: RiskRule = RiskRule {
    risk: RiskLabel::Unknown,
    severity: Severity::None,
};

const SAFE_DEFAULT: RiskRule = RiskRule {
    risk: RiskLabel::Safe,
    severity: Severity::None,
};

/// Classifies every requested drug against the same variant set.
pub fn run_stage2(
    ctx: &Stage2Context<'_>,
    drugs: &[Drug],
    variants: &[VariantRecord],
) -> Vec<RiskVerdict> {
    drugs
        .iter()
        .map(|drug| classify(ctx, drug.symbol(), variants))
        .collect()
}

/// `drug` is matched case-sensitively; anything unrecognized yields the
/// Unknown verdict rather than an error.
pub fn classify(ctx: &Stage2Context<'_>, drug: &str, variants: &[VariantRecord]) -> RiskVerdict {
    let Some(drug) = Drug::from_symbol(drug) else {
        debug!("drug {drug:?} not recognized; returning Unknown verdict");
        return unknown_verdict(ctx, None);
    };
    let gene = drug.gene();
    let Some(table) = ctx.tables.phenotype_table(gene) else {
        debug!("no phenotype table for {gene}; returning Unknown verdict");
        return unknown_verdict(ctx, Some(gene));
    };

    let gene_variants = filter_gene(variants, gene);
    let resolution = resolve_phenotype(table, &gene_variants);
    let outcome = evaluate_rule(ctx.tables, drug, gene, resolution.phenotype);

    let confidence = ctx.tiers.score(
        resolution.phenotype,
        outcome.rule_matched,
        resolution.exact_match,
        resolution.partial_assumption,
    );

    let verdict = RiskVerdict {
        gene: Some(gene),
        diplotype: resolution.diplotype,
        phenotype: resolution.phenotype,
        variants: gene_variants,
        risk: outcome.rule.risk,
        severity: outcome.rule.severity,
        confidence,
        action: ctx.tables.action(outcome.rule.risk),
        notes: ctx.tables.notes(drug, resolution.phenotype),
        flags: EvaluationFlags {
            exact_match: resolution.exact_match,
            partial_assumption: resolution.partial_assumption,
            rule_matched: outcome.rule_matched,
        },
    };

    debug!(
        "{drug}/{gene}: {} {} -> {} ({}), confidence {:.2}, variants [{}]",
        verdict.diplotype,
        verdict.phenotype,
        verdict.risk,
        verdict.severity,
        verdict.confidence,
        verdict.variant_ids().join(", ")
    );
    verdict
}

pub fn filter_gene(variants: &[VariantRecord], gene: Gene) -> Vec<VariantRecord> {
    variants.iter().filter(|v| v.gene == gene).cloned().collect()
}

/// Gene default unless a variant hits the override table; the first hit in
/// input order wins and later variants are ignored.
pub fn resolve_phenotype(
    table: &GenePhenotypeDef,
    gene_variants: &[VariantRecord],
) -> PhenotypeResolution {
    let hit = gene_variants
        .iter()
        .find_map(|v| table.override_for(&v.identifier));

    match hit {
        Some(ov) => PhenotypeResolution {
            diplotype: ov.diplotype,
            phenotype: ov.phenotype,
            exact_match: true,
            partial_assumption: false,
        },
        None => PhenotypeResolution {
            diplotype: table.default_diplotype,
            phenotype: table.default_phenotype,
            exact_match: false,
            partial_assumption: !gene_variants.is_empty(),
        },
    }
}

/// Rule lookup followed by the normal-metabolizer safe default.
pub fn evaluate_rule(
    tables: &ReferenceTables,
    drug: Drug,
    gene: Gene,
    phenotype: PhenotypeCode,
) -> RuleOutcome {
    match tables.rule(drug, gene, phenotype) {
        Some(rule) => RuleOutcome {
            rule,
            rule_matched: true,
        },
        None if phenotype == PhenotypeCode::Normal => RuleOutcome {
            rule: SAFE_DEFAULT,
            rule_matched: true,
        },
        None => RuleOutcome {
            rule: NO_RULE,
            rule_matched: false,
        },
    }
}

fn unknown_verdict(ctx: &Stage2Context<'_>, gene: Option<Gene>) -> RiskVerdict {
    let flags = EvaluationFlags::default();
    RiskVerdict {
        gene,
        diplotype: DEFAULT_DIPLOTYPE,
        phenotype: PhenotypeCode::Unknown,
        variants: Vec::new(),
        risk: NO_RULE.risk,
        severity: NO_RULE.severity,
        confidence: ctx.tiers.score(
            PhenotypeCode::Unknown,
            flags.rule_matched,
            flags.exact_match,
            flags.partial_assumption,
        ),
        action: ctx.tables.action(RiskLabel::Unknown),
        notes: NOTES_UNKNOWN_DRUG,
        flags,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_classify.rs"]
mod tests;
