use tracing::warn;

use crate::input::vcf::{extract, is_valid};
use crate::model::VariantRecord;
use crate::tables::ReferenceTables;

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub vcf_valid: bool,
    pub variants: Vec<VariantRecord>,
}

/// Buffers that fail the validity check are classified with no variant
/// evidence rather than rejected.
pub fn run_stage1(raw: &[u8], tables: &ReferenceTables) -> Stage1Output {
    if !is_valid(raw) {
        warn!("input does not look like VCF; classifying without variant evidence");
        return Stage1Output {
            vcf_valid: false,
            variants: Vec::new(),
        };
    }

    let variants = extract(raw, tables);
    if variants.is_empty() {
        warn!("no variants in CYP2D6/CYP2C19/CYP2C9/SLCO1B1/TPMT/DPYD were found");
    }
    Stage1Output {
        vcf_valid: true,
        variants,
    }
}

/// Fixed variant set used by `demo`.
pub fn demo_variants() -> Vec<VariantRecord> {
    use crate::model::Gene;
    use crate::model::variant::AnnotationValue;

    let specs = [
        ("22", "42526694", "rs3892097", "C", "T", Gene::Cyp2d6, "*4"),
        ("10", "96521657", "rs4244285", "G", "A", Gene::Cyp2c19, "*2"),
        ("10", "96741053", "rs1057910", "A", "C", Gene::Cyp2c9, "*3"),
        ("12", "21331549", "rs4149056", "T", "C", Gene::Slco1b1, "*5"),
    ];
    specs
        .into_iter()
        .map(|(chrom, pos, id, r, a, gene, star)| {
            let mut rec = VariantRecord::new(chrom, pos, id, r, a, gene).with_star_allele(star);
            rec.annotations.insert(
                "GENE".to_string(),
                AnnotationValue::Text(gene.symbol().to_string()),
            );
            rec.annotations
                .insert("RSID".to_string(), AnnotationValue::Text(id.to_string()));
            rec
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_extract.rs"]
mod tests;
