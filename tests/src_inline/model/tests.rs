use rstest::rstest;

use super::confidence::ConfidenceTiers;
use super::drug::{drug_order, supported_drug_symbols};
use super::gene::gene_order;
use super::variant::{AnnotationValue, synthesize_identifier};
use super::*;

#[rstest]
#[case(PhenotypeCode::Poor, false, true, false, 0.30)]
#[case(PhenotypeCode::Unknown, false, true, true, 0.30)]
#[case(PhenotypeCode::Unknown, true, true, true, 0.50)]
#[case(PhenotypeCode::Intermediate, true, true, true, 0.75)]
#[case(PhenotypeCode::Normal, true, false, true, 0.75)]
#[case(PhenotypeCode::Intermediate, true, true, false, 0.95)]
#[case(PhenotypeCode::Normal, true, false, false, 0.85)]
#[case(PhenotypeCode::Decreased, true, true, false, 0.95)]
fn test_confidence_tier_priority(
    #[case] phenotype: PhenotypeCode,
    #[case] rule_matched: bool,
    #[case] exact_match: bool,
    #[case] partial_assumption: bool,
    #[case] expected: f64,
) {
    let tiers = ConfidenceTiers::default_v1();
    assert_eq!(
        tiers.score(phenotype, rule_matched, exact_match, partial_assumption),
        expected
    );
}

#[test]
fn test_drug_symbols_are_case_sensitive() {
    assert_eq!(Drug::from_symbol("CODEINE"), Some(Drug::Codeine));
    assert_eq!(Drug::from_symbol("Codeine"), None);
    assert_eq!(Drug::from_symbol("ASPIRIN"), None);
    assert_eq!(
        supported_drug_symbols(),
        vec![
            "CODEINE",
            "CLOPIDOGREL",
            "WARFARIN",
            "SIMVASTATIN",
            "AZATHIOPRINE",
            "FLUOROURACIL"
        ]
    );
}

#[test]
fn test_each_drug_maps_to_distinct_gene() {
    let genes: Vec<Gene> = drug_order().iter().map(|d| d.gene()).collect();
    assert_eq!(genes, gene_order().to_vec());
}

#[test]
fn test_gene_symbols_round_trip() {
    for &gene in gene_order() {
        assert_eq!(Gene::from_symbol(gene.symbol()), Some(gene));
    }
    assert_eq!(Gene::from_symbol("cyp2d6"), None);
}

#[test]
fn test_phenotype_labels() {
    assert_eq!(PhenotypeCode::Poor.label(), "Poor Metabolizer");
    assert_eq!(PhenotypeCode::UltraRapid.label(), "Ultra-Rapid Metabolizer");
    assert_eq!(PhenotypeCode::Decreased.label(), "Decreased");
    assert_eq!(PhenotypeCode::Unknown.label(), "Unknown");
    assert_eq!(PhenotypeCode::UltraRapid.code(), "URM");
}

#[test]
fn test_serialized_names() {
    assert_eq!(
        serde_json::to_string(&RiskLabel::AdjustDosage).unwrap(),
        "\"Adjust Dosage\""
    );
    assert_eq!(
        serde_json::to_string(&Severity::Critical).unwrap(),
        "\"critical\""
    );
    assert_eq!(serde_json::to_string(&Gene::Cyp2c19).unwrap(), "\"CYP2C19\"");
    assert_eq!(serde_json::to_string(&Drug::Fluorouracil).unwrap(), "\"FLUOROURACIL\"");
}

#[test]
fn test_variant_record_serialization() {
    let mut rec = VariantRecord::new("22", "42526694", "rs3892097", "C", "T", Gene::Cyp2d6)
        .with_star_allele("*4");
    rec.annotations
        .insert("GENE".to_string(), AnnotationValue::Text("CYP2D6".to_string()));
    rec.annotations.insert("PASSFLAG".to_string(), AnnotationValue::Flag);
    let json = serde_json::to_value(&rec).unwrap();
    assert_eq!(json["chrom"], "22");
    assert_eq!(json["pos"], "42526694");
    assert_eq!(json["id"], "rs3892097");
    assert_eq!(json["gene"], "CYP2D6");
    assert_eq!(json["star_allele"], "*4");
    assert_eq!(json["info"]["GENE"], "CYP2D6");
    assert_eq!(json["info"]["PASSFLAG"], true);
}

#[test]
fn test_synthesize_identifier() {
    assert_eq!(synthesize_identifier("22", "100"), "chr22:100");
    assert_eq!(synthesize_identifier("chrX", "7"), "chrchrX:7");
}
