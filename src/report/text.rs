use crate::report::{AnalysisResult, format_confidence, overall_risk};

pub fn render_report_text(patient_id: &str, results: &[AnalysisResult]) -> String {
    let mut out = String::new();

    out.push_str("Pharmacogenomic Risk Report\n");
    out.push_str("===========================\n\n");

    out.push_str(&format!("Patient: {}\n", patient_id));
    let parsed = results.iter().all(|r| r.quality_metrics.vcf_parsing_success);
    out.push_str(&format!(
        "VCF parsing: {}\n",
        if parsed {
            "ok"
        } else {
            "failed (classified without variant evidence)"
        }
    ));
    out.push_str(&format!("Drugs analysed: {}\n", results.len()));
    if let Some(ts) = results.first().and_then(|r| r.timestamp.as_deref()) {
        out.push_str(&format!("Generated: {}\n", ts));
    }
    out.push_str(&format!("Overall: {}\n\n", overall_risk(results).summary()));

    for (i, r) in results.iter().enumerate() {
        let profile = &r.pharmacogenomic_profile;
        let risk = &r.risk_assessment;
        out.push_str(&format!("{}. {}\n", i + 1, r.drug));
        out.push_str(&format!(
            "Gene: {}\nDiplotype: {}\nPhenotype: {}\n",
            profile.primary_gene, profile.diplotype, profile.phenotype
        ));
        out.push_str(&format!(
            "Risk: {} (severity {}, confidence {})\n",
            risk.risk_label,
            risk.severity,
            format_confidence(risk.confidence_score)
        ));
        out.push_str(&format!("Detected variants: {}\n", variant_list(r)));
        out.push_str(&format!("Action: {}\n", r.clinical_recommendation.action));
        out.push_str(&format!("Notes: {}\n", r.clinical_recommendation.notes));
        out.push_str(&format!("Summary: {}\n", r.explanation.summary));
        out.push_str(&format!("Mechanism: {}\n", r.explanation.mechanism));
        out.push_str(&format!(
            "Clinical impact: {}\n\n",
            r.explanation.clinical_impact
        ));
    }

    out
}

fn variant_list(result: &AnalysisResult) -> String {
    let variants = &result.pharmacogenomic_profile.detected_variants;
    if variants.is_empty() {
        return "No variant detected".to_string();
    }
    let parts: Vec<String> = variants
        .iter()
        .map(|v| match &v.star_allele {
            Some(star) => format!("{} ({})", v.identifier, star),
            None => v.identifier.clone(),
        })
        .collect();
    parts.join(", ")
}
