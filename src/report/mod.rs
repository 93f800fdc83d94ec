pub mod explain;
pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::{RiskLabel, RiskVerdict, Severity, VariantRecord};
use explain::Explanation;

#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub risk_label: RiskLabel,
    pub confidence_score: f64,
    pub severity: Severity,
}

#[derive(Debug, Clone, Serialize)]
pub struct PharmacogenomicProfile {
    pub primary_gene: &'static str,
    pub diplotype: &'static str,
    pub phenotype: &'static str,
    pub detected_variants: Vec<VariantRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClinicalRecommendation {
    pub action: &'static str,
    pub notes: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct QualityMetrics {
    pub vcf_parsing_success: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub patient_id: String,
    pub drug: String,
    /// RFC 3339 run time, present only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub risk_assessment: RiskAssessment,
    pub pharmacogenomic_profile: PharmacogenomicProfile,
    pub clinical_recommendation: ClinicalRecommendation,
    pub explanation: Explanation,
    pub quality_metrics: QualityMetrics,
}

impl AnalysisResult {
    pub fn from_verdict(
        patient_id: &str,
        drug: &str,
        verdict: &RiskVerdict,
        vcf_parsing_success: bool,
    ) -> Self {
        Self {
            patient_id: patient_id.to_string(),
            drug: drug.to_string(),
            timestamp: None,
            risk_assessment: RiskAssessment {
                risk_label: verdict.risk,
                confidence_score: verdict.confidence,
                severity: verdict.severity,
            },
            pharmacogenomic_profile: PharmacogenomicProfile {
                primary_gene: verdict.gene_symbol(),
                diplotype: verdict.diplotype,
                phenotype: verdict.phenotype_label(),
                detected_variants: verdict.variants.clone(),
            },
            clinical_recommendation: ClinicalRecommendation {
                action: verdict.action,
                notes: verdict.notes,
            },
            explanation: explain::explain(drug, verdict),
            quality_metrics: QualityMetrics {
                vcf_parsing_success,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverallRisk {
    High,
    Moderate,
    Low,
}

impl OverallRisk {
    pub fn summary(self) -> &'static str {
        match self {
            OverallRisk::High => {
                "HIGH RISK: Critical drug-gene interactions detected. Immediate clinical review required."
            }
            OverallRisk::Moderate => {
                "MODERATE RISK: Dose adjustments or drug substitutions recommended."
            }
            OverallRisk::Low => {
                "LOW RISK: No significant drug-gene interactions detected. Standard therapy appropriate."
            }
        }
    }
}

pub fn overall_risk(results: &[AnalysisResult]) -> OverallRisk {
    let assessments = || results.iter().map(|r| &r.risk_assessment);
    if assessments()
        .any(|a| a.risk_label == RiskLabel::Toxic || a.severity == Severity::Critical)
    {
        OverallRisk::High
    } else if assessments().any(|a| {
        matches!(
            a.risk_label,
            RiskLabel::AdjustDosage | RiskLabel::Ineffective
        )
    }) {
        OverallRisk::Moderate
    } else {
        OverallRisk::Low
    }
}

pub fn format_confidence(v: f64) -> String {
    format!("{:.2}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
