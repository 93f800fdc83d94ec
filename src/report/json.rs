use serde::Serialize;

use crate::report::{AnalysisResult, overall_risk};

#[derive(Debug, Serialize)]
struct MultiDrugView<'a> {
    patient_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<&'a str>,
    results: &'a [AnalysisResult],
    overall_risk_summary: &'static str,
}

/// One drug renders as a bare result object; several are wrapped with an
/// overall summary.
pub fn render_results_json(
    patient_id: &str,
    results: &[AnalysisResult],
) -> serde_json::Result<String> {
    if let [single] = results {
        return serde_json::to_string_pretty(single);
    }
    let view = MultiDrugView {
        patient_id,
        timestamp: results.first().and_then(|r| r.timestamp.as_deref()),
        results,
        overall_risk_summary: overall_risk(results).summary(),
    };
    serde_json::to_string_pretty(&view)
}
