use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use thiserror::Error;
use tracing::info;

use crate::model::RiskVerdict;
use crate::report::json::render_results_json;
use crate::report::text::render_report_text;
use crate::report::{AnalysisResult, overall_risk};

pub const RESULTS_JSON: &str = "results.json";
pub const REPORT_TXT: &str = "report.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Json,
    Text,
    Both,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Stage3Input<'a> {
    pub patient_id: &'a str,
    pub timestamp: Option<&'a str>,
    pub vcf_valid: bool,
    pub drugs: &'a [String],
    pub verdicts: &'a [RiskVerdict],
}

pub fn build_results(input: &Stage3Input<'_>) -> Vec<AnalysisResult> {
    input
        .drugs
        .iter()
        .zip(input.verdicts)
        .map(|(drug, verdict)| {
            let mut result =
                AnalysisResult::from_verdict(input.patient_id, drug, verdict, input.vcf_valid);
            result.timestamp = input.timestamp.map(str::to_string);
            result
        })
        .collect()
}

pub fn write_reports(
    input: &Stage3Input<'_>,
    out_dir: &Path,
    format: ReportFormat,
) -> Result<Vec<AnalysisResult>, ReportError> {
    fs::create_dir_all(out_dir)?;
    let results = build_results(input);

    if matches!(format, ReportFormat::Json | ReportFormat::Both) {
        let json = render_results_json(input.patient_id, &results)?;
        write_text(&out_dir.join(RESULTS_JSON), &json)?;
    }
    if matches!(format, ReportFormat::Text | ReportFormat::Both) {
        let report = render_report_text(input.patient_id, &results);
        write_text(&out_dir.join(REPORT_TXT), &report)?;
    }

    info!(
        "wrote {} result(s) for {} to {}: {}",
        results.len(),
        input.patient_id,
        out_dir.display(),
        overall_risk(&results).summary()
    );
    Ok(results)
}

fn write_text(path: &Path, text: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
