mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod tables;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;

use crate::input::hash::derive_patient_id;
use crate::input::{InputError, load_vcf};
use crate::model::Drug;
use crate::model::confidence::ConfidenceTiers;
use crate::model::drug::{drug_order, supported_drug_symbols};
use crate::pipeline::stage1_extract::{Stage1Output, demo_variants, run_stage1};
use crate::pipeline::stage2_classify::{Stage2Context, run_stage2};
use crate::pipeline::stage3_report::{ReportError, ReportFormat, Stage3Input, write_reports};
use crate::tables::{ReferenceTables, TableError};

#[derive(Debug, Parser)]
#[command(
    name = "kira-pgxrisk",
    version,
    about = "Pharmacogenomic drug risk classification from VCF variant calls"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify drugs against a patient VCF (.vcf or .vcf.gz).
    Run {
        #[arg(long)]
        input: PathBuf,
        /// Comma-separated drug names, e.g. CODEINE,WARFARIN.
        #[arg(long)]
        drugs: String,
        #[arg(long)]
        patient_id: Option<String>,
        #[command(flatten)]
        report: ReportArgs,
    },
    /// Classify drugs against a built-in synthetic variant set.
    Demo {
        #[arg(long)]
        drugs: String,
        #[command(flatten)]
        report: ReportArgs,
    },
    /// List supported drugs and their governing genes.
    Drugs,
}

#[derive(Debug, Args)]
struct ReportArgs {
    #[arg(long)]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = ReportFormat::Both)]
    format: ReportFormat,
    /// Stamp each result with the UTC run time (RFC 3339).
    #[arg(long)]
    timestamp: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("unsupported drug(s): {}. Supported: {}", .unsupported.join(", "), .supported.join(", "))]
    UnsupportedDrugs {
        unsupported: Vec<String>,
        supported: Vec<&'static str>,
    },
    #[error("no drugs given")]
    NoDrugs,
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("reference tables are inconsistent: {0}")]
    Tables(#[from] TableError),
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let tables = ReferenceTables::builtin();
    tables.validate()?;
    let tiers = ConfidenceTiers::default_v1();

    match cli.command {
        Command::Run {
            input,
            drugs,
            patient_id,
            report,
        } => {
            let drugs = parse_drug_list(&drugs)?;
            let raw = load_vcf(&input)?;
            let patient_id = patient_id.unwrap_or_else(|| derive_patient_id("PATIENT", &raw));
            let stage1 = run_stage1(&raw, tables);
            analyse(tables, &tiers, &patient_id, &drugs, &stage1, &report)
        }
        Command::Demo { drugs, report } => {
            let drugs = parse_drug_list(&drugs)?;
            let symbols: Vec<&str> = drugs.iter().map(|d| d.symbol()).collect();
            let patient_id = derive_patient_id("DEMO", symbols.join(",").as_bytes());
            let variants = demo_variants();
            let stage1 = Stage1Output {
                vcf_valid: true,
                variants,
            };
            analyse(tables, &tiers, &patient_id, &drugs, &stage1, &report)
        }
        Command::Drugs => {
            for line in drug_listing() {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn analyse(
    tables: &ReferenceTables,
    tiers: &ConfidenceTiers,
    patient_id: &str,
    drugs: &[Drug],
    stage1: &Stage1Output,
    report: &ReportArgs,
) -> Result<(), CliError> {
    info!(
        "analysing {} drug(s) for {} against {} variant(s)",
        drugs.len(),
        patient_id,
        stage1.variants.len()
    );

    let ctx = Stage2Context { tables, tiers };
    let verdicts = run_stage2(&ctx, drugs, &stage1.variants);
    let drug_names: Vec<String> = drugs.iter().map(|d| d.symbol().to_string()).collect();

    let timestamp = report.timestamp.then(|| chrono::Utc::now().to_rfc3339());
    let input = Stage3Input {
        patient_id,
        timestamp: timestamp.as_deref(),
        vcf_valid: stage1.vcf_valid,
        drugs: &drug_names,
        verdicts: &verdicts,
    };
    write_reports(&input, &report.out, report.format)?;
    Ok(())
}

/// Splits a comma-separated list, dropping blanks and upper-casing names.
/// Every name must be a supported drug.
fn parse_drug_list(raw: &str) -> Result<Vec<Drug>, CliError> {
    let names: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase)
        .collect();
    if names.is_empty() {
        return Err(CliError::NoDrugs);
    }

    let unsupported: Vec<String> = names
        .iter()
        .filter(|n| Drug::from_symbol(n).is_none())
        .cloned()
        .collect();
    if !unsupported.is_empty() {
        return Err(CliError::UnsupportedDrugs {
            unsupported,
            supported: supported_drug_symbols(),
        });
    }

    Ok(names.iter().filter_map(|n| Drug::from_symbol(n)).collect())
}

fn drug_listing() -> Vec<String> {
    drug_order()
        .iter()
        .map(|d| format!("{:<13} {}", d.symbol(), d.gene().symbol()))
        .collect()
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
