use tracing::{debug, info};

use crate::model::variant::{AnnotationValue, Annotations, synthesize_identifier};
use crate::model::{Gene, VariantRecord};
use crate::tables::ReferenceTables;

pub const META_PREFIX: &str = "##";
pub const HEADER_PREFIX: &str = "#CHROM";
pub const COMMENT_PREFIX: &str = "#";
pub const MIN_FIELDS: usize = 8;
pub const VALIDITY_WINDOW: usize = 20;

const MISSING_ID: &str = ".";
const INFO_GENE: &str = "GENE";
const INFO_RSID: &str = "RSID";
const INFO_STAR: &str = "STAR";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub data_lines: usize,
    pub short_lines: usize,
    pub untargeted: usize,
    pub retained: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub header: Vec<String>,
    pub records: Vec<VariantRecord>,
    pub stats: ExtractStats,
}

enum LineOutcome {
    Record(VariantRecord),
    Short,
    Untargeted,
}

/// Pulls records for the six target genes out of VCF text.
///
/// Undecodable bytes become U+FFFD and malformed lines are skipped, so any
/// buffer yields a (possibly empty) list.
pub fn extract(raw: &[u8], tables: &ReferenceTables) -> Vec<VariantRecord> {
    extract_detailed(raw, tables).records
}

pub fn extract_detailed(raw: &[u8], tables: &ReferenceTables) -> Extraction {
    let text = String::from_utf8_lossy(raw);
    let mut out = Extraction::default();

    for (idx, line) in split_lines(&text).enumerate() {
        if line.starts_with(META_PREFIX) {
            continue;
        }
        if line.starts_with(HEADER_PREFIX) {
            out.header = line
                .trim_start_matches('#')
                .split('\t')
                .map(str::to_string)
                .collect();
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        out.stats.data_lines += 1;
        match parse_line(line, tables) {
            LineOutcome::Record(record) => {
                out.stats.retained += 1;
                out.records.push(record);
            }
            LineOutcome::Short => {
                out.stats.short_lines += 1;
                debug!("line {} has <{} columns; skipping", idx + 1, MIN_FIELDS);
            }
            LineOutcome::Untargeted => {
                out.stats.untargeted += 1;
            }
        }
    }

    if out.header.is_empty() {
        debug!("no {} header line; columns assumed positional", HEADER_PREFIX);
    }
    info!(
        "extracted {} pharmacogenomic variants from {} data lines ({} short, {} outside target genes)",
        out.stats.retained, out.stats.data_lines, out.stats.short_lines, out.stats.untargeted
    );
    out
}

/// Shallow sanity check: some non-blank content, with a `#` line among the
/// first twenty non-blank lines.
pub fn is_valid(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let mut seen_any = false;
    for line in split_lines(&text)
        .filter(|l| !l.trim().is_empty())
        .take(VALIDITY_WINDOW)
    {
        seen_any = true;
        if line.starts_with(COMMENT_PREFIX) {
            return true;
        }
    }
    if seen_any {
        debug!("no header line within the first {} lines", VALIDITY_WINDOW);
    }
    false
}

/// Splits on `\n`, `\r\n` and a bare `\r`.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let text = text.strip_suffix('\r').unwrap_or(text);
    text.split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

fn parse_line(line: &str, tables: &ReferenceTables) -> LineOutcome {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return LineOutcome::Short;
    }

    let chromosome = fields[0];
    let position = fields[1];
    let raw_id = if fields[2] == MISSING_ID {
        synthesize_identifier(chromosome, position)
    } else {
        fields[2].to_string()
    };
    let annotations = parse_annotations(fields[7]);

    let identifier = annotations
        .get(INFO_RSID)
        .and_then(AnnotationValue::as_text)
        .map(str::to_string)
        .unwrap_or(raw_id);

    let Some(gene) = resolve_gene(&annotations, &identifier, tables) else {
        return LineOutcome::Untargeted;
    };

    let star_allele = annotations
        .get(INFO_STAR)
        .and_then(AnnotationValue::as_text)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    LineOutcome::Record(VariantRecord {
        chromosome: chromosome.to_string(),
        position: position.to_string(),
        identifier,
        reference: fields[3].to_string(),
        alternate: fields[4].to_string(),
        gene,
        star_allele,
        annotations,
    })
}

// A non-empty GENE entry is authoritative even when it names a gene outside
// the target set. A bare GENE flag names no gene, so the record is dropped.
// The marker table is only consulted when GENE is absent or empty.
fn resolve_gene(
    annotations: &Annotations,
    identifier: &str,
    tables: &ReferenceTables,
) -> Option<Gene> {
    match annotations.get(INFO_GENE) {
        Some(AnnotationValue::Flag) => None,
        Some(AnnotationValue::Text(symbol)) if !symbol.is_empty() => Gene::from_symbol(symbol),
        _ => tables.gene_for_marker(identifier),
    }
}

pub fn parse_annotations(block: &str) -> Annotations {
    let mut annotations = Annotations::new();
    for entry in block.split(';') {
        if entry.is_empty() {
            continue;
        }
        match entry.split_once('=') {
            Some((key, value)) => {
                annotations.insert(key.to_string(), AnnotationValue::Text(value.to_string()));
            }
            None => {
                annotations.insert(entry.to_string(), AnnotationValue::Flag);
            }
        }
    }
    annotations
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/vcf.rs"]
mod tests;
