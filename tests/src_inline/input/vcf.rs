use pretty_assertions::assert_eq;

use super::*;
use crate::tables::ReferenceTables;

const HEADER: &str = "##fileformat=VCFv4.2\n##source=test\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n";

fn vcf(lines: &[&str]) -> Vec<u8> {
    let mut text = HEADER.to_string();
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text.into_bytes()
}

fn run(raw: &[u8]) -> Extraction {
    extract_detailed(raw, ReferenceTables::builtin())
}

#[test]
fn test_explicit_gene_annotation() {
    let raw = vcf(&["22\t42526694\trs3892097\tC\tT\t50\tPASS\tGENE=CYP2D6;STAR=*4;RSID=rs3892097"]);
    let out = run(&raw);
    assert_eq!(out.records.len(), 1);
    let rec = &out.records[0];
    assert_eq!(rec.chromosome, "22");
    assert_eq!(rec.position, "42526694");
    assert_eq!(rec.identifier, "rs3892097");
    assert_eq!(rec.reference, "C");
    assert_eq!(rec.alternate, "T");
    assert_eq!(rec.gene, Gene::Cyp2d6);
    assert_eq!(rec.star_allele.as_deref(), Some("*4"));
    assert_eq!(rec.annotation("GENE"), Some("CYP2D6"));
}

#[test]
fn test_header_is_consumed_not_emitted() {
    let out = run(&vcf(&[]));
    assert!(out.records.is_empty());
    assert_eq!(out.stats.data_lines, 0);
    assert_eq!(
        out.header,
        vec!["CHROM", "POS", "ID", "REF", "ALT", "QUAL", "FILTER", "INFO"]
    );
}

#[test]
fn test_gene_inferred_from_identifier() {
    let raw = vcf(&["10\t96741053\trs1057910\tA\tC\t.\tPASS\tDP=30"]);
    let out = run(&raw);
    assert_eq!(out.records.len(), 1);
    assert_eq!(out.records[0].gene, Gene::Cyp2c9);
    assert_eq!(out.records[0].star_allele, None);
}

#[test]
fn test_rsid_annotation_preferred_over_id_column() {
    let raw = vcf(&["12\t21331549\tvar1\tT\tC\t.\tPASS\tRSID=rs4149056"]);
    let out = run(&raw);
    assert_eq!(out.records.len(), 1);
    assert_eq!(out.records[0].identifier, "rs4149056");
    assert_eq!(out.records[0].gene, Gene::Slco1b1);
}

#[test]
fn test_missing_id_is_synthesized() {
    let raw = vcf(&["22\t100\t.\tA\tG\t.\tPASS\tGENE=CYP2D6"]);
    let out = run(&raw);
    assert_eq!(out.records.len(), 1);
    assert_eq!(out.records[0].identifier, "chr22:100");
}

#[test]
fn test_synthesized_id_does_not_resolve_gene() {
    let raw = vcf(&["22\t42526694\t.\tC\tT\t.\tPASS\tDP=10"]);
    let out = run(&raw);
    assert!(out.records.is_empty());
    assert_eq!(out.stats.untargeted, 1);
}

#[test]
fn test_unrecognized_records_discarded() {
    let raw = vcf(&[
        "1\t100\trs999\tA\tG\t.\tPASS\tDP=10",
        "1\t200\trs3892097\tA\tG\t.\tPASS\tGENE=BRCA1",
        "22\t42526694\trs3892097\tC\tT\t.\tPASS\tDP=10",
    ]);
    let out = run(&raw);
    assert_eq!(out.records.len(), 1);
    assert_eq!(out.records[0].position, "42526694");
    assert_eq!(
        out.stats,
        ExtractStats {
            data_lines: 3,
            short_lines: 0,
            untargeted: 2,
            retained: 1,
        }
    );
}

#[test]
fn test_short_lines_skipped() {
    let raw = vcf(&[
        "22\t42526694\trs3892097\tC\tT\t.\tPASS",
        "garbage",
        "10\t96521657\trs4244285\tG\tA\t.\tPASS\tGENE=CYP2C19",
    ]);
    let out = run(&raw);
    assert_eq!(out.records.len(), 1);
    assert_eq!(out.records[0].gene, Gene::Cyp2c19);
    assert_eq!(out.stats.short_lines, 2);
}

#[test]
fn test_order_preserved() {
    let raw = vcf(&[
        "10\t96521657\trs4244285\tG\tA\t.\tPASS\t.",
        "22\t42526694\trs3892097\tC\tT\t.\tPASS\t.",
        "6\t18130918\trs1142345\tT\tC\t.\tPASS\t.",
    ]);
    let ids: Vec<String> = run(&raw)
        .records
        .into_iter()
        .map(|r| r.identifier)
        .collect();
    assert_eq!(ids, vec!["rs4244285", "rs3892097", "rs1142345"]);
}

#[test]
fn test_annotation_flags_and_values() {
    let ann = parse_annotations("GENE=TPMT;SOMATIC;AF=0.5;;EXPR=a=b");
    assert_eq!(ann.get("GENE"), Some(&AnnotationValue::Text("TPMT".to_string())));
    assert_eq!(ann.get("SOMATIC"), Some(&AnnotationValue::Flag));
    assert_eq!(ann.get("EXPR"), Some(&AnnotationValue::Text("a=b".to_string())));
    assert_eq!(ann.len(), 4);
}

#[test]
fn test_flag_gene_drops_record() {
    let raw = vcf(&[
        "1\t97450058\trs3918290\tC\tT\t.\tPASS\tGENE",
        "22\t42526694\trs3892097\tC\tT\t.\tPASS\tDP=10;GENE;AF=0.5",
    ]);
    let out = run(&raw);
    assert!(out.records.is_empty());
    assert_eq!(out.stats.untargeted, 2);
}

#[test]
fn test_empty_gene_falls_back_to_marker_table() {
    let raw = vcf(&["1\t97450058\trs3918290\tC\tT\t.\tPASS\tGENE="]);
    let out = run(&raw);
    assert_eq!(out.records.len(), 1);
    assert_eq!(out.records[0].gene, Gene::Dpyd);
}

#[test]
fn test_invalid_utf8_is_replaced() {
    let mut raw = vcf(&[]);
    raw.extend_from_slice(b"22\t42526694\trs3892097\tC\tT\t.\tPASS\tNOTE=\xff\xfe;GENE=CYP2D6\n");
    let out = run(&raw);
    assert_eq!(out.records.len(), 1);
    assert_eq!(out.records[0].annotation("NOTE"), Some("\u{FFFD}\u{FFFD}"));
}

#[test]
fn test_crlf_line_endings() {
    let raw = b"##fileformat=VCFv4.2\r\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\r\n22\t1\trs16947\tG\tA\t.\tPASS\tGENE=CYP2D6\r\n";
    let out = run(raw);
    assert_eq!(out.records.len(), 1);
    assert_eq!(out.records[0].annotation("GENE"), Some("CYP2D6"));
}

#[test]
fn test_bare_cr_line_endings() {
    let raw = b"##fileformat=VCFv4.2\r#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\r22\t1\trs3892097\tC\tT\t.\tPASS\tGENE=CYP2D6\r";
    assert!(is_valid(raw));
    let out = run(raw);
    assert_eq!(out.header.len(), 8);
    assert_eq!(out.stats.data_lines, 1);
    assert_eq!(out.records.len(), 1);
    assert_eq!(out.records[0].identifier, "rs3892097");
    assert_eq!(out.records[0].annotation("GENE"), Some("CYP2D6"));
}

#[test]
fn test_mixed_line_endings() {
    let raw = b"##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\r\n22\t1\trs16947\tG\tA\t.\tPASS\t.\r12\t2\trs4149056\tT\tC\t.\tPASS\t.\n";
    let genes: Vec<Gene> = run(raw).records.iter().map(|r| r.gene).collect();
    assert_eq!(genes, vec![Gene::Cyp2d6, Gene::Slco1b1]);
}

#[test]
fn test_garbage_yields_empty() {
    assert!(extract(b"\x00\x01\x02", ReferenceTables::builtin()).is_empty());
    assert!(extract(b"", ReferenceTables::builtin()).is_empty());
}

#[test]
fn test_extract_is_deterministic() {
    let raw = vcf(&[
        "22\t42526694\trs3892097\tC\tT\t.\tPASS\tGENE=CYP2D6;STAR=*4",
        "12\t21331549\trs4149056\tT\tC\t.\tPASS\t.",
    ]);
    let tables = ReferenceTables::builtin();
    assert_eq!(extract(&raw, tables), extract(&raw, tables));
}

#[test]
fn test_is_valid() {
    assert!(is_valid(&vcf(&[])));
    assert!(is_valid(b"\n\n#CHROM\tPOS\n"));
    assert!(!is_valid(b""));
    assert!(!is_valid(b"   \n\t\n"));
    assert!(!is_valid(b"22\t1\trs1\tA\tG\t.\tPASS\t.\n"));
}

#[test]
fn test_is_valid_window_of_twenty_lines() {
    let mut text = String::new();
    for i in 0..20 {
        text.push_str(&format!("line{}\n", i));
    }
    text.push_str("##late header\n");
    assert!(!is_valid(text.as_bytes()));

    let mut text = String::new();
    for i in 0..19 {
        text.push_str(&format!("line{}\n\n", i));
    }
    text.push_str("#CHROM\n");
    assert!(is_valid(text.as_bytes()));
}
