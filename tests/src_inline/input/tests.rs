use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

use super::hash::{derive_patient_id, hash_bytes};
use super::*;

const SMALL_VCF: &str = "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n22\t42526694\trs3892097\tC\tT\t.\tPASS\tGENE=CYP2D6\n";

#[test]
fn test_detect_compression() {
    assert_eq!(
        detect_compression(Path::new("/tmp/a.vcf")),
        Some(VcfCompression::Plain)
    );
    assert_eq!(
        detect_compression(Path::new("/tmp/A.VCF.GZ")),
        Some(VcfCompression::Gzip)
    );
    assert_eq!(detect_compression(Path::new("/tmp/a.txt")), None);
    assert_eq!(detect_compression(Path::new("/tmp/a.vcf.bgz")), None);
}

#[test]
fn test_load_plain_vcf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.vcf");
    std::fs::write(&path, SMALL_VCF).unwrap();
    let bytes = load_vcf(&path).unwrap();
    assert_eq!(bytes, SMALL_VCF.as_bytes());
}

#[test]
fn test_load_gzip_vcf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.vcf.gz");
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(SMALL_VCF.as_bytes()).unwrap();
    std::fs::write(&path, enc.finish().unwrap()).unwrap();
    let bytes = load_vcf(&path).unwrap();
    assert_eq!(bytes, SMALL_VCF.as_bytes());
}

#[test]
fn test_load_rejects_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.txt");
    std::fs::write(&path, SMALL_VCF).unwrap();
    assert!(matches!(
        load_vcf(&path),
        Err(InputError::UnsupportedExtension(_))
    ));
}

#[test]
fn test_load_rejects_oversized_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.vcf");
    let body = vec![b'#'; MAX_INPUT_BYTES as usize + 1];
    std::fs::write(&path, body).unwrap();
    assert!(matches!(
        load_vcf(&path),
        Err(InputError::TooLarge { limit, .. }) if limit == MAX_INPUT_BYTES
    ));
}

#[test]
fn test_load_rejects_corrupt_gzip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.vcf.gz");
    std::fs::write(&path, b"not gzip at all").unwrap();
    assert!(matches!(
        load_vcf(&path),
        Err(InputError::Decompress { .. })
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.vcf");
    assert!(matches!(load_vcf(&path), Err(InputError::Io(_))));
}

#[test]
fn test_fnv_known_values() {
    assert_eq!(hash_bytes(b""), 0xcbf29ce484222325);
    assert_eq!(hash_bytes(b"a"), 0xaf63dc4c8601ec8c);
}

#[test]
fn test_patient_id_is_deterministic() {
    let a = derive_patient_id("PATIENT", SMALL_VCF.as_bytes());
    let b = derive_patient_id("PATIENT", SMALL_VCF.as_bytes());
    assert_eq!(a, b);
    assert!(a.starts_with("PATIENT_"));
    assert_eq!(a.len(), "PATIENT_".len() + 8);
    assert!(a["PATIENT_".len()..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    assert_ne!(a, derive_patient_id("PATIENT", b"other"));
}
