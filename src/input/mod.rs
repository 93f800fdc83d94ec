use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use thiserror::Error;
use tracing::info;

pub mod hash;
pub mod vcf;

pub const MAX_INPUT_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported input {}: only .vcf and .vcf.gz files are accepted", .0.display())]
    UnsupportedExtension(PathBuf),
    #[error("input {} exceeds the {limit} byte limit", .path.display())]
    TooLarge { path: PathBuf, limit: u64 },
    #[error("failed to decompress {}: {source}", .path.display())]
    Decompress {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcfCompression {
    Plain,
    Gzip,
}

pub fn detect_compression(path: &Path) -> Option<VcfCompression> {
    let name = path.file_name()?.to_str()?.to_ascii_lowercase();
    if name.ends_with(".vcf.gz") {
        Some(VcfCompression::Gzip)
    } else if name.ends_with(".vcf") {
        Some(VcfCompression::Plain)
    } else {
        None
    }
}

/// Reads a VCF into memory, enforcing the extension and size limits.
///
/// The limit applies to the file on disk and, for gzip input, to the
/// decompressed text as well.
pub fn load_vcf(path: &Path) -> Result<Vec<u8>, InputError> {
    let compression = detect_compression(path)
        .ok_or_else(|| InputError::UnsupportedExtension(path.to_path_buf()))?;

    let size = std::fs::metadata(path)?.len();
    if size > MAX_INPUT_BYTES {
        return Err(InputError::TooLarge {
            path: path.to_path_buf(),
            limit: MAX_INPUT_BYTES,
        });
    }

    let file = File::open(path)?;
    let mut buf = Vec::with_capacity(size as usize);
    match compression {
        VcfCompression::Plain => {
            BufReader::new(file).read_to_end(&mut buf)?;
        }
        VcfCompression::Gzip => {
            MultiGzDecoder::new(BufReader::new(file))
                .take(MAX_INPUT_BYTES + 1)
                .read_to_end(&mut buf)
                .map_err(|source| InputError::Decompress {
                    path: path.to_path_buf(),
                    source,
                })?;
            if buf.len() as u64 > MAX_INPUT_BYTES {
                return Err(InputError::TooLarge {
                    path: path.to_path_buf(),
                    limit: MAX_INPUT_BYTES,
                });
            }
        }
    }

    info!(
        "loaded input {} ({} bytes, {:?})",
        path.display(),
        buf.len(),
        compression
    );
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
