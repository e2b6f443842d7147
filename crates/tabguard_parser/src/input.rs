//! Reading input files before tokenization.
//!
//! Rejects files that cannot be delimited text before their content is decoded.

use crate::{ParserError, Result};
use std::path::Path;
use tracing::debug;

/// Default maximum input size: 10 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 10 * 1024 * 1024;

/// File extensions accepted as input.
pub const INPUT_EXTENSIONS: [&str; 3] = ["csv", "tsv", "txt"];

/// Checks an input path against the extension list and size limit, then reads
/// it as UTF-8 text.
///
/// # Errors
///
/// - `ParserError::InvalidExtension` / `ParserError::UnsupportedFormat` for
///   paths that do not end in `.csv`, `.tsv` or `.txt`
/// - `ParserError::EmptyFile` for zero-byte files
/// - `ParserError::FileTooLarge` when the file exceeds `max_bytes`
/// - `ParserError::Encoding` when the bytes are not valid UTF-8
pub fn read_input(path: &Path, max_bytes: u64) -> Result<String> {
    check_extension(path)?;

    let size = std::fs::metadata(path)?.len();
    if size == 0 {
        return Err(ParserError::EmptyFile(path.to_path_buf()));
    }
    if size > max_bytes {
        return Err(ParserError::FileTooLarge {
            size,
            limit: max_bytes,
        });
    }

    let bytes = std::fs::read(path)?;
    debug!(path = %path.display(), size, "Read input file");
    String::from_utf8(bytes).map_err(|e| ParserError::Encoding(e.utf8_error().to_string()))
}

fn check_extension(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?
        .to_lowercase();

    if INPUT_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(ParserError::UnsupportedFormat(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(suffix: &str, content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_reads_csv() {
        let file = temp_file(".csv", b"a,b\n1,2\n");
        assert_eq!(
            read_input(file.path(), DEFAULT_MAX_INPUT_BYTES).unwrap(),
            "a,b\n1,2\n"
        );
    }

    #[test]
    fn test_rejects_extension() {
        let file = temp_file(".xlsx", b"a,b\n");
        assert!(matches!(
            read_input(file.path(), DEFAULT_MAX_INPUT_BYTES),
            Err(ParserError::UnsupportedFormat(ext)) if ext == "xlsx"
        ));
    }

    #[test]
    fn test_rejects_empty_file() {
        let file = temp_file(".csv", b"");
        assert!(matches!(
            read_input(file.path(), DEFAULT_MAX_INPUT_BYTES),
            Err(ParserError::EmptyFile(_))
        ));
    }

    #[test]
    fn test_rejects_large_file() {
        let file = temp_file(".txt", b"a,b\n1,2\n");
        assert!(matches!(
            read_input(file.path(), 4),
            Err(ParserError::FileTooLarge { size: 8, limit: 4 })
        ));
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        let file = temp_file(".csv", &[b'a', b',', 0xff, b'\n']);
        assert!(matches!(
            read_input(file.path(), DEFAULT_MAX_INPUT_BYTES),
            Err(ParserError::Encoding(_))
        ));
    }
}
