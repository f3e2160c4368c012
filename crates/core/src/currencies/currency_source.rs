use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use log::{debug, warn};

use super::currency_errors::CurrencyLoadError;

/// Supplies the raw set of recognized currency codes.
pub trait CurrencySourceTrait: Send + Sync {
    fn load_currencies(&self) -> std::result::Result<HashSet<String>, CurrencyLoadError>;
}

/// Currency source backed by a delimited file with a header row.
///
/// The first column of every data row holds a currency code; other columns
/// (names, minor units, ...) are ignored.
#[derive(Debug, Clone)]
pub struct CsvCurrencySource {
    path: PathBuf,
}

impl CsvCurrencySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CurrencySourceTrait for CsvCurrencySource {
    fn load_currencies(&self) -> std::result::Result<HashSet<String>, CurrencyLoadError> {
        let file = File::open(&self.path).map_err(|source| CurrencyLoadError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        read_currency_codes(file)
    }
}

/// Reads currency codes from delimited text.
///
/// The header row is skipped. Codes are trimmed and uppercased, blank codes
/// are dropped and rows that cannot be decoded are skipped. Only I/O failures
/// abort the read.
pub fn read_currency_codes<R: Read>(
    reader: R,
) -> std::result::Result<HashSet<String>, CurrencyLoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut codes = HashSet::new();
    for record in csv_reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                warn!("Skipping unreadable currency row: {}", e);
                continue;
            }
        };

        let code = record.get(0).unwrap_or_default().trim().to_uppercase();
        if code.is_empty() {
            debug!("Skipping blank currency code at {:?}", record.position());
            continue;
        }
        codes.insert(code);
    }

    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_reads_first_column_and_skips_header() {
        let data = "code,name\nUSD,US Dollar\nEUR,Euro\nJPY,Yen\n";
        let codes = read_currency_codes(data.as_bytes()).unwrap();

        assert_eq!(codes.len(), 3);
        assert!(codes.contains("USD"));
        assert!(codes.contains("EUR"));
        assert!(codes.contains("JPY"));
        assert!(!codes.contains("CODE"));
    }

    #[test]
    fn test_trims_uppercases_and_drops_blank_codes() {
        let data = "code\n  gbp  \n,Missing code\n\nchf\n   ,\n";
        let codes = read_currency_codes(data.as_bytes()).unwrap();

        assert_eq!(codes.len(), 2);
        assert!(codes.contains("GBP"));
        assert!(codes.contains("CHF"));
    }

    #[test]
    fn test_header_only_yields_no_codes() {
        let codes = read_currency_codes("code,name\n".as_bytes()).unwrap();
        assert!(codes.is_empty());
    }

    #[test]
    fn test_skips_undecodable_rows() {
        let mut data = b"code\nUSD\n".to_vec();
        data.extend_from_slice(&[0xff, 0xfe, b'\n']);
        data.extend_from_slice(b"EUR\n");

        let codes = read_currency_codes(data.as_slice()).unwrap();
        assert!(codes.contains("USD"));
        assert!(codes.contains("EUR"));
        assert_eq!(codes.len(), 2);
    }

    #[test]
    fn test_file_source() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "code,name").unwrap();
        writeln!(file, "AUD,Australian Dollar").unwrap();
        writeln!(file, "CAD,Canadian Dollar").unwrap();

        let source = CsvCurrencySource::new(file.path());
        assert_eq!(source.path(), file.path());
        let codes = source.load_currencies().unwrap();

        assert_eq!(codes.len(), 2);
        assert!(codes.contains("AUD"));
        assert!(codes.contains("CAD"));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvCurrencySource::new(dir.path().join("absent.csv"));

        let err = source.load_currencies().unwrap_err();
        assert!(matches!(err, CurrencyLoadError::Io { .. }));
        assert!(err.to_string().contains("absent.csv"));
    }
}
