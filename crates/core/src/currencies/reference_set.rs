use std::collections::HashSet;

use log::{error, info};

use super::currency_errors::CurrencyLoadError;
use super::currency_source::CurrencySourceTrait;

/// Immutable set of recognized currency codes.
///
/// Built once at startup and shared read-only (behind an `Arc`) by every
/// validation call. It is never empty.
#[derive(Debug, Clone)]
pub struct CurrencyReferenceSet {
    codes: HashSet<String>,
}

impl CurrencyReferenceSet {
    /// Builds the set from raw codes, normalizing them to trimmed uppercase.
    pub fn new<I, S>(codes: I) -> std::result::Result<Self, CurrencyLoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes: HashSet<String> = codes
            .into_iter()
            .map(|code| code.as_ref().trim().to_uppercase())
            .filter(|code| !code.is_empty())
            .collect();

        if codes.is_empty() {
            return Err(CurrencyLoadError::Empty);
        }

        Ok(Self { codes })
    }

    /// Loads the set from `source`. Called once during process startup.
    pub fn load(source: &dyn CurrencySourceTrait) -> std::result::Result<Self, CurrencyLoadError> {
        let codes = source.load_currencies().map_err(|e| {
            error!("Failed to load currency reference data: {}", e);
            e
        })?;

        let reference_set = Self::new(codes).map_err(|e| {
            error!("Currency reference data is unusable: {}", e);
            e
        })?;

        info!(
            "Loaded {} recognized currency codes",
            reference_set.codes.len()
        );
        Ok(reference_set)
    }

    /// Exact membership check; callers normalize case beforehand.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticSource(Vec<&'static str>);

    impl CurrencySourceTrait for StaticSource {
        fn load_currencies(&self) -> std::result::Result<HashSet<String>, CurrencyLoadError> {
            Ok(self.0.iter().map(|c| c.to_string()).collect())
        }
    }

    struct FailingSource;

    impl CurrencySourceTrait for FailingSource {
        fn load_currencies(&self) -> std::result::Result<HashSet<String>, CurrencyLoadError> {
            Err(CurrencyLoadError::Io {
                path: "currencies.csv".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            })
        }
    }

    #[test]
    fn test_new_normalizes_codes() {
        let set = CurrencyReferenceSet::new(["usd", " EUR ", "", "  "]).unwrap();

        assert_eq!(set.len(), 2);
        assert!(set.contains("USD"));
        assert!(set.contains("EUR"));
        assert!(!set.contains("usd"));
        assert!(!set.is_empty());
    }

    #[test]
    fn test_empty_set_is_rejected() {
        let err = CurrencyReferenceSet::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, CurrencyLoadError::Empty));
        assert_eq!(err.to_string(), "Currency list is empty.");

        let err = CurrencyReferenceSet::new(["", " "]).unwrap_err();
        assert!(matches!(err, CurrencyLoadError::Empty));
    }

    #[test]
    fn test_load_from_source() {
        let set = CurrencyReferenceSet::load(&StaticSource(vec!["USD", "JPY"])).unwrap();

        let mut codes: Vec<&str> = set.iter().collect();
        codes.sort_unstable();
        assert_eq!(codes, vec!["JPY", "USD"]);
    }

    #[test]
    fn test_load_from_empty_source_fails() {
        let err = CurrencyReferenceSet::load(&StaticSource(vec![])).unwrap_err();
        assert!(matches!(err, CurrencyLoadError::Empty));
    }

    #[test]
    fn test_load_propagates_source_failure() {
        let err = CurrencyReferenceSet::load(&FailingSource).unwrap_err();
        assert!(matches!(err, CurrencyLoadError::Io { .. }));
    }
}
