use thiserror::Error;

/// Errors raised while building the currency reference set.
///
/// All of them are fatal: the process must not start serving requests
/// without a usable reference set.
#[derive(Error, Debug)]
pub enum CurrencyLoadError {
    #[error("Failed to read currency source '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read currency rows: {0}")]
    Read(#[from] csv::Error),

    #[error("Currency list is empty.")]
    Empty,
}
