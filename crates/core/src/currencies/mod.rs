//! Currencies module - reference data, code format checks, and pair validation.

mod currency_errors;
mod currency_format;
mod currency_source;
mod pair_validator;
mod reference_set;


pub use currency_errors::CurrencyLoadError;
pub use currency_format::{check_format, is_well_formed};
pub use currency_source::{read_currency_codes, CsvCurrencySource, CurrencySourceTrait};
pub use pair_validator::{CurrencyPairValidator, CurrencyPairValidatorTrait};
pub use reference_set::CurrencyReferenceSet;
