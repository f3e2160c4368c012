/// Field label used in messages about the source currency
pub const FROM_CURRENCY_FIELD: &str = "fromCurrency";

/// Field label used in messages about the target currency
pub const TO_CURRENCY_FIELD: &str = "toCurrency";

/// Minimum accepted length of an externally supplied deal ID
pub const DEAL_ID_MIN_LENGTH: usize = 3;

/// Maximum accepted length of an externally supplied deal ID
pub const DEAL_ID_MAX_LENGTH: usize = 255;
