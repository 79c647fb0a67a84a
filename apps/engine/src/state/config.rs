//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`QUICKORDER_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.
//! If hot-reloading is added later, we'd wrap in `RwLock`.

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (displayed in the app header).
    pub store_name: String,

    /// Currency code (ISO 4217).
    pub currency_code: String,

    /// Currency symbol (for display).
    pub currency_symbol: String,

    /// Number of decimal places for currency.
    pub currency_decimals: u8,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Quick Order"
    /// - Currency: IDR (Rp), zero decimals — catalog prices are stored
    ///   in the smallest unit, which for rupiah is the rupiah itself
    fn default() -> Self {
        ConfigState {
            store_name: "Quick Order".to_string(),
            currency_code: "IDR".to_string(),
            currency_symbol: "Rp".to_string(),
            currency_decimals: 0,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `QUICKORDER_STORE_NAME`: Override store name
    /// - `QUICKORDER_CURRENCY_CODE`: Override currency code
    /// - `QUICKORDER_CURRENCY_SYMBOL`: Override currency symbol
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(store_name) = std::env::var("QUICKORDER_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(code) = std::env::var("QUICKORDER_CURRENCY_CODE") {
            config.currency_code = code;
        }

        if let Ok(symbol) = std::env::var("QUICKORDER_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Formats a smallest-unit amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(15000), "Rp15000");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_zero_decimals() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(15000), "Rp15000");
        assert_eq!(config.format_currency(0), "Rp0");
        assert_eq!(config.format_currency(-500), "-Rp500");
    }

    #[test]
    fn test_format_currency_two_decimals() {
        let config = ConfigState {
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            ..ConfigState::default()
        };
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(100), "$1.00");
        assert_eq!(config.format_currency(-550), "-$5.50");
    }
}
