//! Defines the currencies a transaction may be recorded in.

use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// Symbol used when a currency code is missing or not recognized.
pub const FALLBACK_SYMBOL: &str = "$";

/// A currency with a known display symbol.
///
/// Transactions carry their currency as a free-form code string. Codes that
/// don't parse into one of these variants are still displayed, using
/// [`FALLBACK_SYMBOL`].
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    #[default]
    USD, // United States Dollar
    EUR, // Euro
    GBP, // Great British Pound
    NGN, // Nigerian Naira
}

impl Currency {
    /// Returns the graphical symbol for the currency (e.g., '$').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::NGN => "₦",
        }
    }

    /// Returns the ISO 4217 string code for the currency (e.g., "USD").
    /// This is handled automatically by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Looks up the display symbol for a raw currency code.
    ///
    /// Unknown codes fall back to `"$"`.
    pub fn symbol_for_code(code: &str) -> &'static str {
        Self::from_str(code.trim())
            .map(|c| c.symbol())
            .unwrap_or(FALLBACK_SYMBOL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn known_codes_map_to_their_symbols() {
        assert_eq!(Currency::symbol_for_code("USD"), "$");
        assert_eq!(Currency::symbol_for_code("EUR"), "€");
        assert_eq!(Currency::symbol_for_code("GBP"), "£");
        assert_eq!(Currency::symbol_for_code("NGN"), "₦");
    }

    #[test]
    fn unknown_code_falls_back_to_dollar() {
        assert_eq!(Currency::symbol_for_code("XYZ"), "$");
        assert_eq!(Currency::symbol_for_code(""), "$");
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!(Currency::symbol_for_code("ngn"), "₦");
        assert_eq!("gbp".parse::<Currency>(), Ok(Currency::GBP));
    }

    #[test]
    fn code_round_trips_through_parse() {
        for currency in Currency::iter() {
            assert_eq!(currency.code().parse::<Currency>(), Ok(currency));
        }
    }
}
