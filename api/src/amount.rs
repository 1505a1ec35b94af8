//! Provides a safe, self-contained type for representing monetary amounts.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::ops::AddAssign;
use std::str::FromStr;

use num_traits::Zero;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use thiserror::Error;

/// Number of decimal places every amount is stored and displayed with.
pub const DECIMALS: u32 = 2;

const SCALE: i64 = 10_i64.pow(DECIMALS);

/// An error that can occur when parsing a string into an `Amount`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseAmountError {
    /// The string is not in a valid numeric format (e.g., "abc", "1.2.3").
    #[error("invalid amount format")]
    InvalidFormat,
    /// The value does not fit into the amount's range.
    #[error("amount out of range")]
    OutOfRange,
}

/// A decimal currency amount such as an item price or a service fee.
///
/// Internally, the amount is stored as a signed 64-bit integer in hundredths
/// (e.g., cents) to prevent floating-point inaccuracies when summing. The
/// `Display` implementation always renders two decimal places ("12.50").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    /// Creates a new `Amount` directly from hundredths.
    ///
    /// # Example
    /// ```
    /// let amount = api::amount::Amount::new_from_minor(1250);
    /// assert_eq!(amount.to_string(), "12.50");
    /// ```
    pub const fn new_from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Creates a new `Amount` from a floating-point value, as returned by JSON
    /// number columns.
    ///
    /// The float goes through its shortest decimal text first, so `1.005`
    /// rounds exactly like the string `"1.005"` rather than like the binary
    /// value `1.00499999…`.
    pub fn new_from_float(value: f64) -> Result<Self, ParseAmountError> {
        if !value.is_finite() {
            return Err(ParseAmountError::InvalidFormat);
        }
        value.to_string().parse()
    }
}

/// Parses decimal strings such as "12.5", "-3", ".75" or "1.005".
///
/// Digits beyond the second decimal place are rounded half away from zero.
impl FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (is_negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let mut parts = s.split('.');
        let major_str = parts.next().unwrap_or("");
        let minor_str = parts.next().unwrap_or("");

        if parts.next().is_some() || (major_str.is_empty() && minor_str.is_empty()) {
            return Err(ParseAmountError::InvalidFormat);
        }
        if !major_str.chars().chain(minor_str.chars()).all(|c| c.is_ascii_digit()) {
            return Err(ParseAmountError::InvalidFormat);
        }

        let major_units = if major_str.is_empty() {
            0
        } else {
            major_str
                .parse::<i64>()
                .map_err(|_| ParseAmountError::OutOfRange)?
        };

        let kept: String = minor_str.chars().take(DECIMALS as usize).collect();
        let mut minor_units = if kept.is_empty() {
            0
        } else {
            kept.parse::<i64>()
                .map_err(|_| ParseAmountError::InvalidFormat)?
                * 10_i64.pow(DECIMALS - kept.len() as u32)
        };
        if minor_str[kept.len()..].starts_with(['5', '6', '7', '8', '9']) {
            minor_units += 1;
        }

        let total = major_units
            .checked_mul(SCALE)
            .and_then(|m| m.checked_add(minor_units))
            .ok_or(ParseAmountError::OutOfRange)?;

        Ok(Self(if is_negative { -total } else { total }))
    }
}

/// Formats the amount as a plain numeric string with two decimals ("25.34").
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = SCALE as u64;
        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            abs / scale,
            abs % scale,
            width = DECIMALS as usize
        )
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Zero for Amount {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Serialized as a decimal string so no precision is lost in transit.
impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The store may hand back `numeric` columns as JSON numbers or as strings.
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Integer(i64),
            Float(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Integer(i) => i
                .checked_mul(SCALE)
                .map(Self)
                .ok_or_else(|| serde::de::Error::custom(ParseAmountError::OutOfRange)),
            Raw::Float(f) => Self::new_from_float(f).map_err(serde::de::Error::custom),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Amount::new_from_minor(1250).to_string(), "12.50");
        assert_eq!(Amount::new_from_minor(5).to_string(), "0.05");
        assert_eq!(Amount::new_from_minor(0).to_string(), "0.00");
        assert_eq!(Amount::new_from_minor(-50).to_string(), "-0.50");
    }

    #[test]
    fn parses_decimal_strings() {
        assert_eq!("12.5".parse::<Amount>(), Ok(Amount::new_from_minor(1250)));
        assert_eq!("3".parse::<Amount>(), Ok(Amount::new_from_minor(300)));
        assert_eq!(".75".parse::<Amount>(), Ok(Amount::new_from_minor(75)));
        assert_eq!("-1.10".parse::<Amount>(), Ok(Amount::new_from_minor(-110)));
        assert_eq!("1.005".parse::<Amount>(), Ok(Amount::new_from_minor(101)));
        assert_eq!("1.004".parse::<Amount>(), Ok(Amount::new_from_minor(100)));
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!("abc".parse::<Amount>(), Err(ParseAmountError::InvalidFormat));
        assert_eq!("1.2.3".parse::<Amount>(), Err(ParseAmountError::InvalidFormat));
        assert_eq!("".parse::<Amount>(), Err(ParseAmountError::InvalidFormat));
        assert_eq!("1e5".parse::<Amount>(), Err(ParseAmountError::InvalidFormat));
    }

    #[test]
    fn float_conversion_rounds_to_hundredths() {
        assert_eq!(Amount::new_from_float(12.5), Ok(Amount::new_from_minor(1250)));
        assert_eq!(Amount::new_from_float(0.1 + 0.2), Ok(Amount::new_from_minor(30)));
        assert!(Amount::new_from_float(f64::NAN).is_err());
    }

    #[test]
    fn number_and_string_round_alike() {
        for text in ["1.005", "2.675", "0.125", "-1.005", "12.5", "19.999"] {
            let from_string: Amount = text.parse().unwrap();
            let from_number: Amount = serde_json::from_str(text).unwrap();
            let from_json_string: Amount = serde_json::from_str(&format!("\"{}\"", text)).unwrap();

            assert_eq!(from_number, from_string, "{}", text);
            assert_eq!(from_json_string, from_string, "{}", text);
        }
        assert_eq!("1.005".parse::<Amount>(), Ok(Amount::new_from_minor(101)));
        assert_eq!(Amount::new_from_float(2.675), Ok(Amount::new_from_minor(268)));
    }

    #[test]
    fn huge_float_is_out_of_range() {
        assert_eq!(Amount::new_from_float(1e300), Err(ParseAmountError::OutOfRange));
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let amounts: Vec<Amount> = serde_json::from_str(r#"[12.5, 3, "1.50"]"#).unwrap();
        assert_eq!(
            amounts,
            vec![
                Amount::new_from_minor(1250),
                Amount::new_from_minor(300),
                Amount::new_from_minor(150),
            ]
        );
    }

    #[test]
    fn sums_without_float_drift() {
        let total: Amount = std::iter::repeat(Amount::new_from_minor(10)).take(10).sum();
        assert_eq!(total.to_string(), "1.00");
        let empty: Amount = Vec::<Amount>::new().iter().sum();
        assert_eq!(empty.to_string(), "0.00");
    }
}
