//! Property type definitions for schema traits.
//!
//! This module contains the closed set of property kinds a template can bind,
//! the pattern each kind is validated with, and the arbitrary-precision
//! [`Decimal`] value type.

use crate::error::TemplateError;
use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};
use std::fmt;
use std::str::FromStr;

/// Supported property data types.
///
/// Each kind carries the pattern used to validate the textual form of its
/// values. Any Rust type outside this enumeration is rejected when a
/// template binds it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    /// String value
    Text,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// Floating point number
    Real,
    /// Arbitrary-precision decimal number
    Decimal,
    /// Boolean value
    Boolean,
}

impl PropertyType {
    const TEXT_PATTERN: &'static str = "[A-Za-z0-9]+";
    const INTEGER_PATTERN: &'static str = "[+-]?[0-9]+";
    const NUMBER_PATTERN: &'static str = r"[-+]?[0-9]+(\.([0-9]+)?)?";
    const BOOLEAN_PATTERN: &'static str = "(?i:true|false)|0|1";

    /// Map a declared Rust type to its property kind.
    ///
    /// Returns `None` for every type outside the supported set.
    pub fn of<T: Any>() -> Option<Self> {
        let id = TypeId::of::<T>();
        if id == TypeId::of::<String>() {
            Some(Self::Text)
        } else if id == TypeId::of::<i32>() {
            Some(Self::Int32)
        } else if id == TypeId::of::<i64>() {
            Some(Self::Int64)
        } else if id == TypeId::of::<f64>() || id == TypeId::of::<f32>() {
            Some(Self::Real)
        } else if id == TypeId::of::<Decimal>() {
            Some(Self::Decimal)
        } else if id == TypeId::of::<bool>() {
            Some(Self::Boolean)
        } else {
            None
        }
    }

    /// The unanchored pattern matching textual values of this kind.
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::Text => Self::TEXT_PATTERN,
            Self::Int32 | Self::Int64 => Self::INTEGER_PATTERN,
            Self::Real | Self::Decimal => Self::NUMBER_PATTERN,
            Self::Boolean => Self::BOOLEAN_PATTERN,
        }
    }

    /// Lower-case name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Real => "real",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An arbitrary-precision decimal number.
///
/// Decimal holds the digits of a plain decimal literal (`[-+]?digits(.digits)?`)
/// and renders them back unchanged, so `1.23456789` never turns into a
/// rounded float. Exponent forms and surrounding whitespace are rejected.
///
/// ```rust
/// use typed_path_template::Decimal;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let value: Decimal = "1.23456789".parse()?;
///     assert_eq!(value.to_string(), "1.23456789");
///     assert!("1e5".parse::<Decimal>().is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Decimal(String);

impl Decimal {
    /// The decimal literal as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_plain(text: &str) -> bool {
        let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };
        !whole.is_empty()
            && whole.bytes().all(|b| b.is_ascii_digit())
            && fraction.bytes().all(|b| b.is_ascii_digit())
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self("0".to_string())
    }
}

impl FromStr for Decimal {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl TryFrom<String> for Decimal {
    type Error = TemplateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if Self::is_plain(&value) {
            Ok(Self(value))
        } else {
            Err(TemplateError::invalid_argument(format!(
                "'{}' is not a plain decimal number",
                value
            )))
        }
    }
}

impl From<Decimal> for String {
    fn from(value: Decimal) -> Self {
        value.0
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
