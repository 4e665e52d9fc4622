// SPDX-FileCopyrightText: 2026 Aaron Dewes <aaron@nirvati.org>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, str::FromStr};

use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MIB: u128 = 1 << 20;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SizeError {
    #[error("{0} is not a whole number of mebibytes")]
    NotIntegral(Size),
    #[error("{0} is too large to be expressed in mebibytes")]
    Overflow(Size),
    #[error("Invalid size: {0}")]
    Parse(String),
}

/// Binary storage units, as used by Kubernetes quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeUnit {
    Bytes,
    Kibibytes,
    Mebibytes,
    Gibibytes,
    Tebibytes,
    Pebibytes,
}

impl SizeUnit {
    fn in_bytes(self) -> u128 {
        match self {
            SizeUnit::Bytes => 1,
            SizeUnit::Kibibytes => 1 << 10,
            SizeUnit::Mebibytes => 1 << 20,
            SizeUnit::Gibibytes => 1 << 30,
            SizeUnit::Tebibytes => 1 << 40,
            SizeUnit::Pebibytes => 1 << 50,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            SizeUnit::Bytes => "",
            SizeUnit::Kibibytes => "Ki",
            SizeUnit::Mebibytes => "Mi",
            SizeUnit::Gibibytes => "Gi",
            SizeUnit::Tebibytes => "Ti",
            SizeUnit::Pebibytes => "Pi",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "" => Some(SizeUnit::Bytes),
            "Ki" => Some(SizeUnit::Kibibytes),
            "Mi" => Some(SizeUnit::Mebibytes),
            "Gi" => Some(SizeUnit::Gibibytes),
            "Ti" => Some(SizeUnit::Tebibytes),
            "Pi" => Some(SizeUnit::Pebibytes),
            _ => None,
        }
    }
}

/// How to handle sizes that don't convert into a whole number of the target unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SizeRoundingBehavior {
    #[default]
    Fail,
    Floor,
    Ceil,
}

/// An amount of storage, e.g. `Size::gibibytes(20)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SizeValue", into = "String")]
pub struct Size {
    amount: u64,
    unit: SizeUnit,
}

impl Size {
    pub fn new(amount: u64, unit: SizeUnit) -> Self {
        Size { amount, unit }
    }

    pub fn bytes(amount: u64) -> Self {
        Size::new(amount, SizeUnit::Bytes)
    }

    pub fn kibibytes(amount: u64) -> Self {
        Size::new(amount, SizeUnit::Kibibytes)
    }

    pub fn mebibytes(amount: u64) -> Self {
        Size::new(amount, SizeUnit::Mebibytes)
    }

    pub fn gibibytes(amount: u64) -> Self {
        Size::new(amount, SizeUnit::Gibibytes)
    }

    pub fn tebibytes(amount: u64) -> Self {
        Size::new(amount, SizeUnit::Tebibytes)
    }

    pub fn pebibytes(amount: u64) -> Self {
        Size::new(amount, SizeUnit::Pebibytes)
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn unit(&self) -> SizeUnit {
        self.unit
    }

    /// Converts the size into mebibytes (2^20 bytes).
    pub fn to_mebibytes(&self, rounding: SizeRoundingBehavior) -> Result<u64, SizeError> {
        let bytes = u128::from(self.amount) * self.unit.in_bytes();
        let mebibytes = match rounding {
            SizeRoundingBehavior::Fail if bytes % MIB != 0 => {
                return Err(SizeError::NotIntegral(*self));
            }
            SizeRoundingBehavior::Ceil => bytes.div_ceil(MIB),
            _ => bytes / MIB,
        };
        u64::try_from(mebibytes).map_err(|_| SizeError::Overflow(*self))
    }

    /// The canonical Kubernetes quantity for this size, always expressed in `Mi`.
    pub fn to_quantity(&self) -> Result<Quantity, SizeError> {
        let mebibytes = self.to_mebibytes(SizeRoundingBehavior::Fail)?;
        Ok(Quantity(format!("{}Mi", mebibytes)))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.suffix())
    }
}

impl FromStr for Size {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let (digits, suffix) = trimmed.split_at(split);
        if digits.is_empty() {
            return Err(SizeError::Parse(s.to_string()));
        }
        let amount = digits
            .parse::<u64>()
            .map_err(|_| SizeError::Parse(s.to_string()))?;
        let unit = SizeUnit::from_suffix(suffix).ok_or_else(|| SizeError::Parse(s.to_string()))?;
        Ok(Size::new(amount, unit))
    }
}

/// Sizes in config files are either quantity strings or plain byte counts.
#[derive(Deserialize)]
#[serde(untagged)]
enum SizeValue {
    Bytes(u64),
    Quantity(String),
}

impl TryFrom<SizeValue> for Size {
    type Error = SizeError;

    fn try_from(value: SizeValue) -> Result<Self, Self::Error> {
        match value {
            SizeValue::Bytes(bytes) => Ok(Size::bytes(bytes)),
            SizeValue::Quantity(quantity) => quantity.parse(),
        }
    }
}

impl From<Size> for String {
    fn from(size: Size) -> Self {
        size.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gibibytes_to_quantity() {
        let quantity = Size::gibibytes(20).to_quantity().unwrap();
        assert_eq!(quantity, Quantity("20480Mi".to_string()));
    }

    #[test]
    fn test_zero_bytes() {
        assert_eq!(Size::bytes(0).to_quantity().unwrap().0, "0Mi");
    }

    #[test]
    fn test_rounding() {
        let size = Size::kibibytes(1536);
        assert_eq!(
            size.to_mebibytes(SizeRoundingBehavior::Fail),
            Err(SizeError::NotIntegral(size))
        );
        assert_eq!(size.to_mebibytes(SizeRoundingBehavior::Floor), Ok(1));
        assert_eq!(size.to_mebibytes(SizeRoundingBehavior::Ceil), Ok(2));
        assert!(size.to_quantity().is_err());
    }

    #[test]
    fn test_overflow() {
        let size = Size::pebibytes(u64::MAX);
        assert_eq!(
            size.to_mebibytes(SizeRoundingBehavior::Floor),
            Err(SizeError::Overflow(size))
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("20Gi".parse::<Size>().unwrap(), Size::gibibytes(20));
        assert_eq!(" 512Mi ".parse::<Size>().unwrap(), Size::mebibytes(512));
        assert_eq!("4096".parse::<Size>().unwrap(), Size::bytes(4096));
        assert!(matches!("Gi".parse::<Size>(), Err(SizeError::Parse(_))));
        assert!(matches!("12Xi".parse::<Size>(), Err(SizeError::Parse(_))));
        assert!(matches!("-1Mi".parse::<Size>(), Err(SizeError::Parse(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(Size::tebibytes(2).to_string(), "2Ti");
        assert_eq!(Size::bytes(7).to_string(), "7");
    }

    #[test]
    fn test_serde() {
        let size: Size = serde_yaml::from_str("\"64Ki\"").unwrap();
        assert_eq!(size, Size::kibibytes(64));
        assert_eq!(serde_json::to_value(size).unwrap(), serde_json::json!("64Ki"));
    }

    #[test]
    fn test_deserialize_byte_count() {
        let size: Size = serde_yaml::from_str("1048576").unwrap();
        assert_eq!(size, Size::bytes(1048576));
        assert_eq!(size.to_quantity().unwrap().0, "1Mi");
        let quoted: Size = serde_yaml::from_str("\"1048576\"").unwrap();
        assert_eq!(quoted, size);
        assert!(serde_yaml::from_str::<Size>("-5").is_err());
    }
}
