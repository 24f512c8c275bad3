use crate::types::errors::CurrencyError;
use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::fmt::{Display, Formatter, Write};
use std::str::FromStr;

const CODE_LENGTH: usize = 3;

/// ISO-4217 style currency code, stored uppercase.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct CurrencyCode([u8; CODE_LENGTH]);

impl Display for CurrencyCode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            formatter.write_char(byte as char)?;
        }

        Ok(())
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(CurrencyError::Missing);
        }

        if value.len() != CODE_LENGTH {
            return Err(CurrencyError::InvalidLength(value.to_string()));
        }

        let mut code = [0u8; CODE_LENGTH];

        for (slot, byte) in code.iter_mut().zip(value.bytes()) {
            if !byte.is_ascii_alphabetic() {
                return Err(CurrencyError::InvalidCharacter(value.to_string()));
            }

            *slot = byte.to_ascii_uppercase();
        }

        Ok(CurrencyCode(code))
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        CurrencyCode::from_str(&value).map_err(de::Error::custom)
    }
}
