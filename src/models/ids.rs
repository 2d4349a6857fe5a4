//! Strongly-typed ID wrappers for stored rows
//!
//! IDs wrap the SQLite rowid. Newtypes keep income and expense ids from being
//! mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a rowid returned by the database
            pub const fn from_raw(raw: i64) -> Self {
                Self(raw)
            }

            /// Get the underlying rowid
            pub const fn get(&self) -> i64 {
                self.0
            }

            /// Parse an ID, with or without its display prefix
            pub fn parse(s: &str) -> Result<Self, ParseIntError> {
                s.parse()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(IncomeId, "inc-");
define_id!(ExpenseId, "exp-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_has_prefix() {
        assert_eq!(ExpenseId::from_raw(7).to_string(), "exp-7");
        assert_eq!(IncomeId::from_raw(3).to_string(), "inc-3");
    }

    #[test]
    fn test_parse_with_and_without_prefix() {
        assert_eq!(ExpenseId::parse("12").unwrap(), ExpenseId::from_raw(12));
        assert_eq!(ExpenseId::parse("exp-12").unwrap(), ExpenseId::from_raw(12));
        assert!(ExpenseId::parse("inc-12").is_err());
        assert!(ExpenseId::parse("twelve").is_err());
    }
}
