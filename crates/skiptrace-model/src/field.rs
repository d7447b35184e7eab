//! The five address components located among arbitrary headers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A semantic address component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalField {
    House,
    Street,
    City,
    State,
    Zip,
}

impl LogicalField {
    /// All fields in the order they appear in a formatted address.
    pub const ALL: [LogicalField; 5] = [
        LogicalField::House,
        LogicalField::Street,
        LogicalField::City,
        LogicalField::State,
        LogicalField::Zip,
    ];

    /// Stable upper-case code used in alias files and logs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::House => "HOUSE",
            Self::Street => "STREET",
            Self::City => "CITY",
            Self::State => "STATE",
            Self::Zip => "ZIP",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::House => "House number",
            Self::Street => "Street name",
            Self::City => "City",
            Self::State => "State",
            Self::Zip => "ZIP code",
        }
    }

    /// Position in [`LogicalField::ALL`].
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        match self {
            Self::House => 0,
            Self::Street => 1,
            Self::City => 2,
            Self::State => 3,
            Self::Zip => 4,
        }
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
