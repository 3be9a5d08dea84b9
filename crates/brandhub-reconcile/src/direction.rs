//! Which side of a record is authoritative for a repair

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Source of truth for one repair pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SyncDirection {
    /// Root fields win; sections are re-derived from them
    #[default]
    #[serde(rename = "top-level")]
    TopLevel,
    /// Section payloads are lifted into the root first
    #[serde(rename = "sections")]
    Sections,
}

impl SyncDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SyncDirection::TopLevel => "top-level",
            SyncDirection::Sections => "sections",
        }
    }
}

impl fmt::Display for SyncDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sync direction '{0}', expected 'top-level' or 'sections'")]
pub struct ParseDirectionError(pub String);

impl FromStr for SyncDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-level" | "top" => Ok(SyncDirection::TopLevel),
            "sections" => Ok(SyncDirection::Sections),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_names() {
        assert_eq!("top-level".parse::<SyncDirection>().unwrap(), SyncDirection::TopLevel);
        assert_eq!("sections".parse::<SyncDirection>().unwrap(), SyncDirection::Sections);
        assert!("both".parse::<SyncDirection>().is_err());
        assert_eq!(SyncDirection::Sections.to_string(), "sections");
    }
}
