//! Title enum describing an employee's seniority level.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Seniority level, ordered from least to most senior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Title {
    Junior,
    Middle,
    Senior,
    Lead,
}

impl Title {
    /// All titles in seniority order.
    pub const ALL: [Title; 4] = [Title::Junior, Title::Middle, Title::Senior, Title::Lead];

    /// Wire name of the title (`JUNIOR`, `MIDDLE`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Title::Junior => "JUNIOR",
            Title::Middle => "MIDDLE",
            Title::Senior => "SENIOR",
            Title::Lead => "LEAD",
        }
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Title {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Title::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("title", format!("unknown title '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_ordered_by_seniority() {
        assert!(Title::Junior < Title::Middle);
        assert!(Title::Middle < Title::Senior);
        assert!(Title::Senior < Title::Lead);
    }

    #[test]
    fn parses_exact_wire_names() {
        assert_eq!("JUNIOR".parse::<Title>().unwrap(), Title::Junior);
        assert_eq!("MIDDLE".parse::<Title>().unwrap(), Title::Middle);
        assert_eq!("SENIOR".parse::<Title>().unwrap(), Title::Senior);
        assert_eq!("LEAD".parse::<Title>().unwrap(), Title::Lead);
    }

    #[test]
    fn rejects_unknown_titles() {
        let err = "INTERN".parse::<Title>().unwrap_err();
        assert_eq!(err.field(), "title");
        assert!("lead".parse::<Title>().is_err());
        assert!("".parse::<Title>().is_err());
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(Title::Lead.to_string(), "LEAD");
        assert_eq!(Title::Junior.to_string(), "JUNIOR");
    }

    #[test]
    fn serializes_to_uppercase_json() {
        assert_eq!(serde_json::to_string(&Title::Senior).unwrap(), "\"SENIOR\"");
        let title: Title = serde_json::from_str("\"MIDDLE\"").unwrap();
        assert_eq!(title, Title::Middle);
        assert!(serde_json::from_str::<Title>("\"PRINCIPAL\"").is_err());
    }
}
