//! Regenerable quest sections

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::brief::parse_int;

/// Which part of an existing quest a regeneration request replaces.
///
/// The set of sections is decided by the generation API; unknown names are
/// carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Section {
    Title,
    Summary,
    Steps,
    Rewards,
    Other(String),
}

impl Section {
    /// Sections offered as one-click regenerate buttons
    pub const BUTTONS: [Section; 4] = [
        Section::Title,
        Section::Summary,
        Section::Steps,
        Section::Rewards,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Section::Title => "title",
            Section::Summary => "summary",
            Section::Steps => "steps",
            Section::Rewards => "rewards",
            Section::Other(name) => name,
        }
    }

    /// Button label, e.g. "Regenerate Title"
    pub fn button_label(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => format!("Regenerate {}{}", first.to_uppercase(), chars.as_str()),
            None => "Regenerate".to_string(),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Section {
    fn from(s: String) -> Self {
        match s.as_str() {
            "title" => Section::Title,
            "summary" => Section::Summary,
            "steps" => Section::Steps,
            "rewards" => Section::Rewards,
            _ => Section::Other(s),
        }
    }
}

impl From<&str> for Section {
    fn from(s: &str) -> Self {
        Section::from(s.to_string())
    }
}

impl From<Section> for String {
    fn from(section: Section) -> String {
        match section {
            Section::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// Read the step-index input of the "regenerate step" trigger.
///
/// An empty field targets the first step; otherwise the leading integer is
/// used, and unreadable input yields `None` (sent as `null`).
pub fn parse_step_index(raw: &str) -> Option<i64> {
    if raw.is_empty() {
        Some(0)
    } else {
        parse_int(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sections_round_trip_through_strings() {
        for section in Section::BUTTONS {
            let name = String::from(section.clone());
            assert_eq!(Section::from(name), section);
        }
    }

    #[test]
    fn unknown_section_is_passed_through() {
        let section = Section::from("epilogue");
        assert_eq!(section, Section::Other("epilogue".to_string()));
        assert_eq!(
            serde_json::to_value(&section).expect("serializes"),
            serde_json::json!("epilogue")
        );
    }

    #[test]
    fn serializes_as_plain_string() {
        assert_eq!(
            serde_json::to_string(&Section::Rewards).expect("serializes"),
            "\"rewards\""
        );
    }

    #[test]
    fn button_labels() {
        assert_eq!(Section::Title.button_label(), "Regenerate Title");
        assert_eq!(Section::Steps.button_label(), "Regenerate Steps");
    }

    #[test]
    fn step_index_parsing() {
        assert_eq!(parse_step_index(""), Some(0));
        assert_eq!(parse_step_index("2"), Some(2));
        assert_eq!(parse_step_index("1st"), Some(1));
        assert_eq!(parse_step_index("next"), None);
    }
}
