//! Request bodies sent to the generation API
//!
//! `POST /api/quests/generate` takes a bare [`Brief`]; the regenerate
//! endpoint wraps the brief and the current quest.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use questsmith_domain::{Brief, Section};

/// Body of `POST /api/quests/regenerate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegenerateQuestRequest {
    pub brief: Brief,
    /// The quest exactly as last received from the server
    pub quest: Value,
    pub section: Section,
    /// Zero-based step to target when `section` is `steps`; `null` otherwise
    pub step_index: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use questsmith_domain::BriefForm;
    use serde_json::json;

    #[test]
    fn serializes_wire_shape() {
        let brief = BriefForm {
            zone: "Frostmire".to_string(),
            faction: "Wardens".to_string(),
            tone: "grim".to_string(),
            level_min: "5".to_string(),
            level_max: "8".to_string(),
            ..Default::default()
        }
        .parse()
        .brief;

        let request = RegenerateQuestRequest {
            brief,
            quest: json!({ "title": "The Frozen Oath" }),
            section: Section::Steps,
            step_index: Some(1),
        };
        let value = serde_json::to_value(&request).expect("serializes");

        assert_eq!(value["section"], "steps");
        assert_eq!(value["step_index"], 1);
        assert_eq!(value["quest"]["title"], "The Frozen Oath");
        assert_eq!(value["brief"]["zone"], "Frostmire");
        assert_eq!(value["brief"]["number_of_steps"], 4);
    }

    #[test]
    fn section_regeneration_sends_null_step_index() {
        let request = RegenerateQuestRequest {
            brief: BriefForm::default().parse().brief,
            quest: json!({}),
            section: Section::Title,
            step_index: None,
        };
        let value = serde_json::to_value(&request).expect("serializes");

        assert_eq!(value["step_index"], Value::Null);
    }
}
