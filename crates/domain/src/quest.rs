//! Quest documents returned by the generation API
//!
//! The client treats a quest as an opaque document: the exact JSON value is
//! kept for display and for regeneration requests, and a lenient typed view
//! is decoded alongside it for rendering.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::QuestError;

/// A quest as received from the server, with its typed view
#[derive(Debug, Clone, PartialEq)]
pub struct QuestDocument {
    raw: Value,
    quest: Quest,
}

impl QuestDocument {
    /// Decode a document, keeping the original value untouched.
    ///
    /// Rendered fields are read leniently: nulls and mistyped scalars become
    /// defaults or their text form, and unreadable list entries become empty.
    ///
    /// # Errors
    ///
    /// Returns [`QuestError::NotAnObject`] for non-object JSON and
    /// [`QuestError::InvalidShape`] when `steps` or `rewards` is not a list.
    pub fn from_value(raw: Value) -> Result<Self, QuestError> {
        if !raw.is_object() {
            return Err(QuestError::NotAnObject(json_kind(&raw)));
        }
        let quest = Quest::deserialize(&raw).map_err(|e| QuestError::InvalidShape(e.to_string()))?;
        Ok(Self { raw, quest })
    }

    /// The exact JSON value the server returned
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn quest(&self) -> &Quest {
        &self.quest
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_pretty_json(&self) -> String {
        // Serializing a `Value` cannot fail
        serde_json::to_string_pretty(&self.raw).unwrap_or_default()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// The fields of a quest the client renders. Missing fields decode to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quest {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub summary: String,
    #[serde(deserialize_with = "lenient_string")]
    pub zone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub faction: String,
    #[serde(deserialize_with = "lenient_string")]
    pub tone: String,
    #[serde(deserialize_with = "lenient_int")]
    pub player_level_min: Option<i64>,
    #[serde(deserialize_with = "lenient_int")]
    pub player_level_max: Option<i64>,
    #[serde(deserialize_with = "lenient_list")]
    pub steps: Vec<QuestStep>,
    #[serde(deserialize_with = "lenient_list")]
    pub rewards: Vec<Reward>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestStep {
    #[serde(deserialize_with = "lenient_int")]
    pub step_number: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient_string")]
    pub objective: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_optional_list"
    )]
    pub npc_dialogue: Option<Vec<DialogueLine>>,
}

impl QuestStep {
    /// Dialogue lines, empty when the step has none
    pub fn dialogue(&self) -> &[DialogueLine] {
        self.npc_dialogue.as_deref().unwrap_or_default()
    }
}

/// One line of dialogue. The server uses `NPC` / `PLAYER` as speakers,
/// but any speaker string is displayed as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogueLine {
    #[serde(deserialize_with = "lenient_string")]
    pub speaker: String,
    #[serde(deserialize_with = "lenient_string")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reward {
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<RewardAmount>,
}

/// Reward amounts arrive as integers, decimals, or free text. Anything else
/// is kept as-is in `Other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RewardAmount {
    Integer(i64),
    Decimal(f64),
    Text(String),
    Other(Value),
}

impl RewardAmount {
    /// Whether the amount should be shown: non-zero numbers, non-empty text,
    /// `true`, and any list or object
    pub fn is_present(&self) -> bool {
        match self {
            RewardAmount::Integer(n) => *n != 0,
            RewardAmount::Decimal(n) => *n != 0.0 && !n.is_nan(),
            RewardAmount::Text(s) => !s.is_empty(),
            RewardAmount::Other(value) => match value {
                Value::Null => false,
                Value::Bool(b) => *b,
                Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
                Value::String(s) => !s.is_empty(),
                Value::Array(_) | Value::Object(_) => true,
            },
        }
    }
}

impl fmt::Display for RewardAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewardAmount::Integer(n) => write!(f, "{n}"),
            RewardAmount::Decimal(n) => write!(f, "{n}"),
            RewardAmount::Text(s) => f.write_str(s),
            RewardAmount::Other(value) => f.write_str(&value_text(value)),
        }
    }
}

/// Display text of a scalar: strings verbatim, null empty, the rest as JSON
fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(&Value::deserialize(deserializer)?))
}

/// Integers, integral floats and numeric strings; anything else is `None`
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// A list whose unreadable entries decode to defaults. `null` is an empty
/// list; any other non-list value is an error.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let entries = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries.into_iter().map(entry_or_default).collect())
}

/// Like [`lenient_list`], but a missing, null or non-list value is `None`
fn lenient_optional_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(entries) => Some(entries.into_iter().map(entry_or_default).collect()),
        _ => None,
    })
}

fn entry_or_default<T: Default + DeserializeOwned>(entry: Value) -> T {
    T::deserialize(entry).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_raw_document_including_unknown_fields() {
        let raw = json!({
            "title": "The Frozen Oath",
            "summary": "Wardens hold the pass.",
            "steps": [],
            "rewards": [],
            "quest_giver": "Captain Hale"
        });
        let doc = QuestDocument::from_value(raw.clone()).expect("object decodes");

        assert_eq!(doc.raw(), &raw);
        assert_eq!(doc.quest().title, "The Frozen Oath");

        let reparsed: Value = serde_json::from_str(&doc.to_pretty_json()).expect("valid json");
        assert_eq!(reparsed, raw);
    }

    #[test]
    fn missing_fields_decode_to_defaults() {
        let doc = QuestDocument::from_value(json!({ "title": "Bare" })).expect("decodes");

        assert!(doc.quest().steps.is_empty());
        assert!(doc.quest().rewards.is_empty());
        assert_eq!(doc.quest().player_level_min, None);
    }

    #[test]
    fn null_lists_decode_as_empty() {
        let doc = QuestDocument::from_value(json!({ "steps": null, "rewards": null }))
            .expect("decodes");

        assert!(doc.quest().steps.is_empty());
        assert!(doc.quest().rewards.is_empty());
    }

    #[test]
    fn rejects_non_object_documents() {
        assert_eq!(
            QuestDocument::from_value(json!([1, 2])),
            Err(QuestError::NotAnObject("an array"))
        );
        assert!(matches!(
            QuestDocument::from_value(json!({ "steps": "three" })),
            Err(QuestError::InvalidShape(_))
        ));
        assert!(matches!(
            QuestDocument::from_value(json!({ "rewards": { "xp": 500 } })),
            Err(QuestError::InvalidShape(_))
        ));
    }

    #[test]
    fn mistyped_text_fields_still_decode() {
        let doc = QuestDocument::from_value(json!({
            "title": null,
            "summary": 42,
            "zone": true,
            "faction": "Wardens",
            "tone": ["grim"]
        }))
        .expect("decodes");
        let quest = doc.quest();

        assert_eq!(quest.title, "");
        assert_eq!(quest.summary, "42");
        assert_eq!(quest.zone, "true");
        assert_eq!(quest.faction, "Wardens");
        assert_eq!(quest.tone, r#"["grim"]"#);
    }

    #[test]
    fn numbers_accept_floats_and_numeric_strings() {
        let doc = QuestDocument::from_value(json!({
            "player_level_min": "5",
            "player_level_max": 8.0,
            "steps": [
                { "step_number": 1.0 },
                { "step_number": " 2 " },
                { "step_number": 2.5 },
                { "step_number": "two" }
            ]
        }))
        .expect("decodes");
        let quest = doc.quest();

        assert_eq!(quest.player_level_min, Some(5));
        assert_eq!(quest.player_level_max, Some(8));
        let numbers: Vec<_> = quest.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![Some(1), Some(2), None, None]);
    }

    #[test]
    fn unreadable_entries_become_defaults() {
        let doc = QuestDocument::from_value(json!({
            "steps": [
                "not a step",
                { "description": null, "objective": 3,
                  "npc_dialogue": [{ "speaker": null, "text": 7 }, "hello"] },
                { "description": "Hold", "npc_dialogue": "none" }
            ],
            "rewards": [null, { "type": 1, "description": "Coin" }]
        }))
        .expect("decodes");
        let quest = doc.quest();

        assert_eq!(quest.steps.len(), 3);
        assert_eq!(quest.steps[0], QuestStep::default());
        assert_eq!(quest.steps[1].objective, "3");
        assert_eq!(
            quest.steps[1].dialogue(),
            &[
                DialogueLine { speaker: String::new(), text: "7".to_string() },
                DialogueLine::default()
            ]
        );
        assert!(quest.steps[2].dialogue().is_empty());
        assert_eq!(quest.rewards[0], Reward::default());
        assert_eq!(quest.rewards[1].kind, "1");
    }

    #[test]
    fn other_reward_amounts_are_kept() {
        let rewards: Vec<Reward> = serde_json::from_value(json!([
            { "type": "badge", "description": "Honor", "amount": true },
            { "type": "badge", "description": "Shame", "amount": false },
            { "type": "bundle", "description": "Kit", "amount": [1, 2] }
        ]))
        .expect("rewards decode");

        assert_eq!(rewards[0].amount, Some(RewardAmount::Other(json!(true))));
        assert!(rewards[0].amount.as_ref().is_some_and(RewardAmount::is_present));
        assert!(!rewards[1].amount.as_ref().is_some_and(RewardAmount::is_present));
        assert!(rewards[2].amount.as_ref().is_some_and(RewardAmount::is_present));
        assert_eq!(
            rewards[0].amount.as_ref().map(ToString::to_string).as_deref(),
            Some("true")
        );
    }

    #[test]
    fn step_without_dialogue_has_empty_slice() {
        let step: QuestStep = serde_json::from_value(json!({
            "step_number": 1,
            "description": "Reach the pass",
            "objective": "Travel north"
        }))
        .expect("step decodes");

        assert!(step.dialogue().is_empty());
    }

    #[test]
    fn reward_amount_variants() {
        let rewards: Vec<Reward> = serde_json::from_value(json!([
            { "type": "xp", "description": "Experience", "amount": 500 },
            { "type": "gold", "description": "Coin", "amount": 2.5 },
            { "type": "item", "description": "Blade", "amount": "1 stack" },
            { "type": "cosmetic", "description": "Cloak", "amount": null },
            { "type": "other", "description": "Favor", "amount": 0 }
        ]))
        .expect("rewards decode");

        assert_eq!(rewards[0].amount, Some(RewardAmount::Integer(500)));
        assert_eq!(rewards[1].amount, Some(RewardAmount::Decimal(2.5)));
        assert_eq!(rewards[2].amount, Some(RewardAmount::Text("1 stack".into())));
        assert_eq!(rewards[3].amount, None);
        assert!(!rewards[4].amount.as_ref().is_some_and(RewardAmount::is_present));
        assert_eq!(rewards[1].amount.as_ref().map(ToString::to_string).as_deref(), Some("2.5"));
    }

    #[test]
    fn text_zero_amount_is_present() {
        assert!(RewardAmount::Text("0".into()).is_present());
        assert!(!RewardAmount::Text(String::new()).is_present());
        assert!(!RewardAmount::Decimal(0.0).is_present());
    }
}
