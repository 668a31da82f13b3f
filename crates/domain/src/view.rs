//! Quest view model
//!
//! Maps a [`Quest`] into the structure the UI renders. Every conditional
//! block is decided here so the renderer only walks the tree:
//! - no steps: `steps` is empty and the steps block is omitted
//! - a step without dialogue: `dialogue` is empty for that step only
//! - no rewards: `rewards_line` is `None`
//! - a reward amount is shown only when present and non-zero/non-empty

use crate::quest::{Quest, QuestStep, Reward};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestView {
    pub title: String,
    pub summary: String,
    pub meta: QuestMeta,
    pub steps: Vec<StepView>,
    pub rewards_line: Option<String>,
}

/// Values of the metadata line (zone, faction, tone, level range)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestMeta {
    pub zone: String,
    pub faction: String,
    pub tone: String,
    pub levels: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    /// "Step N: description"
    pub heading: String,
    pub objective: String,
    pub dialogue: Vec<DialogueLineView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueLineView {
    pub speaker: String,
    pub text: String,
}

impl QuestView {
    pub fn from_quest(quest: &Quest) -> Self {
        let steps = quest
            .steps
            .iter()
            .enumerate()
            .map(|(position, step)| StepView::from_step(position, step))
            .collect();

        let rewards_line = if quest.rewards.is_empty() {
            None
        } else {
            Some(
                quest
                    .rewards
                    .iter()
                    .map(format_reward)
                    .collect::<Vec<_>>()
                    .join(" | "),
            )
        };

        Self {
            title: quest.title.clone(),
            summary: quest.summary.clone(),
            meta: QuestMeta {
                zone: quest.zone.clone(),
                faction: quest.faction.clone(),
                tone: quest.tone.clone(),
                levels: format!(
                    "{}-{}",
                    display_level(quest.player_level_min),
                    display_level(quest.player_level_max)
                ),
            },
            steps,
            rewards_line,
        }
    }

    pub fn has_steps(&self) -> bool {
        !self.steps.is_empty()
    }
}

impl StepView {
    fn from_step(position: usize, step: &QuestStep) -> Self {
        // Steps are numbered by the server; fall back to the 1-based position
        let number = step.step_number.unwrap_or(position as i64 + 1);
        Self {
            heading: format!("Step {}: {}", number, step.description),
            objective: step.objective.clone(),
            dialogue: step
                .dialogue()
                .iter()
                .map(|line| DialogueLineView {
                    speaker: line.speaker.clone(),
                    text: line.text.clone(),
                })
                .collect(),
        }
    }

    pub fn has_dialogue(&self) -> bool {
        !self.dialogue.is_empty()
    }
}

/// "TYPE: description (amount)"; the amount suffix only when present
pub fn format_reward(reward: &Reward) -> String {
    let mut line = format!("{}: {}", reward.kind.to_uppercase(), reward.description);
    if let Some(amount) = reward.amount.as_ref().filter(|a| a.is_present()) {
        line.push_str(&format!(" ({amount})"));
    }
    line
}

fn display_level(level: Option<i64>) -> String {
    level.map(|l| l.to_string()).unwrap_or_default()
}
