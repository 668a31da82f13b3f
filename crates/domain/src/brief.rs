//! Quest design brief
//!
//! A [`Brief`] is built fresh from the raw form values on every submit.
//! Parsing never fails: fields that cannot be read fall back to a default
//! (or to `null` on the wire) and are reported in [`ParsedBrief::fallbacks`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Step count used when the steps field is empty, non-numeric, or zero
pub const DEFAULT_NUMBER_OF_STEPS: i64 = 4;

/// Raw form values, exactly as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BriefForm {
    pub zone: String,
    pub faction: String,
    pub tone: String,
    pub level_min: String,
    pub level_max: String,
    pub style: String,
    pub steps: String,
    pub playtime: String,
    /// Comma-separated list of forbidden elements
    pub forbidden: String,
}

/// The structured request sent to the generation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brief {
    pub zone: String,
    pub faction: String,
    pub tone: String,
    /// `None` when the field could not be parsed; serialized as `null`
    pub player_level_min: Option<i64>,
    pub player_level_max: Option<i64>,
    pub narrative_style: Option<String>,
    pub number_of_steps: i64,
    pub target_playtime_minutes: Option<i64>,
    pub forbidden_elements: Option<Vec<String>>,
}

/// Form fields that can fall back during parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BriefField {
    PlayerLevelMin,
    PlayerLevelMax,
    NumberOfSteps,
    TargetPlaytimeMinutes,
}

impl fmt::Display for BriefField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BriefField::PlayerLevelMin => "player_level_min",
            BriefField::PlayerLevelMax => "player_level_max",
            BriefField::NumberOfSteps => "number_of_steps",
            BriefField::TargetPlaytimeMinutes => "target_playtime_minutes",
        };
        f.write_str(name)
    }
}

/// A parsed brief plus the fields that did not parse cleanly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBrief {
    pub brief: Brief,
    pub fallbacks: Vec<BriefField>,
}

impl ParsedBrief {
    pub fn fell_back(&self, field: BriefField) -> bool {
        self.fallbacks.contains(&field)
    }
}

impl BriefForm {
    /// Parse the raw form into a [`Brief`].
    ///
    /// Level fields are not range-checked; an unreadable level becomes `None`.
    /// A blank playtime field is simply absent and is not reported as a fallback.
    pub fn parse(&self) -> ParsedBrief {
        let mut fallbacks = Vec::new();

        let player_level_min = parse_int(&self.level_min);
        if player_level_min.is_none() {
            fallbacks.push(BriefField::PlayerLevelMin);
        }

        let player_level_max = parse_int(&self.level_max);
        if player_level_max.is_none() {
            fallbacks.push(BriefField::PlayerLevelMax);
        }

        let number_of_steps = match parse_int(&self.steps) {
            Some(n) if n != 0 => n,
            _ => {
                fallbacks.push(BriefField::NumberOfSteps);
                DEFAULT_NUMBER_OF_STEPS
            }
        };

        let target_playtime_minutes = if self.playtime.is_empty() {
            None
        } else {
            let parsed = parse_int(&self.playtime);
            if parsed.is_none() {
                fallbacks.push(BriefField::TargetPlaytimeMinutes);
            }
            parsed
        };

        let brief = Brief {
            zone: self.zone.trim().to_string(),
            faction: self.faction.trim().to_string(),
            tone: self.tone.trim().to_string(),
            player_level_min,
            player_level_max,
            narrative_style: non_empty_trimmed(&self.style),
            number_of_steps,
            target_playtime_minutes,
            forbidden_elements: parse_forbidden_elements(&self.forbidden),
        };

        ParsedBrief { brief, fallbacks }
    }
}

/// Split a comma-separated list into trimmed, non-empty tokens.
///
/// Returns `None` when the field is blank. A field made only of commas yields
/// `Some(vec![])`.
pub fn parse_forbidden_elements(raw: &str) -> Option<Vec<String>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(
        trimmed
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// Base-10 integer prefix parsing.
///
/// Skips leading whitespace, accepts one optional sign, then reads the longest
/// run of ASCII digits. Trailing characters are ignored, so `"12abc"` is 12
/// and `"3.9"` is 3. Returns `None` when no digit follows, or on overflow.
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn non_empty_trimmed(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
