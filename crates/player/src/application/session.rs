//! Quest session - the client's single piece of mutable UI state
//!
//! Holds the last submitted brief, the last received quest and the status
//! line. Every request takes a [`RequestTicket`] when it is issued; how
//! completions are applied depends on the [`ResponseOrdering`]:
//!
//! - `LastIssuedWins`: only the completion of the most recently issued
//!   request is applied, whatever order responses arrive in.
//! - `LastArrivedWins`: every completion is applied as it arrives, so a slow
//!   stale response can overwrite a newer one.
//!
//! The session does no I/O; `application::actions` drives it around the
//! network calls.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use questsmith_domain::{Brief, QuestDocument, Section};
use questsmith_shared::RegenerateQuestRequest;

use crate::application::render::{render_quest, QuestRender};
use crate::application::ServiceError;

pub const GENERATING_MESSAGE: &str = "Generating quest...";
pub const GENERATED_MESSAGE: &str = "Quest generated successfully.";

// =============================================================================
// Status line
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl StatusKind {
    /// Modifier class added next to `status` on the status element
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Idle => "",
            StatusKind::Loading => "loading",
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    pub fn loading(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Loading,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Success,
        }
    }

    /// Error status with the "Error: " prefix
    pub fn error(message: impl fmt::Display) -> Self {
        Self {
            message: format!("Error: {message}"),
            kind: StatusKind::Error,
        }
    }

    /// Error status shown verbatim
    pub fn error_text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Error,
        }
    }
}

// =============================================================================
// Ordering and tickets
// =============================================================================

/// How completions of overlapping requests are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrdering {
    /// Discard completions of superseded requests
    #[default]
    LastIssuedWins,
    /// Apply every completion in arrival order
    LastArrivedWins,
}

impl FromStr for ResponseOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-issued" | "fenced" => Ok(Self::LastIssuedWins),
            "last-arrived" | "unfenced" => Ok(Self::LastArrivedWins),
            other => Err(format!("unknown response ordering: {other}")),
        }
    }
}

/// What an issued request will do with its response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestAction {
    Generate { brief: Brief },
    Regenerate { section: Section },
}

/// Handed out when a request is issued and returned on completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
    action: QuestAction,
}

/// Outcome of handing a completion to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request was issued since; state and status were left alone
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("No quest to regenerate. Generate a quest first.")]
    NothingToRegenerate,
}

// =============================================================================
// Session
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct QuestSession {
    current_brief: Option<Brief>,
    current_quest: Option<QuestDocument>,
    status: Status,
    ordering: ResponseOrdering,
    issued: u64,
}

impl QuestSession {
    pub fn new(ordering: ResponseOrdering) -> Self {
        Self {
            ordering,
            ..Self::default()
        }
    }

    pub fn current_brief(&self) -> Option<&Brief> {
        self.current_brief.as_ref()
    }

    pub fn current_quest(&self) -> Option<&QuestDocument> {
        self.current_quest.as_ref()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.ordering
    }

    /// Render model of the current quest (or the empty state)
    pub fn render(&self) -> QuestRender {
        render_quest(self.current_quest.as_ref())
    }

    /// Start a generation: clears the shown quest and sets the loading status
    /// before the request is sent.
    pub fn begin_generate(&mut self, brief: Brief) -> RequestTicket {
        self.current_quest = None;
        self.status = Status::loading(GENERATING_MESSAGE);
        self.issue(QuestAction::Generate { brief })
    }

    /// Start a regeneration and build its request body.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NothingToRegenerate`] (and sets the error
    /// status) when there is no current brief or quest. No ticket is issued.
    pub fn begin_regenerate(
        &mut self,
        section: Section,
        step_index: Option<i64>,
    ) -> Result<(RequestTicket, RegenerateQuestRequest), SessionError> {
        let (Some(brief), Some(quest)) = (&self.current_brief, &self.current_quest) else {
            self.status = Status::error_text(SessionError::NothingToRegenerate.to_string());
            return Err(SessionError::NothingToRegenerate);
        };

        let request = RegenerateQuestRequest {
            brief: brief.clone(),
            quest: quest.raw().clone(),
            section: section.clone(),
            step_index,
        };
        self.status = Status::loading(format!("Regenerating {section}..."));
        Ok((self.issue(QuestAction::Regenerate { section }), request))
    }

    /// Apply the result of an issued request.
    ///
    /// Failures only touch the status line; the current quest is never
    /// partially updated.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<QuestDocument, ServiceError>,
    ) -> Completion {
        if !self.accepts(&ticket) {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.issued,
                "Discarding response of superseded request"
            );
            return Completion::Discarded;
        }

        match (ticket.action, result) {
            (QuestAction::Generate { brief }, Ok(quest)) => {
                self.current_brief = Some(brief);
                self.current_quest = Some(quest);
                self.status = Status::success(GENERATED_MESSAGE);
            }
            (QuestAction::Regenerate { section }, Ok(quest)) => {
                self.current_quest = Some(quest);
                self.status = Status::success(format!("Successfully regenerated {section}."));
            }
            (_, Err(err)) => {
                self.status = Status::error(err);
            }
        }
        Completion::Applied
    }

    /// Whether a completion for this ticket would be applied now
    pub fn accepts(&self, ticket: &RequestTicket) -> bool {
        match self.ordering {
            ResponseOrdering::LastIssuedWins => ticket.seq == self.issued,
            ResponseOrdering::LastArrivedWins => true,
        }
    }

    fn issue(&mut self, action: QuestAction) -> RequestTicket {
        self.issued += 1;
        RequestTicket {
            seq: self.issued,
            action,
        }
    }
}
