//! User actions: generate and regenerate
//!
//! Each action updates the session synchronously, awaits exactly one network
//! call, then hands the result back to the session. The session is reached
//! through a [`SessionHandle`] so that no borrow is held across the await.

use std::cell::RefCell;
use std::rc::Rc;

use questsmith_domain::{BriefForm, Section};

use crate::application::services::QuestService;
use crate::application::session::{Completion, QuestSession, SessionError};

/// Short-lived mutable access to the quest session
pub trait SessionHandle {
    fn update<R>(&mut self, f: impl FnOnce(&mut QuestSession) -> R) -> R;
}

impl SessionHandle for Rc<RefCell<QuestSession>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut QuestSession) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Parse the form, clear the current quest, and request a new one
pub async fn generate_quest<H: SessionHandle>(
    mut session: H,
    service: &QuestService,
    form: &BriefForm,
) -> Completion {
    let parsed = form.parse();
    if !parsed.fallbacks.is_empty() {
        tracing::debug!(fallbacks = ?parsed.fallbacks, "Brief fields fell back to defaults");
    }
    let brief = parsed.brief;

    let ticket = session.update(|s| s.begin_generate(brief.clone()));
    let result = service.generate(&brief).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, status = ?e.status(), "Quest generation failed");
    }

    let completion = session.update(|s| s.complete(ticket, result));
    tracing::info!(?completion, "Quest generation finished");
    completion
}

/// Regenerate one section, or one step when `step_index` is given.
///
/// # Errors
///
/// Returns [`SessionError::NothingToRegenerate`] without issuing a request
/// when no quest has been generated yet.
pub async fn regenerate_quest<H: SessionHandle>(
    mut session: H,
    service: &QuestService,
    section: Section,
    step_index: Option<i64>,
) -> Result<Completion, SessionError> {
    let (ticket, request) = match session.update(|s| s.begin_regenerate(section, step_index)) {
        Ok(issued) => issued,
        Err(e) => {
            tracing::warn!(error = %e, "Regeneration requested without a quest");
            return Err(e);
        }
    };

    let result = service.regenerate(&request).await;
    if let Err(e) = &result {
        tracing::error!(
            error = %e,
            status = ?e.status(),
            section = %request.section,
            "Quest regeneration failed"
        );
    }

    let completion = session.update(|s| s.complete(ticket, result));
    tracing::info!(?completion, section = %request.section, "Quest regeneration finished");
    Ok(completion)
}
