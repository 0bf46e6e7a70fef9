use chrono::Utc;
use serde::Deserialize;

use super::models::{Opportunity, Volunteer, VolunteerStatus};
use super::Platform;
use crate::errors::{PlatformError, Result};

/// Application form as the presentation layer collects it. `availability` and
/// `motivation` are shown to reviewers in the UI but are not part of the
/// stored volunteer record.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub skills: String,
    pub availability: String,
    pub motivation: String,
}

/// Outcome of an NGO reviewing an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    fn status(self) -> VolunteerStatus {
        match self {
            ReviewDecision::Approve => VolunteerStatus::Approved,
            ReviewDecision::Reject => VolunteerStatus::Rejected,
        }
    }
}

/// NGO-side view: every volunteer record, applicants and serving volunteers alike.
pub fn roster(platform: &Platform) -> Vec<Volunteer> {
    platform.volunteers.read().expect("volunteers lock poisoned").clone()
}

/// Donor-side view: the caller's own records, selected by email.
pub fn applications_for(platform: &Platform, email: &str) -> Vec<Volunteer> {
    platform
        .volunteers
        .read()
        .expect("volunteers lock poisoned")
        .iter()
        .filter(|v| v.email == email)
        .cloned()
        .collect()
}

/// Files an application for an opportunity. The new record starts as
/// `Applied`, takes its role from the opportunity title, and has no end date
/// yet. Clears the form on success so the dialog comes back empty.
pub fn submit_application(
    platform: &Platform,
    opportunity: &Opportunity,
    form: &mut ApplicationForm,
) -> Result<Volunteer> {
    if form.name.trim().is_empty() {
        return Err(PlatformError::MissingField("name"));
    }
    if form.email.trim().is_empty() {
        return Err(PlatformError::MissingField("email"));
    }

    let volunteer = Volunteer {
        id: platform.next_entry_id(),
        name: form.name.clone(),
        email: form.email.clone(),
        role: opportunity.title.clone(),
        skills: form.skills.clone(),
        start_date: Utc::now().date_naive(),
        end_date: None,
        status: VolunteerStatus::Applied,
    };
    let mut volunteers = platform.volunteers.write().expect("volunteers lock poisoned");
    volunteers.insert(0, volunteer.clone());
    tracing::debug!(id = volunteer.id, role = %volunteer.role, "volunteer application submitted");

    *form = ApplicationForm::default();
    Ok(volunteer)
}

/// Approves or rejects a pending application. Only `Applied` records can be
/// decided; active, completed, and already-decided records are protected from
/// being overwritten. All other fields stay untouched.
pub fn decide_application(
    platform: &Platform,
    id: i64,
    decision: ReviewDecision,
) -> Result<Volunteer> {
    let target = decision.status();
    let mut volunteers = platform.volunteers.write().expect("volunteers lock poisoned");
    let existing = volunteers
        .iter()
        .find(|v| v.id == id)
        .cloned()
        .ok_or(PlatformError::VolunteerNotFound(id))?;
    if existing.status != VolunteerStatus::Applied {
        tracing::warn!(id, from = %existing.status, to = %target, "refused volunteer status change");
        return Err(PlatformError::InvalidStatusChange {
            from: existing.status,
            to: target,
        });
    }

    let decided = Volunteer { status: target, ..existing };
    *volunteers = volunteers
        .iter()
        .map(|v| if v.id == id { decided.clone() } else { v.clone() })
        .collect();
    tracing::debug!(id, status = %target, "volunteer application decided");
    Ok(decided)
}
