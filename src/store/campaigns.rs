use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use super::models::{Campaign, CampaignStatus};
use super::Platform;
use crate::errors::{PlatformError, Result};

/// Raw form input from the presentation layer. `goal` and `start_date` arrive
/// as text straight out of the input fields.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CampaignForm {
    pub name: String,
    pub description: String,
    pub goal: String,
    pub start_date: String, // YYYY-MM-DD
    pub status: CampaignStatus,
}

/// Confirmation handle for a pending campaign delete. The presentation layer
/// shows its yes/no dialog between `request_delete` and `confirm_delete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteToken {
    token: Uuid,
    pub campaign_id: i64,
}

fn parse_goal(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(goal) if goal > 0.0 => Ok(goal),
        _ => Err(PlatformError::InvalidGoal(raw.to_string())),
    }
}

fn parse_form_date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap_or_else(|_| chrono::Utc::now().date_naive())
}

pub fn list_campaigns(platform: &Platform) -> Vec<Campaign> {
    platform.campaigns.read().expect("campaigns lock poisoned").clone()
}

pub fn get_campaign(platform: &Platform, id: i64) -> Option<Campaign> {
    platform
        .campaigns
        .read()
        .expect("campaigns lock poisoned")
        .iter()
        .find(|c| c.id == id)
        .cloned()
}

/// New campaigns start with nothing raised. Ids are `max(existing) + 1`, so
/// the first campaign in an empty store gets id 1.
pub fn create_campaign(platform: &Platform, form: &CampaignForm) -> Result<Campaign> {
    if form.name.trim().is_empty() {
        return Err(PlatformError::MissingField("name"));
    }
    let goal = parse_goal(&form.goal)?;

    let mut campaigns = platform.campaigns.write().expect("campaigns lock poisoned");
    let next_id = campaigns.iter().map(|c| c.id).max().unwrap_or(0) + 1;
    let campaign = Campaign {
        id: next_id,
        name: form.name.clone(),
        description: form.description.clone(),
        goal,
        raised: 0.0,
        start_date: parse_form_date(&form.start_date),
        status: form.status,
    };
    campaigns.push(campaign.clone());
    tracing::debug!(id = campaign.id, name = %campaign.name, "campaign created");
    Ok(campaign)
}

/// Replaces every field except `id` and `raised`; `raised` carries over from
/// the prior record.
pub fn update_campaign(platform: &Platform, id: i64, form: &CampaignForm) -> Result<Campaign> {
    if form.name.trim().is_empty() {
        return Err(PlatformError::MissingField("name"));
    }
    let goal = parse_goal(&form.goal)?;

    let mut campaigns = platform.campaigns.write().expect("campaigns lock poisoned");
    let existing = campaigns
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .ok_or(PlatformError::CampaignNotFound(id))?;
    let updated = Campaign {
        id,
        name: form.name.clone(),
        description: form.description.clone(),
        goal,
        raised: existing.raised,
        start_date: parse_form_date(&form.start_date),
        status: form.status,
    };
    *campaigns = campaigns
        .iter()
        .map(|c| if c.id == id { updated.clone() } else { c.clone() })
        .collect();
    tracing::debug!(id, "campaign updated");
    Ok(updated)
}

/// First half of the delete handshake. Fails for unknown ids; the returned
/// token is single-use.
pub fn request_delete(platform: &Platform, id: i64) -> Result<DeleteToken> {
    if get_campaign(platform, id).is_none() {
        return Err(PlatformError::CampaignNotFound(id));
    }
    let token = platform.stash_pending_delete(id);
    Ok(DeleteToken { token, campaign_id: id })
}

/// Second half of the handshake. Returns whether a record was removed; a
/// reused or unknown token is a no-op, so confirming twice is safe. Donations
/// referencing the campaign by name are left alone.
pub fn confirm_delete(platform: &Platform, token: DeleteToken) -> bool {
    let Some(id) = platform.take_pending_delete(token.token) else {
        tracing::warn!(campaign_id = token.campaign_id, "stale delete confirmation ignored");
        return false;
    };
    let mut campaigns = platform.campaigns.write().expect("campaigns lock poisoned");
    let before = campaigns.len();
    *campaigns = campaigns.iter().filter(|c| c.id != id).cloned().collect();
    let removed = campaigns.len() < before;
    if removed {
        tracing::debug!(id, "campaign deleted");
    }
    removed
}
