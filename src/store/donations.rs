use chrono::Utc;

use super::models::{Campaign, Donation};
use super::Platform;
use crate::errors::{PlatformError, Result};

/// Records a contribution against a campaign. `amount_text` is the raw input
/// field value. Every rejected input leaves the ledger unchanged: no campaign
/// selected, blank amount, or text that does not parse to a positive number.
///
/// The donation references the campaign by name, and the campaign's `raised`
/// figure is not touched here; the two are reconciled upstream of this demo.
pub fn record_donation(
    platform: &Platform,
    campaign: Option<&Campaign>,
    amount_text: &str,
) -> Result<Donation> {
    let campaign = campaign.ok_or(PlatformError::NoCampaignSelected)?;
    let trimmed = amount_text.trim();
    if trimmed.is_empty() {
        return Err(PlatformError::MissingField("amount"));
    }
    let amount = match trimmed.parse::<f64>() {
        Ok(amount) if amount > 0.0 => amount,
        _ => {
            tracing::warn!(input = amount_text, "rejected donation amount");
            return Err(PlatformError::InvalidAmount(amount_text.to_string()));
        }
    };

    let donation = Donation {
        id: platform.next_entry_id(),
        campaign: campaign.name.clone(),
        amount,
        date: Utc::now().date_naive(),
    };
    let mut donations = platform.donations.write().expect("donations lock poisoned");
    donations.insert(0, donation.clone());
    tracing::debug!(id = donation.id, campaign = %donation.campaign, amount, "donation recorded");
    Ok(donation)
}

/// Snapshot of the ledger, most recent first.
pub fn list_donations(platform: &Platform) -> Vec<Donation> {
    platform.donations.read().expect("donations lock poisoned").clone()
}
