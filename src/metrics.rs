//! Derived display values. Pure functions over store snapshots; formatting is
//! the presentation layer's job, so everything here is raw numbers.

use serde::Serialize;

use crate::store::models::{Campaign, CampaignStatus, Donation, Volunteer, VolunteerStatus};

/// Funding progress as a percentage, deliberately unclamped: an over-funded
/// campaign reads above 100, and a zero goal yields the raw `inf`/`NaN` for
/// the display layer to render as-is.
pub fn percent_funded(campaign: &Campaign) -> f64 {
    campaign.raised / campaign.goal * 100.0
}

pub fn total_donated(ledger: &[Donation]) -> f64 {
    ledger.iter().map(|d| d.amount).sum()
}

/// User-dashboard card figures.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DonorStats {
    pub total_donated: f64,
    pub donation_count: usize,
    pub application_count: usize,
    pub approved_applications: usize,
}

pub fn donor_stats(ledger: &[Donation], applications: &[Volunteer]) -> DonorStats {
    DonorStats {
        total_donated: total_donated(ledger),
        donation_count: ledger.len(),
        application_count: applications.len(),
        approved_applications: applications
            .iter()
            .filter(|a| a.status == VolunteerStatus::Approved)
            .count(),
    }
}

/// NGO-dashboard card figures.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CampaignTotals {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub paused: usize,
    pub total_raised: f64,
}

pub fn campaign_totals(campaigns: &[Campaign]) -> CampaignTotals {
    CampaignTotals {
        total: campaigns.len(),
        active: campaigns.iter().filter(|c| c.status == CampaignStatus::Active).count(),
        completed: campaigns
            .iter()
            .filter(|c| c.status == CampaignStatus::Completed)
            .count(),
        paused: campaigns.iter().filter(|c| c.status == CampaignStatus::Paused).count(),
        total_raised: campaigns.iter().map(|c| c.raised).sum(),
    }
}
