use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CampaignStatus {
    #[default]
    Active,
    Completed,
    Paused,
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Completed => "Completed",
            CampaignStatus::Paused => "Paused",
        };
        f.write_str(label)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub goal: f64,
    pub raised: f64,
    pub start_date: NaiveDate,
    pub status: CampaignStatus,
}

/// A single contribution. `campaign` holds the campaign name, not its id;
/// deleting a campaign leaves its donations in the ledger untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Donation {
    pub id: i64,
    pub campaign: String,
    pub amount: f64,
    pub date: NaiveDate,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolunteerStatus {
    Active,
    Completed,
    Applied,
    Approved,
    Rejected,
}

impl fmt::Display for VolunteerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VolunteerStatus::Active => "Active",
            VolunteerStatus::Completed => "Completed",
            VolunteerStatus::Applied => "Applied",
            VolunteerStatus::Approved => "Approved",
            VolunteerStatus::Rejected => "Rejected",
        };
        f.write_str(label)
    }
}

/// One record per applicant+role. The NGO roster is the whole collection;
/// a donor's application list is the subset matching their email.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Volunteer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub skills: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: VolunteerStatus,
}

/// Published volunteer role. Static reference data, read-only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Opportunity {
    pub id: i64,
    pub ngo: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub duration: String,
    pub positions: u32,
}
