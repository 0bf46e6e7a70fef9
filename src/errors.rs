use thiserror::Error;

use crate::store::models::VolunteerStatus;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlatformError {
    #[error("campaign not found: {0}")]
    CampaignNotFound(i64),

    #[error("volunteer record not found: {0}")]
    VolunteerNotFound(i64),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid goal amount: {0:?}")]
    InvalidGoal(String),

    #[error("invalid donation amount: {0:?}")]
    InvalidAmount(String),

    #[error("no campaign selected")]
    NoCampaignSelected,

    #[error("cannot change volunteer status from {from} to {to}")]
    InvalidStatusChange {
        from: VolunteerStatus,
        to: VolunteerStatus,
    },
}

pub type Result<T> = std::result::Result<T, PlatformError>;
