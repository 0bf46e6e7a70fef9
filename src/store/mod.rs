use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use chrono::Utc;
use uuid::Uuid;

pub mod campaigns;
pub mod donations;
pub mod models;
pub mod seed;
pub mod volunteers;

use models::{Campaign, Donation, Opportunity, Volunteer};

/// Process-wide repository behind the presentation layer. Every view reads
/// and mutates the same collections instead of holding its own copy, so the
/// sample-data drift of per-page state cannot occur.
///
/// Mutations replace the whole collection in one step under the write lock;
/// readers take cloned snapshots and never see a half-applied change.
pub struct Platform {
    pub(crate) campaigns: RwLock<Vec<Campaign>>,
    pub(crate) donations: RwLock<Vec<Donation>>,
    pub(crate) volunteers: RwLock<Vec<Volunteer>>,
    opportunities: Vec<Opportunity>,
    pending_deletes: Mutex<HashMap<Uuid, i64>>,
    last_entry_id: Mutex<i64>,
}

impl Platform {
    /// Empty stores; opportunities are static reference data and always present.
    pub fn new() -> Self {
        Platform {
            campaigns: RwLock::new(Vec::new()),
            donations: RwLock::new(Vec::new()),
            volunteers: RwLock::new(Vec::new()),
            opportunities: seed::opportunities(),
            pending_deletes: Mutex::new(HashMap::new()),
            last_entry_id: Mutex::new(0),
        }
    }

    /// Stores pre-filled with the demo sample data.
    pub fn with_sample_data() -> Self {
        let platform = Platform::new();
        *platform.campaigns.write().expect("campaigns lock poisoned") = seed::campaigns();
        *platform.donations.write().expect("donations lock poisoned") = seed::donations();
        *platform.volunteers.write().expect("volunteers lock poisoned") = seed::volunteers();
        platform
    }

    pub fn opportunities(&self) -> &[Opportunity] {
        &self.opportunities
    }

    /// Timestamp-based id (milliseconds since epoch) with a monotonic bump so
    /// records created in the same millisecond still get distinct ids.
    pub(crate) fn next_entry_id(&self) -> i64 {
        let mut last = self.last_entry_id.lock().expect("id counter poisoned");
        let id = Utc::now().timestamp_millis().max(*last + 1);
        *last = id;
        id
    }

    pub(crate) fn stash_pending_delete(&self, campaign_id: i64) -> Uuid {
        let token = Uuid::new_v4();
        self.pending_deletes
            .lock()
            .expect("pending deletes poisoned")
            .insert(token, campaign_id);
        token
    }

    pub(crate) fn take_pending_delete(&self, token: Uuid) -> Option<i64> {
        self.pending_deletes
            .lock()
            .expect("pending deletes poisoned")
            .remove(&token)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::new()
    }
}
