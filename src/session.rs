use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Ngo,
    Donor,
}

/// Local sign-in state. No credentials are checked anywhere; logging in just
/// flips the flag and tags the session with a role, which gates which views
/// and actions the presentation layer offers.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Session {
    pub logged_in: bool,
    pub role: Option<Role>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn login(&mut self, role: Role) {
        self.logged_in = true;
        self.role = Some(role);
        tracing::debug!(?role, "session started");
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
        self.role = None;
        tracing::debug!("session ended");
    }

    pub fn is_ngo(&self) -> bool {
        self.logged_in && self.role == Some(Role::Ngo)
    }

    pub fn is_donor(&self) -> bool {
        self.logged_in && self.role == Some(Role::Donor)
    }
}
