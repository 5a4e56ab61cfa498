//! Current user store.

use serde::{Deserialize, Serialize};

use crate::model::{UserId, UserProfile};

/// Holds the single profile for the session. Absent until the first
/// successful load; afterwards only ever replaced as a whole.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrentUser {
    profile: Option<UserProfile>,
}

impl CurrentUser {
    #[must_use]
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub fn id(&self) -> Option<&UserId> {
        self.profile.as_ref().map(|p| &p.id)
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.profile.is_some()
    }

    /// Overwrites the stored profile, returning the previous one.
    pub fn replace(&mut self, profile: UserProfile) -> Option<UserProfile> {
        self.profile.replace(profile)
    }
}
