use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};

use crate::cards::CardCollection;
use crate::dialog::Dialog;
use crate::profile::CurrentUser;

// --- Typed IDs ---

macro_rules! typed_id {
    ($name:ident) => {
        #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

typed_id!(UserId);
typed_id!(CardId);

/// The signed-in user's profile as last confirmed by the server.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub about: String,
    pub avatar: String,
}

/// A photo card. `likes` is the set of users who liked it; the server owns it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub link: String,
    pub owner: UserId,
    #[serde(default)]
    pub likes: BTreeSet<UserId>,
}

impl Card {
    #[must_use]
    pub fn is_liked_by(&self, user_id: &UserId) -> bool {
        self.likes.contains(user_id)
    }

    #[must_use]
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner == user_id
    }

    #[must_use]
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}

/// Everything the core owns. Only `App::update` writes to it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Model {
    pub user: CurrentUser,
    pub cards: CardCollection,
    pub dialog: Dialog,
}
