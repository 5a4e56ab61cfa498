use serde::{Deserialize, Serialize};
use url::Url;

use crate::capabilities::GatewayResult;
use crate::model::{Card, CardId, UserProfile};
use crate::{MAX_CARD_NAME_LEN, MAX_LINK_LEN, MAX_PROFILE_FIELD_LEN, MIN_PROFILE_FIELD_LEN};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must not be blank")]
    Blank { field: &'static str },
    #[error("{field} is too short ({len} < {min})")]
    TooShort {
        field: &'static str,
        len: usize,
        min: usize,
    },
    #[error("{field} is too long ({len} > {max})")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
    #[error("{field} is not an http(s) link: {reason}")]
    InvalidLink { field: &'static str, reason: String },
}

fn check_text(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank { field });
    }
    let len = trimmed.chars().count();
    if len < min {
        return Err(ValidationError::TooShort { field, len, min });
    }
    if len > max {
        return Err(ValidationError::TooLong { field, len, max });
    }
    Ok(())
}

fn check_link(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank { field });
    }
    if trimmed.len() > MAX_LINK_LEN {
        return Err(ValidationError::TooLong {
            field,
            len: trimmed.len(),
            max: MAX_LINK_LEN,
        });
    }
    let parsed = Url::parse(trimmed).map_err(|e| ValidationError::InvalidLink {
        field,
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(ValidationError::InvalidLink {
            field,
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    Ok(())
}

// --- Form payloads ---

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: String,
    pub about: String,
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("name", &self.name, MIN_PROFILE_FIELD_LEN, MAX_PROFILE_FIELD_LEN)?;
        check_text("about", &self.about, MIN_PROFILE_FIELD_LEN, MAX_PROFILE_FIELD_LEN)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AvatarUpdate {
    pub avatar: String,
}

impl AvatarUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_link("avatar", &self.avatar)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NewCard {
    pub name: String,
    pub link: String,
}

impl NewCard {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("name", &self.name, 1, MAX_CARD_NAME_LEN)?;
        check_link("link", &self.link)
    }
}

// --- Event enum: intents from the shell plus gateway results (boxed) ---

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Event {
    Started,

    // Dialog openers
    EditProfileClicked,
    EditAvatarClicked,
    AddPlaceClicked,
    CardClicked(Box<Card>),
    CardDeleteClicked(Box<Card>),
    CloseDialogs,

    // Form submissions and card actions
    ProfileSubmitted(ProfileUpdate),
    AvatarSubmitted(AvatarUpdate),
    CardSubmitted(NewCard),
    LikeToggled {
        card_id: CardId,
    },
    DeleteConfirmed {
        card_id: CardId,
    },

    // Gateway results
    #[serde(skip)]
    UserLoaded(Box<GatewayResult<UserProfile>>),
    #[serde(skip)]
    CardsLoaded(Box<GatewayResult<Vec<Card>>>),
    #[serde(skip)]
    ProfileSaved(Box<GatewayResult<UserProfile>>),
    #[serde(skip)]
    AvatarSaved(Box<GatewayResult<UserProfile>>),
    #[serde(skip)]
    CardCreated(Box<GatewayResult<Card>>),
    #[serde(skip)]
    CardRemoved {
        card_id: CardId,
        result: Box<GatewayResult<()>>,
    },
    #[serde(skip)]
    LikeSettled(Box<GatewayResult<Card>>),
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::EditProfileClicked => "edit_profile_clicked",
            Self::EditAvatarClicked => "edit_avatar_clicked",
            Self::AddPlaceClicked => "add_place_clicked",
            Self::CardClicked(_) => "card_clicked",
            Self::CardDeleteClicked(_) => "card_delete_clicked",
            Self::CloseDialogs => "close_dialogs",
            Self::ProfileSubmitted(_) => "profile_submitted",
            Self::AvatarSubmitted(_) => "avatar_submitted",
            Self::CardSubmitted(_) => "card_submitted",
            Self::LikeToggled { .. } => "like_toggled",
            Self::DeleteConfirmed { .. } => "delete_confirmed",
            Self::UserLoaded(_) => "user_loaded",
            Self::CardsLoaded(_) => "cards_loaded",
            Self::ProfileSaved(_) => "profile_saved",
            Self::AvatarSaved(_) => "avatar_saved",
            Self::CardCreated(_) => "card_created",
            Self::CardRemoved { .. } => "card_removed",
            Self::LikeSettled(_) => "like_settled",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        !matches!(
            self,
            Self::Started
                | Self::UserLoaded(_)
                | Self::CardsLoaded(_)
                | Self::ProfileSaved(_)
                | Self::AvatarSaved(_)
                | Self::CardCreated(_)
                | Self::CardRemoved { .. }
                | Self::LikeSettled(_)
        )
    }
}
