use serde::{Deserialize, Serialize};

use crate::dialog::Dialog;
use crate::model::{Card, Model, UserId, UserProfile};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub about: String,
    pub avatar: String,
}

impl From<&UserProfile> for UserView {
    fn from(p: &UserProfile) -> Self {
        Self {
            id: p.id.0.clone(),
            name: p.name.clone(),
            about: p.about.clone(),
            avatar: p.avatar.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub link: String,
    pub like_count: usize,
    /// The current user is among the likers.
    pub is_liked: bool,
    /// The current user owns the card; only then is deletion offered.
    pub is_owner: bool,
}

impl CardView {
    fn build(card: &Card, viewer: Option<&UserId>) -> Self {
        Self {
            id: card.id.0.clone(),
            name: card.name.clone(),
            link: card.link.clone(),
            like_count: card.like_count(),
            is_liked: viewer.is_some_and(|uid| card.is_liked_by(uid)),
            is_owner: viewer.is_some_and(|uid| card.is_owned_by(uid)),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DialogView {
    Closed,
    /// Form fields start from the current profile.
    EditProfile {
        name: String,
        about: String,
    },
    EditAvatar,
    AddPlace,
    ViewImage {
        name: String,
        link: String,
    },
    ConfirmDelete {
        card_id: String,
    },
}

impl DialogView {
    fn build(dialog: &Dialog, user: Option<&UserProfile>) -> Self {
        match dialog {
            Dialog::Closed => Self::Closed,
            Dialog::EditProfile => Self::EditProfile {
                name: user.map(|u| u.name.clone()).unwrap_or_default(),
                about: user.map(|u| u.about.clone()).unwrap_or_default(),
            },
            Dialog::EditAvatar => Self::EditAvatar,
            Dialog::AddPlace => Self::AddPlace,
            Dialog::ViewImage(card) => Self::ViewImage {
                name: card.name.clone(),
                link: card.link.clone(),
            },
            Dialog::ConfirmDelete(card) => Self::ConfirmDelete {
                card_id: card.id.0.clone(),
            },
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub user: Option<UserView>,
    pub cards: Vec<CardView>,
    pub dialog: DialogView,
}

impl ViewModel {
    #[must_use]
    pub fn build(model: &Model) -> Self {
        let profile = model.user.profile();
        let viewer = model.user.id();

        Self {
            user: profile.map(UserView::from),
            cards: model
                .cards
                .iter()
                .map(|card| CardView::build(card, viewer))
                .collect(),
            dialog: DialogView::build(&model.dialog, profile),
        }
    }
}
