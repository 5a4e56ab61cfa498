//! Dialog coordinator.
//!
//! A single tagged value stands in for the five modal popups, so two of them
//! can never be open together. Opening while another dialog is up switches
//! directly to the new one; closing always lands on `Closed`.

use serde::{Deserialize, Serialize};

use crate::model::Card;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub enum Dialog {
    #[default]
    Closed,
    EditProfile,
    EditAvatar,
    AddPlace,
    ViewImage(Box<Card>),
    ConfirmDelete(Box<Card>),
}

impl Dialog {
    /// Last write wins; any payload of the previous dialog is dropped.
    pub fn open(&mut self, next: Dialog) {
        if self.is_open() && *self != next {
            tracing::debug!(from = self.name(), to = next.name(), "switching dialog");
        }
        *self = next;
    }

    pub fn close_all(&mut self) {
        *self = Dialog::Closed;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::Closed)
    }

    /// The card carried by `ViewImage` or `ConfirmDelete`.
    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        match self {
            Dialog::ViewImage(card) | Dialog::ConfirmDelete(card) => Some(card),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Dialog::Closed => "closed",
            Dialog::EditProfile => "edit_profile",
            Dialog::EditAvatar => "edit_avatar",
            Dialog::AddPlace => "add_place",
            Dialog::ViewImage(_) => "view_image",
            Dialog::ConfirmDelete(_) => "confirm_delete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CardId, UserId};
    use proptest::prelude::*;

    fn card(id: &str) -> Box<Card> {
        Box::new(Card {
            id: CardId::new(id),
            name: "Lake".into(),
            link: "https://example.com/lake.jpg".into(),
            owner: UserId::new("u1"),
            likes: Default::default(),
        })
    }

    fn any_dialog() -> impl Strategy<Value = Dialog> {
        prop_oneof![
            Just(Dialog::Closed),
            Just(Dialog::EditProfile),
            Just(Dialog::EditAvatar),
            Just(Dialog::AddPlace),
            "[0-9]{1,3}".prop_map(|id| Dialog::ViewImage(card(&id))),
            "[0-9]{1,3}".prop_map(|id| Dialog::ConfirmDelete(card(&id))),
        ]
    }

    #[test]
    fn default_is_closed() {
        let dialog = Dialog::default();
        assert!(!dialog.is_open());
        assert!(dialog.card().is_none());
    }

    #[test]
    fn payload_dialogs_expose_card() {
        let dialog = Dialog::ConfirmDelete(card("1"));
        assert_eq!(dialog.card().map(|c| c.id.as_str()), Some("1"));
        assert!(Dialog::EditAvatar.card().is_none());
    }

    #[test]
    fn opening_over_open_dialog_switches() {
        let mut dialog = Dialog::ViewImage(card("1"));
        dialog.open(Dialog::AddPlace);
        assert_eq!(dialog, Dialog::AddPlace);
        assert!(dialog.card().is_none());
    }

    proptest! {
        #[test]
        fn close_all_always_yields_closed(start in any_dialog()) {
            let mut dialog = start;
            dialog.close_all();
            prop_assert_eq!(&dialog, &Dialog::Closed);
            prop_assert!(dialog.card().is_none());
        }

        #[test]
        fn open_replaces_any_previous_dialog(start in any_dialog(), next in any_dialog()) {
            let mut dialog = start;
            dialog.open(next.clone());
            prop_assert_eq!(dialog, next);
        }
    }
}
