//! The controller: turns intents into gateway calls and reconciles the
//! confirmed results into the model.
//!
//! Every mutation follows the same shape. The intent issues one gateway
//! request and changes nothing; the result event applies the server's value
//! and closes dialogs on success, or logs and leaves the model untouched on
//! failure. There is no optimistic state, so there is nothing to roll back.

use tracing::{debug, info, warn};

use crate::capabilities::{Capabilities, GatewayError, GatewayResult};
use crate::dialog::Dialog;
use crate::event::{Event, ValidationError};
use crate::model::{CardId, Model, UserProfile};
use crate::view::ViewModel;

#[derive(Default)]
pub struct App;

impl App {
    fn open_dialog(dialog: Dialog, model: &mut Model, caps: &Capabilities) {
        model.dialog.open(dialog);
        caps.render.render();
    }

    fn report_failure(operation: &'static str, error: &GatewayError) {
        warn!(op = operation, error = %error, "gateway operation failed");
    }

    fn reject_submission(intent: &'static str, error: &ValidationError) {
        warn!(intent, error = %error, "submission rejected before gateway call");
    }

    /// Adds or removes the current user's like depending on whether they are
    /// already among the card's likers. The stored card is only replaced once
    /// the server answers.
    fn toggle_like(card_id: &CardId, model: &Model, caps: &Capabilities) {
        let Some(card) = model.cards.get(card_id) else {
            debug!(card_id = %card_id, "like toggled on unknown card");
            return;
        };

        let liked = model
            .user
            .id()
            .is_some_and(|user_id| card.is_liked_by(user_id));

        if liked {
            caps.gateway
                .remove_like(card_id.clone(), |r| Event::LikeSettled(Box::new(r)));
        } else {
            caps.gateway
                .add_like(card_id.clone(), |r| Event::LikeSettled(Box::new(r)));
        }
    }

    fn apply_profile(
        operation: &'static str,
        result: GatewayResult<UserProfile>,
        close_dialogs: bool,
        model: &mut Model,
        caps: &Capabilities,
    ) {
        match result {
            Ok(profile) => {
                debug!(op = operation, user_id = %profile.id, "profile replaced");
                model.user.replace(profile);
                if close_dialogs {
                    model.dialog.close_all();
                }
                caps.render.render();
            }
            Err(e) => Self::report_failure(operation, &e),
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        if event.is_user_initiated() {
            debug!(event = event.name(), "user action");
        }

        match event {
            Event::Started => {
                // Independent loads; either may finish first or fail alone.
                caps.gateway
                    .get_user(|r| Event::UserLoaded(Box::new(r)));
                caps.gateway
                    .get_cards(|r| Event::CardsLoaded(Box::new(r)));
            }

            Event::EditProfileClicked => Self::open_dialog(Dialog::EditProfile, model, caps),
            Event::EditAvatarClicked => Self::open_dialog(Dialog::EditAvatar, model, caps),
            Event::AddPlaceClicked => Self::open_dialog(Dialog::AddPlace, model, caps),
            Event::CardClicked(card) => Self::open_dialog(Dialog::ViewImage(card), model, caps),
            Event::CardDeleteClicked(card) => {
                Self::open_dialog(Dialog::ConfirmDelete(card), model, caps);
            }
            Event::CloseDialogs => {
                model.dialog.close_all();
                caps.render.render();
            }

            Event::ProfileSubmitted(update) => match update.validate() {
                Ok(()) => caps
                    .gateway
                    .edit_user(update, |r| Event::ProfileSaved(Box::new(r))),
                Err(e) => Self::reject_submission("profile", &e),
            },
            Event::AvatarSubmitted(update) => match update.validate() {
                Ok(()) => caps
                    .gateway
                    .edit_avatar(update, |r| Event::AvatarSaved(Box::new(r))),
                Err(e) => Self::reject_submission("avatar", &e),
            },
            Event::CardSubmitted(card) => match card.validate() {
                Ok(()) => caps
                    .gateway
                    .add_card(card, |r| Event::CardCreated(Box::new(r))),
                Err(e) => Self::reject_submission("card", &e),
            },
            Event::LikeToggled { card_id } => Self::toggle_like(&card_id, model, caps),
            Event::DeleteConfirmed { card_id } => {
                caps.gateway.delete_card(card_id.clone(), move |r| {
                    Event::CardRemoved {
                        card_id,
                        result: Box::new(r),
                    }
                });
            }

            Event::UserLoaded(result) => {
                Self::apply_profile("get_user", *result, false, model, caps);
            }
            Event::CardsLoaded(result) => match *result {
                Ok(cards) => {
                    info!(count = cards.len(), "cards loaded");
                    model.cards.replace_all(cards);
                    caps.render.render();
                }
                Err(e) => Self::report_failure("get_cards", &e),
            },
            Event::ProfileSaved(result) => {
                Self::apply_profile("edit_user", *result, true, model, caps);
            }
            Event::AvatarSaved(result) => {
                Self::apply_profile("edit_avatar", *result, true, model, caps);
            }
            Event::CardCreated(result) => match *result {
                Ok(card) => {
                    debug!(card_id = %card.id, "card created");
                    model.cards.prepend(card);
                    model.dialog.close_all();
                    caps.render.render();
                }
                Err(e) => Self::report_failure("add_card", &e),
            },
            Event::CardRemoved { card_id, result } => match *result {
                Ok(()) => {
                    debug!(card_id = %card_id, "card deleted");
                    model.cards.remove_by_id(&card_id);
                    model.dialog.close_all();
                    caps.render.render();
                }
                Err(e) => Self::report_failure("delete_card", &e),
            },
            Event::LikeSettled(result) => match *result {
                Ok(card) => {
                    let id = card.id.clone();
                    if model.cards.replace_by_id(&id, card) {
                        caps.render.render();
                    } else {
                        debug!(card_id = %id, "like settled for card no longer stored");
                    }
                }
                Err(e) => Self::report_failure("toggle_like", &e),
            },
        }
    }

    fn view(&self, model: &Model) -> ViewModel {
        ViewModel::build(model)
    }
}
