//! Remote content gateway capability.
//!
//! Every operation is one request/response exchange with the content API,
//! executed by the shell. The core only sees typed outputs or a
//! [`GatewayError`]; it never retries.

use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::event::{AvatarUpdate, NewCard, ProfileUpdate};
use crate::model::{Card, CardId, UserProfile};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum GatewayOperation {
    GetUser,
    EditUser(ProfileUpdate),
    EditAvatar(AvatarUpdate),
    GetCards,
    AddCard(NewCard),
    DeleteCard(CardId),
    AddLike(CardId),
    RemoveLike(CardId),
}

impl GatewayOperation {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GetUser => "get_user",
            Self::EditUser(_) => "edit_user",
            Self::EditAvatar(_) => "edit_avatar",
            Self::GetCards => "get_cards",
            Self::AddCard(_) => "add_card",
            Self::DeleteCard(_) => "delete_card",
            Self::AddLike(_) => "add_like",
            Self::RemoveLike(_) => "remove_like",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data")]
pub enum GatewayOutput {
    User(UserProfile),
    Cards(Vec<Card>),
    Card(Card),
    Deleted,
}

impl GatewayOutput {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::User(_) => "user",
            Self::Cards(_) => "cards",
            Self::Card(_) => "card",
            Self::Deleted => "deleted",
        }
    }

    pub fn into_user(self) -> GatewayResult<UserProfile> {
        match self {
            Self::User(user) => Ok(user),
            other => Err(GatewayError::unexpected("user", &other)),
        }
    }

    pub fn into_cards(self) -> GatewayResult<Vec<Card>> {
        match self {
            Self::Cards(cards) => Ok(cards),
            other => Err(GatewayError::unexpected("cards", &other)),
        }
    }

    pub fn into_card(self) -> GatewayResult<Card> {
        match self {
            Self::Card(card) => Ok(card),
            other => Err(GatewayError::unexpected("card", &other)),
        }
    }

    pub fn into_deleted(self) -> GatewayResult<()> {
        match self {
            Self::Deleted => Ok(()),
            other => Err(GatewayError::unexpected("deleted", &other)),
        }
    }
}

/// Transport, status and decoding failures are kept apart for the log line
/// only; the controller handles them all the same way.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum GatewayError {
    #[error("transport failure: {message}")]
    Transport { message: String },

    #[error("HTTP error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed response: {reason}")]
    Malformed { reason: String },

    #[error("unexpected output: expected {expected}, got {actual}")]
    UnexpectedOutput { expected: String, actual: String },

    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },
}

impl GatewayError {
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    fn unexpected(expected: &str, actual: &GatewayOutput) -> Self {
        Self::UnexpectedOutput {
            expected: expected.to_string(),
            actual: actual.kind().to_string(),
        }
    }
}

pub type GatewayResult<T = GatewayOutput> = Result<T, GatewayError>;

impl Operation for GatewayOperation {
    type Output = GatewayResult;
}

pub struct Gateway<Ev> {
    context: CapabilityContext<GatewayOperation, Ev>,
}

impl<Ev> Capability<Ev> for Gateway<Ev> {
    type Operation = GatewayOperation;
    type MappedSelf<MappedEv> = Gateway<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Gateway::new(self.context.map_event(f))
    }
}

impl<Ev> Gateway<Ev>
where
    Ev: 'static,
{
    pub fn new(context: CapabilityContext<GatewayOperation, Ev>) -> Self {
        Self { context }
    }

    pub fn get_user<F>(&self, make_event: F)
    where
        F: FnOnce(GatewayResult<UserProfile>) -> Ev + Send + 'static,
    {
        self.request(GatewayOperation::GetUser, GatewayOutput::into_user, make_event);
    }

    pub fn edit_user<F>(&self, update: ProfileUpdate, make_event: F)
    where
        F: FnOnce(GatewayResult<UserProfile>) -> Ev + Send + 'static,
    {
        self.request(
            GatewayOperation::EditUser(update),
            GatewayOutput::into_user,
            make_event,
        );
    }

    pub fn edit_avatar<F>(&self, update: AvatarUpdate, make_event: F)
    where
        F: FnOnce(GatewayResult<UserProfile>) -> Ev + Send + 'static,
    {
        self.request(
            GatewayOperation::EditAvatar(update),
            GatewayOutput::into_user,
            make_event,
        );
    }

    pub fn get_cards<F>(&self, make_event: F)
    where
        F: FnOnce(GatewayResult<Vec<Card>>) -> Ev + Send + 'static,
    {
        self.request(GatewayOperation::GetCards, GatewayOutput::into_cards, make_event);
    }

    pub fn add_card<F>(&self, card: NewCard, make_event: F)
    where
        F: FnOnce(GatewayResult<Card>) -> Ev + Send + 'static,
    {
        self.request(GatewayOperation::AddCard(card), GatewayOutput::into_card, make_event);
    }

    pub fn delete_card<F>(&self, id: CardId, make_event: F)
    where
        F: FnOnce(GatewayResult<()>) -> Ev + Send + 'static,
    {
        self.request(
            GatewayOperation::DeleteCard(id),
            GatewayOutput::into_deleted,
            make_event,
        );
    }

    pub fn add_like<F>(&self, id: CardId, make_event: F)
    where
        F: FnOnce(GatewayResult<Card>) -> Ev + Send + 'static,
    {
        self.request(GatewayOperation::AddLike(id), GatewayOutput::into_card, make_event);
    }

    pub fn remove_like<F>(&self, id: CardId, make_event: F)
    where
        F: FnOnce(GatewayResult<Card>) -> Ev + Send + 'static,
    {
        self.request(GatewayOperation::RemoveLike(id), GatewayOutput::into_card, make_event);
    }

    fn request<T, F>(
        &self,
        operation: GatewayOperation,
        extract: fn(GatewayOutput) -> GatewayResult<T>,
        make_event: F,
    ) where
        F: FnOnce(GatewayResult<T>) -> Ev + Send + 'static,
        T: 'static,
    {
        let ctx = self.context.clone();
        self.context.spawn(async move {
            let result = ctx.request_from_shell(operation).await.and_then(extract);
            ctx.update_app(make_event(result));
        });
    }
}
