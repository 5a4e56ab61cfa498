#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod capabilities;
pub mod cards;
pub mod config;
pub mod dialog;
pub mod event;
pub mod model;
pub mod profile;
pub mod view;

pub use app::App;
pub use capabilities::{
    Capabilities, Effect, Gateway, GatewayError, GatewayOperation, GatewayOutput, GatewayResult,
};
pub use cards::CardCollection;
pub use config::{ConfigError, GatewayConfig};
pub use crux_core::{render::Render, App as CruxApp};
pub use dialog::Dialog;
pub use event::{AvatarUpdate, Event, NewCard, ProfileUpdate, ValidationError};
pub use model::{Card, CardId, Model, UserId, UserProfile};
pub use profile::CurrentUser;
pub use view::{CardView, DialogView, UserView, ViewModel};

pub const MIN_PROFILE_FIELD_LEN: usize = 2;
pub const MAX_PROFILE_FIELD_LEN: usize = 200;
pub const MAX_CARD_NAME_LEN: usize = 30;
pub const MAX_LINK_LEN: usize = 2048;

pub const DEFAULT_API_URL: &str = "https://around-api.en.tripleten-services.com/v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const MAX_TIMEOUT_MS: u64 = 300_000;
pub const MAX_URL_LENGTH: usize = 2048;
pub const MAX_HEADERS_COUNT: usize = 100;
pub const MAX_HEADER_VALUE_LENGTH: usize = 8192;
pub const MAX_RESPONSE_BODY_SIZE: usize = 10 * 1024 * 1024;
