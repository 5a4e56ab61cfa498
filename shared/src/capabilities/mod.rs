pub mod gateway;
pub mod http;

pub use self::gateway::{Gateway, GatewayError, GatewayOperation, GatewayOutput, GatewayResult};

// Crux's built-in Render capability covers view updates as-is.
pub use crux_core::render::Render;

// The Effect derive wires the capabilities to `App` by name.
#[allow(unused_imports)]
use crate::app::App;
use crate::event::Event;

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub gateway: Gateway<Event>,
    pub render: Render<Event>,
}
