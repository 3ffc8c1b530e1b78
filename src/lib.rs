//! Herald - in-client chat relay core.
//!
//! Intercepts outgoing chat submissions from an interactive client,
//! classifies each one as a local relay command, a message to relay, or
//! normal chat, and forwards qualifying messages to an external
//! messaging bridge without ever blocking the client's main loop.
//!
//! The out-of-scope collaborators are trait seams the embedding client
//! provides: [`bridge::BridgeConnection`] for the transport and
//! [`client::ChatDisplay`] for the chat UI. The client wires its
//! chat-send path through [`client::ChatInterceptor`] and drains the
//! feedback channel on its interactive loop.

pub mod bridge;
pub mod client;
pub mod common;
pub mod config;
pub mod relay;

pub use bridge::BridgeConnection;
pub use client::{
    feedback_channel, ChatDisplay, ChatInterceptor, FeedbackReceiver, FeedbackSender,
    IdentityResolver, InterceptOutcome,
};
pub use common::{ConfigError, FeedbackLine, RelayRequest, TransportError};
pub use config::{BridgeConfig, Config};
pub use relay::{classify, Classification, RelayDispatcher, SessionState, MAX_MESSAGE_LEN};
