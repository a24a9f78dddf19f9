//! Ephemeral session brokering for the OpenAI realtime API.
//!
//! The broker holds the long-lived secret key and trades it for short-lived
//! session credentials that are safe to hand to a browser client.

pub mod config;
pub mod error;
pub mod session;
pub mod tool;

pub use config::BrokerConfig;
pub use error::BrokerError;
pub use session::{BrokeredSession, SessionBroker};
