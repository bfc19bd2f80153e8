// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use std::sync::Arc;

use tbbot::{GreetingAgent, MessageProcessor};

use crate::config::ServerConfig;

pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod messages;
pub mod transport;

pub use errors::HandlerError;

/// Application state to be shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Agent answering chat messages
    pub agent: Arc<dyn MessageProcessor>,
}

impl AppState {
    pub fn new(config: ServerConfig, agent: Arc<dyn MessageProcessor>) -> Self {
        Self {
            config: Arc::new(config),
            agent,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default(), Arc::new(GreetingAgent::new()))
    }
}
