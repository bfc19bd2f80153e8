// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Agents turn an inbound student message into a reply.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::greeting::{generate_greeting_response, is_greeting};

/// A student message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message stamped with the current time.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// An agent reply. Empty content means the agent had nothing to say.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Response {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum AgentError {
    /// The agent could not produce a reply.
    #[error("Agent failed to process message: {0}")]
    Internal(String),
}

/// Anything that can answer a student message.
pub trait MessageProcessor: Send + Sync {
    fn handle(&self, message: &Message) -> Result<Response, AgentError>;
}

/// Agent that answers greetings and stays silent otherwise.
#[derive(Clone, Debug, Default)]
pub struct GreetingAgent;

impl GreetingAgent {
    pub fn new() -> Self {
        info!("GreetingAgent initialized");
        Self
    }

    /// Reply to a message: the TBBot greeting if it contains a greeting
    /// keyword, an empty string otherwise.
    pub fn process_message(&self, message: &str) -> String {
        if is_greeting(message) {
            generate_greeting_response().to_owned()
        } else {
            String::new()
        }
    }

    /// Same as [`GreetingAgent::process_message`] for a timestamped message.
    pub fn respond(&self, message: &Message) -> Response {
        let reply = self.process_message(&message.content);
        debug!(
            message_length = message.content.len(),
            greeting = !reply.is_empty(),
            "Classified message"
        );
        Response::new(reply)
    }
}

impl MessageProcessor for GreetingAgent {
    fn handle(&self, message: &Message) -> Result<Response, AgentError> {
        Ok(self.respond(message))
    }
}
