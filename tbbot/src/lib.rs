// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! TBBot core: greeting detection and the agent that answers greetings.

pub mod agent;
pub mod constants;
pub mod greeting;

pub use agent::{AgentError, GreetingAgent, Message, MessageProcessor, Response};
pub use greeting::{generate_greeting_response, is_greeting};
