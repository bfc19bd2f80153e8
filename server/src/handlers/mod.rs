// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! HTTP endpoint handlers.

pub mod chat;
pub use chat::chat_http;
pub mod health;
pub use health::health_http;
