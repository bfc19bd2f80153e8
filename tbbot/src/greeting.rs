// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Greeting detection
//!
//! A message is a greeting when its lowercased text contains one of
//! [`GREETING_KEYWORDS`] anywhere, including inside a longer word
//! ("hiya" and "hint" both match through "hi").

use crate::constants::{GREETING_KEYWORDS, GREETING_RESPONSE};

/// Check whether a message contains a greeting keyword.
pub fn is_greeting(message: &str) -> bool {
    if message.is_empty() {
        return false;
    }

    let message = message.to_lowercase();
    GREETING_KEYWORDS
        .iter()
        .any(|keyword| message.contains(keyword))
}

/// The standard TBBot greeting.
pub fn generate_greeting_response() -> &'static str {
    GREETING_RESPONSE
}
