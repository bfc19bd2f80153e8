// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

/// Keywords that mark a message as a greeting. Matched against the
/// lowercased message, so they must stay lowercase.
pub const GREETING_KEYWORDS: [&str; 3] = ["hello", "hi", "hey"];

/// Reply sent back for every greeting.
pub const GREETING_RESPONSE: &str =
    "Hi, my name is TBBot. I am here to help you with your questions";
