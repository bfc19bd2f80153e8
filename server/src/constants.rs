// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

pub const SERVER_HOST: &str = "127.0.0.1";
pub const SERVER_PORT: u16 = 8000;

/// Body detail returned for every internal failure.
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";
