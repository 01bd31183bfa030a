/// Stored in place of a password hash for fixture users; never verifies against any input
pub static UNUSABLE_PASSWORD: &str = "!";

/// 40 character token key used by fixtures
pub static TEST_TOKEN_KEY: &str = "0123456789abcdef0123456789abcdef01234567";
