use rand::Rng;

/// Number of random bytes in a token key, hex encoded to 40 characters
const TOKEN_KEY_BYTES: usize = 20;

/// Generates a new random API token key of 40 lowercase hex characters.
pub fn generate_token_key() -> String {
    let mut bytes = [0u8; TOKEN_KEY_BYTES];
    rand::rng().fill(&mut bytes);

    hex::encode(bytes)
}
