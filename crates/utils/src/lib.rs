use rand::{distributions::Alphanumeric, Rng};

/// Generates a random alphanumeric secret, e.g. a webhook signing key
pub fn create_random_secret(secret_len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(secret_len)
        .map(char::from)
        .collect()
}
