use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

pub const FINGERPRINT_LEN: usize = 64;

/// Opaque verification token attached to approved documents. A stand-in for
/// a content digest; not derived from file bytes.
pub fn generate() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(FINGERPRINT_LEN)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect()
}
