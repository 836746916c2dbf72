//! UUID value generator.

use dbaker_core::GeneratedValue;
use rand::Rng;

/// Generate a random UUID v4 using the provided RNG.
pub fn generate_uuid_v4<R: Rng>(rng: &mut R) -> GeneratedValue {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    GeneratedValue::Uuid(uuid::Builder::from_random_bytes(bytes).into_uuid())
}

/// Check that `s` is a hyphenated version-4 UUID.
#[cfg(test)]
pub(crate) fn is_uuid_v4(s: &str) -> bool {
    s.len() == 36
        && uuid::Uuid::try_parse(s)
            .map(|u| u.get_version_num() == 4)
            .unwrap_or(false)
}
