//! Opaque identifier generation for sessions and uploads.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Generate an unguessable session id: 256 random bits hashed together with
/// the current time, hex encoded.
pub fn generate_session_id() -> String {
  let mut bytes = [0u8; 32];
  rand::rng().fill_bytes(&mut bytes);

  let mut hasher = Sha256::new();
  hasher.update(bytes);
  hasher.update(
    chrono::Utc::now()
      .timestamp_nanos_opt()
      .unwrap_or_default()
      .to_le_bytes(),
  );
  hex::encode(hasher.finalize())
}

/// Shorter id for uploaded documents. Uniqueness matters, secrecy does not.
pub fn generate_file_id() -> String {
  let mut id = generate_session_id();
  id.truncate(16);
  id
}
