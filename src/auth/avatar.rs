/**
 * Avatar Derivation
 *
 * Gravatar URIs are content-addressed by email, so the avatar can be
 * derived at registration time with no network round-trip. Parameters:
 * size 200, rating "g", and the "mp" (mystery-person) fallback for
 * addresses without a Gravatar.
 */

use sha2::{Digest, Sha256};

/// Derive the Gravatar URI for an email address.
///
/// Gravatar hashes the trimmed, lowercased address; two spellings of the
/// same mailbox map to the same avatar.
pub fn avatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = hex::encode(Sha256::digest(normalized.as_bytes()));
    format!("https://www.gravatar.com/avatar/{digest}?s=200&r=g&d=mp")
}
