/**
 * Password Hashing
 *
 * Thin wrappers around bcrypt. The cost factor is fixed at 10 rounds,
 * which keeps hashing deliberately slow; verification runs the same
 * derivation, so both sides of the contract share the cost.
 *
 * Plaintext passwords exist only transiently inside these calls and are
 * never logged.
 */

/// bcrypt cost factor (salt rounds)
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password with a random salt.
///
/// The output is a self-describing bcrypt string (`$2b$10$...`) embedding
/// the salt and cost, so no extra bookkeeping is needed for verification.
pub fn hash_password(plain: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(plain, HASH_COST)
}

/// Verify a plaintext password against a stored hash
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(plain, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_never_equals_plaintext() {
        let hash = hash_password("secret1").unwrap();
        assert_ne!(hash, "secret1");
        assert!(hash.starts_with("$2"));
    }

    #[test]
    fn verify_round_trip() {
        let hash = hash_password("secret1").unwrap();
        assert!(verify_password("secret1", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        // Random salt per hash
        let a = hash_password("secret1").unwrap();
        let b = hash_password("secret1").unwrap();
        assert_ne!(a, b);
    }
}
