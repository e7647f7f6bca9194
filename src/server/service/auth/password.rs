//! Salted password hashing with Argon2.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::server::error::AppError;

/// Hashes a password with a fresh random salt, returning the PHC string.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Checks a password against a stored PHC hash.
///
/// A stored value that does not parse as a hash never matches.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_salted_and_verifiable() {
        let first = hash_password("clave123").unwrap();
        let second = hash_password("clave123").unwrap();

        assert_ne!(first, "clave123");
        assert_ne!(first, second);
        assert!(verify_password("clave123", &first));
        assert!(verify_password("clave123", &second));
    }

    #[test]
    fn wrong_password_does_not_match() {
        let hash = hash_password("clave123").unwrap();

        assert!(!verify_password("clave124", &hash));
    }

    #[test]
    fn plaintext_stored_value_never_matches() {
        assert!(!verify_password("clave123", "clave123"));
    }
}
