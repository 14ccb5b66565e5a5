use argon2::password_hash::rand_core::OsRng;
use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use std::fmt;

use crate::errors::internal::InternalError;

/// Hashes and verifies account passwords with Argon2id
///
/// Hashes are stored in PHC string form, so the parameters used at hash
/// time travel with the hash and verification never needs them spelled
/// out again.
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl PasswordService {
    /// Create a new PasswordService with the default Argon2id parameters
    pub fn new() -> Self {
        Self::with_params(Params::default())
    }

    /// Create a PasswordService with explicit cost parameters
    ///
    /// Lower costs make bulk hashing in tests bearable; production code
    /// sticks with `new`.
    pub fn with_params(params: Params) -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    /// Hash a plaintext password with a fresh random salt
    ///
    /// # Arguments
    /// * `password` - The plaintext password to hash
    ///
    /// # Returns
    /// * `Result<String, InternalError>` - The PHC-format hash or an error
    pub fn hash(&self, password: &str) -> Result<String, InternalError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| InternalError::crypto("hash_password", e.to_string()))?
            .to_string();

        Ok(password_hash)
    }

    /// Verify a plaintext password against a stored hash
    ///
    /// An unparseable stored hash counts as a failed verification rather
    /// than an error, so callers cannot distinguish the two.
    pub fn verify(&self, stored_hash: &str, password: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(stored_hash) else {
            return false;
        };

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PasswordService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self.argon2.params();
        f.debug_struct("PasswordService")
            .field("m_cost", &params.m_cost())
            .field("t_cost", &params.t_cost())
            .field("p_cost", &params.p_cost())
            .finish()
    }
}
