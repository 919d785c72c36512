use hmac::Hmac;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

const SALT_LEN: usize = 32;
const KEY_LEN: usize = 32;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("key derivation failed: {0}")]
    Derivation(#[from] hmac::digest::InvalidLength),

    #[error("stored credential is not valid hex: {0}")]
    Encoding(#[from] hex::FromHexError),
}

/// PBKDF2-HMAC-SHA256 output as stored on an account.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Credential {
    pub salt: String, // hex
    pub hash: String, // hex
    pub iterations: u32,
}

pub fn hash_password(password: &str, iterations: u32) -> Result<Credential, PasswordError> {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);

    let key = derive(password.as_bytes(), &salt, iterations)?;
    Ok(Credential {
        salt: hex::encode(salt),
        hash: hex::encode(key),
        iterations,
    })
}

pub fn verify_password(password: &str, credential: &Credential) -> Result<bool, PasswordError> {
    let salt = hex::decode(&credential.salt)?;
    let expected = hex::decode(&credential.hash)?;
    let actual = derive(password.as_bytes(), &salt, credential.iterations)?;
    Ok(constant_time_eq(&actual, &expected))
}

fn derive(password: &[u8], salt: &[u8], iterations: u32) -> Result<[u8; KEY_LEN], PasswordError> {
    let mut key = [0u8; KEY_LEN];
    pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, iterations, &mut key)?;
    Ok(key)
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_only_the_hashed_password() {
        let credential = hash_password("secret", 1_000).unwrap();
        assert!(verify_password("secret", &credential).unwrap());
        assert!(!verify_password("Secret", &credential).unwrap());
        assert!(!verify_password("", &credential).unwrap());
    }

    #[test]
    fn salts_differ_between_hashes() {
        let a = hash_password("secret", 1_000).unwrap();
        let b = hash_password("secret", 1_000).unwrap();
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.hash, b.hash);
        assert_eq!(a.salt.len(), SALT_LEN * 2);
        assert_eq!(a.hash.len(), KEY_LEN * 2);
    }

    #[test]
    fn corrupted_credential_is_an_error() {
        let mut credential = hash_password("secret", 1_000).unwrap();
        credential.salt = "not hex".to_string();
        assert!(verify_password("secret", &credential).is_err());
    }
}
