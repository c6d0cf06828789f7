use crate::imports::*;
use sha2::{Digest, Sha256};

pub const DIGEST_HEX_LEN: usize = 64;

/// Lowercase hex SHA-256 of the UTF-8 bytes of `input`.
///
/// A single unsalted pass: it keeps the plain password off the wire,
/// it does not protect against replay of the digest itself.
pub fn digest(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("Password digest must be 64 lowercase hex characters")]
pub struct InvalidDigest;

/// Password as it is sent to the server.
///
/// Still password-equivalent, so it stays a secret until serialized.
#[derive(Clone, Debug)]
pub struct PasswordDigest(SecretString);

impl PasswordDigest {
    pub fn parse(raw: String) -> Result<Self, InvalidDigest> {
        let well_formed = raw.len() == DIGEST_HEX_LEN
            && raw.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));

        if well_formed {
            Ok(Self(SecretString::new(raw)))
        } else {
            Err(InvalidDigest)
        }
    }
}

impl From<SecretString> for PasswordDigest {
    fn from(password: SecretString) -> Self {
        Self(SecretString::new(digest(password.expose_secret())))
    }
}

impl ExposeSecret<String> for PasswordDigest {
    fn expose_secret(&self) -> &String {
        self.0.expose_secret()
    }
}

impl Serialize for PasswordDigest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        expose_secret_string(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for PasswordDigest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_err, assert_ok};

    fn is_lower_hex_64(s: &str) -> bool {
        s.len() == 64 && s.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    #[test]
    fn known_vectors() {
        assert_eq!(
            digest(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            digest("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn digest_is_deterministic_lowercase_hex() {
        for password in ["secret123", "пароль", "with spaces and \u{1F600}", "a"] {
            let first = digest(password);
            let second = digest(password);

            assert_eq!(first, second);
            assert!(is_lower_hex_64(&first), "{first}");
        }
    }

    #[test]
    fn different_passwords_give_different_digests() {
        assert_ne!(digest("secret123"), digest("secret124"));
        assert_ne!(digest("Secret123"), digest("secret123"));
    }

    #[test]
    fn digest_of_secret_matches_helper() {
        let digest_of_secret = PasswordDigest::from(SecretString::new("secret123".into()));

        assert_eq!(digest_of_secret.expose_secret(), &digest("secret123"));
    }

    #[test]
    fn parse_accepts_only_lowercase_hex_of_right_length() {
        assert_ok!(PasswordDigest::parse(digest("abc")));
        assert_err!(PasswordDigest::parse(digest("abc").to_uppercase()));
        assert_err!(PasswordDigest::parse("abc".into()));
        assert_err!(PasswordDigest::parse(format!("{}0", digest("abc"))));
        assert_err!(PasswordDigest::parse("g".repeat(64)));
    }

    #[test]
    fn deserialization_validates_digest() {
        let valid = format!("\"{}\"", digest("abc"));
        let invalid = "\"not-a-digest\"";

        assert_ok!(serde_json::from_str::<PasswordDigest>(&valid));
        assert_err!(serde_json::from_str::<PasswordDigest>(invalid));
    }
}
