use crate::error::Result;
use kerberos_asn1::EncryptionKey;
use kerberos_crypto::{new_kerberos_cipher, KerberosCipher};

/// Cipher bound to a ticket session key, used to seal the TGS-REQ
/// authenticator and open the TGS-REP enc-part.
pub struct Cipher {
    cipher: Box<dyn KerberosCipher>,
    key: Vec<u8>,
}

impl Cipher {
    pub fn new(cipher: Box<dyn KerberosCipher>, key: Vec<u8>) -> Self {
        return Self { cipher, key };
    }

    pub fn from_session_key(key: &EncryptionKey) -> Result<Self> {
        let cipher = new_kerberos_cipher(key.keytype).map_err(|_| {
            format!("Unsupported session key etype {}", key.keytype)
        })?;
        return Ok(Self::new(cipher, key.keyvalue.clone()));
    }

    pub fn etype(&self) -> i32 {
        return self.cipher.etype();
    }

    pub fn encrypt(&self, key_usage: i32, plaintext: &[u8]) -> Vec<u8> {
        return self.cipher.encrypt(&self.key, key_usage, plaintext);
    }

    pub fn decrypt(
        &self,
        key_usage: i32,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>> {
        let plaintext = self
            .cipher
            .decrypt(&self.key, key_usage, ciphertext)
            .map_err(|error| format!("Error decrypting: {}", error))?;
        return Ok(plaintext);
    }
}
