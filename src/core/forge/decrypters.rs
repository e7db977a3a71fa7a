use super::krb_cred::new_krb_cred_info;
use crate::core::Cipher;
use crate::core::TicketCred;
use crate::error::{Error, Result};
use kerberos_asn1::{Asn1Object, EncTgsRepPart, EncryptedData, TgsRep};
use kerberos_constants::key_usages;

/// Decodes a TGS-REP into the credential it transports, by opening the
/// enc-part with the session key of the TGT that authenticated the
/// request.
pub fn extract_ticket_from_tgs_rep(
    tgs_rep: TgsRep,
    cipher: &Cipher,
) -> Result<TicketCred> {
    let enc_tgs_rep_raw =
        decrypt_tgs_rep_enc_part(&cipher, &tgs_rep.enc_part)?;

    let (_, enc_tgs_rep_part) = EncTgsRepPart::parse(&enc_tgs_rep_raw)
        .map_err(|_| {
            Error::DataError("Error parsing EncTgsRepPart".to_string())
        })?;

    let krb_cred_info_tgs = new_krb_cred_info(
        enc_tgs_rep_part.into(),
        tgs_rep.crealm,
        tgs_rep.cname,
    );

    return Ok((tgs_rep.ticket, krb_cred_info_tgs).into());
}

/// Decrypts the TGS-REP enc-part by using the session key
fn decrypt_tgs_rep_enc_part(
    cipher: &Cipher,
    enc_part: &EncryptedData,
) -> Result<Vec<u8>> {
    let raw_enc_tgs_rep_part = cipher
        .decrypt(
            key_usages::KEY_USAGE_TGS_REP_ENC_PART_SESSION_KEY,
            &enc_part.cipher,
        )
        .map_err(|error| {
            Error::DataError(format!("Error decrypting TGS-REP: {}", error))
        })?;

    return Ok(raw_enc_tgs_rep_part);
}
