use super::principal_name::new_nt_principal;
use crate::core::forge::KrbUser;
use crate::core::Cipher;
use kerberos_asn1::{
    ApReq, Asn1Object, Authenticator, EncryptedData, PaData, PaForUser,
    PrincipalName, Ticket,
};
use kerberos_constants::key_usages::{
    KEY_USAGE_KERB_NON_KERB_CKSUM_SALT, KEY_USAGE_TGS_REQ_AUTHEN,
};
use kerberos_constants::pa_data_types::{PA_FOR_USER, PA_TGS_REQ};
use kerberos_constants::checksum_types;
use kerberos_crypto::checksum_hmac_md5;

/// Helper to create a PA-DATA that contains a PA-FOR-USER struct
/// used in S4U2Self
pub fn new_pa_data_pa_for_user(
    impersonate_user: &KrbUser,
    session_key: &[u8],
) -> PaData {
    let pa_for_user = new_pa_for_user(impersonate_user, session_key);
    return PaData::new(PA_FOR_USER, pa_for_user.build());
}

/// Helper to easily create a PA-FOR-USER struct used in S4U2Self
fn new_pa_for_user(user: &KrbUser, session_key: &[u8]) -> PaForUser {
    let mut pa_for_user = PaForUser::default();
    pa_for_user.username = new_nt_principal(&user.name);
    pa_for_user.userrealm = user.realm.clone();
    pa_for_user.auth_package = "Kerberos".to_string();

    let mut ck_value = pa_for_user.username.name_type.to_le_bytes().to_vec();
    ck_value
        .append(&mut pa_for_user.username.name_string[0].clone().into_bytes());
    ck_value.append(&mut pa_for_user.userrealm.clone().into_bytes());
    ck_value.append(&mut pa_for_user.auth_package.clone().into_bytes());

    let cksum = checksum_hmac_md5(
        session_key,
        KEY_USAGE_KERB_NON_KERB_CKSUM_SALT,
        &ck_value,
    );

    pa_for_user.cksum.cksumtype = checksum_types::HMAC_MD5;
    pa_for_user.cksum.checksum = cksum;

    return pa_for_user;
}

/// Helper to create a PA-DATA that contains an AP-REQ struct, which
/// authenticates the TGS-REQ with the TGT and its session key
pub fn new_pa_data_ap_req(
    cname: &PrincipalName,
    crealm: &str,
    ticket: Ticket,
    cipher: &Cipher,
) -> PaData {
    let authenticator = new_authenticator(cname, crealm);

    let encrypted_authenticator =
        cipher.encrypt(KEY_USAGE_TGS_REQ_AUTHEN, &authenticator.build());

    let ap_req =
        new_ap_req(ticket, cipher.etype(), encrypted_authenticator);
    return PaData::new(PA_TGS_REQ, ap_req.build());
}

fn new_authenticator(cname: &PrincipalName, crealm: &str) -> Authenticator {
    let mut authenticator = Authenticator::default();
    authenticator.crealm = crealm.to_string();
    authenticator.cname = cname.clone();
    return authenticator;
}

fn new_ap_req(ticket: Ticket, etype: i32, cipher: Vec<u8>) -> ApReq {
    let mut ap_req = ApReq::default();
    ap_req.ticket = ticket;
    ap_req.authenticator = EncryptedData {
        etype,
        kvno: None,
        cipher,
    };

    return ap_req;
}
