use super::service_creds::service_creds;
use super::AcquireContext;
use crate::core::forge::{
    new_nt_principal, new_pa_data_pa_for_user, ServiceRef,
};
use crate::core::forge::KrbUser;
use crate::core::TicketCred;
use crate::error::{Error, Result};
use kerberos_asn1::Ticket;
use kerberos_constants::kdc_options;
use log::debug;

/// Used by a middle service to acquire a ticket to itself on behalf of
/// `impersonated`, without knowing any of that user's secrets
/// (S4U2Self). The KDC identifies the user through a PA-FOR-USER
/// pre-auth entry sealed with the session key of the middle service's
/// TGT.
pub fn acquire_s4u2self_creds(
    ctx: &AcquireContext,
    impersonated: &KrbUser,
    middle_tgt: &TicketCred,
) -> Result<TicketCred> {
    let client_realm = middle_tgt
        .client_realm()
        .ok_or("Unable to get the client realm of the TGT")?;

    if &impersonated.realm != client_realm {
        return Err(Error::UnsupportedCrossRealm);
    }
    if !middle_tgt.is_forwardable() {
        return Err(Error::Precondition(
            "S4U2self needs a FORWARDABLE ticket".to_string(),
        ));
    }

    let cname = middle_tgt
        .client_name()
        .ok_or("Unable to get the client of the TGT")?
        .clone();

    debug!("S4U2self: {} on behalf of {}", cname.name_string.join("/"), impersonated);

    // the middle service asks for a ticket to itself
    let service = ServiceRef::new(cname.clone(), client_realm.clone());
    let pa_for_user = new_pa_data_pa_for_user(
        impersonated,
        &middle_tgt.cred_info.key.keyvalue,
    );

    let creds = service_creds(
        ctx,
        kdc_options::FORWARDABLE,
        middle_tgt,
        &cname,
        &service,
        &[],
        &[pa_for_user],
    )?;

    let impersonated_name = new_nt_principal(&impersonated.name);
    if creds.client_name() != Some(&impersonated_name)
        || creds.client_realm() != Some(&impersonated.realm)
    {
        return Err(Error::KdcRefused(
            "S4U2self request not honored by KDC".to_string(),
        ));
    }
    if !creds.is_forwardable() {
        return Err(Error::KdcRefused(
            "S4U2self ticket must be FORWARDABLE".to_string(),
        ));
    }

    return Ok(creds);
}

/// Used by a middle service to acquire a ticket to a backend service
/// on behalf of the client named in `evidence_ticket`, the ticket that
/// client presented to the middle service (S4U2Proxy).
pub fn acquire_s4u2proxy_creds(
    ctx: &AcquireContext,
    backend_spn: &str,
    evidence_ticket: Ticket,
    expected_client: &KrbUser,
    middle_tgt: &TicketCred,
) -> Result<TicketCred> {
    let client_realm = middle_tgt
        .client_realm()
        .ok_or("Unable to get the client realm of the TGT")?;
    let cname = middle_tgt
        .client_name()
        .ok_or("Unable to get the client of the TGT")?
        .clone();
    let service = ServiceRef::from_spn(backend_spn, client_realm);

    debug!("S4U2proxy: {} on behalf of {}", service, expected_client);

    let options =
        kdc_options::CONSTRAINED_DELEGATION | kdc_options::FORWARDABLE;

    let creds = service_creds(
        ctx,
        options,
        middle_tgt,
        &cname,
        &service,
        &[evidence_ticket],
        &[],
    )?;

    let expected_name = new_nt_principal(&expected_client.name);
    if creds.client_name() != Some(&expected_name)
        || creds.client_realm() != Some(&expected_client.realm)
    {
        return Err(Error::KdcRefused(
            "S4U2proxy request not honored by KDC".to_string(),
        ));
    }

    return Ok(creds);
}
