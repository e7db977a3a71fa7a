use super::referrals::resolve_referrals;
use super::single::resolve_single;
use super::AcquireContext;
use crate::core::forge::ServiceRef;
use crate::core::TicketCred;
use crate::error::{Error, Result};
use kerberos_asn1::{PaData, PrincipalName, Ticket};
use log::debug;

/// Acquires a ticket for the given service using the client's TGT.
/// Cross-realm traversal is handled, through KDC referrals when
/// enabled or through the configured capath hierarchy otherwise.
///
/// The SPN accepts an explicit realm (`http/web01@OTHER.COM`); without
/// one the service is assumed to live in the client's realm.
pub fn acquire_service_creds(
    ctx: &AcquireContext,
    service_spn: &str,
    initial_tgt: &TicketCred,
) -> Result<TicketCred> {
    let client_realm = initial_tgt
        .client_realm()
        .ok_or("Unable to get the client realm of the TGT")?;
    let cname = initial_tgt
        .client_name()
        .ok_or("Unable to get the client of the TGT")?
        .clone();
    let service = ServiceRef::from_spn(service_spn, client_realm);

    return service_creds(ctx, 0, initial_tgt, &cname, &service, &[], &[]);
}

/// Inner pipeline shared with the S4U front-ends. Referrals are tried
/// first; a KDC error on that path falls back to the pre-referral
/// resolution, for compatibility with KDCs that reject CANONICALIZE.
/// Any other failure is final.
pub(crate) fn service_creds(
    ctx: &AcquireContext,
    kdc_options: u32,
    as_tgt: &TicketCred,
    cname: &PrincipalName,
    service: &ServiceRef,
    additional_tickets: &[Ticket],
    extra_padatas: &[PaData],
) -> Result<TicketCred> {
    if ctx.config.referrals_enabled {
        match resolve_referrals(
            ctx,
            kdc_options,
            as_tgt,
            cname,
            service,
            additional_tickets,
            extra_padatas,
        ) {
            Ok(Some(creds)) => return Ok(creds),
            Ok(None) => return Err(Error::NoServiceCreds),
            Err(error) => {
                if !error.is_kdc_error() {
                    return Err(error);
                }
                debug!(
                    "KDC rejected the referral request ({}), \
                     retrying without canonicalization",
                    error
                );
            }
        }
    }

    return resolve_single(
        ctx,
        kdc_options,
        as_tgt,
        cname,
        as_tgt.client_alias.as_ref(),
        service,
        service,
        additional_tickets,
        extra_padatas,
    );
}
