use super::single::resolve_single;
use super::trace::TraceEvent;
use super::AcquireContext;
use crate::core::forge::{ServiceRef, TGS_SERVICE_NAME};
use crate::core::TicketCred;
use crate::error::{Error, Result};
use kerberos_asn1::{PaData, PrincipalName, Ticket};
use log::debug;

/// Resolves a service ticket by following the cross-realm referrals
/// the KDCs emit (RFC 6806). The chain is bounded by
/// `Config::max_referrals` and a realm is never visited twice.
///
/// Returns `Ok(None)` when the bound is reached without observing any
/// credential.
pub fn resolve_referrals(
    ctx: &AcquireContext,
    kdc_options: u32,
    as_tgt: &TicketCred,
    cname: &PrincipalName,
    service: &ServiceRef,
    additional_tickets: &[Ticket],
    extra_padatas: &[PaData],
) -> Result<Option<TicketCred>> {
    let options =
        kdc_options | kerberos_constants::kdc_options::CANONICALIZE;

    let crealm = as_tgt
        .client_realm()
        .ok_or("Unable to get the client realm of the TGT")?
        .clone();
    let client_alias = as_tgt.client_alias.clone();

    // The canonical name keeps naming the request while the realm of
    // the referred name moves between KDCs.
    let canonical_service = service.clone();
    let mut current_ref = service.clone();
    let mut as_tgt = as_tgt.clone();
    let mut referrals: Vec<String> = Vec::new();
    let mut creds: Option<TicketCred> = None;

    while referrals.len() <= ctx.config.max_referrals as usize {
        let to_realm;

        match ctx.cache.get(cname, &crealm, service, &current_ref.realm) {
            Some(entry) => {
                debug!(
                    "cached referral from {} towards {}",
                    current_ref.realm, entry.to_realm
                );
                as_tgt = entry.creds;
                to_realm = entry.to_realm;
            }
            None => {
                let new_creds = resolve_single(
                    ctx,
                    options,
                    &as_tgt,
                    cname,
                    client_alias.as_ref(),
                    &current_ref,
                    &canonical_service,
                    additional_tickets,
                    extra_padatas,
                )?;

                match referral_target(&new_creds, &current_ref) {
                    Some((from_realm, referred_realm)) => {
                        ctx.cache.put(
                            cname,
                            &crealm,
                            service,
                            &from_realm,
                            &referred_realm,
                            new_creds.clone(),
                        );
                        as_tgt = new_creds.clone();
                        creds = Some(new_creds);
                        to_realm = referred_realm;
                    }
                    None => {
                        // Either the requested service itself or some
                        // other non-referral answer: hand it out as is.
                        return Ok(Some(new_creds));
                    }
                }
            }
        }

        if referrals.contains(&to_realm) {
            return Err(Error::ReferralLoop);
        }
        ctx.trace.record(TraceEvent::ReferralObserved {
            realm: to_realm.clone(),
        });
        current_ref = current_ref.with_realm(&to_realm);
        referrals.push(to_realm);
    }

    return Ok(creds);
}

/// A reply credential is a referral when the KDC, instead of the
/// requested service, returns `krbtgt/TO-REALM@FROM-REALM` with a
/// TO-REALM other than the one requested. Returns both realms.
fn referral_target(
    creds: &TicketCred,
    requested: &ServiceRef,
) -> Option<(String, String)> {
    if creds.is_for_service(requested) {
        return None;
    }

    let sname = creds.service_name()?;
    if sname.name_string.len() == 2
        && sname.name_string[0] == TGS_SERVICE_NAME
        && sname.name_string[1] != requested.realm
    {
        let from_realm = creds.service_realm()?.clone();
        return Some((from_realm, sname.name_string[1].clone()));
    }

    return None;
}
