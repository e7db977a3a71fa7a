use super::exchange::TgsRequest;
use super::trace::TraceEvent;
use super::AcquireContext;
use crate::core::forge::ServiceRef;
use crate::core::TicketCred;
use log::debug;

/// Walks the configured realm hierarchy to obtain a TGT usable in
/// `service_realm`, starting from a TGT for `local_realm`.
///
/// Returns the TGT, if one was reached, together with the aggregate
/// ok-as-delegate property of the hops: true only if every TGT along
/// the way allows delegation. Probe failures are not errors, they just
/// mean there is no route through that realm.
pub fn tgt_for_realm(
    ctx: &AcquireContext,
    local_realm: &str,
    service_realm: &str,
    starting_tgt: &TicketCred,
) -> (Option<TicketCred>, bool) {
    let realms = ctx.config.realms_list(local_realm, service_realm);

    let mut ok_as_delegate = true;
    let mut ctgt = starting_tgt.clone();
    let mut i = 0;

    while i < realms.len() {
        // Ask the realm at hand for a TGT straight into the service
        // realm.
        let mut new_tgt = probe(ctx, &ctgt, service_realm, &realms[i]);

        if new_tgt.is_none() {
            // No shortcut. Scan the rest of the configured path, left
            // to right, for any realm this one can hand us over to.
            for k in (i + 1)..realms.len() {
                new_tgt = probe(ctx, &ctgt, &realms[k], &realms[i]);
                if new_tgt.is_some() {
                    break;
                }
            }
        }

        let new_tgt = match new_tgt {
            Some(new_tgt) => new_tgt,
            None => {
                debug!("no TGT obtainable from {}", realms[i]);
                return (None, ok_as_delegate);
            }
        };

        if ok_as_delegate && !new_tgt.is_ok_as_delegate() {
            ctx.trace.record(TraceEvent::DelegateFlagCleared {
                at: new_tgt.server_string(),
            });
            ok_as_delegate = false;
        }

        let new_target = match new_tgt.service_host() {
            Some(realm) => realm.clone(),
            None => return (None, ok_as_delegate),
        };

        if new_target == service_realm {
            return (Some(new_tgt), ok_as_delegate);
        }

        // The new TGT lands short of the target. Continue from its
        // realm if it is part of the configured hierarchy; following a
        // TGS outside the known realms list is not safe.
        match ((i + 1)..realms.len()).find(|&k| realms[k] == new_target) {
            Some(k) => {
                i = k;
                ctgt = new_tgt;
            }
            None => {
                debug!(
                    "TGT for {} leads outside the configured capath",
                    new_target
                );
                return (None, ok_as_delegate);
            }
        }
    }

    return (None, ok_as_delegate);
}

/// One cross-realm TGS request: `krbtgt/<to_realm>` issued by
/// `<from_realm>`. Every failure is swallowed so the traversal can try
/// alternative paths.
fn probe(
    ctx: &AcquireContext,
    ctgt: &TicketCred,
    to_realm: &str,
    from_realm: &str,
) -> Option<TicketCred> {
    ctx.trace.record(TraceEvent::ProbeAttempt {
        from: from_realm.to_string(),
        to: to_realm.to_string(),
    });

    let service = ServiceRef::tgs(to_realm, from_realm);
    let cname = ctgt.client_name()?.clone();
    let crealm = ctgt.client_realm()?.clone();

    let req = TgsRequest {
        kdc_options: 0,
        as_tgt: ctgt.clone(),
        cname,
        crealm,
        client_alias: None,
        ref_service: service.clone(),
        canonical_service: service,
        additional_tickets: Vec::new(),
        extra_padatas: Vec::new(),
    };

    match ctx.exchange.send(&req) {
        Ok(new_tgt) => return Some(new_tgt),
        Err(error) => {
            debug!(
                "no TGT from {} towards {}: {}",
                from_realm, to_realm, error
            );
            return None;
        }
    }
}
