use super::capath::tgt_for_realm;
use super::exchange::TgsRequest;
use super::AcquireContext;
use crate::core::forge::ServiceRef;
use crate::core::stringifier::ticket_cred_to_string;
use crate::core::TicketCred;
use crate::error::{Error, Result};
use kerberos_asn1::{PaData, PrincipalName, Ticket};
use log::debug;

/// One logical TGS acquisition. When the TGT in hand does not grant
/// into the realm of the requested service, a TGT for that realm is
/// obtained first by walking the capath hierarchy. Not expected while
/// following referrals, since a referral TGT already lands in the
/// realm it points to.
pub fn resolve_single(
    ctx: &AcquireContext,
    kdc_options: u32,
    as_tgt: &TicketCred,
    cname: &PrincipalName,
    client_alias: Option<&PrincipalName>,
    ref_service: &ServiceRef,
    canonical_service: &ServiceRef,
    additional_tickets: &[Ticket],
    extra_padatas: &[PaData],
) -> Result<TicketCred> {
    let mut as_tgt = as_tgt.clone();
    let mut cname = cname.clone();
    let mut ok_as_delegate = true;

    let tgt_realm = as_tgt
        .service_host()
        .ok_or("Unable to get the TGT realm")?
        .clone();
    let service_realm = &ref_service.realm;

    if service_realm != &tgt_realm {
        debug!(
            "cross-realm request: TGT grants into {}, service lives in {}",
            tgt_realm, service_realm
        );

        let (new_tgt, delegate) =
            tgt_for_realm(ctx, &tgt_realm, service_realm, &as_tgt);
        ok_as_delegate = delegate;

        as_tgt = new_tgt.ok_or(Error::NoServiceCreds)?;
        cname = as_tgt
            .client_name()
            .ok_or("Unable to get the client of the cross-realm TGT")?
            .clone();
    }

    let crealm = as_tgt
        .client_realm()
        .ok_or("Unable to get the client realm of the TGT")?
        .clone();

    let req = TgsRequest {
        kdc_options,
        as_tgt,
        cname,
        crealm,
        client_alias: client_alias.map(|alias| alias.clone()),
        ref_service: ref_service.clone(),
        canonical_service: canonical_service.clone(),
        additional_tickets: additional_tickets.to_vec(),
        extra_padatas: extra_padatas.to_vec(),
    };

    let mut creds = ctx.exchange.send(&req)?;

    if !ok_as_delegate {
        creds.reset_delegate();
    }

    debug!("TGS for {}\n{}", ref_service, ticket_cred_to_string(&creds));

    return Ok(creds);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forge::new_nt_principal;
    use crate::core::requesters::test_kit::{
        kdc_error, new_creds, tgt, ScriptedExchange, TestSetup,
    };
    use kerberos_constants::ticket_flags;

    const DELEGATE: u32 = ticket_flags::OK_AS_DELEGATE;

    #[test]
    fn same_realm_request_goes_straight_to_the_kdc() {
        let service = ServiceRef::from_spn("http/web01", "A.COM");
        let exchange = ScriptedExchange::new(vec![Ok(new_creds(
            ("alice", "A.COM"),
            &service,
            DELEGATE,
        ))]);
        let setup = TestSetup::new();
        let ctx = setup.context(&exchange);

        let initial = tgt(("alice", "A.COM"), "A.COM", "A.COM", DELEGATE);
        let alice = new_nt_principal("alice");

        let creds = resolve_single(
            &ctx, 0, &initial, &alice, None, &service, &service, &[], &[],
        )
        .expect("the service ticket should be returned");

        assert!(creds.is_for_service(&service));
        assert!(creds.is_ok_as_delegate());
        assert_eq!(1, exchange.request_count());
    }

    #[test]
    fn cross_realm_request_prefetches_a_tgt() {
        let service = ServiceRef::from_spn("http/web01", "B.COM");
        let exchange = ScriptedExchange::new(vec![
            // capath probe A -> B, without ok-as-delegate
            Ok(tgt(("alice", "A.COM"), "A.COM", "B.COM", 0)),
            Ok(new_creds(("alice", "A.COM"), &service, DELEGATE)),
        ]);
        let setup = TestSetup::new();
        let ctx = setup.context(&exchange);

        let initial = tgt(("alice", "A.COM"), "A.COM", "A.COM", DELEGATE);
        let alice = new_nt_principal("alice");

        let creds = resolve_single(
            &ctx, 0, &initial, &alice, None, &service, &service, &[], &[],
        )
        .expect("the service ticket should be returned");

        assert!(creds.is_for_service(&service));
        // some hop dropped ok-as-delegate, the final ticket must not
        // pretend otherwise
        assert!(!creds.is_ok_as_delegate());
        assert_eq!(2, exchange.request_count());

        let final_req = exchange.request(1);
        assert!(final_req.as_tgt.is_tgt_for_realm("B.COM"));
    }

    #[test]
    fn unreachable_service_realm_means_no_service_creds() {
        let service = ServiceRef::from_spn("http/web01", "B.COM");
        let exchange = ScriptedExchange::new(vec![Err(kdc_error(7))]);
        let setup = TestSetup::new();
        let ctx = setup.context(&exchange);

        let initial = tgt(("alice", "A.COM"), "A.COM", "A.COM", 0);
        let alice = new_nt_principal("alice");

        let err = resolve_single(
            &ctx, 0, &initial, &alice, None, &service, &service, &[], &[],
        )
        .expect_err("no capath hop should mean failure");

        match err {
            Error::NoServiceCreds => {}
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
