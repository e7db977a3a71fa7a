//! Fabricated credentials, a scripted KDC and a recording trace to
//! exercise the acquisition engine without touching network or
//! cryptography.

use super::exchange::{KdcExchange, TgsRequest};
use super::referral_cache::ReferralCache;
use super::trace::{TraceEvent, TraceSink};
use super::AcquireContext;
use crate::config::Config;
use crate::core::forge::{new_nt_principal, ServiceRef};
use crate::core::TicketCred;
use crate::error::{Error, Result};
use kerberos_asn1::{
    EncryptedData, EncryptionKey, KrbCredInfo, Ticket,
};
use kerberos_constants::etypes;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Opaque session key; a run of 0xda bytes so tests can assert it
/// never leaks into renderings.
pub fn session_key() -> EncryptionKey {
    return EncryptionKey {
        keytype: etypes::AES256_CTS_HMAC_SHA1_96,
        keyvalue: vec![0xda; 32],
    };
}

pub fn new_ticket(service: &ServiceRef) -> Ticket {
    return Ticket {
        tkt_vno: 5,
        realm: service.realm.clone(),
        sname: service.name.clone(),
        enc_part: EncryptedData::new(
            etypes::NO_ENCRYPTION,
            None,
            Vec::new(),
        ),
    };
}

/// Credential for `client` naming `service` as server, with the given
/// ticket flags.
pub fn new_creds(
    client: (&str, &str),
    service: &ServiceRef,
    flags: u32,
) -> TicketCred {
    let (client_name, client_realm) = client;

    let cred_info = KrbCredInfo {
        key: session_key(),
        prealm: Some(client_realm.to_string()),
        pname: Some(new_nt_principal(client_name)),
        flags: Some(flags.into()),
        authtime: None,
        starttime: None,
        endtime: None,
        renew_till: None,
        srealm: Some(service.realm.clone()),
        sname: Some(service.name.clone()),
        caddr: None,
    };

    return TicketCred::new(new_ticket(service), cred_info);
}

/// TGT for `client`, issued by `issuing_realm`, granting into
/// `to_realm`.
pub fn tgt(
    client: (&str, &str),
    issuing_realm: &str,
    to_realm: &str,
    flags: u32,
) -> TicketCred {
    return new_creds(
        client,
        &ServiceRef::tgs(to_realm, issuing_realm),
        flags,
    );
}

pub fn kdc_error(code: i32) -> Error {
    return Error::KdcError { code };
}

/// KdcExchange that replays a fixed script of replies and records the
/// requests it received.
pub struct ScriptedExchange {
    script: RefCell<VecDeque<Result<TicketCred>>>,
    requests: RefCell<Vec<TgsRequest>>,
}

impl ScriptedExchange {
    pub fn new(script: Vec<Result<TicketCred>>) -> Self {
        return Self {
            script: RefCell::new(script.into()),
            requests: RefCell::new(Vec::new()),
        };
    }

    pub fn request_count(&self) -> usize {
        return self.requests.borrow().len();
    }

    pub fn request(&self, index: usize) -> TgsRequest {
        return self.requests.borrow()[index].clone();
    }
}

impl KdcExchange for ScriptedExchange {
    fn send(&self, req: &TgsRequest) -> Result<TicketCred> {
        self.requests.borrow_mut().push(req.clone());
        return self
            .script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(Error::from("scripted KDC exhausted")));
    }
}

/// Issuing and target realm of every TGS request the scripted KDC
/// received.
pub fn recorded_realms(
    exchange: &ScriptedExchange,
) -> Vec<(String, String)> {
    let mut realms = Vec::new();
    for i in 0..exchange.request_count() {
        let req = exchange.request(i);
        let target = req
            .ref_service
            .name
            .name_string
            .get(1)
            .map(|realm| realm.clone())
            .unwrap_or_default();
        realms.push((req.ref_service.realm.clone(), target));
    }
    return realms;
}

/// TraceSink keeping every event for later assertions.
#[derive(Default)]
pub struct RecordingTrace {
    events: RefCell<Vec<TraceEvent>>,
}

impl RecordingTrace {
    pub fn events(&self) -> Vec<TraceEvent> {
        return self.events.borrow().clone();
    }
}

impl TraceSink for RecordingTrace {
    fn record(&self, event: TraceEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// Owns the collaborators of an engine test, so each test runs with a
/// fresh configuration and cache.
pub struct TestSetup {
    pub config: Config,
    pub cache: ReferralCache,
    pub trace: RecordingTrace,
}

impl TestSetup {
    pub fn new() -> Self {
        return Self {
            config: Config::new(),
            cache: ReferralCache::new(),
            trace: RecordingTrace::default(),
        };
    }

    pub fn context<'a>(
        &'a self,
        exchange: &'a dyn KdcExchange,
    ) -> AcquireContext<'a> {
        return AcquireContext {
            config: &self.config,
            exchange,
            cache: &self.cache,
            trace: &self.trace,
        };
    }
}
