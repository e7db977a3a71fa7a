use super::senders::send_recv_tgs;
use crate::communication::KdcComm;
use crate::core::forge::{build_tgs_req, extract_ticket_from_tgs_rep};
use crate::core::forge::ServiceRef;
use crate::core::Cipher;
use crate::core::TicketCred;
use crate::error::Result;
use kerberos_asn1::{PaData, PrincipalName, Ticket};

/// One TGS-REQ/TGS-REP round trip, fully specified by the engine.
#[derive(Debug, Clone)]
pub struct TgsRequest {
    pub kdc_options: u32,

    /// TGT authenticating the request; also decides which KDC is
    /// addressed (the realm the TGT grants into).
    pub as_tgt: TicketCred,

    pub cname: PrincipalName,
    pub crealm: String,
    pub client_alias: Option<PrincipalName>,

    /// Server name as currently requested; its realm moves while
    /// referrals are followed.
    pub ref_service: ServiceRef,

    /// Server name the caller originally asked for.
    pub canonical_service: ServiceRef,

    pub additional_tickets: Vec<Ticket>,
    pub extra_padatas: Vec<PaData>,
}

/// A single TGS exchange against a KDC. The acquisition engine only
/// speaks to KDCs through this seam, which keeps the traversal logic
/// testable against a scripted exchange.
pub trait KdcExchange {
    /// Performs one exchange and returns the decoded credential. Does
    /// not retry.
    fn send(&self, req: &TgsRequest) -> Result<TicketCred>;
}

/// KdcExchange over real KDC channels.
pub struct NetKdcExchange {
    kdccomm: KdcComm,
}

impl NetKdcExchange {
    pub fn new(kdccomm: KdcComm) -> Self {
        return Self { kdccomm };
    }
}

impl KdcExchange for NetKdcExchange {
    fn send(&self, req: &TgsRequest) -> Result<TicketCred> {
        let kdc_realm = req
            .as_tgt
            .service_host()
            .ok_or("Unable to get the TGT realm")?;
        let channel = self.kdccomm.create_channel(kdc_realm)?;

        let cipher = Cipher::from_session_key(&req.as_tgt.cred_info.key)?;

        let tgs_req = build_tgs_req(
            &req.cname,
            &req.crealm,
            &req.ref_service.name,
            &req.ref_service.realm,
            req.kdc_options,
            req.as_tgt.ticket.clone(),
            &cipher,
            &req.additional_tickets,
            &req.extra_padatas,
        );

        let tgs_rep = send_recv_tgs(&*channel, &tgs_req)?;

        let mut creds = extract_ticket_from_tgs_rep(tgs_rep, &cipher)?;
        if creds.client_name() != Some(&req.cname) {
            creds.client_alias = Some(req.cname.clone());
        }

        return Ok(creds);
    }
}
