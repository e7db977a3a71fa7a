use super::kdc_req::KdcReqBuilder;
use super::pa_data::new_pa_data_ap_req;
use crate::core::Cipher;
use kerberos_asn1::{PaData, PrincipalName, TgsReq, Ticket};

/// Helper to craft a TGS-REQ message from the parameters decided by
/// the acquisition engine: exact options, the service as currently
/// named, the tickets and pre-auth entries required by protocol
/// extensions, all authenticated by the TGT in use.
pub fn build_tgs_req(
    cname: &PrincipalName,
    crealm: &str,
    sname: &PrincipalName,
    srealm: &str,
    kdc_options: u32,
    tgt_ticket: Ticket,
    cipher: &Cipher,
    additional_tickets: &[Ticket],
    extra_padatas: &[PaData],
) -> TgsReq {
    let mut tgs_req_builder = KdcReqBuilder::new(srealm.to_string())
        .kdc_options(kdc_options)
        .sname(Some(sname.clone()));

    for ticket in additional_tickets {
        tgs_req_builder = tgs_req_builder.push_ticket(ticket.clone());
    }

    for padata in extra_padatas {
        tgs_req_builder = tgs_req_builder.push_padata(padata.clone());
    }

    return tgs_req_builder
        .push_padata(new_pa_data_ap_req(cname, crealm, tgt_ticket, cipher))
        .build_tgs_req();
}
