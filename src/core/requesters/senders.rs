use crate::communication::KrbChannel;
use crate::error::{Error, Result};
use kerberos_asn1::{Asn1Object, KrbError, TgsRep, TgsReq};
use std::io;

pub enum Rep {
    TgsRep(TgsRep),
    KrbError(KrbError),
    Raw(Vec<u8>),
}

/// Send an array of bytes, which should be a kerberos request
/// coded in ASN1/DER format and retrieve the response, by parsing
/// it to a known Kerberos response
pub fn send_recv(
    channel: &dyn KrbChannel,
    raw: &[u8],
) -> io::Result<Rep> {
    let raw_rep = channel.send_recv(raw)?;

    if let Ok((_, krb_error)) = KrbError::parse(&raw_rep) {
        return Ok(Rep::KrbError(krb_error));
    }

    if let Ok((_, tgs_rep)) = TgsRep::parse(&raw_rep) {
        return Ok(Rep::TgsRep(tgs_rep));
    }

    return Ok(Rep::Raw(raw_rep));
}

/// Function to send a TGS-REQ message and receive a TGS-REP
pub fn send_recv_tgs(
    channel: &dyn KrbChannel,
    req: &TgsReq,
) -> Result<TgsRep> {
    let rep = send_recv(channel, &req.build())
        .map_err(|err| ("Error sending TGS-REQ", err))?;

    match rep {
        Rep::KrbError(krb_error) => {
            return Err(krb_error)?;
        }

        Rep::Raw(_) => {
            return Err(Error::DataError(
                "Error parsing KDC response to TGS-REQ".to_string(),
            ));
        }

        Rep::TgsRep(tgs_rep) => {
            return Ok(tgs_rep);
        }
    }
}
