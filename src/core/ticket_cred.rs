//! Struct to handle a ticket together with its associated KrbCredInfo,
//! which carries the session key and the credential metadata.

use crate::core::forge::{ServiceRef, TGS_SERVICE_NAME};
use kerberos_asn1::{KrbCredInfo, PrincipalName, Ticket};
use kerberos_constants::ticket_flags;

/// A ticket and the related client info, like the session key. This is
/// the credential unit the acquisition engine passes around.
#[derive(Debug, Clone)]
pub struct TicketCred {
    pub ticket: Ticket,
    pub cred_info: KrbCredInfo,

    /// Name the client asked with when the KDC canonicalized it into
    /// `cred_info.pname`.
    pub client_alias: Option<PrincipalName>,
}

impl TicketCred {
    pub fn new(ticket: Ticket, cred_info: KrbCredInfo) -> Self {
        return Self {
            ticket,
            cred_info,
            client_alias: None,
        };
    }

    pub fn client_name(&self) -> Option<&PrincipalName> {
        return self.cred_info.pname.as_ref();
    }

    pub fn client_realm(&self) -> Option<&String> {
        return self.cred_info.prealm.as_ref();
    }

    pub fn service_name(&self) -> Option<&PrincipalName> {
        return self.cred_info.sname.as_ref();
    }

    pub fn service_realm(&self) -> Option<&String> {
        return self.cred_info.srealm.as_ref();
    }

    /// A TGT names the service `krbtgt/<realm>`.
    pub fn is_tgt(&self) -> bool {
        if let Some(sname) = self.service_name() {
            return sname.name_string.len() == 2
                && sname.name_string[0] == TGS_SERVICE_NAME;
        }
        return false;
    }

    pub fn is_tgt_for_realm(&self, realm: &str) -> bool {
        if !self.is_tgt() {
            return false;
        }
        return self
            .service_host()
            .map(|target| target.as_str() == realm)
            .unwrap_or(false);
    }

    /// Second component of the service name. For a TGT this is the
    /// realm the ticket grants access to, and therefore the realm
    /// whose KDC accepts it.
    pub fn service_host(&self) -> Option<&String> {
        return self.service_name()?.name_string.get(1);
    }

    /// True when the credential names exactly this service principal
    /// as server.
    pub fn is_for_service(&self, service: &ServiceRef) -> bool {
        match (self.service_realm(), self.service_name()) {
            (Some(srealm), Some(sname)) => {
                return service.matches(srealm, sname);
            }
            _ => return false,
        }
    }

    pub fn flags(&self) -> u32 {
        if let Some(flags) = &self.cred_info.flags {
            return flags.flags;
        }
        return 0;
    }

    pub fn is_forwardable(&self) -> bool {
        return (self.flags() & ticket_flags::FORWARDABLE) != 0;
    }

    pub fn is_ok_as_delegate(&self) -> bool {
        return (self.flags() & ticket_flags::OK_AS_DELEGATE) != 0;
    }

    /// Withdraws the ok-as-delegate property, used when some realm in
    /// the traversal path does not allow delegation.
    pub fn reset_delegate(&mut self) {
        if let Some(flags) = &mut self.cred_info.flags {
            flags.flags &= !ticket_flags::OK_AS_DELEGATE;
        }
    }

    /// `sname@srealm` rendering of the server principal.
    pub fn server_string(&self) -> String {
        let sname = match self.service_name() {
            Some(sname) => sname.name_string.join("/"),
            None => "<absent>".to_string(),
        };
        let srealm = match self.service_realm() {
            Some(srealm) => srealm.as_str(),
            None => "<absent>",
        };
        return format!("{}@{}", sname, srealm);
    }
}

impl From<(Ticket, KrbCredInfo)> for TicketCred {
    fn from((ticket, cred_info): (Ticket, KrbCredInfo)) -> Self {
        return Self::new(ticket, cred_info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::requesters::test_kit::{new_creds, tgt};
    use kerberos_constants::ticket_flags;

    #[test]
    fn tgt_shape_is_krbtgt_with_two_components() {
        let tgt = tgt(("alice", "A.COM"), "A.COM", "B.COM", 0);
        assert!(tgt.is_tgt());
        assert!(tgt.is_tgt_for_realm("B.COM"));
        assert!(!tgt.is_tgt_for_realm("A.COM"));
        assert_eq!(Some(&"B.COM".to_string()), tgt.service_host());

        let st = new_creds(
            ("alice", "A.COM"),
            &ServiceRef::from_spn("http/web01", "A.COM"),
            0,
        );
        assert!(!st.is_tgt());
        assert_eq!("http/web01@A.COM", st.server_string());
    }

    #[test]
    fn reset_delegate_only_clears_ok_as_delegate() {
        let flags =
            ticket_flags::FORWARDABLE | ticket_flags::OK_AS_DELEGATE;
        let mut tgt = tgt(("alice", "A.COM"), "A.COM", "A.COM", flags);
        assert!(tgt.is_ok_as_delegate());

        tgt.reset_delegate();
        assert!(!tgt.is_ok_as_delegate());
        assert!(tgt.is_forwardable());
    }
}
