//! Human readable renderings of credentials for the debug traces. The
//! session key is deliberately never rendered.

use crate::core::TicketCred;
use chrono::Local;
use kerberos_asn1::KerberosTime;
use kerberos_constants::ticket_flags;

pub fn ticket_cred_to_string(tc: &TicketCred) -> String {
    let client = match (tc.client_name(), tc.client_realm()) {
        (Some(pname), Some(prealm)) => {
            format!("{}@{}", pname.name_string.join("/"), prealm)
        }
        _ => "<absent>".to_string(),
    };

    let endtime = match &tc.cred_info.endtime {
        Some(endtime) => kerberos_time_to_string(endtime),
        None => "<absent>".to_string(),
    };

    return format!(
        "client: {} | server: {} | flags: {} | endtime: {}",
        client,
        tc.server_string(),
        kerberos_flags_to_string(tc.flags()),
        endtime,
    );
}

pub fn kerberos_time_to_string(krb_time: &KerberosTime) -> String {
    krb_time
        .with_timezone(&Local)
        .format("%m/%d/%Y %H:%M:%S")
        .to_string()
}

pub fn kerberos_flags_to_string(flags: u32) -> String {
    let mut flags_strs = Vec::new();

    if (flags & ticket_flags::FORWARDABLE) != 0 {
        flags_strs.push("forwardable")
    }
    if (flags & ticket_flags::FORWARDED) != 0 {
        flags_strs.push("forwarded")
    }
    if (flags & ticket_flags::PROXIABLE) != 0 {
        flags_strs.push("proxiable")
    }
    if (flags & ticket_flags::PROXY) != 0 {
        flags_strs.push("proxy")
    }
    if (flags & ticket_flags::RENEWABLE) != 0 {
        flags_strs.push("renewable")
    }
    if (flags & ticket_flags::INITIAL) != 0 {
        flags_strs.push("initial")
    }
    if (flags & ticket_flags::INVALID) != 0 {
        flags_strs.push("invalid")
    }
    if (flags & ticket_flags::PRE_AUTHENT) != 0 {
        flags_strs.push("pre_authent")
    }
    if (flags & ticket_flags::OK_AS_DELEGATE) != 0 {
        flags_strs.push("ok_as_delegate")
    }

    return format!("{:#06x} -> {}", flags, flags_strs.join(" "));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forge::ServiceRef;
    use crate::core::requesters::test_kit::new_creds;

    #[test]
    fn rendering_never_includes_key_material() {
        let creds = new_creds(
            ("alice", "A.COM"),
            &ServiceRef::from_spn("http/web01", "A.COM"),
            ticket_flags::FORWARDABLE,
        );
        let rendered = ticket_cred_to_string(&creds);

        assert!(rendered.contains("alice@A.COM"));
        assert!(rendered.contains("http/web01@A.COM"));
        assert!(rendered.contains("forwardable"));
        // test session keys are a run of 0xda bytes
        assert!(!rendered.to_lowercase().contains("dada"));
    }
}
