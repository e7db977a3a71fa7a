use kerberos_asn1::PrincipalName;
use kerberos_constants::principal_names;
use std::fmt;

/// First component of every TGS principal name.
pub const TGS_SERVICE_NAME: &str = "krbtgt";

pub fn new_nt_principal(name: &str) -> PrincipalName {
    return new_principal_name(name, principal_names::NT_PRINCIPAL);
}

pub fn new_nt_srv_inst(service: &str) -> PrincipalName {
    return new_principal_name(service, principal_names::NT_SRV_INST);
}

pub fn new_nt_srv_hst(service: &str) -> PrincipalName {
    return new_principal_name(service, principal_names::NT_SRV_HST);
}

pub fn new_principal_name(name: &str, name_type: i32) -> PrincipalName {
    return PrincipalName {
        name_type: name_type,
        name_string: spn_to_service_parts(name),
    };
}

pub fn spn_to_service_parts(spn: &str) -> Vec<String> {
    spn.split("/").map(|s| s.to_string()).collect()
}

/// A server principal name qualified with the realm it is requested
/// from. The realm part changes while referrals are followed, the name
/// part does not.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRef {
    pub realm: String,
    pub name: PrincipalName,
}

impl ServiceRef {
    pub fn new(name: PrincipalName, realm: String) -> Self {
        return Self { realm, name };
    }

    /// Builds the service reference from an SPN such as
    /// `http/web01.corp.com` or `http/web01.corp.com@CORP.COM`. Without
    /// an explicit realm part, `default_realm` is used.
    pub fn from_spn(spn: &str, default_realm: &str) -> Self {
        let mut parts = spn.splitn(2, '@');
        let name = parts.next().unwrap_or(spn);
        let realm = match parts.next() {
            Some(realm) => realm.to_string(),
            None => default_realm.to_string(),
        };
        return Self::new(new_nt_srv_hst(name), realm);
    }

    /// TGS principal `krbtgt/<to_realm>` issued by `<from_realm>`.
    pub fn tgs(to_realm: &str, from_realm: &str) -> Self {
        return Self::new(
            new_nt_srv_inst(&format!("{}/{}", TGS_SERVICE_NAME, to_realm)),
            from_realm.to_string(),
        );
    }

    /// Same name requested from another realm, as referrals demand.
    pub fn with_realm(&self, realm: &str) -> Self {
        return Self::new(self.name.clone(), realm.to_string());
    }

    pub fn matches(&self, srealm: &str, sname: &PrincipalName) -> bool {
        return self.realm == srealm && &self.name == sname;
    }
}

impl fmt::Display for ServiceRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}@{}", self.name.name_string.join("/"), self.realm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spn_without_realm_takes_the_default() {
        let service = ServiceRef::from_spn("http/web01", "CORP.COM");
        assert_eq!("CORP.COM", service.realm);
        assert_eq!(
            vec!["http".to_string(), "web01".to_string()],
            service.name.name_string
        );
        assert_eq!(principal_names::NT_SRV_HST, service.name.name_type);
    }

    #[test]
    fn spn_realm_part_wins_over_the_default() {
        let service =
            ServiceRef::from_spn("cifs/fs01@OTHER.COM", "CORP.COM");
        assert_eq!("OTHER.COM", service.realm);
        assert_eq!("cifs/fs01@OTHER.COM", service.to_string());
    }

    #[test]
    fn tgs_reference_names_the_target_realm() {
        let service = ServiceRef::tgs("B.COM", "A.COM");
        assert_eq!("A.COM", service.realm);
        assert_eq!(
            vec!["krbtgt".to_string(), "B.COM".to_string()],
            service.name.name_string
        );
        assert_eq!("krbtgt/B.COM@A.COM", service.to_string());
    }

    #[test]
    fn realm_swap_keeps_the_name() {
        let service = ServiceRef::from_spn("http/web01", "A.COM");
        let referred = service.with_realm("B.COM");
        assert_eq!(service.name, referred.name);
        assert_eq!("B.COM", referred.realm);
        assert!(!referred.matches("A.COM", &service.name));
        assert!(referred.matches("B.COM", &service.name));
    }
}
