use crate::core::forge::ServiceRef;
use crate::core::TicketCred;
use kerberos_asn1::PrincipalName;
use std::collections::HashMap;
use std::sync::RwLock;

/// Identifies one step of a referral chain: the client, the service it
/// originally asked for and the realm the chain is currently at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ReferralKey {
    client_type: i32,
    client: Vec<String>,
    client_realm: String,
    service_type: i32,
    service: Vec<String>,
    service_realm: String,
    realm: String,
}

impl ReferralKey {
    fn new(
        cname: &PrincipalName,
        crealm: &str,
        service: &ServiceRef,
        realm: &str,
    ) -> Self {
        return Self {
            client_type: cname.name_type,
            client: cname.name_string.clone(),
            client_realm: crealm.to_string(),
            service_type: service.name.name_type,
            service: service.name.name_string.clone(),
            service_realm: service.realm.clone(),
            realm: realm.to_string(),
        };
    }
}

#[derive(Debug, Clone)]
pub struct ReferralCacheEntry {
    /// Realm the KDC referred the client towards.
    pub to_realm: String,

    /// Cross-realm TGT to `to_realm`.
    pub creds: TicketCred,
}

/// Process-wide cache of the cross-realm referral TGTs observed while
/// following RFC 6806 chains. Entries are never evicted; the realm
/// graph bounds their number. Lookups may run concurrently, writes are
/// serialized and the first writer of a key wins (replies for the same
/// key agree, so overwriting would be pointless anyway).
#[derive(Debug, Default)]
pub struct ReferralCache {
    entries: RwLock<HashMap<ReferralKey, ReferralCacheEntry>>,
}

impl ReferralCache {
    pub fn new() -> Self {
        return Self {
            entries: RwLock::new(HashMap::new()),
        };
    }

    pub fn get(
        &self,
        cname: &PrincipalName,
        crealm: &str,
        service: &ServiceRef,
        current_realm: &str,
    ) -> Option<ReferralCacheEntry> {
        let entries = self.entries.read().expect("poisoned referral cache");
        let key = ReferralKey::new(cname, crealm, service, current_realm);
        return entries.get(&key).map(|entry| entry.clone());
    }

    pub fn put(
        &self,
        cname: &PrincipalName,
        crealm: &str,
        service: &ServiceRef,
        current_realm: &str,
        to_realm: &str,
        creds: TicketCred,
    ) {
        let mut entries =
            self.entries.write().expect("poisoned referral cache");
        let key = ReferralKey::new(cname, crealm, service, current_realm);
        entries.entry(key).or_insert(ReferralCacheEntry {
            to_realm: to_realm.to_string(),
            creds,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forge::new_nt_principal;
    use crate::core::requesters::test_kit::tgt;

    #[test]
    fn get_returns_what_put_stored() {
        let cache = ReferralCache::new();
        let alice = new_nt_principal("alice");
        let service = ServiceRef::from_spn("http/web01", "B.COM");
        let referral_tgt = tgt(("alice", "A.COM"), "A.COM", "B.COM", 0);

        assert!(cache.get(&alice, "A.COM", &service, "A.COM").is_none());

        cache.put(&alice, "A.COM", &service, "A.COM", "B.COM", referral_tgt);

        let entry = cache
            .get(&alice, "A.COM", &service, "A.COM")
            .expect("entry should be cached");
        assert_eq!("B.COM", entry.to_realm);
        assert!(entry.creds.is_tgt_for_realm("B.COM"));
    }

    #[test]
    fn first_writer_wins() {
        let cache = ReferralCache::new();
        let alice = new_nt_principal("alice");
        let service = ServiceRef::from_spn("http/web01", "B.COM");

        let first = tgt(("alice", "A.COM"), "A.COM", "B.COM", 0);
        let second = tgt(("alice", "A.COM"), "A.COM", "C.COM", 0);

        cache.put(&alice, "A.COM", &service, "A.COM", "B.COM", first);
        cache.put(&alice, "A.COM", &service, "A.COM", "C.COM", second);

        let entry = cache
            .get(&alice, "A.COM", &service, "A.COM")
            .expect("entry should be cached");
        assert_eq!("B.COM", entry.to_realm);
    }

    #[test]
    fn keys_separate_current_realm_and_client_realm() {
        let cache = ReferralCache::new();
        let alice = new_nt_principal("alice");
        let service = ServiceRef::from_spn("http/web01", "B.COM");
        let referral_tgt = tgt(("alice", "A.COM"), "A.COM", "B.COM", 0);

        cache.put(&alice, "A.COM", &service, "A.COM", "B.COM", referral_tgt);

        assert!(cache.get(&alice, "A.COM", &service, "B.COM").is_none());
        assert!(cache.get(&alice, "OTHER.COM", &service, "A.COM").is_none());
        assert!(cache.get(&alice, "A.COM", &service, "A.COM").is_some());
    }
}
