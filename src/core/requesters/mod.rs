//! The TGS-exchange engine: operations to turn a TGT into service
//! tickets, traversing realms through the configured capaths or the
//! referrals issued by the KDCs, including the S4U2self and S4U2proxy
//! extensions.

mod senders;
pub use senders::{send_recv, send_recv_tgs, Rep};

mod exchange;
pub use exchange::{KdcExchange, NetKdcExchange, TgsRequest};

mod referral_cache;
pub use referral_cache::{ReferralCache, ReferralCacheEntry};

mod trace;
pub use trace::{LogTrace, TraceEvent, TraceSink};

mod capath;
pub use capath::tgt_for_realm;

mod single;
pub use single::resolve_single;

mod referrals;
pub use referrals::resolve_referrals;

mod service_creds;
pub use service_creds::acquire_service_creds;

mod s4u;
pub use s4u::{acquire_s4u2proxy_creds, acquire_s4u2self_creds};

#[cfg(test)]
pub(crate) mod test_kit;

use crate::config::Config;

/// Collaborators shared by every step of one acquisition. The cache
/// may be shared between contexts, entries are idempotent.
pub struct AcquireContext<'a> {
    pub config: &'a Config,
    pub exchange: &'a dyn KdcExchange,
    pub cache: &'a ReferralCache,
    pub trace: &'a dyn TraceSink,
}
