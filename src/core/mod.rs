mod cipher;
pub use cipher::Cipher;

mod forge;
pub use forge::{KrbUser, ServiceRef};

mod ticket_cred;
pub use ticket_cred::TicketCred;

mod stringifier;

pub mod requesters;
pub use requesters::{
    acquire_s4u2proxy_creds, acquire_s4u2self_creds, acquire_service_creds,
    AcquireContext, KdcExchange, LogTrace, NetKdcExchange, ReferralCache,
    ReferralCacheEntry, TgsRequest, TraceEvent, TraceSink,
};
