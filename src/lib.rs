//! Client-side Kerberos service ticket acquisition.
//!
//! Starting from a TGT, this crate performs the TGS exchanges needed
//! to obtain a ticket for a named service, wherever it lives:
//!
//! * same-realm requests;
//! * cross-realm traversal along a configured capath hierarchy;
//! * cross-realm referrals issued by the KDCs (RFC 6806), with a
//!   process-wide referral cache, bounded chains and loop detection;
//! * S4U2self, a service obtaining a ticket to itself on behalf of a
//!   user;
//! * S4U2proxy, a service presenting a user's ticket to reach a
//!   backend on the user's behalf.
//!
//! The KDCs are reached through the [`KdcExchange`] seam; the provided
//! [`NetKdcExchange`] speaks TCP/UDP to real KDCs, resolving them from
//! a static map or through DNS.
//!
//! ```no_run
//! use ortro::communication::{KdcComm, Kdcs, TransportProtocol};
//! use ortro::{
//!     acquire_service_creds, AcquireContext, Config, LogTrace,
//!     NetKdcExchange, ReferralCache,
//! };
//! # fn tgt_from_somewhere() -> ortro::TicketCred { unimplemented!() }
//!
//! # fn main() -> ortro::Result<()> {
//! let kdccomm = KdcComm::new(Kdcs::new(), TransportProtocol::TCP);
//! let exchange = NetKdcExchange::new(kdccomm);
//! let config = Config::new();
//! let cache = ReferralCache::new();
//! let ctx = AcquireContext {
//!     config: &config,
//!     exchange: &exchange,
//!     cache: &cache,
//!     trace: &LogTrace,
//! };
//!
//! let tgt = tgt_from_somewhere();
//! let service_ticket =
//!     acquire_service_creds(&ctx, "http/web01.corp.com", &tgt)?;
//! # Ok(())
//! # }
//! ```

pub mod communication;
mod config;
mod core;
mod error;

pub use config::Config;
pub use error::{Error, Result};

pub use crate::core::{
    acquire_s4u2proxy_creds, acquire_s4u2self_creds, acquire_service_creds,
    AcquireContext, Cipher, KdcExchange, KrbUser, LogTrace, NetKdcExchange,
    ReferralCache, ReferralCacheEntry, ServiceRef, TgsRequest, TicketCred,
    TraceEvent, TraceSink,
};
