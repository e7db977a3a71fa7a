//! Module to provide means to transport Kerberos messages to the KDCs
//! of the involved realms.

mod tcp_channel;
pub use tcp_channel::TcpChannel;

mod udp_channel;
pub use udp_channel::UdpChannel;

use crate::error::Result;
use std::collections::HashMap;
use std::io;
use std::net::{IpAddr, SocketAddr};
use trust_dns_resolver::config::{
    NameServerConfig, Protocol, ResolverConfig, ResolverOpts,
};
use trust_dns_resolver::Resolver;

pub const KERBEROS_PORT: u16 = 88;

/// Transport protocols available to send Kerberos messages
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TransportProtocol {
    TCP,
    UDP,
}

/// One way of delivering a Kerberos message to a KDC and retrieving
/// the response. A channel owns whatever socket it opens and releases
/// it before returning, on success and on error alike.
pub trait KrbChannel {
    /// Sends a message and retrieves the response
    fn send_recv(&self, raw: &[u8]) -> io::Result<Vec<u8>>;
    fn protocol(&self) -> TransportProtocol;
    fn ip(&self) -> IpAddr;
}

/// Map of known KDC addresses, indexed by realm.
#[derive(Debug, Default)]
pub struct Kdcs {
    kdcs: HashMap<String, IpAddr>,
}

impl Kdcs {
    pub fn new() -> Self {
        return Self {
            kdcs: HashMap::new(),
        };
    }

    pub fn insert(&mut self, realm: String, ip: IpAddr) {
        self.kdcs.insert(realm.to_lowercase(), ip);
    }

    pub fn get(&self, realm: &str) -> Option<&IpAddr> {
        return self.kdcs.get(&realm.to_lowercase());
    }

    pub fn get_clone(&self, realm: &str) -> Option<IpAddr> {
        return self.get(realm).map(|ip| ip.clone());
    }
}

/// Generates a channel given an address and transport protocol
pub fn new_krb_channel(
    dst_address: SocketAddr,
    transport_protocol: TransportProtocol,
) -> Box<dyn KrbChannel> {
    match transport_protocol {
        TransportProtocol::TCP => {
            return Box::new(TcpChannel::new(dst_address));
        }
        TransportProtocol::UDP => {
            return Box::new(UdpChannel::new(dst_address));
        }
    }
}

/// Creates channels to the KDCs of the realms met during an
/// acquisition, resolving KDC addresses through DNS when the static
/// map has no entry.
pub struct KdcComm {
    kdcs: Kdcs,
    protocol: TransportProtocol,
    dns_servers: Vec<SocketAddr>,
}

impl KdcComm {
    pub fn new(kdcs: Kdcs, protocol: TransportProtocol) -> Self {
        return Self {
            kdcs,
            protocol,
            dns_servers: Vec::new(),
        };
    }

    pub fn dns_servers(mut self, dns_servers: Vec<SocketAddr>) -> Self {
        self.dns_servers = dns_servers;
        return self;
    }

    pub fn create_channel(&self, realm: &str) -> Result<Box<dyn KrbChannel>> {
        let kdc_ip = match self.kdcs.get_clone(realm) {
            Some(ip) => ip,
            None => resolve_host(realm, &self.dns_servers)?,
        };

        let kdc_address = SocketAddr::new(kdc_ip, KERBEROS_PORT);
        return Ok(new_krb_channel(kdc_address, self.protocol));
    }
}

pub fn resolve_host(
    realm: &str,
    dns_servers: &[SocketAddr],
) -> Result<IpAddr> {
    let resolver;
    if dns_servers.is_empty() {
        resolver = Resolver::from_system_conf().map_err(|err| {
            format!("Unable to use dns system configuration: {}", err)
        })?;
    } else {
        let mut resolver_config = ResolverConfig::new();
        for server in dns_servers {
            resolver_config.add_name_server(NameServerConfig {
                socket_addr: *server,
                protocol: Protocol::Tcp,
                tls_dns_name: None,
            });
        }
        resolver = Resolver::new(resolver_config, ResolverOpts::default())
            .map_err(|err| format!("Unable to create dns resolver: {}", err))?;
    }
    let ips = resolver
        .lookup_ip(realm)
        .map_err(|err| format!("Error resolving '{}' : '{}'", realm, err))?;

    let ip = ips
        .iter()
        .next()
        .ok_or(format!("Error resolving '{}': No entries found", realm))?;

    return Ok(ip);
}
