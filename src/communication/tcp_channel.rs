use std::io;
use std::io::{Read, Write};
use std::net::{IpAddr, SocketAddr, TcpStream};
use std::time::Duration;

use crate::communication::{KrbChannel, TransportProtocol};

const CONNECT_TIMEOUT_SECONDS: u64 = 5;

/// Send Kerberos messages over TCP
#[derive(Debug)]
pub struct TcpChannel {
    dst_addr: SocketAddr,
}

impl TcpChannel {
    pub fn new(dst_addr: SocketAddr) -> Self {
        return Self { dst_addr };
    }
}

impl KrbChannel for TcpChannel {
    fn send_recv(&self, raw: &[u8]) -> io::Result<Vec<u8>> {
        let mut tcp_stream = TcpStream::connect_timeout(
            &self.dst_addr,
            Duration::new(CONNECT_TIMEOUT_SECONDS, 0),
        )?;

        tcp_stream.write_all(&prepend_length_header(raw))?;

        let mut len_data_bytes = [0 as u8; 4];
        tcp_stream.read_exact(&mut len_data_bytes)?;
        let data_length = u32::from_be_bytes(len_data_bytes);

        let mut raw_response: Vec<u8> = vec![0; data_length as usize];
        tcp_stream.read_exact(&mut raw_response)?;

        return Ok(raw_response);
    }

    fn protocol(&self) -> TransportProtocol {
        return TransportProtocol::TCP;
    }

    fn ip(&self) -> IpAddr {
        return self.dst_addr.ip();
    }
}

/// Kerberos over TCP precedes each message with its length in 4 bytes,
/// big endian (RFC 4120 7.2.2).
fn prepend_length_header(raw_request: &[u8]) -> Vec<u8> {
    let request_length = raw_request.len() as u32;
    let mut raw_sized_request: Vec<u8> =
        request_length.to_be_bytes().to_vec();
    raw_sized_request.extend_from_slice(raw_request);

    return raw_sized_request;
}
