use std::io;
use std::net::{IpAddr, SocketAddr, UdpSocket};

use crate::communication::{KrbChannel, TransportProtocol};

/// Send Kerberos messages over UDP
#[derive(Debug)]
pub struct UdpChannel {
    dst_addr: SocketAddr,
}

impl UdpChannel {
    pub fn new(dst_addr: SocketAddr) -> Self {
        return Self { dst_addr };
    }
}

impl KrbChannel for UdpChannel {
    fn send_recv(&self, raw: &[u8]) -> io::Result<Vec<u8>> {
        let udp_socket = UdpSocket::bind("0.0.0.0:0")?;
        udp_socket.connect(self.dst_addr)?;

        udp_socket.send(raw)?;

        let data_length = peek_response_size(&udp_socket)?;

        let mut raw_response = vec![0; data_length];
        udp_socket.recv(&mut raw_response)?;

        return Ok(raw_response);
    }

    fn protocol(&self) -> TransportProtocol {
        return TransportProtocol::UDP;
    }

    fn ip(&self) -> IpAddr {
        return self.dst_addr.ip();
    }
}

/// Grow the peek buffer until the datagram fits, to learn its size
/// before the final recv.
fn peek_response_size(udp_socket: &UdpSocket) -> io::Result<usize> {
    let mut raw_response = vec![0; 2048];
    let mut data_length = udp_socket.peek(&mut raw_response)?;
    while data_length == raw_response.len() {
        raw_response.resize(raw_response.len() * 2, 0);
        data_length = udp_socket.peek(&mut raw_response)?;
    }
    return Ok(data_length);
}
