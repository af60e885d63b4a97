use async_trait::async_trait;
use std::io;
use std::net::SocketAddr;

/// Connectionless transport the server loop receives queries from and sends
/// responses to.
#[async_trait]
pub trait DatagramTransport: Send + Sync {
    /// Waits for the next datagram, copies its payload into `buf` and returns
    /// the payload length and the sender.
    async fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)>;

    async fn send_to(&self, bytes: &[u8], target: SocketAddr) -> io::Result<usize>;
}
