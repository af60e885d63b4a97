use async_trait::async_trait;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use stub_dns_application::ports::DatagramTransport;
use stub_dns_application::use_cases::{HandleDatagramUseCase, ServeDatagramsUseCase, ServeStats};
use stub_dns_domain::config::ServerConfig;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub struct UdpTransport {
    socket: UdpSocket,
}

impl UdpTransport {
    pub fn bind(socket_addr: SocketAddr) -> anyhow::Result<Self> {
        Ok(Self {
            socket: create_udp_socket(socket_addr)?,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }
}

#[async_trait]
impl DatagramTransport for UdpTransport {
    async fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        self.socket.recv_from(buf).await
    }

    async fn send_to(&self, bytes: &[u8], target: SocketAddr) -> io::Result<usize> {
        self.socket.send_to(bytes, target).await
    }
}

pub async fn start_dns_server(
    server: &ServerConfig,
    handler: Arc<HandleDatagramUseCase>,
    shutdown: CancellationToken,
) -> anyhow::Result<ServeStats> {
    let socket_addr: SocketAddr = server.listen_address().parse()?;
    let transport = Arc::new(UdpTransport::bind(socket_addr)?);

    info!(
        bind_address = %transport.local_addr()?,
        max_datagram_size = server.max_datagram_size,
        "DNS server ready"
    );

    let policy = handler.policy();
    info!(
        qdcount = policy.qdcount,
        ancount = policy.ancount,
        nscount = policy.nscount,
        arcount = policy.arcount,
        set_qr = policy.set_qr,
        "Response policy"
    );

    let stats = ServeDatagramsUseCase::new(transport, handler, server.max_datagram_size)
        .with_cancellation(shutdown)
        .run()
        .await?;

    Ok(stats)
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
