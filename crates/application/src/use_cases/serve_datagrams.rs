use crate::ports::DatagramTransport;
use crate::use_cases::HandleDatagramUseCase;
use std::io;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Outcome counters of a finished receive loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeStats {
    pub received: u64,
    pub answered: u64,
    pub dropped: u64,
    pub send_failures: u64,
}

/// Receive loop: one datagram at a time, answered in arrival order.
///
/// A datagram that fails to decode is dropped without a response; the loop
/// only stops on cancellation or on a receive error it cannot recover from.
pub struct ServeDatagramsUseCase {
    transport: Arc<dyn DatagramTransport>,
    handler: Arc<HandleDatagramUseCase>,
    max_datagram_size: usize,
    shutdown: CancellationToken,
}

impl ServeDatagramsUseCase {
    pub fn new(
        transport: Arc<dyn DatagramTransport>,
        handler: Arc<HandleDatagramUseCase>,
        max_datagram_size: usize,
    ) -> Self {
        Self {
            transport,
            handler,
            max_datagram_size,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn run(&self) -> io::Result<ServeStats> {
        let mut buf = vec![0u8; self.max_datagram_size];
        let mut stats = ServeStats::default();

        info!(
            max_datagram_size = self.max_datagram_size,
            "Receive loop started"
        );

        loop {
            let received = tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => {
                    info!(
                        received = stats.received,
                        answered = stats.answered,
                        dropped = stats.dropped,
                        "Receive loop shutting down"
                    );
                    return Ok(stats);
                }
                result = self.transport.recv_from(&mut buf) => result,
            };

            let (len, peer) = match received {
                Ok(r) => r,
                Err(e) if is_transient(&e) => {
                    debug!(error = %e, "Transient UDP recv error");
                    continue;
                }
                Err(e) => {
                    error!(error = %e, "UDP recv error");
                    return Err(e);
                }
            };
            stats.received += 1;

            let response = match self.handler.execute(&buf[..len]) {
                Ok(response) => response,
                Err(e) => {
                    stats.dropped += 1;
                    warn!(peer = %peer, len, error = %e, "Dropping undecodable datagram");
                    continue;
                }
            };

            match self.transport.send_to(&response, peer).await {
                Ok(_) => {
                    stats.answered += 1;
                    debug!(peer = %peer, len = response.len(), "Response sent");
                }
                Err(e) => {
                    stats.send_failures += 1;
                    error!(peer = %peer, error = %e, "Failed to send response");
                }
            }
        }
    }
}

fn is_transient(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::Interrupted
            | io::ErrorKind::WouldBlock
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionRefused
    )
}
