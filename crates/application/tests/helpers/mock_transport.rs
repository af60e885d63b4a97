#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::io;
use std::net::SocketAddr;
use std::sync::Mutex;
use stub_dns_application::ports::DatagramTransport;
use tokio_util::sync::CancellationToken;

pub type Incoming = io::Result<(Vec<u8>, SocketAddr)>;

/// Replays a scripted sequence of receive results and records every send.
/// Once the script is exhausted it cancels `done` and blocks, so the loop
/// under test exits through its shutdown branch.
pub struct MockTransport {
    incoming: Mutex<VecDeque<Incoming>>,
    sent: Mutex<Vec<(Vec<u8>, SocketAddr)>>,
    fail_sends: bool,
    done: CancellationToken,
}

impl MockTransport {
    pub fn new(done: CancellationToken) -> Self {
        Self {
            incoming: Mutex::new(VecDeque::new()),
            sent: Mutex::new(Vec::new()),
            fail_sends: false,
            done,
        }
    }

    pub fn failing_sends(mut self) -> Self {
        self.fail_sends = true;
        self
    }

    pub fn push_datagram(&self, bytes: Vec<u8>, from: SocketAddr) {
        self.incoming.lock().unwrap().push_back(Ok((bytes, from)));
    }

    pub fn push_error(&self, kind: io::ErrorKind) {
        self.incoming
            .lock()
            .unwrap()
            .push_back(Err(io::Error::new(kind, "scripted recv error")));
    }

    pub fn sent(&self) -> Vec<(Vec<u8>, SocketAddr)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl DatagramTransport for MockTransport {
    async fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        let next = self.incoming.lock().unwrap().pop_front();
        match next {
            Some(Ok((bytes, from))) => {
                let len = bytes.len().min(buf.len());
                buf[..len].copy_from_slice(&bytes[..len]);
                Ok((len, from))
            }
            Some(Err(e)) => Err(e),
            None => {
                self.done.cancel();
                std::future::pending().await
            }
        }
    }

    async fn send_to(&self, bytes: &[u8], target: SocketAddr) -> io::Result<usize> {
        if self.fail_sends {
            return Err(io::Error::other("scripted send error"));
        }
        self.sent.lock().unwrap().push((bytes.to_vec(), target));
        Ok(bytes.len())
    }
}
