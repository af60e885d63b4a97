use crate::wire::Header;
use serde::{Deserialize, Serialize};

/// How the response header is built from a decoded query header.
///
/// The counts are written verbatim into the response. The defaults describe a
/// response that echoes exactly one question and carries no records yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResponsePolicy {
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,

    /// Force QR to 1 instead of echoing the query's QR bit.
    pub set_qr: bool,
}

impl Default for ResponsePolicy {
    fn default() -> Self {
        Self {
            qdcount: 1,
            ancount: 0,
            nscount: 0,
            arcount: 0,
            set_qr: false,
        }
    }
}

impl ResponsePolicy {
    /// Builds the response header for `query`: ID and QR are carried over,
    /// every other flag is cleared and the counts come from the policy.
    pub fn response_header(&self, query: &Header) -> Header {
        Header {
            id: query.id,
            qr: query.qr || self.set_qr,
            qdcount: self.qdcount,
            ancount: self.ancount,
            nscount: self.nscount,
            arcount: self.arcount,
            ..Header::default()
        }
    }
}
